use ayur_schema::prelude::*;
use serde_json::json;
use std::collections::BTreeSet;
use uuid::Uuid;

#[test]
fn test_insert_with_only_required_columns_serializes_them_alone() {
    let user = Uuid::new_v4();
    let insert = ProfileInsert::new("vaidya@example.com".into(), "Dr. Mehta".into(), user);
    let json = serde_json::to_value(&insert).unwrap();
    assert_eq!(
        json,
        json!({
            "email": "vaidya@example.com",
            "full_name": "Dr. Mehta",
            "user_id": user.to_string(),
        })
    );
}

#[test]
fn test_insert_json_missing_optional_columns_deserializes() {
    let session = Uuid::new_v4();
    let insert: Insert<ChatMessages> = serde_json::from_value(json!({
        "content": "How much ashwagandha per day?",
        "role": "user",
        "session_id": session,
    }))
    .unwrap();
    assert!(insert.id.is_none());
    assert!(insert.metadata.is_none());
}

#[test]
fn test_insert_missing_required_column_is_rejected() {
    let result: Result<Insert<ChatMessages>, _> = serde_json::from_value(json!({
        "content": "hello",
        "role": "user",
    }));
    assert!(result.is_err());
}

#[test]
fn test_empty_update_is_valid() {
    let empty: Update<WellnessJournal> = serde_json::from_value(json!({})).unwrap();
    assert!(empty.is_empty());
    assert_eq!(serde_json::to_value(&empty).unwrap(), json!({}));
}

#[test]
fn test_update_can_clear_nullable_column() {
    let patch = WellnessJournalUpdate {
        notes: Some(None),
        mood_rating: Some(Some(4)),
        ..Default::default()
    };
    assert_eq!(patch.set_columns(), vec!["mood_rating", "notes"]);
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        json!({ "mood_rating": 4, "notes": null })
    );
}

#[test]
fn test_row_reads_nulls_as_none() {
    let row: Row<Profiles> = serde_json::from_value(json!({
        "id": Uuid::nil(),
        "user_id": Uuid::nil(),
        "email": "p@example.com",
        "full_name": "Priya",
        "role": "patient",
        "license_number": null,
        "phone": null,
        "specialization": null,
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-01T10:00:00Z",
    }))
    .unwrap();
    assert_eq!(row.role, UserRole::Patient);
    assert!(row.phone.is_none());
}

#[test]
fn test_row_rejects_unknown_role() {
    let result: Result<Row<Profiles>, _> = serde_json::from_value(json!({
        "id": Uuid::nil(),
        "user_id": Uuid::nil(),
        "email": "p@example.com",
        "full_name": "Priya",
        "role": "superuser",
        "license_number": null,
        "phone": null,
        "specialization": null,
        "created_at": "2024-03-01T10:00:00Z",
        "updated_at": "2024-03-01T10:00:00Z",
    }));
    assert!(result.is_err());
}

fn insert_keys<S: serde::Serialize>(insert: &S) -> BTreeSet<String> {
    match serde_json::to_value(insert).unwrap() {
        serde_json::Value::Object(fields) => fields.keys().cloned().collect(),
        other => panic!("insert serialized as {other}"),
    }
}

fn required_keys<T: Table>() -> BTreeSet<String> {
    TableInfo::of::<T>()
        .required()
        .map(|c| c.name.to_string())
        .collect()
}

#[test]
fn test_minimal_insert_carries_exactly_the_required_columns() {
    let id = Uuid::new_v4();
    let text = || "x".to_string();

    let cases = [
        (
            insert_keys(&ChatSessionInsert::new(id)),
            required_keys::<ChatSessions>(),
        ),
        (
            insert_keys(&ChatMessageInsert::new(text(), text(), id)),
            required_keys::<ChatMessages>(),
        ),
        (
            insert_keys(&PatientRecordInsert::new(id, text(), id)),
            required_keys::<PatientRecords>(),
        ),
        (
            insert_keys(&DrugInformationInsert::new(text())),
            required_keys::<DrugInformation>(),
        ),
        (
            insert_keys(&ResearchPaperInsert::new(text(), text())),
            required_keys::<ResearchPapers>(),
        ),
        (
            insert_keys(&ProfileInsert::new(text(), text(), id)),
            required_keys::<Profiles>(),
        ),
        (
            insert_keys(&WellnessJournalInsert::new(id)),
            required_keys::<WellnessJournal>(),
        ),
        (
            insert_keys(&WellnessRoutineInsert::new(text(), text(), id)),
            required_keys::<WellnessRoutines>(),
        ),
    ];
    assert_eq!(cases.len(), ayur_schema::public::TABLES.len());
    for (sent, required) in cases {
        assert_eq!(sent, required);
    }
}

#[test]
fn test_every_table_has_server_generated_id() {
    for info in ayur_schema::public::TABLES {
        assert!(info.server_defaulted().any(|c| c.name == "id"), "{}", info.name);
    }
}

#[test]
fn test_qualified_and_default_shapes_are_interchangeable() {
    let insert: InsertIn<Public, WellnessRoutines> =
        WellnessRoutineInsert::new("Morning abhyanga".into(), "self-care".into(), Uuid::nil());
    let same: Insert<WellnessRoutines> = insert.clone();
    assert_eq!(insert, same);
}
