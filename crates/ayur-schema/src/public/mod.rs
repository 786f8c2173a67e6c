//! Tables, enums and functions of the `public` schema.

mod chat;
mod clinical;
mod profiles;
mod wellness;

pub use chat::*;
pub use clinical::*;
pub use profiles::*;
pub use wellness::*;

use crate::table::TableInfo;

/// Every table of the schema, in name order.
pub const TABLES: &[TableInfo] = &[
    TableInfo::of::<ChatMessages>(),
    TableInfo::of::<ChatSessions>(),
    TableInfo::of::<DrugInformation>(),
    TableInfo::of::<PatientRecords>(),
    TableInfo::of::<Profiles>(),
    TableInfo::of::<ResearchPapers>(),
    TableInfo::of::<WellnessJournal>(),
    TableInfo::of::<WellnessRoutines>(),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnKind;
    use crate::Table;

    #[test]
    fn test_tables_sorted_and_unique() {
        let names: Vec<_> = TABLES.iter().map(|t| t.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_every_table_has_primary_key_column() {
        for info in TABLES {
            assert!(info.has_column(info.primary_key), "{}", info.name);
        }
    }

    #[test]
    fn test_relationships_point_at_known_columns() {
        for info in TABLES {
            for rel in info.relationships {
                for col in rel.columns {
                    assert!(info.has_column(col), "{}.{}", info.name, col);
                }
                let target = crate::table_info(rel.referenced_relation).unwrap();
                for col in rel.referenced_columns {
                    assert!(target.has_column(col));
                }
            }
        }
    }

    #[test]
    fn test_renamed_column() {
        assert!(ResearchPapers::has_column("abstract"));
        assert!(!ResearchPapers::has_column("abstract_text"));
        assert_eq!(
            ResearchPapers::column("abstract").unwrap().kind,
            ColumnKind::Nullable
        );

        let mut patch = ResearchPaperUpdate::default();
        patch.abstract_text = Some(Some("Withanolides reduce cortisol".into()));
        assert_eq!(patch.set_columns(), vec!["abstract"]);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["abstract"], "Withanolides reduce cortisol");
    }

    #[test]
    fn test_patient_record_relationships() {
        let rels = PatientRecords::RELATIONSHIPS;
        assert_eq!(rels.len(), 2);
        assert!(rels.iter().all(|r| r.referenced_relation == "profiles"));
    }

    #[test]
    fn test_chat_message_helpers() {
        let session = uuid::Uuid::new_v4();
        let msg = ChatMessageInsert::from_assistant(session, "Try triphala at night.");
        assert_eq!(msg.role, ROLE_ASSISTANT);
        assert_eq!(msg.session_id, session);
        assert!(msg.metadata.is_none());
    }
}
