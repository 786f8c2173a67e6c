use crate::table::{define_table, Public};
use crate::types::Json;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

define_table! {
    /// Daily wellness journal entry.
    pub struct WellnessJournal in Public as "wellness_journal" {
        row: WellnessJournalRow,
        insert: WellnessJournalInsert,
        update: WellnessJournalUpdate,
        primary_key: "id",
        required {
            user_id: Uuid,
        }
        defaulted {
            id: Uuid,
            created_at: DateTime<Utc>,
            entry_date: NaiveDate,
            updated_at: DateTime<Utc>,
        }
        nullable {
            energy_level: i32,
            mood_rating: i32,
            notes: String,
            sleep_quality: i32,
            symptoms: Vec<String>,
        }
        relationships []
    }
}

define_table! {
    /// A recurring routine a user follows.
    pub struct WellnessRoutines in Public as "wellness_routines" {
        row: WellnessRoutineRow,
        insert: WellnessRoutineInsert,
        update: WellnessRoutineUpdate,
        primary_key: "id",
        required {
            name: String,
            routine_type: String,
            user_id: Uuid,
        }
        defaulted {
            id: Uuid,
            activities: Json,
            created_at: DateTime<Utc>,
            is_active: bool,
            updated_at: DateTime<Utc>,
        }
        nullable {
            description: String,
            reminder_times: Vec<String>,
        }
        relationships []
    }
}
