//! User profiles and the role enum.

use crate::enums::define_enum;
use crate::table::{define_table, Public};
use chrono::{DateTime, Utc};
use uuid::Uuid;

define_enum! {
    /// Role of an application user.
    pub enum UserRole as "user_role" {
        Doctor => "doctor",
        Nurse => "nurse",
        Admin => "admin",
        Patient => "patient",
    }
}

impl UserRole {
    /// Whether the role belongs to clinical staff.
    pub fn is_clinician(&self) -> bool {
        matches!(self, UserRole::Doctor | UserRole::Nurse)
    }
}

define_table! {
    /// Per-user profile, keyed by the auth user id.
    pub struct Profiles in Public as "profiles" {
        row: ProfileRow,
        insert: ProfileInsert,
        update: ProfileUpdate,
        primary_key: "id",
        required {
            email: String,
            full_name: String,
            user_id: Uuid,
        }
        defaulted {
            id: Uuid,
            created_at: DateTime<Utc>,
            role: UserRole,
            updated_at: DateTime<Utc>,
        }
        nullable {
            license_number: String,
            phone: String,
            specialization: String,
        }
        relationships []
    }
}
