//! Patient records and the reference tables clinicians read.

use crate::table::{define_table, Public};
use crate::types::Json;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

define_table! {
    /// A patient's medical record.
    ///
    /// Both `patient_id` and `created_by` point at profiles.
    pub struct PatientRecords in Public as "patient_records" {
        row: PatientRecordRow,
        insert: PatientRecordInsert,
        update: PatientRecordUpdate,
        primary_key: "id",
        required {
            created_by: Uuid,
            medical_record_number: String,
            patient_id: Uuid,
        }
        defaulted {
            id: Uuid,
            created_at: DateTime<Utc>,
            updated_at: DateTime<Utc>,
        }
        nullable {
            allergies: Vec<String>,
            blood_type: String,
            chronic_conditions: Vec<String>,
            current_medications: Json,
            date_of_birth: NaiveDate,
            emergency_contact_name: String,
            emergency_contact_phone: String,
            gender: String,
            notes: String,
        }
        relationships [
            "patient_records_created_by_fkey": "created_by" => "profiles"."id",
            "patient_records_patient_id_fkey": "patient_id" => "profiles"."id",
        ]
    }
}

define_table! {
    /// Cached drug monographs.
    pub struct DrugInformation in Public as "drug_information" {
        row: DrugInformationRow,
        insert: DrugInformationInsert,
        update: DrugInformationUpdate,
        primary_key: "id",
        required {
            drug_name: String,
        }
        defaulted {
            id: Uuid,
            updated_at: DateTime<Utc>,
        }
        nullable {
            brand_names: Vec<String>,
            contraindications: Vec<String>,
            dosage_guidelines: String,
            generic_name: String,
            interactions: Vec<String>,
            mechanism_of_action: String,
            side_effects: Vec<String>,
        }
        relationships []
    }
}

define_table! {
    /// Research papers cached from PubMed.
    pub struct ResearchPapers in Public as "research_papers" {
        row: ResearchPaperRow,
        insert: ResearchPaperInsert,
        update: ResearchPaperUpdate,
        primary_key: "id",
        required {
            pubmed_id: String,
            title: String,
        }
        defaulted {
            id: Uuid,
            cached_at: DateTime<Utc>,
        }
        nullable {
            abstract_text = "abstract": String,
            authors: Vec<String>,
            doi: String,
            journal: String,
            keywords: Vec<String>,
            publication_date: String,
        }
        relationships []
    }
}
