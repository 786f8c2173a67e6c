//! Treatment programs and practitioner consultations.
//!
//! Both can be booked into the cart like products. Their cart ids live in
//! their own namespaces (`program-N`, `consult-...`) so they never collide
//! with marketplace products.

use crate::cart::CartItem;
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Brand shown on booked programs and consultations.
pub const PROVIDER: &str = "AyurCare";

/// A multi-week Ayurvedic treatment program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreatmentProgram {
    pub id: ItemId,
    pub name: String,
    pub duration_weeks: u32,
    pub sessions: u32,
    pub price: Money,
    pub description: String,
    pub benefits: Vec<String>,
    pub includes: Vec<String>,
    /// Who the program is meant for.
    pub suitable_for: String,
}

impl TreatmentProgram {
    /// e.g. "4 weeks".
    pub fn duration_label(&self) -> String {
        match self.duration_weeks {
            1 => "1 week".to_string(),
            n => format!("{} weeks", n),
        }
    }

    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(
            self.id.clone(),
            self.name.clone(),
            PROVIDER,
            "Wellness Program",
            self.price,
        )
    }
}

/// A one-on-one session with a practitioner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsultationType {
    pub id: ItemId,
    pub name: String,
    pub duration_minutes: u32,
    pub price: Money,
    pub description: String,
}

impl ConsultationType {
    /// e.g. "60 minutes".
    pub fn duration_label(&self) -> String {
        format!("{} minutes", self.duration_minutes)
    }

    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(
            self.id.clone(),
            self.name.clone(),
            PROVIDER,
            "Consultation",
            self.price,
        )
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The six treatment programs, in display order.
pub fn treatment_programs() -> Vec<TreatmentProgram> {
    let program = |n: u32,
                   name: &str,
                   weeks: u32,
                   sessions: u32,
                   rupees: i64,
                   description: &str,
                   benefits: &[&str],
                   includes: &[&str],
                   suitable_for: &str| TreatmentProgram {
        id: ItemId::new(format!("program-{}", n)),
        name: name.to_string(),
        duration_weeks: weeks,
        sessions,
        price: Money::inr(rupees),
        description: description.to_string(),
        benefits: strings(benefits),
        includes: strings(includes),
        suitable_for: suitable_for.to_string(),
    };

    vec![
        program(
            1,
            "Stress Relief Program",
            4,
            12,
            2999,
            "Comprehensive stress management using Ayurvedic principles and meditation",
            &["Reduces cortisol levels", "Improves sleep quality", "Enhanced mental clarity"],
            &["Daily meditation", "Herbal supplements", "Lifestyle guidance", "Weekly consultations"],
            "For working professionals and students experiencing chronic stress",
        ),
        program(
            2,
            "Digestive Wellness Plan",
            6,
            8,
            3499,
            "Restore digestive health with personalized diet plans and herbal remedies",
            &["Improved digestion", "Reduced bloating", "Better nutrient absorption"],
            &["Custom diet plan", "Herbal formulations", "Cooking guidance", "Progress tracking"],
            "For individuals with digestive issues, IBS, or irregular eating habits",
        ),
        program(
            3,
            "Energy Boost Therapy",
            3,
            9,
            2499,
            "Natural energy enhancement through Ayurvedic herbs and lifestyle changes",
            &["Increased vitality", "Better stamina", "Reduced fatigue"],
            &["Energy-boosting herbs", "Exercise routines", "Sleep optimization", "Nutritional support"],
            "For those experiencing chronic fatigue or low energy levels",
        ),
        program(
            4,
            "Sleep Restoration Program",
            5,
            10,
            2799,
            "Achieve deep, restorative sleep with Ayurvedic sleep therapy",
            &["Better sleep quality", "Faster sleep onset", "Reduced night awakening"],
            &["Sleep herbs", "Bedtime rituals", "Room optimization", "Relaxation techniques"],
            "For insomniacs and those with irregular sleep patterns",
        ),
        program(
            5,
            "Immunity Strengthening",
            8,
            16,
            4999,
            "Build robust immunity with traditional Ayurvedic immune-boosting protocols",
            &["Stronger immune system", "Fewer infections", "Faster recovery"],
            &["Rasayana therapy", "Immunity herbs", "Detox protocols", "Lifestyle modifications"],
            "For those with weak immunity or frequent illnesses",
        ),
        program(
            6,
            "Mind-Body Balance",
            12,
            24,
            6999,
            "Comprehensive wellness program for overall mind-body harmony",
            &["Holistic wellness", "Emotional balance", "Physical vitality"],
            &["Yoga therapy", "Meditation", "Herbal treatments", "Lifestyle coaching"],
            "For complete wellness transformation and preventive healthcare",
        ),
    ]
}

/// The three consultation types, in display order.
pub fn consultation_types() -> Vec<ConsultationType> {
    let consultation = |id: &str, name: &str, minutes: u32, rupees: i64, description: &str| {
        ConsultationType {
            id: ItemId::new(id),
            name: name.to_string(),
            duration_minutes: minutes,
            price: Money::inr(rupees),
            description: description.to_string(),
        }
    };

    vec![
        consultation(
            "consult-initial",
            "Initial Consultation",
            60,
            799,
            "Comprehensive health assessment and personalized treatment plan",
        ),
        consultation(
            "consult-follow-up",
            "Follow-up Session",
            30,
            499,
            "Progress review and treatment adjustments",
        ),
        consultation(
            "consult-emergency",
            "Emergency Consultation",
            20,
            999,
            "Urgent health concerns and immediate guidance",
        ),
    ]
}

/// Find a program or consultation by cart id.
pub fn find_bookable(id: &ItemId) -> Result<CartItem, CommerceError> {
    treatment_programs()
        .iter()
        .find(|p| &p.id == id)
        .map(TreatmentProgram::to_cart_item)
        .or_else(|| {
            consultation_types()
                .iter()
                .find(|c| &c.id == id)
                .map(ConsultationType::to_cart_item)
        })
        .ok_or_else(|| CommerceError::ProgramNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programs() {
        let programs = treatment_programs();
        assert_eq!(programs.len(), 6);
        assert_eq!(programs[0].name, "Stress Relief Program");
        assert_eq!(programs[0].duration_label(), "4 weeks");
        assert_eq!(programs[0].price.display(), "₹2,999");
        assert_eq!(programs[5].sessions, 24);
        assert_eq!(programs[5].price.display(), "₹6,999");
    }

    #[test]
    fn test_consultations() {
        let consultations = consultation_types();
        let prices: Vec<_> = consultations.iter().map(|c| c.price.display()).collect();
        assert_eq!(prices, vec!["₹799", "₹499", "₹999"]);
        assert_eq!(consultations[1].duration_label(), "30 minutes");
    }

    #[test]
    fn test_program_cart_item() {
        let item = treatment_programs()[1].to_cart_item();
        assert_eq!(item.id.as_str(), "program-2");
        assert_eq!(item.brand, PROVIDER);
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_find_bookable() {
        assert_eq!(
            find_bookable(&ItemId::new("consult-emergency")).unwrap().name,
            "Emergency Consultation"
        );
        assert_eq!(
            find_bookable(&ItemId::new("herb-1")),
            Err(CommerceError::ProgramNotFound("herb-1".into()))
        );
    }
}
