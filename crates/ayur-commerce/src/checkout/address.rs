//! Billing address.

use serde::{Deserialize, Serialize};

/// Billing details collected on the payment page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillingAddress {
    pub full_name: String,
    /// Street address.
    pub address: String,
    pub city: String,
    /// Six-digit postal index number.
    pub pin_code: String,
    pub state: String,
}

impl BillingAddress {
    pub fn new(
        full_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        pin_code: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            address: address.into(),
            city: city.into(),
            pin_code: pin_code.into(),
            state: state.into(),
        }
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        [&self.address, &self.city, &self.state, &self.pin_code]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.trim())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Check if every field is filled in.
    pub fn is_complete(&self) -> bool {
        [
            &self.full_name,
            &self.address,
            &self.city,
            &self.pin_code,
            &self.state,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_formatting() {
        let addr = BillingAddress::new("Priya Sharma", "12 Marine Drive", "Mumbai", "400001", "Maharashtra");
        assert!(addr.is_complete());
        assert_eq!(addr.one_line(), "12 Marine Drive, Mumbai, Maharashtra, 400001");
    }

    #[test]
    fn test_incomplete_address() {
        let addr = BillingAddress {
            city: "Pune".into(),
            ..Default::default()
        };
        assert!(!addr.is_complete());
        assert_eq!(addr.one_line(), "Pune");
    }
}
