//! Payment methods offered at checkout.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Banks available for net banking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Bank {
    #[default]
    Sbi,
    Hdfc,
    Icici,
    Axis,
    Pnb,
}

impl Bank {
    pub const ALL: [Bank; 5] = [Bank::Sbi, Bank::Hdfc, Bank::Icici, Bank::Axis, Bank::Pnb];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bank::Sbi => "sbi",
            Bank::Hdfc => "hdfc",
            Bank::Icici => "icici",
            Bank::Axis => "axis",
            Bank::Pnb => "pnb",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Bank::Sbi => "State Bank of India",
            Bank::Hdfc => "HDFC Bank",
            Bank::Icici => "ICICI Bank",
            Bank::Axis => "Axis Bank",
            Bank::Pnb => "Punjab National Bank",
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Bank {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bank::ALL
            .iter()
            .copied()
            .find(|b| b.as_str().eq_ignore_ascii_case(s) || b.display_name() == s)
            .ok_or_else(|| CommerceError::ValidationError(format!("unknown bank: {}", s)))
    }
}

/// The three ways to pay, without their details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethodKind {
    #[default]
    Card,
    Upi,
    NetBanking,
}

impl PaymentMethodKind {
    pub const ALL: [PaymentMethodKind; 3] = [
        PaymentMethodKind::Card,
        PaymentMethodKind::Upi,
        PaymentMethodKind::NetBanking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodKind::Card => "card",
            PaymentMethodKind::Upi => "upi",
            PaymentMethodKind::NetBanking => "netbanking",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethodKind::Card => "Credit/Debit Card",
            PaymentMethodKind::Upi => "UPI",
            PaymentMethodKind::NetBanking => "Net Banking",
        }
    }
}

impl FromStr for PaymentMethodKind {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethodKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CommerceError::ValidationError(format!("unknown payment method: {}", s)))
    }
}

/// A payment method with the details entered for it.
///
/// Details are collected as typed; nothing is validated or sent anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentMethod {
    Card {
        number: String,
        expiry: String,
        cvv: String,
        name_on_card: String,
    },
    Upi {
        vpa: String,
    },
    NetBanking {
        bank: Bank,
    },
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::blank(PaymentMethodKind::default())
    }
}

impl PaymentMethod {
    /// A method of the given kind with empty details.
    pub fn blank(kind: PaymentMethodKind) -> Self {
        match kind {
            PaymentMethodKind::Card => PaymentMethod::Card {
                number: String::new(),
                expiry: String::new(),
                cvv: String::new(),
                name_on_card: String::new(),
            },
            PaymentMethodKind::Upi => PaymentMethod::Upi { vpa: String::new() },
            PaymentMethodKind::NetBanking => PaymentMethod::NetBanking {
                bank: Bank::default(),
            },
        }
    }

    pub fn kind(&self) -> PaymentMethodKind {
        match self {
            PaymentMethod::Card { .. } => PaymentMethodKind::Card,
            PaymentMethod::Upi { .. } => PaymentMethodKind::Upi,
            PaymentMethod::NetBanking { .. } => PaymentMethodKind::NetBanking,
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind().label()
    }

    /// Short description safe to show on a receipt. Card numbers are masked
    /// and the CVV never appears.
    pub fn summary(&self) -> String {
        match self {
            PaymentMethod::Card { number, .. } => {
                let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_digit()).collect();
                if digits.len() >= 4 {
                    let last: String = digits[digits.len() - 4..].iter().collect();
                    format!("Card ending {}", last)
                } else {
                    "Card".to_string()
                }
            }
            PaymentMethod::Upi { vpa } if vpa.trim().is_empty() => "UPI".to_string(),
            PaymentMethod::Upi { vpa } => format!("UPI ({})", vpa.trim()),
            PaymentMethod::NetBanking { bank } => format!("Net Banking ({})", bank),
        }
    }
}
