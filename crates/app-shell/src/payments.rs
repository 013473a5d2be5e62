//! Saved payment cards.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, ShellError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Other,
}

impl CardBrand {
    pub fn name(&self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::Mastercard => "Mastercard",
            CardBrand::Amex => "American Express",
            CardBrand::Other => "Card",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    pub brand: CardBrand,
    pub last4: String,
    pub expiry_month: u32,
    /// Two-digit year.
    pub expiry_year: u32,
    pub is_default: bool,
}

impl PaymentMethod {
    /// `MM/YY`.
    pub fn expiry_label(&self) -> String {
        format!("{:02}/{:02}", self.expiry_month, self.expiry_year)
    }

    /// e.g. `Visa •••• 4242`.
    pub fn display_name(&self) -> String {
        format!("{} •••• {}", self.brand.name(), self.last4)
    }
}

/// At most one card is the default at any time.
#[derive(Debug, Clone, Default)]
pub struct PaymentMethods {
    methods: Vec<PaymentMethod>,
    next_id: u32,
}

impl PaymentMethods {
    /// The two mock cards, Visa as default.
    pub fn sample() -> Self {
        let card = |id: &str, brand, last4: &str, expiry_month, expiry_year, is_default| PaymentMethod {
            id: id.to_string(),
            brand,
            last4: last4.to_string(),
            expiry_month,
            expiry_year,
            is_default,
        };
        Self {
            methods: vec![
                card("1", CardBrand::Visa, "4242", 12, 26, true),
                card("2", CardBrand::Mastercard, "5555", 8, 25, false),
            ],
            next_id: 3,
        }
    }

    pub fn list(&self) -> &[PaymentMethod] {
        &self.methods
    }

    pub fn default_method(&self) -> Option<&PaymentMethod> {
        self.methods.iter().find(|m| m.is_default)
    }

    /// Save a card. The first card saved becomes the default.
    pub fn add(&mut self, brand: CardBrand, last4: &str, expiry_month: u32, expiry_year: u32) -> Result<&PaymentMethod> {
        let last4 = last4.trim();
        if last4.len() != 4 || !last4.chars().all(|c| c.is_ascii_digit()) {
            return Err(ShellError::InvalidPaymentMethod(format!("expected 4 digits, got {last4:?}")));
        }
        if !(1..=12).contains(&expiry_month) || expiry_year > 99 {
            return Err(ShellError::InvalidPaymentMethod(format!(
                "invalid expiry {expiry_month}/{expiry_year}"
            )));
        }

        let id = self.next_id.max(1);
        self.next_id = id + 1;
        let is_default = self.methods.is_empty();
        self.methods.push(PaymentMethod {
            id: id.to_string(),
            brand,
            last4: last4.to_string(),
            expiry_month,
            expiry_year,
            is_default,
        });
        info!("Saved {} card ending {}", brand.name(), last4);

        Ok(&self.methods[self.methods.len() - 1])
    }

    /// Delete a card. Removing the default leaves no default.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.methods.len();
        self.methods.retain(|m| m.id != id);
        self.methods.len() != before
    }

    /// Make `id` the only default card. Unknown ids change nothing.
    pub fn set_as_default(&mut self, id: &str) -> bool {
        if !self.methods.iter().any(|m| m.id == id) {
            return false;
        }
        for method in &mut self.methods {
            method.is_default = method.id == id;
        }
        true
    }
}
