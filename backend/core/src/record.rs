//! Typed records produced by a successful scan.
//!
//! Field names and casing match the wire contract the frontend already
//! consumes (`totalAmount`, `confirmedAt`), so a validated record serializes
//! straight into the HTTP response body.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which document shape a scan targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Recipe,
    Invoice,
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocKind::Recipe => write!(f, "recipe"),
            DocKind::Invoice => write!(f, "invoice"),
        }
    }
}

/// A recipe lifted from a photographed page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// May be empty, but is always present.
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    #[serde(default)]
    pub amount: String,
    /// Free-form qualifier ("finely chopped"); empty when the page has none.
    #[serde(default)]
    pub notes: String,
}

/// An invoice lifted from a photographed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub invoice_id: f64,
    pub vendor: String,
    pub date: String,
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
    #[serde(rename = "confirmedAt")]
    pub confirmed_at: String,
    pub items: Vec<InvoiceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: f64,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub price: f64,
    pub status: ItemStatus,
}

/// Line-item state on an invoice. Closed set: anything else is a validation
/// failure, never a silent coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Normal,
    Credited,
    Returned,
}

impl ItemStatus {
    /// Every admissible wire value, in declaration order.
    pub const ALLOWED: [&'static str; 3] = ["normal", "credited", "returned"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(ItemStatus::Normal),
            "credited" => Some(ItemStatus::Credited),
            "returned" => Some(ItemStatus::Returned),
            _ => None,
        }
    }
}

/// A validated record of either kind. Untagged so the HTTP body is the record
/// itself, exactly as the original endpoints returned it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScanRecord {
    Recipe(RecipeRecord),
    Invoice(InvoiceRecord),
}

impl ScanRecord {
    pub fn kind(&self) -> DocKind {
        match self {
            ScanRecord::Recipe(_) => DocKind::Recipe,
            ScanRecord::Invoice(_) => DocKind::Invoice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_serializes_with_wire_casing() {
        let record = InvoiceRecord {
            invoice_id: 42.0,
            vendor: "Acme".into(),
            date: "2025-01-01".into(),
            total_amount: 12.5,
            confirmed_at: "2025-01-02".into(),
            items: vec![],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("totalAmount").is_some());
        assert!(json.get("confirmedAt").is_some());
        assert!(json.get("total_amount").is_none());
    }

    #[test]
    fn status_parses_only_the_closed_set() {
        assert_eq!(ItemStatus::parse("credited"), Some(ItemStatus::Credited));
        assert_eq!(ItemStatus::parse("stolen"), None);
        assert_eq!(ItemStatus::parse("Normal"), None);
    }

    #[test]
    fn scan_record_is_untagged() {
        let record = ScanRecord::Recipe(RecipeRecord {
            title: "Tea".into(),
            ingredients: vec![],
            instructions: vec![],
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json.get("title").unwrap(), "Tea");
    }
}
