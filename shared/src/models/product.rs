//! Product Record Model

use serde::{Deserialize, Serialize};

use crate::models::region::RegionCode;
use crate::types::Timestamp;

/// A registered product, as persisted in the record collection.
///
/// A record is only ever constructed once all seven fields are non-empty;
/// no other validation (format, range, uniqueness) is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Creation timestamp in milliseconds, doubling as the record id.
    /// Unique only as long as two records are not created within the same
    /// millisecond.
    pub id: Timestamp,
    pub name: String,
    /// Display format `dd/mm/yyyy`; kept as an opaque string.
    pub manufacture_date: String,
    /// Display format `dd/mm/yyyy`; kept as an opaque string.
    pub expiry_date: String,
    /// Numeric quantity as entered; kept as a string.
    pub quantity: String,
    /// Alphanumeric lot identifier.
    pub lot: String,
    pub origin_state: RegionCode,
    /// Scanned or manually resolved barcode value.
    pub barcode: String,
}

/// The seven required fields of a [`ProductRecord`].
///
/// Reported by validation to name what is still missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Name,
    ManufactureDate,
    ExpiryDate,
    Quantity,
    Lot,
    OriginState,
    Barcode,
}

impl ProductField {
    /// All seven fields, in form order.
    pub const ALL: [ProductField; 7] = [
        ProductField::Name,
        ProductField::ManufactureDate,
        ProductField::ExpiryDate,
        ProductField::Quantity,
        ProductField::Lot,
        ProductField::OriginState,
        ProductField::Barcode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ManufactureDate => "manufacture_date",
            Self::ExpiryDate => "expiry_date",
            Self::Quantity => "quantity",
            Self::Lot => "lot",
            Self::OriginState => "origin_state",
            Self::Barcode => "barcode",
        }
    }
}

impl std::fmt::Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
