//! Form field state

use shared::types::Timestamp;
use shared::{ProductField, ProductRecord, RegionCode};

/// The seven editable values of an in-progress record.
///
/// Everything starts empty; `origin_state` is `None` until the picker
/// selects a code, which is its empty state for validation purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub manufacture_date: String,
    pub expiry_date: String,
    pub quantity: String,
    pub lot: String,
    pub origin_state: Option<RegionCode>,
    pub barcode: String,
}

impl FormFields {
    /// Fields still empty, in form order.
    pub fn missing(&self) -> Vec<ProductField> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(ProductField::Name);
        }
        if self.manufacture_date.is_empty() {
            missing.push(ProductField::ManufactureDate);
        }
        if self.expiry_date.is_empty() {
            missing.push(ProductField::ExpiryDate);
        }
        if self.quantity.is_empty() {
            missing.push(ProductField::Quantity);
        }
        if self.lot.is_empty() {
            missing.push(ProductField::Lot);
        }
        if self.origin_state.is_none() {
            missing.push(ProductField::OriginState);
        }
        if self.barcode.is_empty() {
            missing.push(ProductField::Barcode);
        }
        missing
    }

    /// True when every field has a value.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Clear every field back to its initial empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build the record for these values, or report the missing fields.
    pub fn to_record(&self, id: Timestamp) -> Result<ProductRecord, Vec<ProductField>> {
        let missing = self.missing();
        let Some(origin_state) = self.origin_state else {
            return Err(missing);
        };
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(ProductRecord {
            id,
            name: self.name.clone(),
            manufacture_date: self.manufacture_date.clone(),
            expiry_date: self.expiry_date.clone(),
            quantity: self.quantity.clone(),
            lot: self.lot.clone(),
            origin_state,
            barcode: self.barcode.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FormFields {
        FormFields {
            name: "Soap".to_string(),
            manufacture_date: "01/01/2024".to_string(),
            expiry_date: "01/01/2025".to_string(),
            quantity: "10".to_string(),
            lot: "L1".to_string(),
            origin_state: Some(RegionCode::Sp),
            barcode: "123".to_string(),
        }
    }

    #[test]
    fn test_empty_fields_are_all_missing() {
        let fields = FormFields::default();
        assert_eq!(fields.missing(), ProductField::ALL.to_vec());
        assert!(!fields.is_complete());
    }

    #[test]
    fn test_each_field_reported_individually() {
        for field in ProductField::ALL {
            let mut fields = complete();
            match field {
                ProductField::Name => fields.name.clear(),
                ProductField::ManufactureDate => fields.manufacture_date.clear(),
                ProductField::ExpiryDate => fields.expiry_date.clear(),
                ProductField::Quantity => fields.quantity.clear(),
                ProductField::Lot => fields.lot.clear(),
                ProductField::OriginState => fields.origin_state = None,
                ProductField::Barcode => fields.barcode.clear(),
            }
            assert_eq!(fields.missing(), vec![field]);
            assert!(fields.to_record(1).is_err());
        }
    }

    #[test]
    fn test_to_record_copies_values_verbatim() {
        let record = complete().to_record(42).unwrap();
        assert_eq!(record.id, 42);
        assert_eq!(record.name, "Soap");
        assert_eq!(record.quantity, "10");
        assert_eq!(record.origin_state, RegionCode::Sp);
        assert_eq!(record.barcode, "123");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut fields = complete();
        fields.clear();
        assert_eq!(fields, FormFields::default());
    }
}
