//! Inventory intake station core
//!
//! Device-side logic for the product registration screen: form field state,
//! completeness validation, the camera-permission/scan view machine, and
//! append-only persistence of product records to an on-device key-value
//! store.
//!
//! Camera rendering, the permission prompt, and the picker widget live in
//! the embedding shell and reach this crate through the capability traits
//! in [`capability`].

pub mod capability;
pub mod form;
pub mod logging;
pub mod paths;
pub mod records;
pub mod store;

// Re-export the domain crate for shells that depend on this one only.
pub use shared;

pub use capability::{
    BarcodeScanner, CameraPermission, Notifier, PermissionStatus, RecordStore, Symbology,
};
pub use form::{FormFields, RegistrationForm, ViewState};
pub use paths::StationPaths;
pub use store::RedbStore;
