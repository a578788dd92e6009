//! Capability interfaces consumed by the registration form
//!
//! The form never talks to the device directly; the embedding shell
//! provides these traits. All of them are object-safe so tests can
//! substitute in-memory fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Camera permission state as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// Not yet requested.
    Unknown,
}

/// Camera permission capability.
#[async_trait]
pub trait CameraPermission: Send + Sync {
    /// Current status without prompting the user.
    fn status(&self) -> PermissionStatus;

    /// Prompt the user; resolves once they respond.
    async fn request(&self) -> PermissionStatus;
}

/// Barcode symbologies a scan session accepts.
///
/// Serialized forms match the device decoder's configuration strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    /// Two-dimensional matrix code.
    Qr,
    Ean13,
    Ean8,
    Code128,
}

/// Symbologies every scan session is configured with.
pub const SCAN_SYMBOLOGIES: [Symbology; 4] = [
    Symbology::Qr,
    Symbology::Ean13,
    Symbology::Ean8,
    Symbology::Code128,
];

/// Camera scan surface.
///
/// While active, the shell decodes frames and forwards at most one result
/// per session to [`crate::form::RegistrationForm::scan_completed`].
/// Deactivating before a result arrives discards the pending scan.
pub trait BarcodeScanner: Send + Sync {
    /// Start decoding frames for the given symbologies.
    fn activate(&self, symbologies: &[Symbology]);

    /// Stop decoding.
    fn deactivate(&self);
}

/// Blocking user notification (alert dialog with a title and body).
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str);
}

/// Durable key-value store holding serialized record collections.
///
/// Implementations decide their own write-serialization guarantees; the
/// registration flow performs a plain read-modify-write per submit.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Value stored under `key`, or `None` if the key was never written.
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbology_decoder_strings() {
        let json = serde_json::to_string(&SCAN_SYMBOLOGIES).unwrap();
        assert_eq!(json, r#"["qr","ean13","ean8","code128"]"#);
    }
}
