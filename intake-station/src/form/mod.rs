//! Registration form controller
//!
//! One in-progress product record: field edits, the camera-permission and
//! scan-session view machine, and the submit workflow. All operations run
//! as reactions to discrete user or device events; the only suspension
//! point is the record-store round-trip inside [`RegistrationForm::submit`].

mod fields;

pub use fields::FormFields;

use std::sync::Arc;

use serde::Serialize;
use shared::{ProductRecord, RegionCode, RegistrationError, RegistrationResult, util};

use crate::capability::{
    BarcodeScanner, CameraPermission, Notifier, PermissionStatus, RecordStore, SCAN_SYMBOLOGIES,
};
use crate::records;

const SUCCESS_TITLE: &str = "Success";
const SUCCESS_BODY: &str = "Product registered successfully!";
const SCAN_TITLE: &str = "Barcode scanned";

/// Which sub-view the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// Camera permission not yet resolved.
    AwaitingPermission,
    /// Permission denied; the screen offers a retry button.
    PermissionDenied,
    /// Form visible, scanner inactive.
    Idle,
    /// Scan sub-view active.
    Scanning,
}

/// The registration screen's controller.
///
/// Holds the field state for one in-progress record and drives the
/// capability collaborators. The shell renders from [`view`] and
/// [`fields`] and forwards its events to the methods below.
///
/// [`view`]: RegistrationForm::view
/// [`fields`]: RegistrationForm::fields
pub struct RegistrationForm {
    fields: FormFields,
    view: ViewState,
    permission: Arc<dyn CameraPermission>,
    scanner: Arc<dyn BarcodeScanner>,
    notifier: Arc<dyn Notifier>,
    store: Arc<dyn RecordStore>,
}

impl RegistrationForm {
    pub fn new(
        permission: Arc<dyn CameraPermission>,
        scanner: Arc<dyn BarcodeScanner>,
        notifier: Arc<dyn Notifier>,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            fields: FormFields::default(),
            view: ViewState::AwaitingPermission,
            permission,
            scanner,
            notifier,
            store,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    // ========== Field edits ==========

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.fields.name = value.into();
    }

    pub fn set_manufacture_date(&mut self, value: impl Into<String>) {
        self.fields.manufacture_date = value.into();
    }

    pub fn set_expiry_date(&mut self, value: impl Into<String>) {
        self.fields.expiry_date = value.into();
    }

    pub fn set_quantity(&mut self, value: impl Into<String>) {
        self.fields.quantity = value.into();
    }

    pub fn set_lot(&mut self, value: impl Into<String>) {
        self.fields.lot = value.into();
    }

    /// Picker selection; `None` is the "select a state" placeholder.
    pub fn set_origin_state(&mut self, value: Option<RegionCode>) {
        self.fields.origin_state = value;
    }

    /// Manual barcode entry, for items resolved without the camera.
    pub fn set_barcode(&mut self, value: impl Into<String>) {
        self.fields.barcode = value.into();
    }

    // ========== Permission flow ==========

    /// Resolve camera permission on first render.
    ///
    /// Requests it once if not already granted.
    pub async fn init(&mut self) {
        if self.permission.status() == PermissionStatus::Granted {
            self.view = ViewState::Idle;
            return;
        }
        self.request_permission().await;
    }

    /// Re-request permission after a denial (the screen's "allow" button).
    pub async fn retry_permission(&mut self) {
        if self.view == ViewState::PermissionDenied {
            self.request_permission().await;
        }
    }

    async fn request_permission(&mut self) {
        self.view = match self.permission.request().await {
            PermissionStatus::Granted => ViewState::Idle,
            _ => ViewState::PermissionDenied,
        };
        tracing::debug!(view = ?self.view, "camera permission resolved");
    }

    // ========== Scan session ==========

    /// Show the scan sub-view. No-op unless the form is idle, which is
    /// only reachable with permission granted.
    pub fn start_scan(&mut self) {
        if self.view != ViewState::Idle {
            return;
        }
        self.scanner.activate(&SCAN_SYMBOLOGIES);
        self.view = ViewState::Scanning;
    }

    /// Dismiss the scan sub-view; a pending scan is discarded.
    pub fn cancel_scan(&mut self) {
        if self.view == ViewState::Scanning {
            self.scanner.deactivate();
            self.view = ViewState::Idle;
        }
    }

    /// Scan result delivered by the scanner capability.
    ///
    /// Closes the scan sub-view, stores the value as the barcode field
    /// whatever the current state, and notifies the user with the value.
    /// Scanned content is never validated.
    pub fn scan_completed(&mut self, data: impl Into<String>) {
        let data = data.into();
        if self.view == ViewState::Scanning {
            self.scanner.deactivate();
            self.view = ViewState::Idle;
        }

        tracing::info!(barcode = %data, "barcode scanned");
        self.notifier.notify(SCAN_TITLE, &format!("Code: {data}"));
        self.fields.barcode = data;
    }

    // ========== Submit ==========

    /// Validate the current fields and append a record to the collection.
    ///
    /// On success the fields and scan state reset for the next entry and
    /// the persisted record is returned. On a store failure the fields are
    /// kept so the user can retry; either failure is also surfaced as a
    /// blocking notification.
    pub async fn submit(&mut self) -> RegistrationResult<ProductRecord> {
        let record = match self.fields.to_record(util::now_millis()) {
            Ok(record) => record,
            Err(missing) => {
                let err = RegistrationError::validation(missing);
                tracing::warn!(%err, "submit rejected");
                self.notifier.notify(err.user_title(), err.user_message());
                return Err(err);
            }
        };

        match records::append(self.store.as_ref(), &record).await {
            Ok(total) => {
                tracing::info!(id = record.id, total, "product registered");
                self.notifier.notify(SUCCESS_TITLE, SUCCESS_BODY);
                self.reset_fields();
                if self.view == ViewState::Scanning {
                    self.scanner.deactivate();
                    self.view = ViewState::Idle;
                }
                Ok(record)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save product");
                self.notifier.notify(err.user_title(), err.user_message());
                Err(err)
            }
        }
    }

    /// Clear every field back to its initial empty state.
    pub fn reset_fields(&mut self) {
        self.fields.clear();
    }
}
