//! Appointment requests.
//!
//! The site collects appointment requests (commissions, fittings, skincare
//! consultations) but does not deliver them itself. Delivery goes through a
//! [`Notifier`], the external collaborator that actually reaches the artist:
//!
//! - [`LogNotifier`]: waits a short, configurable delay and logs the request.
//!   Stands in for a mail service during development.
//! - [`OutboxNotifier`]: writes each request as a JSON file into an outbox
//!   directory for a mailer to pick up.
//!
//! Every accepted request gets a [`Receipt`] whose id is derived from the
//! request payload, so resubmitting the same request yields the same id.

use crate::config::AppointmentConfig;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Services offered in the request form.
pub const SERVICES: &[&str] = &[
    "Custom Jewelry Commission",
    "Jewelry Repair",
    "Skincare Consultation",
    "Market Pickup",
];

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("invalid request: {0}")]
    Invalid(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One request as submitted through the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
}

impl AppointmentRequest {
    /// Check required fields and the email shape.
    pub fn validate(&self) -> Result<(), AppointmentError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(AppointmentError::Invalid(format!("{field} is required")));
            }
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(AppointmentError::Invalid(format!(
                "'{}' is not an email address",
                self.email.trim()
            )));
        }
        Ok(())
    }

    /// Canonical JSON payload handed to notifiers.
    pub fn to_payload(&self) -> Result<String, AppointmentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

/// Short content hash of a payload: first 12 hex chars of its SHA-256.
pub fn receipt_id(payload: &str) -> String {
    let digest = Sha256::digest(payload.as_bytes());
    let hex = format!("{:x}", digest);
    hex[..12].to_string()
}

/// Proof of delivery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub id: String,
    /// Where the request ended up, if it was persisted.
    pub destination: Option<PathBuf>,
}

/// The collaborator that gets a request to the artist.
pub trait Notifier {
    fn deliver(&self, request: &AppointmentRequest) -> Result<Receipt, AppointmentError>;
}

/// Simulated delivery: sleep, then log.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    delay: Duration,
}

impl LogNotifier {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Notifier for LogNotifier {
    fn deliver(&self, request: &AppointmentRequest) -> Result<Receipt, AppointmentError> {
        let payload = request.to_payload()?;
        std::thread::sleep(self.delay);
        let id = receipt_id(&payload);
        tracing::info!(
            receipt = %id,
            name = %request.name,
            email = %request.email,
            service = request.service.as_deref().unwrap_or("-"),
            "appointment request received"
        );
        tracing::debug!(%payload, "appointment payload");
        Ok(Receipt {
            id,
            destination: None,
        })
    }
}

/// Writes `<receipt-id>.json` into a directory.
#[derive(Debug, Clone)]
pub struct OutboxNotifier {
    dir: PathBuf,
}

impl OutboxNotifier {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Notifier for OutboxNotifier {
    fn deliver(&self, request: &AppointmentRequest) -> Result<Receipt, AppointmentError> {
        let payload = request.to_payload()?;
        let id = receipt_id(&payload);
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{id}.json"));
        fs::write(&path, &payload)?;
        tracing::info!(receipt = %id, path = %path.display(), "appointment request queued");
        Ok(Receipt {
            id,
            destination: Some(path),
        })
    }
}

/// Pick the notifier described by config. An explicit outbox wins over the
/// configured one; a relative configured outbox resolves against `root`.
pub fn notifier_from_config(
    config: &AppointmentConfig,
    root: &Path,
    outbox: Option<&Path>,
) -> Box<dyn Notifier> {
    match (outbox, &config.outbox) {
        (Some(dir), _) => Box::new(OutboxNotifier::new(dir)),
        (None, Some(dir)) => Box::new(OutboxNotifier::new(root.join(dir))),
        (None, None) => Box::new(LogNotifier::new(Duration::from_millis(config.delay_ms))),
    }
}

/// Validate, then deliver.
pub fn submit(
    request: &AppointmentRequest,
    notifier: &dyn Notifier,
) -> Result<Receipt, AppointmentError> {
    request.validate()?;
    notifier.deliver(request)
}
