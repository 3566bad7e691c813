//! One-shot status messages carried in the session between a form post and the next page.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::warn;

use crate::constants::session::FLASH_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

/// Queues a message for the next rendered page. Session failures are logged and dropped.
pub async fn push(session: &Session, flash: Flash) {
    let mut pending = match session.get::<Vec<Flash>>(FLASH_KEY).await {
        Ok(existing) => existing.unwrap_or_default(),
        Err(e) => {
            warn!("Failed to read flash messages: {}", e);
            Vec::new()
        }
    };
    pending.push(flash);

    if let Err(e) = session.insert(FLASH_KEY, pending).await {
        warn!("Failed to store flash message: {}", e);
    }
}

/// Removes and returns every pending message.
pub async fn take(session: &Session) -> Vec<Flash> {
    match session.remove::<Vec<Flash>>(FLASH_KEY).await {
        Ok(pending) => pending.unwrap_or_default(),
        Err(e) => {
            warn!("Failed to read flash messages: {}", e);
            Vec::new()
        }
    }
}

#[must_use]
pub fn listed(kind: &str, name: &str) -> Flash {
    Flash::success(format!("{kind} {name} was successfully listed!"))
}

#[must_use]
pub fn not_listed(kind: &str, name: &str) -> Flash {
    Flash::error(format!("An error occurred. {kind} {name} could not be listed."))
}
