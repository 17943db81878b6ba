//! Action body: binds creation to tangible impact in the world.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::capabilities::Publisher;
use crate::error::OrionResult;

/// Record of a performed action, kept for post-action reflection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub channel: String,
    /// Opaque reference returned by the publisher, kept verbatim.
    pub reference: String,
    pub performed_at: DateTime<Utc>,
    pub notes: String,
}

/// Publishes works through an injected publisher.
pub struct ActionBody {
    publisher: Box<dyn Publisher>,
}

impl ActionBody {
    pub fn new(publisher: impl Publisher + 'static) -> Self {
        Self {
            publisher: Box::new(publisher),
        }
    }

    /// Send an artifact into the world with reflective metadata.
    ///
    /// Exactly one publish attempt is made. Publisher failures propagate.
    pub fn perform(&self, channel: &str, work: &[u8], description: &str) -> OrionResult<ActionOutcome> {
        let performed_at = Utc::now();
        let mut metadata = BTreeMap::new();
        metadata.insert("description".to_string(), description.to_string());
        metadata.insert("timestamp".to_string(), performed_at.to_rfc3339());

        let reference = self.publisher.publish(channel, work, &metadata)?;
        tracing::info!(%channel, %reference, "published work");

        Ok(ActionOutcome {
            channel: channel.to_string(),
            reference,
            performed_at,
            notes: description.to_string(),
        })
    }
}
