//! Change notification. Route handlers publish newly inserted records
//! here; in-process listeners subscribe per record type, and an optional
//! webhook forwards every event to an external listener.

use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::errors::BountyError;

const CHANNEL_CAPACITY: usize = 256;

/// Registry of broadcast channels keyed by record type ("hacktivity",
/// "leaderboard", ...). Publishing to a type nobody subscribed to is a
/// no-op; slow subscribers lag rather than block publishers.
#[derive(Default)]
pub struct SubscriptionHub {
    channels: DashMap<String, broadcast::Sender<Value>>,
}

impl SubscriptionHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, record_type: &str) -> broadcast::Receiver<Value> {
        self.channels
            .entry(record_type.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    pub fn publish(&self, record_type: &str, record: Value) {
        if let Some(sender) = self.channels.get(record_type) {
            let delivered = sender.send(record).unwrap_or(0);
            debug!(record_type, delivered, "Published change event");
        }
    }
}

/// Fire-and-forget webhook delivery. Failures are logged and dropped;
/// the originating request must not fail because a listener is down.
pub fn dispatch_webhook(url: String, record_type: &'static str, record: Value) {
    tokio::spawn(async move {
        match deliver(&url, record_type, record).await {
            Ok(()) => debug!(%url, record_type, "Webhook delivered"),
            Err(e) => warn!(%url, record_type, error = %e, "Webhook delivery failed"),
        }
    });
}

async fn deliver(url: &str, record_type: &str, record: Value) -> Result<(), BountyError> {
    let client = reqwest::Client::new();
    let body = serde_json::json!({ "type": record_type, "record": record });
    let resp = client
        .post(url)
        .json(&body)
        .send()
        .await
        .map_err(|e| BountyError::Upstream(format!("Webhook unreachable: {}", e)))?;
    if !resp.status().is_success() {
        return Err(BountyError::Upstream(format!(
            "Webhook rejected with status {}",
            resp.status()
        )));
    }
    Ok(())
}
