use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};

use crate::feedback::Feedback;

const TOPIC_CAPACITY: usize = 256;

/// Per-event fan-out of newly created feedback. Each event id owns one
/// broadcast topic; delivery is independent of the paginated query path,
/// so a subscriber may see a record before or after it shows up in a
/// fetched page.
#[derive(Clone, Default)]
pub struct FeedbackBroadcaster {
    topics: Arc<RwLock<HashMap<String, broadcast::Sender<Feedback>>>>,
}

impl FeedbackBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn subscribe(&self, event_id: &str) -> broadcast::Receiver<Feedback> {
        let mut topics = self.topics.write().await;
        topics
            .entry(event_id.to_string())
            .or_insert_with(|| broadcast::channel(TOPIC_CAPACITY).0)
            .subscribe()
    }

    pub async fn publish(&self, feedback: &Feedback) {
        let mut topics = self.topics.write().await;
        if let Some(sender) = topics.get(&feedback.event_id) {
            if sender.send(feedback.clone()).is_err() {
                // last receiver went away, drop the topic
                topics.remove(&feedback.event_id);
            }
        }
    }
}
