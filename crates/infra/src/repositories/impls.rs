use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use hub_domain::DomainResult;
use hub_domain::feedback::{Feedback, NewFeedback};
use hub_domain::ports::BoxFuture;
use hub_domain::ports::feedback::FeedbackRepository;

/// Process-local feedback store. Identity is an atomic counter, so ids
/// stay a strictly increasing decimal sequence even when appends race;
/// nothing survives a restart.
#[derive(Default)]
pub struct InMemoryFeedbackRepository {
    rows: Arc<RwLock<Vec<Feedback>>>,
    next_id: AtomicU64,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedbackRepository for InMemoryFeedbackRepository {
    fn append(&self, input: &NewFeedback) -> BoxFuture<'_, DomainResult<Feedback>> {
        let input = input.clone();
        let rows = self.rows.clone();
        Box::pin(async move {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let record = Feedback {
                id: id.to_string(),
                event_id: input.event_id,
                text: input.text,
                rating: input.rating,
                created_at: input.created_at,
            };
            rows.write().await.push(record.clone());
            Ok(record)
        })
    }

    fn list_by_event(&self, event_id: &str) -> BoxFuture<'_, DomainResult<Vec<Feedback>>> {
        let event_id = event_id.to_string();
        let rows = self.rows.clone();
        Box::pin(async move {
            let rows = rows.read().await;
            Ok(rows
                .iter()
                .filter(|feedback| feedback.event_id == event_id)
                .cloned()
                .collect())
        })
    }
}
