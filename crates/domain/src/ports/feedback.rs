use crate::DomainResult;
use crate::feedback::{Feedback, NewFeedback};

/// Storage port for feedback records. The store owns identity assignment:
/// `append` issues the next id from a monotonic counter and returns the
/// stored record. `list_by_event` returns records in insertion order,
/// oldest first; that order is the space cursors resolve against.
pub trait FeedbackRepository: Send + Sync {
    fn append(&self, input: &NewFeedback) -> crate::ports::BoxFuture<'_, DomainResult<Feedback>>;

    fn list_by_event(
        &self,
        event_id: &str,
    ) -> crate::ports::BoxFuture<'_, DomainResult<Vec<Feedback>>>;
}
