use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::DomainResult;
use crate::ports::feedback::FeedbackRepository;
use crate::realtime::FeedbackBroadcaster;
use crate::util::{format_ms_rfc3339, now_ms};

pub const DEFAULT_PAGE_SIZE: usize = 10;

// Serialized field names follow the GraphQL wire format.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub event_id: String,
    pub text: String,
    pub rating: i32,
    pub created_at: String,
}

#[derive(Clone, Debug)]
pub struct NewFeedback {
    pub event_id: String,
    pub text: String,
    pub rating: i32,
    pub created_at: String,
}

#[derive(Clone, Debug)]
pub struct SubmitFeedbackInput {
    pub event_id: String,
    pub text: String,
    pub rating: i32,
}

#[derive(Clone, Debug, Default)]
pub struct FeedbackQuery {
    pub event_id: String,
    pub min_rating: Option<i32>,
    pub first: Option<usize>,
    pub after: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackEdge {
    pub node: Feedback,
    pub cursor: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackConnection {
    pub edges: Vec<FeedbackEdge>,
    pub page_info: PageInfo,
    pub total_count: usize,
}

#[derive(Clone)]
pub struct FeedbackService {
    repository: Arc<dyn FeedbackRepository>,
    broadcaster: FeedbackBroadcaster,
}

impl FeedbackService {
    pub fn new(repository: Arc<dyn FeedbackRepository>, broadcaster: FeedbackBroadcaster) -> Self {
        Self {
            repository,
            broadcaster,
        }
    }

    /// Cannot fail short of a storage failure: there is no input
    /// validation at this layer, required-field checks belong to the
    /// transport. Subscribers on the record's event are notified.
    pub async fn submit(&self, input: SubmitFeedbackInput) -> DomainResult<Feedback> {
        let record = self
            .repository
            .append(&NewFeedback {
                event_id: input.event_id,
                text: input.text,
                rating: input.rating,
                created_at: format_ms_rfc3339(now_ms()),
            })
            .await?;
        self.broadcaster.publish(&record).await;
        Ok(record)
    }

    /// Cursor-paginated view over one event's feedback. An unknown event
    /// id yields an empty page, not an error.
    pub async fn feedbacks(&self, query: FeedbackQuery) -> DomainResult<FeedbackConnection> {
        let rows = self.repository.list_by_event(&query.event_id).await?;
        Ok(connection(
            rows,
            query.min_rating,
            query.first.unwrap_or(DEFAULT_PAGE_SIZE),
            query.after.as_deref(),
        ))
    }
}

/// The rating filter is applied to the event's records before anything
/// else; the filtered sequence defines both `total_count` and the space
/// `after` cursors resolve against. A cursor that does not appear in the
/// filtered sequence (stale, or produced under other filters) falls back
/// to the start of the sequence rather than erroring.
fn connection(
    rows: Vec<Feedback>,
    min_rating: Option<i32>,
    first: usize,
    after: Option<&str>,
) -> FeedbackConnection {
    let filtered: Vec<Feedback> = rows
        .into_iter()
        .filter(|feedback| min_rating.is_none_or(|min| feedback.rating >= min))
        .collect();
    let total_count = filtered.len();

    let start = after
        .and_then(|cursor| filtered.iter().position(|feedback| feedback.id == cursor))
        .map_or(0, |index| index + 1);
    let window = &filtered[start..];

    let has_next_page = window.len() > first;
    let edges: Vec<FeedbackEdge> = window
        .iter()
        .take(first)
        .map(|feedback| FeedbackEdge {
            cursor: feedback.id.clone(),
            node: feedback.clone(),
        })
        .collect();
    let end_cursor = edges.last().map(|edge| edge.cursor.clone());

    FeedbackConnection {
        edges,
        page_info: PageInfo {
            has_next_page,
            end_cursor,
        },
        total_count,
    }
}
