use std::collections::HashSet;

use hub_domain::feedback::{Feedback, FeedbackConnection};

use crate::filters::FeedbackFilters;

/// Feed lifecycle. There is no terminal state: the feed is reset, not
/// destroyed, when the event or filter changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedPhase {
    /// No event selected.
    Idle,
    /// Initial page in flight, nothing rendered yet.
    Loading,
    /// At least one page loaded.
    Ready,
}

/// Identifies one paginated fetch. Responses are matched against the
/// current state by this key; anything issued under a superseded
/// (event, filter) pair is discarded on arrival, not merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub event_id: String,
    pub min_rating: Option<i32>,
    pub first: usize,
    pub after: Option<String>,
}

#[derive(Clone, Debug)]
pub enum FeedEvent {
    /// An event was selected (or deselected with `None`).
    EventSelected(Option<String>),
    /// The rating floor changed.
    MinRatingChanged(Option<i32>),
    /// A paginated fetch completed.
    PageLoaded {
        request: PageRequest,
        page: FeedbackConnection,
    },
    /// The realtime stream delivered a record.
    FeedbackPushed(Feedback),
    /// The user asked for another page of the merged list.
    LoadMoreRequested,
}

/// Merges the paginated historical feed with the realtime push stream
/// into one deduplicated, newest-first list. Pushes race freely with
/// in-flight fetches; dedup by id is the sole reconciliation, so folding
/// is idempotent and order-independent apart from the final sort.
pub struct FeedState {
    phase: FeedPhase,
    event_id: Option<String>,
    filters: FeedbackFilters,
    page_size: usize,
    accumulated: Vec<Feedback>,
    realtime: Vec<Feedback>,
    processed_cursors: HashSet<Option<String>>,
    in_flight: Option<PageRequest>,
    server_total: usize,
    has_next_page: bool,
    display_limit: usize,
    notification_pending: bool,
}

impl FeedState {
    pub fn new(page_size: usize) -> Self {
        Self {
            phase: FeedPhase::Idle,
            event_id: None,
            filters: FeedbackFilters::new(page_size),
            page_size,
            accumulated: Vec::new(),
            realtime: Vec::new(),
            processed_cursors: HashSet::new(),
            in_flight: None,
            server_total: 0,
            has_next_page: false,
            display_limit: page_size,
            notification_pending: false,
        }
    }

    /// Folds one event into the state. Returns the fetch the caller must
    /// issue next, if any.
    pub fn apply(&mut self, event: FeedEvent) -> Option<PageRequest> {
        match event {
            FeedEvent::EventSelected(None) => {
                self.event_id = None;
                self.phase = FeedPhase::Idle;
                self.reset_accumulation();
                None
            }
            FeedEvent::EventSelected(Some(event_id)) => {
                if self.event_id.as_deref() == Some(event_id.as_str()) {
                    return None;
                }
                self.event_id = Some(event_id);
                self.begin_initial_load()
            }
            FeedEvent::MinRatingChanged(min_rating) => {
                if !self.filters.set_min_rating(min_rating) {
                    return None;
                }
                if self.event_id.is_none() {
                    return None;
                }
                self.begin_initial_load()
            }
            FeedEvent::PageLoaded { request, page } => {
                self.fold_page(request, page);
                None
            }
            FeedEvent::FeedbackPushed(feedback) => {
                self.fold_push(feedback);
                None
            }
            FeedEvent::LoadMoreRequested => self.request_more(),
        }
    }

    /// The merged view: realtime before accumulated, deduplicated by id
    /// keeping the first occurrence (realtime wins ties), newest first,
    /// bounded by the display limit. The resort is required because
    /// pushes and fetches do not interleave in creation order.
    pub fn rendered(&self) -> Vec<Feedback> {
        let mut seen = HashSet::new();
        let mut merged: Vec<Feedback> = self
            .realtime
            .iter()
            .chain(self.accumulated.iter())
            .filter(|feedback| seen.insert(feedback.id.clone()))
            .cloned()
            .collect();
        merged.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        merged.truncate(self.display_limit);
        merged
    }

    /// Server-reported filtered total plus pushed records no fetched page
    /// has confirmed yet. Additive on purpose: the server total cannot
    /// tell which pushes it already counted.
    pub fn total_count(&self) -> usize {
        let confirmed: HashSet<&str> = self
            .accumulated
            .iter()
            .map(|feedback| feedback.id.as_str())
            .collect();
        let unconfirmed = self
            .realtime
            .iter()
            .filter(|feedback| !confirmed.contains(feedback.id.as_str()))
            .count();
        self.server_total + unconfirmed
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn filters(&self) -> &FeedbackFilters {
        &self.filters
    }

    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    /// True once per accepted push; reading clears the flag.
    pub fn take_notification(&mut self) -> bool {
        std::mem::take(&mut self.notification_pending)
    }

    fn begin_initial_load(&mut self) -> Option<PageRequest> {
        self.reset_accumulation();
        self.filters.rewind();
        self.phase = FeedPhase::Loading;
        let request = self.page_request();
        self.in_flight = request.clone();
        request
    }

    fn fold_page(&mut self, request: PageRequest, page: FeedbackConnection) {
        let Some(event_id) = self.event_id.as_deref() else {
            return;
        };
        if request.event_id != event_id || request.min_rating != self.filters.min_rating {
            return;
        }
        if !self.processed_cursors.insert(request.after.clone()) {
            return;
        }
        if self.in_flight.as_ref() == Some(&request) {
            self.in_flight = None;
        }

        let nodes = page.edges.into_iter().map(|edge| edge.node);
        if request.after.is_none() {
            self.accumulated = nodes.collect();
        } else {
            self.accumulated.extend(nodes);
            dedup_by_id(&mut self.accumulated);
        }

        self.server_total = page.total_count;
        self.has_next_page = page.page_info.has_next_page;
        if page.page_info.end_cursor.is_some() {
            self.filters.advance_to(page.page_info.end_cursor);
        }
        self.phase = FeedPhase::Ready;
    }

    fn fold_push(&mut self, feedback: Feedback) {
        let Some(event_id) = self.event_id.as_deref() else {
            return;
        };
        if feedback.event_id != event_id {
            return;
        }
        // duplicate delivery, or overlap with a fetch that already
        // captured it: rendered() dedups against accumulated either way
        if self.realtime.iter().any(|known| known.id == feedback.id) {
            return;
        }
        self.realtime.insert(0, feedback);
        self.notification_pending = true;
    }

    fn request_more(&mut self) -> Option<PageRequest> {
        if self.phase == FeedPhase::Idle {
            return None;
        }
        self.display_limit += self.page_size;
        if self.display_limit <= self.accumulated.len() || !self.has_next_page {
            return None;
        }
        let request = self.page_request()?;
        if self.in_flight.as_ref() == Some(&request) {
            return None;
        }
        self.in_flight = Some(request.clone());
        Some(request)
    }

    fn page_request(&self) -> Option<PageRequest> {
        Some(PageRequest {
            event_id: self.event_id.clone()?,
            min_rating: self.filters.min_rating,
            first: self.filters.first,
            after: self.filters.after.clone(),
        })
    }

    fn reset_accumulation(&mut self) {
        self.accumulated.clear();
        self.realtime.clear();
        self.processed_cursors.clear();
        self.in_flight = None;
        self.server_total = 0;
        self.has_next_page = false;
        self.display_limit = self.page_size;
        self.notification_pending = false;
    }
}

fn dedup_by_id(records: &mut Vec<Feedback>) {
    let mut seen = HashSet::new();
    records.retain(|feedback| seen.insert(feedback.id.clone()));
}
