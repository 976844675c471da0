use std::sync::Arc;

use hub_client::feed::{FeedEvent, FeedPhase, FeedState, PageRequest};
use hub_domain::feedback::{FeedbackQuery, FeedbackService, SubmitFeedbackInput};
use hub_domain::realtime::FeedbackBroadcaster;
use hub_infra::repositories::InMemoryFeedbackRepository;

fn service() -> (FeedbackService, FeedbackBroadcaster) {
    let broadcaster = FeedbackBroadcaster::new();
    let service = FeedbackService::new(
        Arc::new(InMemoryFeedbackRepository::new()),
        broadcaster.clone(),
    );
    (service, broadcaster)
}

async fn submit(service: &FeedbackService, event_id: &str, rating: i32) {
    service
        .submit(SubmitFeedbackInput {
            event_id: event_id.to_string(),
            text: format!("rated {rating}"),
            rating,
        })
        .await
        .expect("submit");
}

async fn fetch(service: &FeedbackService, request: PageRequest) -> FeedEvent {
    let page = service
        .feedbacks(FeedbackQuery {
            event_id: request.event_id.clone(),
            min_rating: request.min_rating,
            first: Some(request.first),
            after: request.after.clone(),
        })
        .await
        .expect("page");
    FeedEvent::PageLoaded { request, page }
}

#[tokio::test]
async fn push_racing_a_page_fetch_merges_without_duplicates() {
    let (service, broadcaster) = service();
    for rating in [5, 1, 5, 2, 5, 3] {
        submit(&service, "1", rating).await;
    }

    let mut state = FeedState::new(5);
    let request = state
        .apply(FeedEvent::EventSelected(Some("1".to_string())))
        .expect("first fetch");
    let loaded = fetch(&service, request).await;
    state.apply(loaded);

    assert_eq!(state.phase(), FeedPhase::Ready);
    assert_eq!(state.rendered().len(), 5);
    assert_eq!(state.total_count(), 6);

    // a seventh record lands while the second page is in flight: the
    // subscriber sees it immediately, and the page fetch issued below
    // will also contain it
    let mut receiver = broadcaster.subscribe("1").await;
    let next_page = state
        .apply(FeedEvent::LoadMoreRequested)
        .expect("second fetch");
    submit(&service, "1", 4).await;
    let pushed = receiver.recv().await.expect("push");
    state.apply(FeedEvent::FeedbackPushed(pushed));
    assert_eq!(state.total_count(), 7);

    let loaded = fetch(&service, next_page).await;
    state.apply(loaded);

    let rendered = state.rendered();
    assert_eq!(rendered.len(), 7);

    let mut ids: Vec<&str> = rendered.iter().map(|record| record.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 7, "no record may appear twice");

    for pair in rendered.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "rendered list must be newest first"
        );
    }

    // the push is now confirmed by a fetched page and counted only once
    assert_eq!(state.total_count(), 7);
}

#[tokio::test]
async fn filter_change_refetches_within_the_filtered_space() {
    let (service, _) = service();
    for rating in [5, 1, 5, 2, 5, 3] {
        submit(&service, "1", rating).await;
    }

    let mut state = FeedState::new(5);
    let request = state
        .apply(FeedEvent::EventSelected(Some("1".to_string())))
        .expect("first fetch");
    let loaded = fetch(&service, request).await;
    state.apply(loaded);

    let request = state
        .apply(FeedEvent::MinRatingChanged(Some(5)))
        .expect("filtered fetch");
    assert!(request.after.is_none());
    let loaded = fetch(&service, request).await;
    state.apply(loaded);

    let rendered = state.rendered();
    assert_eq!(rendered.len(), 3);
    assert!(rendered.iter().all(|record| record.rating == 5));
    assert_eq!(state.total_count(), 3);
}

#[tokio::test]
async fn load_more_walks_the_server_feed_to_exhaustion() {
    let (service, _) = service();
    for index in 0..7 {
        submit(&service, "1", (index % 5) + 1).await;
    }

    let mut state = FeedState::new(2);
    let mut pending = state.apply(FeedEvent::EventSelected(Some("1".to_string())));
    while let Some(request) = pending {
        let loaded = fetch(&service, request).await;
        state.apply(loaded);
        pending = state.apply(FeedEvent::LoadMoreRequested);
    }

    assert_eq!(state.rendered().len(), 7);
    assert_eq!(state.total_count(), 7);
}
