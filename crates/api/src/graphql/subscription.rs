use async_graphql::{Context, ID, Subscription};
use futures_util::{Stream, StreamExt};
use tokio_stream::wrappers::BroadcastStream;

use hub_domain::realtime::FeedbackBroadcaster;

use super::types::Feedback;

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Pushes every feedback record created for the given event while the
    /// subscription is open. Lagged receivers skip missed records rather
    /// than terminating the stream.
    async fn feedback_added(
        &self,
        ctx: &Context<'_>,
        event_id: ID,
    ) -> impl Stream<Item = Feedback> {
        let broadcaster = ctx.data_unchecked::<FeedbackBroadcaster>();
        let receiver = broadcaster.subscribe(event_id.as_str()).await;
        BroadcastStream::new(receiver)
            .filter_map(|item| async move { item.ok().map(Feedback::from) })
    }
}
