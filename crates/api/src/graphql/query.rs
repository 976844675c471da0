use async_graphql::{Context, ID, Object};

use hub_domain::event::EventCatalog;
use hub_domain::feedback::{FeedbackQuery, FeedbackService};

use super::types::{Event, FeedbackConnection};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn hello(&self) -> &'static str {
        "Hello from GraphQL!"
    }

    async fn events(&self, ctx: &Context<'_>) -> Vec<Event> {
        let catalog = ctx.data_unchecked::<EventCatalog>();
        catalog.list().iter().cloned().map(Event::from).collect()
    }

    async fn feedbacks(
        &self,
        ctx: &Context<'_>,
        event_id: ID,
        min_rating: Option<i32>,
        first: Option<i32>,
        after: Option<String>,
    ) -> async_graphql::Result<FeedbackConnection> {
        let service = ctx.data_unchecked::<FeedbackService>();
        let connection = service
            .feedbacks(FeedbackQuery {
                event_id: event_id.to_string(),
                min_rating,
                first: first.map(|value| value.max(0) as usize),
                after,
            })
            .await?;
        Ok(connection.into())
    }
}
