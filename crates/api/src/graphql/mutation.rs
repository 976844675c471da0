use async_graphql::{Context, ID, Object};

use hub_domain::feedback::{FeedbackService, SubmitFeedbackInput};

use super::types::Feedback;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn submit_feedback(
        &self,
        ctx: &Context<'_>,
        event_id: ID,
        text: String,
        rating: i32,
    ) -> async_graphql::Result<Feedback> {
        let service = ctx.data_unchecked::<FeedbackService>();
        let record = service
            .submit(SubmitFeedbackInput {
                event_id: event_id.to_string(),
                text,
                rating,
            })
            .await?;
        Ok(record.into())
    }
}
