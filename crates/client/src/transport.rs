use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use hub_domain::event::Event;
use hub_domain::feedback::{Feedback, FeedbackConnection};

use crate::error::TransportError;
use crate::feed::PageRequest;

const HELLO_QUERY: &str = "query Hello { hello }";
const EVENTS_QUERY: &str = "query Events { events { id name type date } }";
const FEEDBACKS_QUERY: &str = "query Feedbacks($eventId: ID!, $minRating: Int, $first: Int, $after: String) { feedbacks(eventId: $eventId, minRating: $minRating, first: $first, after: $after) { edges { node { id eventId text rating createdAt } cursor } pageInfo { hasNextPage endCursor } totalCount } }";
const SUBMIT_FEEDBACK_MUTATION: &str = "mutation SubmitFeedback($eventId: ID!, $text: String!, $rating: Int!) { submitFeedback(eventId: $eventId, text: $text, rating: $rating) { id eventId text rating createdAt } }";

/// GraphQL-over-HTTP client for the feedback api. One method per
/// document; the subscription stream is not owned here, pushes reach the
/// feed engine as plain `Feedback` values from whatever channel carries
/// them.
pub struct FeedbackApi {
    http: Client,
    endpoint: String,
}

impl FeedbackApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub async fn hello(&self) -> Result<String, TransportError> {
        self.execute(HELLO_QUERY, Value::Null, "hello").await
    }

    pub async fn events(&self) -> Result<Vec<Event>, TransportError> {
        self.execute(EVENTS_QUERY, Value::Null, "events").await
    }

    pub async fn feedbacks(
        &self,
        request: &PageRequest,
    ) -> Result<FeedbackConnection, TransportError> {
        let variables = json!({
            "eventId": request.event_id,
            "minRating": request.min_rating,
            "first": request.first,
            "after": request.after,
        });
        self.execute(FEEDBACKS_QUERY, variables, "feedbacks").await
    }

    pub async fn submit_feedback(
        &self,
        event_id: &str,
        text: &str,
        rating: i32,
    ) -> Result<Feedback, TransportError> {
        let variables = json!({
            "eventId": event_id,
            "text": text,
            "rating": rating,
        });
        self.execute(SUBMIT_FEEDBACK_MUTATION, variables, "submitFeedback")
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        field: &str,
    ) -> Result<T, TransportError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({"query": query, "variables": variables}))
            .send()
            .await?
            .error_for_status()?;
        let body: GraphQLResponse = response.json().await?;

        if let Some(errors) = body.errors {
            if !errors.is_empty() {
                let message = errors
                    .into_iter()
                    .map(|error| error.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(TransportError::GraphQL(message));
            }
        }

        let value = body
            .data
            .and_then(|mut data| data.get_mut(field).map(Value::take))
            .ok_or(TransportError::MissingData)?;
        Ok(serde_json::from_value(value)?)
    }
}

#[derive(Deserialize)]
struct GraphQLResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Deserialize)]
struct GraphQLError {
    message: String,
}
