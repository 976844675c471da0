mod mutation;
mod query;
mod subscription;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use subscription::SubscriptionRoot;

use async_graphql::Schema;
use hub_domain::event::EventCatalog;
use hub_domain::feedback::FeedbackService;
use hub_domain::realtime::FeedbackBroadcaster;

pub type HubSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn build_schema(
    catalog: EventCatalog,
    service: FeedbackService,
    broadcaster: FeedbackBroadcaster,
) -> HubSchema {
    Schema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .data(catalog)
        .data(service)
        .data(broadcaster)
        .finish()
}
