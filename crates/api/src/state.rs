use std::sync::Arc;

use hub_domain::event::EventCatalog;
use hub_domain::feedback::FeedbackService;
use hub_domain::realtime::FeedbackBroadcaster;
use hub_infra::config::AppConfig;
use hub_infra::repositories::InMemoryFeedbackRepository;

use crate::graphql::{self, HubSchema};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub schema: HubSchema,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let repository = Arc::new(InMemoryFeedbackRepository::new());
        let broadcaster = FeedbackBroadcaster::new();
        let service = FeedbackService::new(repository, broadcaster.clone());
        let schema = graphql::build_schema(EventCatalog::seeded(), service, broadcaster);
        Self { config, schema }
    }
}
