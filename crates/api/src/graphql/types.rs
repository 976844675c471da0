use async_graphql::{ID, SimpleObject};

#[derive(SimpleObject, Clone, Debug)]
pub struct Event {
    pub id: ID,
    pub name: String,
    #[graphql(name = "type")]
    pub kind: String,
    pub date: String,
}

impl From<hub_domain::event::Event> for Event {
    fn from(event: hub_domain::event::Event) -> Self {
        Self {
            id: ID(event.id),
            name: event.name,
            kind: event.kind,
            date: event.date,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Feedback {
    pub id: ID,
    pub event_id: ID,
    pub text: String,
    pub rating: i32,
    pub created_at: String,
}

impl From<hub_domain::feedback::Feedback> for Feedback {
    fn from(feedback: hub_domain::feedback::Feedback) -> Self {
        Self {
            id: ID(feedback.id),
            event_id: ID(feedback.event_id),
            text: feedback.text,
            rating: feedback.rating,
            created_at: feedback.created_at,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct FeedbackEdge {
    pub node: Feedback,
    pub cursor: String,
}

#[derive(SimpleObject, Clone, Debug)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(SimpleObject, Clone, Debug)]
pub struct FeedbackConnection {
    pub edges: Vec<FeedbackEdge>,
    pub page_info: PageInfo,
    pub total_count: i32,
}

impl From<hub_domain::feedback::FeedbackConnection> for FeedbackConnection {
    fn from(connection: hub_domain::feedback::FeedbackConnection) -> Self {
        Self {
            edges: connection
                .edges
                .into_iter()
                .map(|edge| FeedbackEdge {
                    node: edge.node.into(),
                    cursor: edge.cursor,
                })
                .collect(),
            page_info: PageInfo {
                has_next_page: connection.page_info.has_next_page,
                end_cursor: connection.page_info.end_cursor,
            },
            total_count: i32::try_from(connection.total_count).unwrap_or(i32::MAX),
        }
    }
}
