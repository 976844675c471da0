use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
}

/// Fixed set of events seeded at startup. Read-only for the lifetime of
/// the process; feedback references events by id.
#[derive(Clone, Debug)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    pub fn seeded() -> Self {
        let events = [
            ("1", "React Summit 2026", "Conference", "2026-03-15"),
            ("2", "TypeScript Workshop", "Workshop", "2026-02-20"),
            ("3", "GraphQL Best Practices", "Webinar", "2026-01-25"),
            ("4", "Node.js Performance Tuning", "Workshop", "2026-04-10"),
        ]
        .into_iter()
        .map(|(id, name, kind, date)| Event {
            id: id.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
            date: date.to_string(),
        })
        .collect();
        Self { events }
    }

    pub fn list(&self) -> &[Event] {
        &self.events
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_seeds_four_events() {
        let catalog = EventCatalog::seeded();
        assert_eq!(catalog.list().len(), 4);
        assert_eq!(catalog.list()[0].id, "1");
        assert_eq!(catalog.list()[0].name, "React Summit 2026");
        assert_eq!(catalog.list()[3].kind, "Workshop");
    }
}
