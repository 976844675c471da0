/// Active query filters plus the pagination cursor. A cursor is only
/// valid relative to the filters that produced it, so any change to the
/// rating floor drops it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackFilters {
    pub min_rating: Option<i32>,
    pub first: usize,
    pub after: Option<String>,
}

impl FeedbackFilters {
    pub fn new(first: usize) -> Self {
        Self {
            min_rating: None,
            first,
            after: None,
        }
    }

    /// Returns true when the floor actually changed; the cursor is
    /// cleared in that case.
    pub fn set_min_rating(&mut self, min_rating: Option<i32>) -> bool {
        if self.min_rating == min_rating {
            return false;
        }
        self.min_rating = min_rating;
        self.after = None;
        true
    }

    pub fn advance_to(&mut self, cursor: Option<String>) {
        self.after = cursor;
    }

    pub fn rewind(&mut self) {
        self.after = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_the_rating_floor_drops_the_cursor() {
        let mut filters = FeedbackFilters::new(10);
        filters.advance_to(Some("5".to_string()));

        assert!(filters.set_min_rating(Some(4)));
        assert_eq!(filters.min_rating, Some(4));
        assert!(filters.after.is_none());
    }

    #[test]
    fn setting_the_same_floor_keeps_the_cursor() {
        let mut filters = FeedbackFilters::new(10);
        filters.set_min_rating(Some(4));
        filters.advance_to(Some("5".to_string()));

        assert!(!filters.set_min_rating(Some(4)));
        assert_eq!(filters.after.as_deref(), Some("5"));
    }

    #[test]
    fn clearing_the_floor_also_drops_the_cursor() {
        let mut filters = FeedbackFilters::new(10);
        filters.set_min_rating(Some(3));
        filters.advance_to(Some("7".to_string()));

        assert!(filters.set_min_rating(None));
        assert!(filters.after.is_none());
    }
}
