use photo_store::{Category, Photo};

/// In-memory gallery state: the photo collection, the active category
/// filter and the derived filtered view.
///
/// The collection is kept in the order the store returns it (newest first)
/// and is only ever replaced wholesale by a completed load. A failed load
/// never touches it, so the UI keeps showing the last known good data.
///
/// Loads are sequenced with tickets: `begin_load` hands out a monotonically
/// increasing ticket and `complete_load` only applies the response carrying
/// the latest ticket. Responses from overlapping earlier requests are
/// discarded instead of overwriting newer data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    photos: Vec<Photo>,
    filter: Option<Category>,
    issued_loads: u64,
}

impl GalleryState {
    /// Register a new load request and return its ticket
    pub fn begin_load(&mut self) -> u64 {
        self.issued_loads += 1;
        self.issued_loads
    }

    /// Apply a load response. Returns true if the collection was replaced,
    /// false if the response was stale and discarded.
    pub fn complete_load(&mut self, ticket: u64, photos: Vec<Photo>) -> bool {
        if ticket != self.issued_loads {
            log::debug!(
                "Discarding stale load response (ticket {}, latest {})",
                ticket,
                self.issued_loads
            );
            return false;
        }
        self.photos = photos;
        true
    }

    /// Replace the active category filter. Does not refetch anything.
    pub fn set_filter(&mut self, filter: Option<Category>) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Option<Category> {
        self.filter
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// The subsequence matching the active filter, in collection order.
    /// With no filter set this is the whole collection.
    pub fn filtered_view(&self) -> Vec<Photo> {
        match self.filter {
            Some(category) => self
                .photos
                .iter()
                .filter(|p| p.category == category)
                .cloned()
                .collect(),
            None => self.photos.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str, category: Category) -> Photo {
        Photo {
            id: id.to_string(),
            title: format!("Photo {}", id),
            description: None,
            category,
            image_url: format!("https://example.test/{}.jpg", id),
            created_at: "2024-05-01T12:00:00+00:00".to_string(),
            updated_at: "2024-05-01T12:00:00+00:00".to_string(),
        }
    }

    fn loaded(photos: Vec<Photo>) -> GalleryState {
        let mut state = GalleryState::default();
        let ticket = state.begin_load();
        assert!(state.complete_load(ticket, photos));
        state
    }

    #[test]
    fn test_filtered_view_without_filter_is_whole_collection() {
        let state = loaded(vec![
            photo("a", Category::Street),
            photo("b", Category::Portraits),
        ]);
        assert_eq!(state.filtered_view(), state.photos().to_vec());
    }

    #[test]
    fn test_filtered_view_preserves_order() {
        let mut state = loaded(vec![
            photo("a", Category::Street),
            photo("b", Category::Portraits),
            photo("c", Category::Street),
            photo("d", Category::Abstract),
        ]);
        state.set_filter(Some(Category::Street));

        let view = state.filtered_view();
        let ids: Vec<&str> = view.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_empty_collection_gives_empty_view() {
        let state = GalleryState::default();
        assert!(state.filtered_view().is_empty());
        assert!(state.is_empty());
    }

    #[test]
    fn test_filter_with_no_matches_is_distinguishable() {
        let mut state = loaded(vec![photo("a", Category::Street)]);
        state.set_filter(Some(Category::Landscapes));

        // Empty view but non-empty collection with an active filter:
        // "no photos in this category", not "no photos at all"
        assert!(state.filtered_view().is_empty());
        assert!(!state.is_empty());
        assert_eq!(state.filter(), Some(Category::Landscapes));
    }

    #[test]
    fn test_set_filter_does_not_touch_collection() {
        let mut state = loaded(vec![photo("a", Category::Street)]);
        let before = state.photos().to_vec();
        state.set_filter(Some(Category::Abstract));
        state.set_filter(None);
        assert_eq!(state.photos(), &before[..]);
    }

    #[test]
    fn test_stale_load_response_is_discarded() {
        let mut state = GalleryState::default();
        let first = state.begin_load();
        let second = state.begin_load();

        // Newest response wins regardless of arrival order
        assert!(state.complete_load(second, vec![photo("new", Category::Street)]));
        assert!(!state.complete_load(first, vec![photo("old", Category::Street)]));
        assert_eq!(state.photos()[0].id, "new");
    }

    #[test]
    fn test_failed_load_leaves_collection_untouched() {
        let mut state = loaded(vec![
            photo("a", Category::Street),
            photo("b", Category::Portraits),
        ]);
        let before = state.photos().to_vec();

        // A failed load never calls complete_load; issuing the ticket alone
        // must not change anything.
        let _ticket = state.begin_load();
        assert_eq!(state.photos(), &before[..]);
    }

    #[test]
    fn test_failed_delete_leaves_collection_unchanged() {
        let mut state = loaded(vec![
            photo("a", Category::Street),
            photo("b", Category::Portraits),
            photo("c", Category::Abstract),
        ]);
        state.set_filter(Some(Category::Street));
        let before = state.clone();

        // A failed delete reports the error and triggers no reload: the
        // state machine sees no call at all. Same elements, same order,
        // same filter.
        assert_eq!(state, before);
        assert_eq!(
            state.photos().iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );

        // Only a successful delete leads to a reload; a reload that never
        // completes (the failure path) leaves the collection alone too.
        let _ticket = state.begin_load();
        assert_eq!(state.photos(), before.photos());
    }

    #[test]
    fn test_completed_load_replaces_wholesale() {
        let mut state = loaded(vec![photo("a", Category::Street)]);
        let ticket = state.begin_load();
        assert!(state.complete_load(ticket, vec![photo("b", Category::Abstract)]));
        assert_eq!(state.photos().len(), 1);
        assert_eq!(state.photos()[0].id, "b");
    }
}
