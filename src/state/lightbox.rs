use photo_store::Photo;

/// Full-screen viewer state machine.
///
/// Either closed, or open on one photo at a known position within the
/// filtered view that was captured when the viewer opened. Navigation walks
/// that captured sequence; it never wraps and never errors, boundary moves
/// are no-ops. If the underlying collection changes while open, the captured
/// sequence goes stale; the gallery screen closes the viewer on every
/// reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lightbox {
    state: LightboxState,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum LightboxState {
    #[default]
    Closed,
    Open {
        sequence: Vec<Photo>,
        position: usize,
    },
}

impl Lightbox {
    /// Open the viewer on `photo`, capturing `view` as the navigation
    /// sequence. `photo` must be a member of `view`; if it is not (a caller
    /// bug), the call is ignored and the previous state is kept.
    pub fn open(&mut self, photo: &Photo, view: &[Photo]) {
        match view.iter().position(|p| p.id == photo.id) {
            Some(position) => {
                self.state = LightboxState::Open {
                    sequence: view.to_vec(),
                    position,
                };
            }
            None => {
                log::warn!("Lightbox open ignored: photo {} not in view", photo.id);
            }
        }
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// The photo currently displayed, if open
    pub fn current(&self) -> Option<&Photo> {
        match &self.state {
            LightboxState::Open { sequence, position } => sequence.get(*position),
            LightboxState::Closed => None,
        }
    }

    pub fn position(&self) -> Option<usize> {
        match &self.state {
            LightboxState::Open { position, .. } => Some(*position),
            LightboxState::Closed => None,
        }
    }

    pub fn has_next(&self) -> bool {
        match &self.state {
            LightboxState::Open { sequence, position } => {
                *position < sequence.len().saturating_sub(1)
            }
            LightboxState::Closed => false,
        }
    }

    pub fn has_previous(&self) -> bool {
        match &self.state {
            LightboxState::Open { position, .. } => *position > 0,
            LightboxState::Closed => false,
        }
    }

    /// Advance to the next photo; no-op at the last element or when closed
    pub fn next(&mut self) {
        if let LightboxState::Open { sequence, position } = &mut self.state {
            if *position < sequence.len().saturating_sub(1) {
                *position += 1;
            }
        }
    }

    /// Step back to the previous photo; no-op at the first element or when
    /// closed
    pub fn previous(&mut self) {
        if let LightboxState::Open { position, .. } = &mut self.state {
            if *position > 0 {
                *position -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_store::Category;

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            title: format!("Photo {}", id),
            description: None,
            category: Category::Street,
            image_url: format!("https://example.test/{}.jpg", id),
            created_at: "2024-05-01T12:00:00+00:00".to_string(),
            updated_at: "2024-05-01T12:00:00+00:00".to_string(),
        }
    }

    fn view() -> Vec<Photo> {
        vec![photo("a"), photo("b"), photo("c")]
    }

    #[test]
    fn test_open_then_close_returns_to_closed() {
        let mut lightbox = Lightbox::default();
        let view = view();
        lightbox.open(&view[0], &view);
        assert!(lightbox.is_open());

        lightbox.close();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current(), None);
        assert_eq!(lightbox.position(), None);
    }

    #[test]
    fn test_next_walks_forward_and_stops_at_end() {
        let mut lightbox = Lightbox::default();
        let view = view();
        lightbox.open(&view[0], &view);

        lightbox.next();
        assert_eq!(lightbox.current().unwrap().id, "b");
        assert_eq!(lightbox.position(), Some(1));

        lightbox.next();
        assert_eq!(lightbox.current().unwrap().id, "c");
        assert_eq!(lightbox.position(), Some(2));

        // At the last element: no-op, no wrap-around
        lightbox.next();
        assert_eq!(lightbox.current().unwrap().id, "c");
        assert_eq!(lightbox.position(), Some(2));
    }

    #[test]
    fn test_previous_walks_backward_and_stops_at_start() {
        let mut lightbox = Lightbox::default();
        let view = view();
        lightbox.open(&view[2], &view);

        lightbox.previous();
        assert_eq!(lightbox.current().unwrap().id, "b");

        lightbox.previous();
        assert_eq!(lightbox.current().unwrap().id, "a");

        lightbox.previous();
        assert_eq!(lightbox.current().unwrap().id, "a");
        assert_eq!(lightbox.position(), Some(0));
    }

    #[test]
    fn test_single_element_view_has_no_neighbours() {
        let mut lightbox = Lightbox::default();
        let view = vec![photo("only")];
        lightbox.open(&view[0], &view);

        assert!(!lightbox.has_next());
        assert!(!lightbox.has_previous());

        lightbox.next();
        lightbox.previous();
        assert_eq!(lightbox.current().unwrap().id, "only");
    }

    #[test]
    fn test_closed_ignores_navigation() {
        let mut lightbox = Lightbox::default();
        lightbox.next();
        lightbox.previous();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_open_with_foreign_photo_is_ignored() {
        let mut lightbox = Lightbox::default();
        let view = view();
        lightbox.open(&photo("stranger"), &view);
        assert!(!lightbox.is_open());

        // Also when already open: state is kept
        lightbox.open(&view[1], &view);
        lightbox.open(&photo("stranger"), &view);
        assert_eq!(lightbox.current().unwrap().id, "b");
    }

    #[test]
    fn test_reopen_replaces_position() {
        let mut lightbox = Lightbox::default();
        let view = view();
        lightbox.open(&view[0], &view);
        lightbox.open(&view[2], &view);
        assert_eq!(lightbox.position(), Some(2));
    }
}
