/// What the overlay host renders. Only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HostState {
    #[default]
    OverlayAndContent,
    ContentOnly,
}

impl HostState {
    pub fn shows_overlay(self) -> bool {
        self == Self::OverlayAndContent
    }

    /// Called when the overlay reports it's done. Returns whether anything changed.
    pub fn overlay_finished(&mut self) -> bool {
        let changed = self.shows_overlay();
        *self = Self::ContentOnly;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_only() {
        let mut state = HostState::default();
        assert!(state.shows_overlay());

        assert!(state.overlay_finished());
        assert_eq!(state, HostState::ContentOnly);

        assert!(!state.overlay_finished());
        assert!(!state.shows_overlay());
    }
}
