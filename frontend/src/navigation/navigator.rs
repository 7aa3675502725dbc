use crate::navigation::viewport::Viewport;
use crate::state::PageAction;

/// Smoothly scrolls to the element with `section_id`.
///
/// When the element exists the scroll is started and the returned action
/// closes the mobile menu. When it does not, nothing happens and `None` is
/// returned. A call made while an earlier scroll is still animating simply
/// retargets it.
pub fn scroll_to_section<V>(viewport: &V, section_id: &str) -> Option<PageAction>
where
    V: Viewport + ?Sized,
{
    match viewport.smooth_scroll_to(section_id) {
        Ok(()) => Some(PageAction::CloseMenu),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavError;
    use crate::navigation::viewport::MockViewport;
    use crate::state::PageState;
    use mockall::predicate::eq;
    use std::rc::Rc;
    use yew::Reducible;

    fn open_menu() -> Rc<PageState> {
        Rc::new(PageState::default()).reduce(PageAction::ToggleMenu)
    }

    #[test]
    fn existing_section_scrolls_and_closes_menu() {
        let mut viewport = MockViewport::new();
        viewport
            .expect_smooth_scroll_to()
            .with(eq("features"))
            .times(1)
            .returning(|_| Ok(()));

        let state = open_menu();
        assert!(state.menu_open);
        let action = scroll_to_section(&viewport, "features").expect("action");
        assert!(!state.reduce(action).menu_open);
    }

    #[test]
    fn missing_section_is_a_no_op() {
        let mut viewport = MockViewport::new();
        viewport
            .expect_smooth_scroll_to()
            .with(eq("nonexistent"))
            .times(1)
            .returning(|id| Err(NavError::UnknownSection(id.to_string())));

        let state = open_menu();
        let before = (*state).clone();
        assert_eq!(scroll_to_section(&viewport, "nonexistent"), None);
        assert_eq!(*state, before);
        assert!(state.menu_open);
    }

    #[test]
    fn repeated_request_targets_the_same_section() {
        let mut viewport = MockViewport::new();
        viewport
            .expect_smooth_scroll_to()
            .with(eq("about"))
            .times(2)
            .returning(|_| Ok(()));

        let first = scroll_to_section(&viewport, "about");
        let second = scroll_to_section(&viewport, "about");
        assert_eq!(first, second);
    }

    #[test]
    fn detail_anchors_are_valid_targets() {
        let mut viewport = MockViewport::new();
        viewport
            .expect_smooth_scroll_to()
            .with(eq("heart-rate-monitoring"))
            .returning(|_| Ok(()));
        assert_eq!(
            scroll_to_section(&viewport, "heart-rate-monitoring"),
            Some(PageAction::CloseMenu)
        );
    }
}
