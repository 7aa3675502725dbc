use crate::error::NavError;

/// Viewport-relative vertical extent of a page region, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// True when the horizontal line `y` pixels below the viewport top runs
    /// through this region. Both edges are inclusive.
    pub fn spans(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// What the navigation layer needs from the rendering environment.
#[cfg_attr(test, mockall::automock)]
pub trait Viewport {
    /// Pixels scrolled from the top of the document.
    fn scroll_y(&self) -> f64;

    /// Geometry of the element with the given id, `None` when it is not in
    /// the document.
    fn rect_of(&self, id: &str) -> Option<Rect>;

    /// Start a smooth scroll that aligns the element's top with the viewport
    /// top. Returns without waiting for the animation.
    fn smooth_scroll_to(&self, id: &str) -> Result<(), NavError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_is_inclusive_on_both_edges() {
        let rect = Rect::new(-400.0, 100.0);
        assert!(rect.spans(100.0));
        assert!(Rect::new(100.0, 900.0).spans(100.0));
        assert!(!Rect::new(101.0, 900.0).spans(100.0));
        assert!(!Rect::new(-400.0, 99.5).spans(100.0));
    }
}
