use crate::config::SiteConfig;
use crate::navigation::section::SectionId;
use crate::navigation::viewport::Viewport;

/// Returns the section under the probe line.
///
/// Every section in `order` is tested; when several span the probe line the
/// last one wins. Sections without an element are skipped. With no match the
/// first entry of `order` is returned.
pub fn current_section<V>(viewport: &V, order: &[SectionId], probe_line_px: f64) -> SectionId
where
    V: Viewport + ?Sized,
{
    let mut current = order.first().copied().unwrap_or_default();
    for &id in order {
        if let Some(rect) = viewport.rect_of(id.as_str()) {
            if rect.spans(probe_line_px) {
                current = id;
            }
        }
    }
    current
}

/// Derives the current section from live layout geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTracker {
    order: &'static [SectionId],
    probe_line_px: f64,
}

impl SectionTracker {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            order: config.tracked_sections,
            probe_line_px: config.probe_line_px,
        }
    }

    pub fn update_current_section<V: Viewport + ?Sized>(&self, viewport: &V) -> SectionId {
        current_section(viewport, self.order, self.probe_line_px)
    }

    /// Tracked sections that have no element in the document.
    pub fn missing_sections<V: Viewport + ?Sized>(&self, viewport: &V) -> Vec<SectionId> {
        self.order
            .iter()
            .copied()
            .filter(|id| viewport.rect_of(id.as_str()).is_none())
            .collect()
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::NavError;
    use crate::navigation::viewport::Rect;
    use std::collections::HashMap;

    /// Sections laid out top to bottom in a document scrolled by `scroll_y`.
    pub(crate) struct FakeLayout {
        pub scroll_y: f64,
        pub rects: HashMap<&'static str, Rect>,
    }

    impl FakeLayout {
        pub(crate) fn stacked(scroll_y: f64, heights: &[(&'static str, f64)]) -> Self {
            let mut rects = HashMap::new();
            let mut doc_top = 0.0;
            for (id, height) in heights {
                rects.insert(*id, Rect::new(doc_top - scroll_y, doc_top + height - scroll_y));
                doc_top += height;
            }
            Self { scroll_y, rects }
        }
    }

    impl Viewport for FakeLayout {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn rect_of(&self, id: &str) -> Option<Rect> {
            self.rects.get(id).copied()
        }

        fn smooth_scroll_to(&self, id: &str) -> Result<(), NavError> {
            self.rects
                .get(id)
                .map(|_| ())
                .ok_or_else(|| NavError::UnknownSection(id.to_string()))
        }
    }

    // A full-height hero followed by the rest of the page. The hero starts 200px
    // below the document top so nothing spans the probe at offset 0.
    fn page(scroll_y: f64) -> FakeLayout {
        let mut layout = FakeLayout::stacked(
            scroll_y,
            &[
                ("hero", 900.0),
                ("about", 1200.0),
                ("history", 1500.0),
                ("product", 1400.0),
                ("features", 1000.0),
                ("contact", 800.0),
            ],
        );
        for rect in layout.rects.values_mut() {
            rect.top += 200.0;
            rect.bottom += 200.0;
        }
        layout
    }

    #[test]
    fn probe_inside_about_only() {
        let tracker = SectionTracker::default();
        // about spans document 1100..2300
        assert_eq!(tracker.update_current_section(&page(1500.0)), SectionId::About);
    }

    #[test]
    fn page_top_falls_back_to_hero() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.update_current_section(&page(0.0)), SectionId::Hero);
    }

    #[test]
    fn exactly_one_match_is_returned_for_each_section() {
        let tracker = SectionTracker::default();
        let cases = [
            (200.0, SectionId::Hero),
            (1050.0, SectionId::About),
            (2300.0, SectionId::History),
            (3800.0, SectionId::Product),
            (5200.0, SectionId::Features),
            (6200.0, SectionId::Contact),
        ];
        for (offset, expected) in cases {
            assert_eq!(tracker.update_current_section(&page(offset)), expected, "offset {}", offset);
        }
    }

    #[test]
    fn overlapping_sections_resolve_to_last_in_order() {
        let mut layout = FakeLayout::stacked(0.0, &[]);
        layout.rects.insert("about", Rect::new(0.0, 500.0));
        layout.rects.insert("product", Rect::new(50.0, 300.0));
        layout.rects.insert("history", Rect::new(-100.0, 150.0));
        // order is hero, about, history, product, ...
        assert_eq!(current_section(&layout, &SectionId::ALL, 100.0), SectionId::Product);
    }

    #[test]
    fn past_the_last_section_falls_back_to_hero() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.update_current_section(&page(20_000.0)), SectionId::Hero);
    }

    #[test]
    fn missing_elements_are_skipped() {
        let mut layout = page(1500.0);
        layout.rects.remove("about");
        let tracker = SectionTracker::default();
        assert_eq!(tracker.update_current_section(&layout), SectionId::Hero);
        assert_eq!(tracker.missing_sections(&layout), vec![SectionId::About]);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let tracker = SectionTracker::default();
        let layout = page(3800.0);
        let first = tracker.update_current_section(&layout);
        assert_eq!(tracker.update_current_section(&layout), first);
    }

    #[test]
    fn empty_order_yields_default() {
        assert_eq!(current_section(&page(1500.0), &[], 100.0), SectionId::Hero);
    }
}
