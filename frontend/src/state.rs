use std::rc::Rc;

use yew::Reducible;

use crate::config::SiteConfig;
use crate::navigation::SectionId;

/// The two pills of the product feature switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductTab {
    #[default]
    Bracelet,
    Sensors,
}

impl ProductTab {
    pub const ALL: [ProductTab; 2] = [ProductTab::Bracelet, ProductTab::Sensors];

    pub fn label(self) -> &'static str {
        match self {
            ProductTab::Bracelet => "Bracelet",
            ProductTab::Sensors => "Sensors",
        }
    }
}

/// Transient UI state of one page view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    pub scroll_y: f64,
    pub current_section: SectionId,
    pub menu_open: bool,
    pub active_tab: ProductTab,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageAction {
    Scrolled { offset: f64, current: SectionId },
    ToggleMenu,
    CloseMenu,
    SelectTab(ProductTab),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PageAction::Scrolled { offset, current } => {
                next.scroll_y = offset.max(0.0);
                next.current_section = current;
            }
            PageAction::ToggleMenu => next.menu_open = !next.menu_open,
            PageAction::CloseMenu => next.menu_open = false,
            PageAction::SelectTab(tab) => next.active_tab = tab,
        }
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

impl PageState {
    pub fn is_current(&self, id: SectionId) -> bool {
        self.current_section == id
    }

    pub fn nav_is_solid(&self, config: &SiteConfig) -> bool {
        self.scroll_y > config.solid_nav_after_px
    }

    pub fn parallax_offset(&self, config: &SiteConfig) -> f64 {
        self.scroll_y * config.parallax_factor
    }
}
