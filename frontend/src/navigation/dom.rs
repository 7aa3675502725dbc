use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::error::NavError;
use crate::navigation::viewport::{Rect, Viewport};

/// `Viewport` backed by the browser window.
#[derive(Debug, Clone)]
pub struct DomViewport {
    window: Window,
    document: Document,
}

impl DomViewport {
    pub fn new() -> Result<Self, NavError> {
        let window = web_sys::window().ok_or(NavError::NoWindow)?;
        let document = window.document().ok_or(NavError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn request_frame(&self, callback: &Closure<dyn FnMut()>) -> Result<i32, NavError> {
        Ok(self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())?)
    }

    pub fn cancel_frame(&self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::debug!("cancelAnimationFrame({}) failed: {:?}", handle, e);
        }
    }
}

impl Viewport for DomViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0).max(0.0)
    }

    fn rect_of(&self, id: &str) -> Option<Rect> {
        let element = self.document.get_element_by_id(id)?;
        let rect = element.get_bounding_client_rect();
        Some(Rect::new(rect.top(), rect.bottom()))
    }

    fn smooth_scroll_to(&self, id: &str) -> Result<(), NavError> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| NavError::UnknownSection(id.to_string()))?;
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

/// Scroll to `section_id` in the live document. Outside a browser this does
/// nothing.
pub fn navigate(section_id: &str) -> Option<crate::state::PageAction> {
    match DomViewport::new() {
        Ok(viewport) => super::navigator::scroll_to_section(&viewport, section_id),
        Err(e) => {
            log::debug!("Skipping scroll to #{}: {}", section_id, e);
            None
        }
    }
}
