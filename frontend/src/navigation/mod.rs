//! Section tracking and scroll navigation for the landing page.
//!
//! The tracker answers "which section is under the probe line", the navigator
//! starts smooth scrolls to an anchor. Both talk to the page through the
//! [`Viewport`] trait; [`dom::DomViewport`] is the browser implementation.

pub mod dom;
pub mod hooks;
pub mod navigator;
pub mod section;
pub mod throttle;
pub mod tracker;
pub mod viewport;

pub use navigator::scroll_to_section;
pub use section::SectionId;
pub use tracker::SectionTracker;
pub use viewport::{Rect, Viewport};
