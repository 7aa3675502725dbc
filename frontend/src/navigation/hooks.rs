use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::navigation::dom::DomViewport;
use crate::navigation::throttle::FrameThrottle;
use crate::navigation::tracker::SectionTracker;
use crate::navigation::viewport::Viewport;
use crate::state::{PageAction, PageState};

/// Keeps `PageState::scroll_y` and `PageState::current_section` in sync with
/// the window while the calling component is mounted.
///
/// Scroll events are folded into at most one recomputation per animation
/// frame.
#[hook]
pub fn use_section_tracking(dispatcher: UseReducerDispatcher<PageState>, tracker: SectionTracker) {
    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = match DomViewport::new() {
                Ok(viewport) => install(Rc::new(viewport), dispatcher, tracker),
                Err(e) => {
                    log::warn!("Section tracking disabled: {}", e);
                    Box::new(|| ())
                }
            };
            move || destructor()
        },
        (),
    );
}

fn install(
    viewport: Rc<DomViewport>,
    dispatcher: UseReducerDispatcher<PageState>,
    tracker: SectionTracker,
) -> Box<dyn FnOnce()> {
    for id in tracker.missing_sections(&*viewport) {
        log::warn!("Section #{} is not in the document and will never be highlighted", id);
    }

    let publish: Rc<dyn Fn()> = Rc::new({
        let viewport = viewport.clone();
        move || {
            dispatcher.dispatch(PageAction::Scrolled {
                offset: viewport.scroll_y(),
                current: tracker.update_current_section(&*viewport),
            });
        }
    });

    let throttle = Rc::new(RefCell::new(FrameThrottle::new()));
    let frame_handle = Rc::new(Cell::new(None::<i32>));

    let on_frame = Rc::new(Closure::<dyn FnMut()>::new({
        let throttle = throttle.clone();
        let frame_handle = frame_handle.clone();
        let publish = publish.clone();
        move || {
            throttle.borrow_mut().on_frame();
            frame_handle.set(None);
            publish();
        }
    }));

    let on_scroll = Closure::<dyn Fn()>::new({
        let viewport = viewport.clone();
        let on_frame = on_frame.clone();
        let frame_handle = frame_handle.clone();
        let publish = publish.clone();
        move || {
            if !throttle.borrow_mut().request() {
                return;
            }
            match viewport.request_frame(&on_frame) {
                Ok(handle) => frame_handle.set(Some(handle)),
                Err(e) => {
                    log::debug!("requestAnimationFrame failed, updating inline: {}", e);
                    throttle.borrow_mut().on_frame();
                    publish();
                }
            }
        }
    });

    if let Err(e) = viewport
        .window()
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
    {
        log::error!("Failed to attach scroll listener: {:?}", e);
    }
    publish();

    Box::new(move || {
        if let Some(handle) = frame_handle.take() {
            viewport.cancel_frame(handle);
        }
        if let Err(e) = viewport
            .window()
            .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        {
            log::error!("Failed to detach scroll listener: {:?}", e);
        }
    })
}
