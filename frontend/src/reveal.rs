use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Share of an element that has to be on screen before it is revealed.
const REVEAL_THRESHOLD: f64 = 0.15;

/// One-way hidden -> visible switch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    /// Feeds one intersection report and returns whether the element is
    /// visible afterwards.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        self.visible |= intersecting;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// True once the referenced element has entered the viewport.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, visible));
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }
    *visible
}

fn observe_once(
    element: &Element,
    visible: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let latch = Rc::new(RefCell::new(RevealLatch::default()));
    let on_visible = visible.clone();
    let callback = ObserverCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let intersecting = entries
            .iter()
            .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
        if latch.borrow_mut().observe(intersecting) {
            on_visible.set(true);
            observer.disconnect();
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            // no observer support: show the content right away
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            visible.set(true);
            return None;
        }
    };
    observer.observe(element);
    Some((observer, callback))
}
