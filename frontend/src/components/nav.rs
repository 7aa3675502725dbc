use yew::prelude::*;

use crate::content::{BRAND, NAV_ITEMS};
use crate::navigation::SectionId;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub current: SectionId,
    pub menu_open: bool,
    /// Page scrolled far enough for the opaque bar.
    pub solid: bool,
    pub on_navigate: Callback<&'static str>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let item = |id: SectionId, mobile: bool| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(id.as_str()));
        let active = props.current == id;
        html! {
            <button
                key={id.as_str()}
                class={classes!(
                    if mobile { "nav-link-mobile" } else { "nav-link" },
                    active.then_some("active")
                )}
                {onclick}
            >
                { id.nav_label() }
                if active && !mobile {
                    <span class="nav-bubble"></span>
                }
            </button>
        }
    };

    let on_logo = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(SectionId::Hero.as_str()))
    };
    let on_burger = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    html! {
        <nav class={classes!("site-nav", props.solid.then_some("solid"))}>
            <div class="nav-inner">
                <div class="nav-logo" onclick={on_logo}>{ BRAND }</div>
                <div class="nav-desktop">
                    { for NAV_ITEMS.iter().map(|id| item(*id, false)) }
                </div>
                <button
                    class={classes!("nav-burger", props.menu_open.then_some("open"))}
                    aria-label="Toggle menu"
                    onclick={on_burger}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class={classes!("nav-mobile", props.menu_open.then_some("open"))}>
                { for NAV_ITEMS.iter().map(|id| item(*id, true)) }
            </div>
        </nav>
    }
}
