use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};
use crate::content::{product_features, product_image, PRODUCT_SHOWCASE_ANCHOR};
use crate::state::ProductTab;

#[derive(Properties, PartialEq)]
pub struct ProductShowcaseProps {
    pub active: ProductTab,
    pub on_select: Callback<ProductTab>,
}

/// Product image plus a two-pill switch between the bracelet and sensor
/// feature lists. Hovering a pill selects it.
#[function_component(ProductShowcase)]
pub fn product_showcase(props: &ProductShowcaseProps) -> Html {
    let (image_src, image_alt) = product_image(props.active);

    let pill = |tab: ProductTab| {
        let on_select = props.on_select.clone();
        let onmouseenter = Callback::from(move |_: MouseEvent| on_select.emit(tab));
        html! {
            <div
                key={tab.label()}
                class={classes!("pill", (props.active == tab).then_some("selected"))}
                {onmouseenter}
            >
                { tab.label() }
            </div>
        }
    };

    html! {
        <div id={PRODUCT_SHOWCASE_ANCHOR} class="showcase">
            <Reveal from={RevealFrom::Scale} class={classes!("showcase-image")}>
                // keyed on the tab so the swap replays the entry animation
                <img key={image_src} src={image_src} alt={image_alt} width="400" height="300" />
            </Reveal>
            <Reveal from={RevealFrom::Right} class={classes!("showcase-copy")}>
                <div class="pill-slider">
                    <div class={classes!(
                        "pill-highlight",
                        (props.active == ProductTab::Sensors).then_some("right")
                    )}></div>
                    { for ProductTab::ALL.into_iter().map(pill) }
                </div>
                <div key={props.active.label()} class="tab-features">
                    { for product_features(props.active).iter().enumerate().map(|(index, feature)| html! {
                        <div
                            key={feature.title}
                            class="tab-feature"
                            style={format!("animation-delay: {}ms;", index * 100)}
                        >
                            <div class="tab-feature-icon">{ feature.icon }</div>
                            <div>
                                <h4>{ feature.title }</h4>
                                <p>{ feature.description }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </Reveal>
        </div>
    }
}
