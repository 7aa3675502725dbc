use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};
use crate::content::FeatureDetail;

#[derive(Properties, PartialEq)]
pub struct FeatureDetailProps {
    pub detail: FeatureDetail,
    /// Alternating sections get the darker gradient background.
    pub shaded: bool,
    pub on_back: Callback<()>,
}

#[function_component(FeatureDetailSection)]
pub fn feature_detail_section(props: &FeatureDetailProps) -> Html {
    let detail = props.detail;
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <section
            id={detail.anchor}
            class={classes!("feature-detail", detail.accent.class(), props.shaded.then_some("shaded"))}
        >
            <div class="detail-grid">
                <Reveal from={RevealFrom::Left}>
                    <h2 class="gradient-text">{ detail.headline }</h2>
                    <div class="detail-points">
                        { for detail.points.iter().map(|point| html! {
                            <div key={point.title} class="detail-point">
                                <div class="detail-point-icon">{ point.icon }</div>
                                <div>
                                    <h3>{ point.title }</h3>
                                    <p>{ point.description }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </Reveal>
                <Reveal from={RevealFrom::Right} class={classes!("detail-panel")}>
                    <div class="detail-panel-icon">{ detail.icon }</div>
                    <div class="detail-panel-title">{ detail.panel_title }</div>
                    <div class="detail-panel-caption">{ detail.panel_caption }</div>
                </Reveal>
            </div>
            <Reveal class={classes!("detail-back")}>
                <button class="back-button" onclick={on_back}>{ "← Back to Features" }</button>
            </Reveal>
        </section>
    }
}
