use yew::prelude::*;

use crate::components::feature_detail::FeatureDetailSection;
use crate::components::nav::NavBar;
use crate::components::product_tabs::ProductShowcase;
use crate::components::reveal::{Reveal, RevealFrom};
use crate::config;
use crate::content::{self, Hero, FEATURES_ANCHOR};
use crate::navigation::dom::navigate;
use crate::navigation::hooks::use_section_tracking;
use crate::navigation::{SectionId, SectionTracker};
use crate::state::{PageAction, PageState, ProductTab};

const LANDING_CSS: &str = r#"
    body { margin: 0; background: #000; color: #fff; font-family: system-ui, sans-serif; overflow-x: hidden; }
    section { position: relative; padding: 8rem 1.5rem; }
    .site-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 50; padding: 1rem 1.5rem; transition: all 0.3s; }
    .site-nav.solid { background: rgba(0, 0, 0, 0.8); backdrop-filter: blur(12px); border-bottom: 1px solid rgba(255, 255, 255, 0.1); }
    .nav-inner { max-width: 80rem; margin: 0 auto; display: flex; align-items: center; justify-content: space-between; }
    .nav-logo { font-size: 1.5rem; font-weight: 700; cursor: pointer; }
    .nav-desktop { display: flex; gap: 2rem; }
    .nav-link, .nav-link-mobile { position: relative; background: none; border: 1px solid transparent; color: #fff; padding: 0.5rem 0.75rem; border-radius: 0.5rem; cursor: pointer; }
    .nav-link:hover, .nav-link.active, .nav-link-mobile.active { color: #60a5fa; }
    .nav-bubble { position: absolute; inset: 0; background: rgba(96, 165, 250, 0.1); border: 1px solid rgba(96, 165, 250, 0.3); border-radius: 0.5rem; }
    .nav-burger { display: none; background: none; border: none; flex-direction: column; gap: 4px; cursor: pointer; }
    .nav-burger span { width: 24px; height: 2px; background: #fff; transition: all 0.3s; }
    .nav-burger.open span:nth-child(1) { transform: translateY(6px) rotate(45deg); }
    .nav-burger.open span:nth-child(2) { opacity: 0; }
    .nav-burger.open span:nth-child(3) { transform: translateY(-6px) rotate(-45deg); }
    .nav-mobile { display: none; max-height: 0; overflow: hidden; transition: max-height 0.3s; }
    .nav-mobile.open { max-height: 30rem; }
    .nav-link-mobile { display: block; width: 100%; text-align: left; font-size: 1.1rem; }
    .nav-link-mobile.active { background: rgba(96, 165, 250, 0.1); border-color: rgba(96, 165, 250, 0.3); }
    @media (max-width: 768px) {
        .nav-desktop { display: none; }
        .nav-burger { display: flex; }
        .nav-mobile { display: block; }
    }
    #hero { height: 100vh; display: flex; align-items: center; justify-content: center; padding: 0; overflow: hidden; text-align: center; }
    .hero-background { position: absolute; inset: 0; background: linear-gradient(135deg, #111827, #000, #1e3a8a); }
    .hero-content { position: relative; z-index: 10; max-width: 72rem; }
    .hero-title { font-size: clamp(3rem, 8vw, 6rem); font-weight: 700; margin-bottom: 1.5rem; }
    .hero-title .accent { display: block; color: #60a5fa; }
    .hero-subtitle { font-size: 1.4rem; color: #d1d5db; margin-bottom: 3rem; }
    .cta { padding: 1rem 2rem; background: #2563eb; color: #fff; border: none; border-radius: 9999px; font-weight: 600; cursor: pointer; }
    .section-title { font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 700; text-align: center; }
    .section-body { font-size: 1.25rem; color: #9ca3af; max-width: 56rem; margin: 0 auto 4rem; text-align: center; line-height: 1.7; }
    .card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr)); gap: 2rem; max-width: 72rem; margin: 0 auto; }
    .card, .feature-card { padding: 2rem; border-radius: 1rem; border: 1px solid rgba(255, 255, 255, 0.1); background: rgba(17, 24, 39, 0.5); text-align: left; color: inherit; }
    .feature-card { cursor: pointer; width: 100%; height: 100%; }
    .feature-card .learn-more { margin-top: 1rem; font-weight: 500; }
    .showcase { display: grid; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 3rem; align-items: center; max-width: 72rem; margin: 0 auto; }
    .pill-slider { position: relative; display: inline-flex; padding: 0.25rem; border-radius: 9999px; background: rgba(17, 24, 39, 0.5); }
    .pill-highlight { position: absolute; top: 0.25rem; bottom: 0.25rem; left: 0.25rem; width: calc(50% - 0.25rem); background: #2563eb; border-radius: 9999px; transition: transform 0.4s; }
    .pill-highlight.right { transform: translateX(100%); }
    .pill { position: relative; z-index: 1; padding: 0.75rem 1.5rem; cursor: pointer; }
    .tab-feature { display: flex; gap: 1rem; padding: 0.75rem; animation: slide-in 0.5s both; }
    @keyframes slide-in { from { opacity: 0; transform: translateX(-20px); } to { opacity: 1; transform: none; } }
    .feature-detail { min-height: 100vh; display: flex; flex-direction: column; justify-content: center; }
    .feature-detail.shaded, #product, #history { background: linear-gradient(#000, #111827); }
    .detail-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 4rem; max-width: 72rem; margin: 0 auto; }
    .detail-point { display: flex; gap: 1rem; }
    .detail-panel { height: 24rem; border-radius: 1.5rem; display: flex; flex-direction: column; align-items: center; justify-content: center; }
    .detail-panel-icon { font-size: 6rem; }
    .detail-back { text-align: center; margin-top: 4rem; }
    .back-button { background: none; border: 1px solid currentColor; border-radius: 9999px; padding: 0.75rem 1.5rem; color: inherit; cursor: pointer; }
    .milestone { max-width: 56rem; margin: 0 auto 6rem; }
    .milestone li { color: #d1d5db; }
    .socials { display: flex; justify-content: center; gap: 1.5rem; margin-top: 3rem; }
    .social { width: 3rem; height: 3rem; border-radius: 9999px; border: 1px solid rgba(255, 255, 255, 0.2); display: flex; align-items: center; justify-content: center; }
    footer { padding: 3rem 1.5rem; border-top: 1px solid rgba(255, 255, 255, 0.1); text-align: center; color: #6b7280; }
    .accent-blue { color: #60a5fa; } .accent-red { color: #f87171; } .accent-amber { color: #fbbf24; }
    .accent-purple { color: #c084fc; } .accent-green { color: #4ade80; } .accent-orange { color: #fb923c; }
    .reveal { opacity: 0; transition: opacity 0.8s ease-out, transform 0.8s ease-out; }
    .reveal-below { transform: translateY(50px); }
    .reveal-left { transform: translateX(-50px); }
    .reveal-right { transform: translateX(50px); }
    .reveal-scale { transform: scale(0.9); }
    .reveal.visible { opacity: 1; transform: none; }
"#;

#[function_component(Landing)]
pub fn landing() -> Html {
    let site = use_memo(|_| config::get_config(), ());
    let state = use_reducer(PageState::default);

    use_section_tracking(state.dispatcher(), SectionTracker::new(&site));

    let on_navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |section_id: &'static str| {
            if let Some(action) = navigate(section_id) {
                dispatcher.dispatch(action);
            }
        })
    };
    let on_toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::ToggleMenu))
    };
    let on_select_tab = {
        let dispatcher = state.dispatcher();
        Callback::from(move |tab: ProductTab| dispatcher.dispatch(PageAction::SelectTab(tab)))
    };
    let go_to = |section_id: &'static str| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section_id))
    };
    let back_to_features = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: ()| on_navigate.emit(FEATURES_ANCHOR))
    };

    html! {
        <div class="landing-page">
            <style>{ LANDING_CSS }</style>
            <NavBar
                current={state.current_section}
                menu_open={state.menu_open}
                solid={state.nav_is_solid(&site)}
                on_navigate={on_navigate.clone()}
                {on_toggle_menu}
            />

            <section id={SectionId::Hero.as_str()}>
                <div
                    class="hero-background"
                    style={format!("transform: translateY({}px);", state.parallax_offset(&site))}
                ></div>
                <div class="hero-content">
                    <h1 class="hero-title">
                        { Hero::TITLE }
                        <span class="accent">{ Hero::TITLE_ACCENT }</span>
                    </h1>
                    <p class="hero-subtitle">{ Hero::SUBTITLE }</p>
                    <button class="cta" onclick={go_to(SectionId::About.as_str())}>{ Hero::CTA }</button>
                </div>
            </section>

            <section id={SectionId::About.as_str()}>
                <Reveal>
                    <h2 class="section-title">{ content::ABOUT_TITLE }</h2>
                    <p class="section-body">{ content::ABOUT_BODY }</p>
                </Reveal>
                <div class="card-grid">
                    { for content::ABOUT_CARDS.iter().enumerate().map(|(index, card)| html! {
                        <Reveal key={card.title} delay_ms={index as u32 * 200}>
                            <div class="card">
                                <div class="card-icon">{ card.icon }</div>
                                <h3>{ card.title }</h3>
                                <p>{ card.description }</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id={SectionId::Product.as_str()}>
                <Reveal>
                    <h2 class="section-title">{ content::PRODUCT_TITLE }</h2>
                    <p class="section-body">{ content::PRODUCT_BODY }</p>
                </Reveal>
                <ProductShowcase active={state.active_tab} on_select={on_select_tab} />
            </section>

            <section id={SectionId::Features.as_str()}>
                <Reveal>
                    <h2 class="section-title">{ content::FEATURES_TITLE }</h2>
                    <p class="section-body">{ content::FEATURES_BODY }</p>
                </Reveal>
                <div class="card-grid">
                    { for content::FEATURE_CARDS.iter().enumerate().map(|(index, card)| html! {
                        <Reveal key={card.title} delay_ms={index as u32 * 100}>
                            <button class={classes!("feature-card", card.accent.class())} onclick={go_to(card.anchor)}>
                                <div class="card-icon">{ card.icon }</div>
                                <h3>{ card.title }</h3>
                                <p>{ card.description }</p>
                                <div class="learn-more">{ "Learn More →" }</div>
                            </button>
                        </Reveal>
                    }) }
                </div>
            </section>

            { for content::FEATURE_DETAILS.iter().enumerate().map(|(index, detail)| html! {
                <FeatureDetailSection
                    key={detail.anchor}
                    detail={*detail}
                    shaded={index % 2 == 0}
                    on_back={back_to_features.clone()}
                />
            }) }

            <section id={SectionId::History.as_str()}>
                <Reveal>
                    <h2 class="section-title">{ content::HISTORY_TITLE }</h2>
                    <p class="section-body">{ content::HISTORY_BODY }</p>
                </Reveal>
                { for content::MILESTONES.iter().enumerate().map(|(index, milestone)| html! {
                    <Reveal
                        key={milestone.title}
                        from={if index % 2 == 0 { RevealFrom::Left } else { RevealFrom::Right }}
                        class={classes!("milestone", milestone.accent.class())}
                    >
                        <h3>{ milestone.title }</h3>
                        { for milestone.paragraphs.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
                        if !milestone.highlights.is_empty() {
                            <ul>
                                { for milestone.highlights.iter().map(|item| html! { <li>{ *item }</li> }) }
                            </ul>
                        }
                    </Reveal>
                }) }
            </section>

            <section id={SectionId::Contact.as_str()}>
                <Reveal>
                    <h2 class="section-title">{ content::CONTACT_TITLE }</h2>
                    <p class="section-body">{ content::CONTACT_BODY }</p>
                    <p class="section-body">{ content::CONTACT_STATUS }</p>
                </Reveal>
                <Reveal delay_ms={200} class={classes!("contact-cta")}>
                    <a href={content::CONTACT_EMAIL}><button class="cta">{ content::CONTACT_CTA }</button></a>
                </Reveal>
                <div class="socials">
                    { for content::SOCIALS.iter().enumerate().map(|(index, social)| html! {
                        <Reveal key={*social} delay_ms={index as u32 * 100}>
                            <div class="social" title={*social}>{ social.chars().take(1).collect::<String>() }</div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <footer>
                <p>{ content::FOOTER }</p>
            </footer>
        </div>
    }
}
