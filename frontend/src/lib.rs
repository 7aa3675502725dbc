pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod navigation;
pub mod pages;
pub mod reveal;
pub mod state;

pub use app::App;

/// Installs the panic hook and the console logger, then mounts the site on
/// `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    log::info!("Mounting {}", content::BRAND);
    yew::Renderer::<App>::new().render();
}
