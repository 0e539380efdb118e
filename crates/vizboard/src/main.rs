//! Vizboard launcher

#![forbid(unsafe_code)]

use anyhow::Context;
use vizboard::app::App;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    tracing::info!("Starting Vizboard");

    launch();
    Ok(())
}

/// Initialize tracing for logging
#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new("vizboard=info").context("invalid default log filter")?,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")
}

/// Route `tracing` output to the browser console
#[cfg(target_arch = "wasm32")]
fn init_tracing() -> anyhow::Result<()> {
    dioxus::logger::init(tracing::Level::INFO).context("failed to install browser logger")
}

#[cfg(feature = "desktop")]
fn launch() {
    dioxus::LaunchBuilder::new()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Vizboard")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 720.0))
                    .with_min_inner_size(dioxus::desktop::LogicalSize::new(640.0, 480.0))
                    .with_resizable(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    dioxus::launch(App);
}
