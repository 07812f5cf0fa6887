// SPDX-License-Identifier: MIT

//! Application entry point wiring egui/eframe to launch the portal UI.

use anyhow::Result;
use eframe::egui;
use egui_phosphor::Variant;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::ui::PortalApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(api = %config.api_base_url, "starting portal client");

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    let app = PortalApp::new(&config);
    eframe::run_native(
        "Brand Portal",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("eframe exited with an error: {err}"))
}
