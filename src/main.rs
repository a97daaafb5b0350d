#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use gpx_profile::app::ProfileApp;
use gpx_profile::app::settings::Settings;
use gpx_profile::profile::RouteProfile;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Setup logging
    tracing_subscriber::fmt::init();

    let settings = Settings::parse();

    // The whole numeric pipeline runs before any window opens, so parse
    // failures never leave a blank chart behind.
    let route = match RouteProfile::load(&settings.gpx_file) {
        Ok(route) => route,
        Err(e) => {
            tracing::error!("failed to load {}: {}", settings.gpx_file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let title = format!("GPX Profile - {}", route.name);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title),
        ..Default::default()
    };

    match eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(ProfileApp::new(route, cc)))),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("display error: {}", e);
            ExitCode::FAILURE
        }
    }
}
