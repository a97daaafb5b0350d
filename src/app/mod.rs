//! Interactive profile window
//!
//! A single-window eframe application: a summary strip at the top and the
//! elevation chart filling the rest.

pub(crate) mod chart;
pub mod settings;

use crate::profile::RouteProfile;
use eframe::egui;
use egui::RichText;

pub struct ProfileApp {
    route: RouteProfile,
}

impl ProfileApp {
    pub fn new(route: RouteProfile, _cc: &eframe::CreationContext<'_>) -> Self {
        Self { route }
    }
}

impl eframe::App for ProfileApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("summary").show(ctx, |ui| {
            summary_strip(ui, &self.route);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            chart::elevation_chart(ui, &self.route);
        });
    }
}

/// One-line route summary above the chart
fn summary_strip(ui: &mut egui::Ui, route: &RouteProfile) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(&route.name).strong());
        ui.separator();

        ui.label("Distance:");
        ui.label(RichText::new(format_distance(route.profile.total_distance())).strong());
        ui.separator();

        ui.label("Ascent:");
        ui.label(RichText::new(format!("{:.0} m", route.profile.total_ascent())).strong());
        ui.label("Descent:");
        ui.label(RichText::new(format!("{:.0} m", route.profile.total_descent())).strong());
        ui.separator();

        ui.label("Points:");
        ui.label(RichText::new(format!("{}", route.point_count)).strong());
        ui.label("Waypoints:");
        ui.label(RichText::new(format!("{}", route.waypoint_count)).strong());

        if let Some(steepest) = route.steepest() {
            ui.separator();
            ui.label("Steepest 100 m:");
            ui.label(
                RichText::new(format!("{:.1} %", steepest.grade_percent()))
                    .strong()
                    .color(chart::band_color(steepest.band())),
            );
        }
    });
}

/// Format a distance in meters as a human-readable string
fn format_distance(meters: f64) -> String {
    let km = meters / 1000.0;
    if km < 1.0 {
        format!("{:.0} m", meters)
    } else if km < 100.0 {
        format!("{:.2} km", km)
    } else {
        format!("{:.0} km", km)
    }
}
