//! Elevation chart rendering
//!
//! Draws the elevation curve with one translucent color band per grade
//! segment and labeled waypoint markers. Pan and zoom come for free from
//! the plot widget.

use crate::profile::{DistanceProfile, GradeBand, RouteProfile, Segment};
use egui::{Align2, Color32};
use egui_plot::{Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

const MARKER_COLOR: Color32 = Color32::from_rgb(70, 130, 220);
const BAND_ALPHA: f32 = 0.35;

/// Fill color for a grade severity band
pub fn band_color(band: GradeBand) -> Color32 {
    match band {
        GradeBand::Descent => Color32::from_rgb(70, 130, 220),
        GradeBand::Flat => Color32::from_rgb(0, 100, 0),
        GradeBand::Moderate => Color32::from_rgb(50, 205, 50),
        GradeBand::Steep => Color32::from_rgb(240, 210, 0),
        GradeBand::VerySteep => Color32::from_rgb(255, 150, 0),
        GradeBand::Extreme => Color32::from_rgb(220, 40, 40),
    }
}

/// Decompose one segment's color band into convex quads between the curve
/// and the baseline, one per consecutive pair of curve points.
///
/// The curve points are the profile samples inside the segment plus the
/// interpolated elevations at both bin boundaries, so adjacent bands tile
/// the area under the curve exactly.
pub fn band_quads(
    profile: &DistanceProfile,
    segment: &Segment,
    baseline: f64,
) -> Vec<[[f64; 2]; 4]> {
    let mut curve = Vec::new();
    curve.push([segment.start, profile.elevation_at(segment.start)]);
    for p in profile.points() {
        if p.distance > segment.start && p.distance < segment.end {
            curve.push([p.distance, p.elevation]);
        }
    }
    curve.push([segment.end, profile.elevation_at(segment.end)]);

    curve
        .windows(2)
        .map(|pair| {
            let ([d0, e0], [d1, e1]) = (pair[0], pair[1]);
            [[d0, e0], [d1, e1], [d1, baseline], [d0, baseline]]
        })
        .collect()
}

/// Render the full elevation chart into the given UI region
pub fn elevation_chart(ui: &mut egui::Ui, route: &RouteProfile) {
    let (min_ele, max_ele) = route.profile.elevation_range().unwrap_or((0.0, 0.0));
    let baseline = min_ele.min(0.0);
    let label_offset = ((max_ele - min_ele).abs()).max(1.0) * 0.03;
    let curve_color = if ui.visuals().dark_mode {
        Color32::WHITE
    } else {
        Color32::BLACK
    };

    Plot::new("elevation_profile")
        .x_axis_label("Distance (m)")
        .y_axis_label("Elevation (m)")
        .include_y(baseline)
        .show(ui, |plot_ui| {
            for segment in &route.segments {
                let fill = band_color(segment.band()).gamma_multiply(BAND_ALPHA);
                for quad in band_quads(&route.profile, segment, baseline) {
                    plot_ui.polygon(
                        Polygon::new(segment.band().label(), PlotPoints::from(quad.to_vec()))
                            .fill_color(fill)
                            .stroke(egui::Stroke::NONE),
                    );
                }
            }

            let curve: Vec<[f64; 2]> = route
                .profile
                .points()
                .iter()
                .map(|p| [p.distance, p.elevation])
                .collect();
            plot_ui.line(
                Line::new(route.name.clone(), PlotPoints::from(curve))
                    .color(curve_color)
                    .width(1.5),
            );

            if !route.markers.is_empty() {
                let dots: Vec<[f64; 2]> = route
                    .markers
                    .iter()
                    .map(|m| [m.distance, m.elevation])
                    .collect();
                plot_ui.points(
                    Points::new("Waypoints", PlotPoints::from(dots))
                        .shape(MarkerShape::Circle)
                        .radius(4.0)
                        .color(MARKER_COLOR),
                );

                for marker in &route.markers {
                    if marker.name.is_empty() {
                        continue;
                    }
                    plot_ui.text(
                        Text::new(
                            marker.name.clone(),
                            PlotPoint::new(marker.distance, marker.elevation + label_offset),
                            marker.name.clone(),
                        )
                        .anchor(Align2::LEFT_BOTTOM)
                        .color(curve_color),
                    );
                }
            }
        });
}
