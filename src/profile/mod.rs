//! Elevation profile pipeline
//!
//! Turns a parsed GPX track into everything the chart needs:
//!
//! - [`Track`]: ordered track points and named waypoints parsed from a file
//! - [`DistanceProfile`]: cumulative haversine distance vs. elevation
//! - [`Segment`]: fixed-width distance bins with their average grade
//! - [`Marker`]: waypoints projected onto the distance axis for labeling
//!
//! Nothing in here touches the display; the UI layer consumes the
//! assembled [`RouteProfile`].

mod distance;
mod segment;
mod track;

pub use distance::{DistanceProfile, ProfilePoint, haversine};
pub use segment::{GradeBand, SEGMENT_WIDTH_M, Segment, segment_grades};
pub use track::{Track, TrackPoint, Waypoint};

use std::path::Path;

/// Error types for the profile pipeline
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("GPX parsing error: {0}")]
    Gpx(#[from] gpx::errors::GpxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no track points in file")]
    EmptyTrack,
}

pub type Result<T> = std::result::Result<T, ProfileError>;

/// A waypoint projected onto the distance axis for chart labeling
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Cumulative distance of the nearest track point, in meters
    pub distance: f64,
    /// Elevation of that track point, in meters
    pub elevation: f64,
    pub name: String,
}

/// The fully evaluated pipeline output consumed by the chart
#[derive(Clone, Debug)]
pub struct RouteProfile {
    /// Display name, usually the input file stem
    pub name: String,
    pub profile: DistanceProfile,
    pub segments: Vec<Segment>,
    pub markers: Vec<Marker>,
    pub point_count: usize,
    pub waypoint_count: usize,
}

impl RouteProfile {
    /// Load a GPX file and run the whole pipeline over it
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let track = Track::from_reader(reader)?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::from_track(name, &track))
    }

    /// Run the numeric pipeline over an already parsed track
    pub fn from_track(name: String, track: &Track) -> Self {
        let profile = DistanceProfile::from_track(track);
        let segments = segment_grades(&profile, SEGMENT_WIDTH_M);
        let markers = project_waypoints(track, &profile);

        tracing::info!(
            "Loaded {}: {} points, {} waypoints, {:.2} km, {} segments",
            name,
            track.points.len(),
            track.waypoints.len(),
            profile.total_distance() / 1000.0,
            segments.len()
        );

        Self {
            name,
            point_count: track.points.len(),
            waypoint_count: track.waypoints.len(),
            profile,
            segments,
            markers,
        }
    }

    /// Steepest climbing segment, if any
    pub fn steepest(&self) -> Option<&Segment> {
        self.segments
            .iter()
            .max_by(|a, b| a.grade.total_cmp(&b.grade))
    }
}

/// Place each waypoint at the cumulative distance of its geographically
/// nearest track point.
fn project_waypoints(track: &Track, profile: &DistanceProfile) -> Vec<Marker> {
    track
        .waypoints
        .iter()
        .filter_map(|wpt| {
            let (idx, _) = track
                .points
                .iter()
                .enumerate()
                .map(|(i, p)| (i, haversine(wpt.lat, wpt.lon, p.lat, p.lon)))
                .min_by(|a, b| a.1.total_cmp(&b.1))?;

            let at = profile.points().get(idx)?;
            Some(Marker {
                distance: at.distance,
                elevation: at.elevation,
                name: wpt.name.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_track() -> Track {
        // Three points heading north, 100 m apart along the meridian
        let step_deg = (100.0 / 6_371_000.0_f64).to_degrees();
        Track {
            points: vec![
                TrackPoint { lat: 47.0, lon: 8.0, elevation: 400.0 },
                TrackPoint { lat: 47.0 + step_deg, lon: 8.0, elevation: 410.0 },
                TrackPoint { lat: 47.0 + 2.0 * step_deg, lon: 8.0, elevation: 400.0 },
            ],
            waypoints: vec![Waypoint {
                lat: 47.0 + step_deg,
                lon: 8.0001,
                name: "Summit".to_string(),
            }],
        }
    }

    #[test]
    fn test_markers_snap_to_nearest_track_point() {
        let track = test_track();
        let route = RouteProfile::from_track("test".to_string(), &track);

        assert_eq!(route.markers.len(), 1);
        let marker = &route.markers[0];
        // Waypoint is closest to the middle point, so it sits at its
        // cumulative distance and elevation.
        let mid = &route.profile.points()[1];
        assert_eq!(marker.distance, mid.distance);
        assert_eq!(marker.elevation, mid.elevation);
        assert_eq!(marker.name, "Summit");
    }

    #[test]
    fn test_pipeline_counts() {
        let track = test_track();
        let route = RouteProfile::from_track("test".to_string(), &track);

        assert_eq!(route.point_count, 3);
        assert_eq!(route.waypoint_count, 1);
        assert_eq!(route.profile.len(), 3);
        assert_eq!(route.segments.len(), 2);
    }

    #[test]
    fn test_steepest_segment() {
        let track = test_track();
        let route = RouteProfile::from_track("test".to_string(), &track);

        let steepest = route.steepest().unwrap();
        assert!(steepest.grade > 0.0);
        assert_eq!(steepest.start, 0.0);
    }

    #[test]
    fn test_load_missing_file() {
        let result = RouteProfile::load(Path::new("/nonexistent/route.gpx"));
        assert!(matches!(result, Err(ProfileError::Io(_))));
    }
}
