//! Cumulative distance accumulation over a track

use crate::profile::Track;

/// Earth's radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two lat/lon points in meters (haversine)
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// One sample of the distance-vs-elevation curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfilePoint {
    /// Cumulative horizontal distance from the start, in meters
    pub distance: f64,
    /// Elevation in meters
    pub elevation: f64,
}

/// Distance-vs-elevation curve, one entry per track point
///
/// Distances are monotonically non-decreasing and start at 0. A track with
/// fewer than two points produces an empty or single-entry profile.
#[derive(Clone, Debug, Default)]
pub struct DistanceProfile {
    points: Vec<ProfilePoint>,
}

impl DistanceProfile {
    /// Accumulate haversine distance over consecutive track points
    pub fn from_track(track: &Track) -> Self {
        let mut points = Vec::with_capacity(track.points.len());
        let mut total = 0.0;

        for (i, p) in track.points.iter().enumerate() {
            if i > 0 {
                let prev = &track.points[i - 1];
                total += haversine(prev.lat, prev.lon, p.lat, p.lon);
            }
            points.push(ProfilePoint {
                distance: total,
                elevation: p.elevation,
            });
        }

        Self { points }
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total horizontal distance in meters (0 for degenerate profiles)
    pub fn total_distance(&self) -> f64 {
        self.points.last().map(|p| p.distance).unwrap_or(0.0)
    }

    /// Elevation at an arbitrary distance, linearly interpolated between
    /// the bracketing samples and clamped at the profile ends.
    pub fn elevation_at(&self, distance: f64) -> f64 {
        let Some(first) = self.points.first() else {
            return 0.0;
        };
        if distance <= first.distance {
            return first.elevation;
        }

        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if distance <= b.distance {
                if b.distance == a.distance {
                    return b.elevation;
                }
                let ratio = (distance - a.distance) / (b.distance - a.distance);
                return a.elevation + ratio * (b.elevation - a.elevation);
            }
        }

        // past the end
        self.points.last().map(|p| p.elevation).unwrap_or(0.0)
    }

    /// Sum of positive elevation deltas between consecutive samples
    pub fn total_ascent(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| (pair[1].elevation - pair[0].elevation).max(0.0))
            .sum()
    }

    /// Sum of negative elevation deltas, as a positive number
    pub fn total_descent(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| (pair[0].elevation - pair[1].elevation).max(0.0))
            .sum()
    }

    /// Minimum and maximum elevation over the profile
    pub fn elevation_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let mut min = first.elevation;
        let mut max = first.elevation;
        for p in &self.points {
            min = min.min(p.elevation);
            max = max.max(p.elevation);
        }
        Some((min, max))
    }
}
