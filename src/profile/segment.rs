//! Fixed-width distance bins and their average grade

use crate::profile::DistanceProfile;

/// Horizontal bin width used for grade averaging, in meters
pub const SEGMENT_WIDTH_M: f64 = 100.0;

// Bins shorter than this are float dust from the boundary arithmetic and
// are not emitted.
const MIN_BIN_M: f64 = 1e-6;

/// One fixed-width distance bin with its average grade
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Bin start distance in meters
    pub start: f64,
    /// Bin end distance in meters
    pub end: f64,
    /// Average grade as a rise/run ratio (0.05 = 5 %)
    pub grade: f64,
}

impl Segment {
    pub fn grade_percent(&self) -> f64 {
        self.grade * 100.0
    }

    pub fn band(&self) -> GradeBand {
        GradeBand::from_grade(self.grade)
    }
}

/// Grade severity classification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradeBand {
    Descent,
    Flat,
    Moderate,
    Steep,
    VerySteep,
    Extreme,
}

impl GradeBand {
    /// Classify a rise/run grade ratio
    pub fn from_grade(grade: f64) -> Self {
        let pct = grade * 100.0;
        if pct < 0.0 {
            Self::Descent
        } else if pct < 3.0 {
            Self::Flat
        } else if pct < 6.0 {
            Self::Moderate
        } else if pct < 10.0 {
            Self::Steep
        } else if pct < 15.0 {
            Self::VerySteep
        } else {
            Self::Extreme
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Descent => "descent",
            Self::Flat => "flat (< 3%)",
            Self::Moderate => "moderate (3-6%)",
            Self::Steep => "steep (6-10%)",
            Self::VerySteep => "very steep (10-15%)",
            Self::Extreme => "extreme (> 15%)",
        }
    }
}

/// Partition the profile's distance range into consecutive fixed-width bins
/// and compute the average grade of each.
///
/// Bin boundaries cover `[0, total_distance]` with no gaps or overlaps; the
/// final bin may be shorter than `width`. Boundary elevations come from
/// linear interpolation between the bracketing profile samples, and the
/// grade of the shorter final bin uses its actual length as the run. A
/// profile with fewer than two samples yields no segments.
pub fn segment_grades(profile: &DistanceProfile, width: f64) -> Vec<Segment> {
    if profile.len() < 2 || width <= 0.0 {
        return Vec::new();
    }

    let total = profile.total_distance();
    let full_bins = (total / width).floor() as usize;

    let mut boundaries: Vec<f64> = (0..=full_bins).map(|i| i as f64 * width).collect();
    if total - boundaries.last().copied().unwrap_or(0.0) > MIN_BIN_M {
        boundaries.push(total);
    }

    boundaries
        .windows(2)
        .map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            let rise = profile.elevation_at(end) - profile.elevation_at(start);
            Segment {
                start,
                end,
                grade: rise / (end - start),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Synthesize points along a meridian so haversine reproduces the
    // requested cumulative distances to float precision.
    fn profile_of(points: &[(f64, f64)]) -> DistanceProfile {
        let mut track = crate::profile::Track::default();
        for &(distance, elevation) in points {
            track.points.push(crate::profile::TrackPoint {
                lat: (distance / 6_371_000.0).to_degrees(),
                lon: 0.0,
                elevation,
            });
        }
        DistanceProfile::from_track(&track)
    }

    #[test]
    fn test_symmetric_hill_grades() {
        // Elevations [0, 10, 0] over 200 m: +0.1 then -0.1
        let profile = profile_of(&[(0.0, 0.0), (100.0, 10.0), (200.0, 0.0)]);
        let segments = segment_grades(&profile, SEGMENT_WIDTH_M);

        assert_eq!(segments.len(), 2);
        assert!((segments[0].grade - 0.1).abs() < 1e-6);
        assert!((segments[1].grade + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_bins_cover_range_without_gaps() {
        let profile = profile_of(&[(0.0, 0.0), (120.0, 5.0), (347.0, 20.0)]);
        let segments = segment_grades(&profile, SEGMENT_WIDTH_M);

        assert_eq!(segments.first().unwrap().start, 0.0);
        let total = profile.total_distance();
        assert!((segments.last().unwrap().end - total).abs() < 1e-6);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        // All but the last bin are full width.
        for seg in &segments[..segments.len() - 1] {
            assert!((seg.end - seg.start - SEGMENT_WIDTH_M).abs() < 1e-9);
        }
    }

    #[test]
    fn test_short_final_bin_uses_its_own_length() {
        let profile = profile_of(&[(0.0, 0.0), (150.0, 15.0)]);
        let segments = segment_grades(&profile, SEGMENT_WIDTH_M);

        assert_eq!(segments.len(), 2);
        let last = segments.last().unwrap();
        assert!((last.end - last.start - 50.0).abs() < 1e-6);
        // 5 m of rise over the last 50 m
        assert!((last.grade - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_route_shorter_than_one_bin() {
        let profile = profile_of(&[(0.0, 0.0), (40.0, 4.0)]);
        let segments = segment_grades(&profile, SEGMENT_WIDTH_M);

        assert_eq!(segments.len(), 1);
        assert!((segments[0].grade - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_profiles_yield_no_segments() {
        assert!(segment_grades(&profile_of(&[]), SEGMENT_WIDTH_M).is_empty());
        assert!(segment_grades(&profile_of(&[(0.0, 10.0)]), SEGMENT_WIDTH_M).is_empty());
    }

    #[test]
    fn test_grade_band_thresholds() {
        assert_eq!(GradeBand::from_grade(-0.01), GradeBand::Descent);
        assert_eq!(GradeBand::from_grade(0.0), GradeBand::Flat);
        assert_eq!(GradeBand::from_grade(0.029), GradeBand::Flat);
        assert_eq!(GradeBand::from_grade(0.03), GradeBand::Moderate);
        assert_eq!(GradeBand::from_grade(0.06), GradeBand::Steep);
        assert_eq!(GradeBand::from_grade(0.10), GradeBand::VerySteep);
        assert_eq!(GradeBand::from_grade(0.15), GradeBand::Extreme);
        assert_eq!(GradeBand::from_grade(0.30), GradeBand::Extreme);
    }
}
