//! GPX track parsing

use crate::profile::{ProfileError, Result};
use std::io::Read;

/// A single point of the continuous track, in file order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Elevation in meters (0.0 when the file omits it)
    pub elevation: f64,
}

/// A named point of interest, independent of the track ordering
#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
}

/// The usable contents of one GPX file
#[derive(Clone, Debug, Default)]
pub struct Track {
    /// Track points of all tracks and segments, concatenated in file order
    pub points: Vec<TrackPoint>,
    pub waypoints: Vec<Waypoint>,
}

impl Track {
    /// Parse a GPX document from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let gpx = gpx::read(reader)?;
        Self::from_gpx(gpx)
    }

    /// Extract track points and waypoints from parsed GPX data
    pub fn from_gpx(gpx: gpx::Gpx) -> Result<Self> {
        let mut points = Vec::new();
        for track in &gpx.tracks {
            for segment in &track.segments {
                for wpt in &segment.points {
                    let p = wpt.point();
                    points.push(TrackPoint {
                        lat: p.y(),
                        lon: p.x(),
                        elevation: wpt.elevation.unwrap_or(0.0),
                    });
                }
            }
        }

        if points.is_empty() {
            return Err(ProfileError::EmptyTrack);
        }

        let waypoints = gpx
            .waypoints
            .iter()
            .map(|wpt| {
                let p = wpt.point();
                Waypoint {
                    lat: p.y(),
                    lon: p.x(),
                    name: wpt.name.clone().unwrap_or_default(),
                }
            })
            .collect();

        Ok(Self { points, waypoints })
    }
}
