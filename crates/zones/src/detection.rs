//! Zone detection engine.
//!
//! Pure, CPU-bound containment queries over a candidate zone set. Zone counts
//! are small (tens per town), so every query is a linear scan; no spatial
//! index is kept.

use crate::zone::Zone;
use dayliz_geo::Coordinate;
use tracing::debug;

/// Outcome of a zone detection query.
///
/// Borrowed from the candidate slice and constructed fresh per query; callers
/// that persist an outcome copy out the zone id rather than the result itself.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneDetectionResult<'a> {
    /// The coordinate lies inside a zone.
    Inside {
        /// First active zone (in input order) containing the coordinate
        zone: &'a Zone,
        /// The queried coordinate
        coordinates: Coordinate,
    },
    /// No active zone contains the coordinate.
    Outside {
        /// Nearest active zone, if any candidates exist
        nearest_zone: Option<&'a Zone>,
        /// Distance to the nearest zone in kilometers
        distance_km: Option<f64>,
        /// The queried coordinate
        coordinates: Coordinate,
    },
}

impl<'a> ZoneDetectionResult<'a> {
    /// Returns true when the coordinate was inside a zone.
    #[must_use]
    pub fn is_inside(&self) -> bool {
        matches!(self, Self::Inside { .. })
    }

    /// The matched zone for `Inside`, the nearest zone (if any) for `Outside`.
    #[must_use]
    pub fn zone(&self) -> Option<&'a Zone> {
        match self {
            Self::Inside { zone, .. } => Some(*zone),
            Self::Outside { nearest_zone, .. } => *nearest_zone,
        }
    }

    /// The coordinate this result was computed for.
    #[must_use]
    pub fn coordinates(&self) -> Coordinate {
        match self {
            Self::Inside { coordinates, .. } | Self::Outside { coordinates, .. } => *coordinates,
        }
    }
}

/// Determines which zone, if any, covers a coordinate.
///
/// Inactive zones are skipped entirely. When several active zones contain the
/// point (overlapping zones are a data-quality issue, not resolved here), the
/// first match in input order wins, which keeps repeated queries over the same
/// slice deterministic. When no zone contains the point the nearest active
/// zone is reported via [`find_closest_zone`]; with no active candidates at
/// all the result is `Outside` with no nearest zone.
#[must_use]
pub fn detect_zone<'a>(point: &Coordinate, candidate_zones: &'a [Zone]) -> ZoneDetectionResult<'a> {
    let mut containing = candidate_zones
        .iter()
        .filter(|zone| zone.is_active && zone.contains(point));

    if let Some(zone) = containing.next() {
        if containing.next().is_some() {
            debug!(
                zone_id = %zone.id,
                "coordinate lies inside multiple active zones, keeping first in input order"
            );
        }
        return ZoneDetectionResult::Inside { zone, coordinates: *point };
    }

    match find_closest_zone(point, candidate_zones) {
        Some((nearest, distance_km)) => ZoneDetectionResult::Outside {
            nearest_zone: Some(nearest),
            distance_km: Some(distance_km),
            coordinates: *point,
        },
        None => ZoneDetectionResult::Outside {
            nearest_zone: None,
            distance_km: None,
            coordinates: *point,
        },
    }
}

/// Returns true when some active zone covers the coordinate.
#[must_use]
pub fn is_delivery_available(point: &Coordinate, candidate_zones: &[Zone]) -> bool {
    detect_zone(point, candidate_zones).is_inside()
}

/// Finds the active zone nearest to a coordinate.
///
/// Distance is [`Zone::distance_km`] (centroid distance for polygons, edge
/// distance for circles). Returns `None` when no active zones exist.
#[must_use]
pub fn find_closest_zone<'a>(
    point: &Coordinate,
    candidate_zones: &'a [Zone],
) -> Option<(&'a Zone, f64)> {
    candidate_zones
        .iter()
        .filter(|zone| zone.is_active)
        .map(|zone| (zone, zone.distance_km(point)))
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

/// Ranks all active zones by distance from a coordinate, nearest first.
///
/// Used by town/zone pickers that offer "zones near you" when the user is
/// outside every boundary.
#[must_use]
pub fn rank_zones_by_distance<'a>(
    point: &Coordinate,
    candidate_zones: &'a [Zone],
) -> Vec<(&'a Zone, f64)> {
    let mut ranked: Vec<(&Zone, f64)> = candidate_zones
        .iter()
        .filter(|zone| zone.is_active)
        .map(|zone| (zone, zone.distance_km(point)))
        .collect();

    ranked.sort_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::ZoneShape;

    fn main_bazaar() -> Zone {
        let shape = ZoneShape::polygon(vec![
            Coordinate::new(25.513, 90.206),
            Coordinate::new(25.513, 90.208),
            Coordinate::new(25.515, 90.208),
            Coordinate::new(25.515, 90.206),
        ])
        .unwrap();
        Zone::new("mb", "Main Bazaar", "tura", 1, shape)
    }

    fn guwahati_central() -> Zone {
        let shape = ZoneShape::circle(Coordinate::new(26.1445, 91.7362), 5.0).unwrap();
        Zone::new("gc", "Guwahati Central", "guwahati", 1, shape)
    }

    #[test]
    fn test_inside_polygon_zone() {
        let zones = vec![main_bazaar()];
        let result = detect_zone(&Coordinate::new(25.514, 90.207), &zones);
        assert_eq!(result.zone().map(|z| z.id.as_str()), Some("mb"));
        assert!(result.is_inside());
    }

    #[test]
    fn test_outside_reports_nearest_zone() {
        let zones = vec![main_bazaar()];
        let point = Coordinate::new(25.600, 90.300);
        match detect_zone(&point, &zones) {
            ZoneDetectionResult::Outside { nearest_zone, distance_km, coordinates } => {
                assert_eq!(nearest_zone.map(|z| z.id.as_str()), Some("mb"));
                assert!(distance_km.unwrap() > 0.0);
                assert_eq!(coordinates, point);
            }
            ZoneDetectionResult::Inside { .. } => panic!("expected Outside"),
        }
    }

    #[test]
    fn test_circle_zone_detection() {
        let zones = vec![guwahati_central()];
        // ~3 km from center
        assert!(is_delivery_available(&Coordinate::new(26.1715, 91.7362), &zones));
        // ~8 km from center
        assert!(!is_delivery_available(&Coordinate::new(26.2165, 91.7362), &zones));
    }

    #[test]
    fn test_overlapping_zones_first_match_wins() {
        let mut second = main_bazaar();
        second.id = "mb2".into();
        second.name = "Main Bazaar Extension".into();
        let zones = vec![main_bazaar(), second];

        let point = Coordinate::new(25.514, 90.207);
        for _ in 0..5 {
            let result = detect_zone(&point, &zones);
            assert_eq!(result.zone().map(|z| z.id.as_str()), Some("mb"));
        }
    }

    #[test]
    fn test_inactive_zones_are_invisible() {
        let zones = vec![main_bazaar().with_active(false)];
        let point = Coordinate::new(25.514, 90.207);

        match detect_zone(&point, &zones) {
            ZoneDetectionResult::Outside { nearest_zone, distance_km, .. } => {
                assert!(nearest_zone.is_none());
                assert!(distance_km.is_none());
            }
            ZoneDetectionResult::Inside { .. } => panic!("inactive zone must not match"),
        }
    }

    #[test]
    fn test_empty_candidate_set() {
        let result = detect_zone(&Coordinate::new(25.514, 90.207), &[]);
        assert_eq!(
            result,
            ZoneDetectionResult::Outside {
                nearest_zone: None,
                distance_km: None,
                coordinates: Coordinate::new(25.514, 90.207),
            }
        );
    }

    #[test]
    fn test_find_closest_among_multiple() {
        let zones = vec![main_bazaar(), guwahati_central()];
        // Near Guwahati, far from Tura
        let point = Coordinate::new(26.2, 91.8);
        let (closest, distance) = find_closest_zone(&point, &zones).unwrap();
        assert_eq!(closest.id, "gc");
        assert!(distance < 20.0);
    }

    #[test]
    fn test_rank_zones_by_distance() {
        let zones = vec![main_bazaar(), guwahati_central(), main_bazaar().with_active(false)];
        let point = Coordinate::new(26.2, 91.8);

        let ranked = rank_zones_by_distance(&point, &zones);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0.id, "gc");
        assert_eq!(ranked[1].0.id, "mb");
        assert!(ranked[0].1 <= ranked[1].1);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let zones = vec![main_bazaar(), guwahati_central()];
        let point = Coordinate::new(25.514, 90.207);

        let first = detect_zone(&point, &zones);
        let second = detect_zone(&point, &zones);
        assert_eq!(first, second);
    }
}
