//! Containment predicates for delivery-zone boundaries.
//!
//! Polygon containment uses the standard ray-casting algorithm in lat/lng degree
//! space; circle containment uses haversine distance against the radius. Zone
//! boundaries are small (city-block to town scale), so planar ray casting over
//! degrees is accurate enough and keeps the test exact per the stored boundary.

use crate::{haversine_distance, Coordinate};

/// Tests whether a point lies inside a closed polygon ring.
///
/// The ring is an ordered sequence of vertices; the last vertex is implicitly
/// connected back to the first, so the closing point does not need to be
/// repeated. Rings with fewer than 3 vertices always return `false` (such
/// boundaries are rejected at zone construction and never reach detection).
///
/// Ray casting counts crossings of a horizontal ray cast toward +longitude.
/// Vertices are handled with the half-open interval rule
/// `(lat_i > p.lat) != (lat_j > p.lat)` so each vertex is counted exactly once.
/// Points exactly on an edge may classify either way depending on floating
/// point rounding; exact boundary precision is not a goal.
///
/// # Example
/// ```
/// use dayliz_geo::{point_in_polygon, Coordinate};
///
/// let ring = vec![
///     Coordinate::new(25.513, 90.206),
///     Coordinate::new(25.513, 90.208),
///     Coordinate::new(25.515, 90.208),
///     Coordinate::new(25.515, 90.206),
/// ];
/// assert!(point_in_polygon(&Coordinate::new(25.514, 90.207), &ring));
/// assert!(!point_in_polygon(&Coordinate::new(25.600, 90.300), &ring));
/// ```
#[must_use]
pub fn point_in_polygon(point: &Coordinate, ring: &[Coordinate]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;

    for i in 0..ring.len() {
        let (lat_i, lng_i) = (ring[i].latitude, ring[i].longitude);
        let (lat_j, lng_j) = (ring[j].latitude, ring[j].longitude);

        if (lat_i > point.latitude) != (lat_j > point.latitude)
            && point.longitude
                < (lng_j - lng_i) * (point.latitude - lat_i) / (lat_j - lat_i) + lng_i
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Tests whether a point lies within `radius_km` of a circle center.
///
/// # Example
/// ```
/// use dayliz_geo::{point_in_circle, Coordinate};
///
/// let center = Coordinate::new(26.1445, 91.7362);
/// assert!(point_in_circle(&center, &center, 0.0));
/// ```
#[inline]
#[must_use]
pub fn point_in_circle(point: &Coordinate, center: &Coordinate, radius_km: f64) -> bool {
    haversine_distance(point, center) <= radius_km
}

/// Arithmetic mean of a polygon ring's vertices.
///
/// Used as the approximate "location" of a polygon zone when ranking zones by
/// distance from a point outside all of them. Returns `None` for an empty ring.
#[must_use]
pub fn polygon_centroid(ring: &[Coordinate]) -> Option<Coordinate> {
    if ring.is_empty() {
        return None;
    }

    let n = ring.len() as f64;
    let (lat_sum, lng_sum) = ring.iter().fold((0.0, 0.0), |(lat, lng), c| {
        (lat + c.latitude, lng + c.longitude)
    });

    Some(Coordinate::new(lat_sum / n, lng_sum / n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Square around Tura's Main Bazaar.
    fn main_bazaar() -> Vec<Coordinate> {
        vec![
            Coordinate::new(25.513, 90.206),
            Coordinate::new(25.513, 90.208),
            Coordinate::new(25.515, 90.208),
            Coordinate::new(25.515, 90.206),
        ]
    }

    #[test]
    fn test_point_inside_square() {
        assert!(point_in_polygon(&Coordinate::new(25.514, 90.207), &main_bazaar()));
    }

    #[test]
    fn test_point_outside_square() {
        assert!(!point_in_polygon(&Coordinate::new(25.600, 90.300), &main_bazaar()));
        assert!(!point_in_polygon(&Coordinate::new(25.514, 90.209), &main_bazaar()));
    }

    #[test]
    fn test_degenerate_ring_is_never_inside() {
        let two_points = vec![Coordinate::new(25.513, 90.206), Coordinate::new(25.515, 90.208)];
        assert!(!point_in_polygon(&Coordinate::new(25.514, 90.207), &two_points));
        assert!(!point_in_polygon(&Coordinate::new(25.514, 90.207), &[]));
    }

    #[test]
    fn test_concave_polygon() {
        // L-shape: the notch at the top-right is outside
        let ring = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 2.0),
            Coordinate::new(1.0, 2.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(2.0, 1.0),
            Coordinate::new(2.0, 0.0),
        ];
        assert!(point_in_polygon(&Coordinate::new(0.5, 0.5), &ring));
        assert!(point_in_polygon(&Coordinate::new(0.5, 1.5), &ring));
        assert!(!point_in_polygon(&Coordinate::new(1.5, 1.5), &ring));
    }

    #[test]
    fn test_containment_is_deterministic() {
        let ring = main_bazaar();
        let on_vertex_latitude = Coordinate::new(25.513, 90.207);
        let first = point_in_polygon(&on_vertex_latitude, &ring);
        for _ in 0..10 {
            assert_eq!(point_in_polygon(&on_vertex_latitude, &ring), first);
        }
    }

    #[test]
    fn test_point_in_circle_at_center() {
        let center = Coordinate::new(26.1445, 91.7362);
        assert!(point_in_circle(&center, &center, 0.0));
        assert!(point_in_circle(&center, &center, 5.0));
    }

    #[test]
    fn test_point_in_circle_radius_boundary() {
        let center = Coordinate::new(26.1445, 91.7362);
        // ~3 km north of center
        let near = Coordinate::new(26.1715, 91.7362);
        // ~8 km north of center
        let far = Coordinate::new(26.2165, 91.7362);
        assert!(point_in_circle(&near, &center, 5.0));
        assert!(!point_in_circle(&far, &center, 5.0));
    }

    #[test]
    fn test_centroid_of_square() {
        let centroid = polygon_centroid(&main_bazaar()).unwrap();
        assert!((centroid.latitude - 25.514).abs() < 1e-9);
        assert!((centroid.longitude - 90.207).abs() < 1e-9);
    }

    #[test]
    fn test_centroid_of_empty_ring() {
        assert!(polygon_centroid(&[]).is_none());
    }

    /// Builds a regular polygon (in degree space) around a center.
    fn regular_ring(center: Coordinate, radius_deg: f64, vertices: usize) -> Vec<Coordinate> {
        (0..vertices)
            .map(|i| {
                let theta = std::f64::consts::TAU * (i as f64) / (vertices as f64);
                Coordinate::new(
                    center.latitude + radius_deg * theta.sin(),
                    center.longitude + radius_deg * theta.cos(),
                )
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_center_of_regular_polygon_is_inside(
            lat in -60.0f64..60.0,
            lng in -120.0f64..120.0,
            radius_deg in 0.01f64..0.5,
            vertices in 3usize..16,
        ) {
            let center = Coordinate::new(lat, lng);
            let ring = regular_ring(center, radius_deg, vertices);
            prop_assert!(point_in_polygon(&center, &ring));
        }

        #[test]
        fn prop_far_points_are_outside(
            lat in -60.0f64..60.0,
            lng in -120.0f64..120.0,
            radius_deg in 0.01f64..0.5,
            vertices in 3usize..16,
        ) {
            let center = Coordinate::new(lat, lng);
            let ring = regular_ring(center, radius_deg, vertices);
            let far = Coordinate::new(lat + radius_deg * 3.0, lng + radius_deg * 3.0);
            prop_assert!(!point_in_polygon(&far, &ring));
        }

        #[test]
        fn prop_centroid_of_regular_polygon_matches_center(
            lat in -60.0f64..60.0,
            lng in -120.0f64..120.0,
            radius_deg in 0.01f64..0.5,
            vertices in 3usize..16,
        ) {
            let center = Coordinate::new(lat, lng);
            let ring = regular_ring(center, radius_deg, vertices);
            let centroid = polygon_centroid(&ring).unwrap();
            prop_assert!((centroid.latitude - center.latitude).abs() < 1e-6);
            prop_assert!((centroid.longitude - center.longitude).abs() < 1e-6);
        }
    }
}
