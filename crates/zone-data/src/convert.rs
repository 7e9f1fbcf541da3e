//! Row ⇄ model conversion.
//!
//! Storage rows keep zone geometry in loosely-typed columns (`zone_type`
//! discriminator plus either a jsonb boundary array or center/radius
//! columns). Conversion into [`Zone`] is where the shape invariant is
//! enforced: a row that fails validation never becomes a model, and bulk
//! loads skip it with a warning instead of failing the whole fetch.

use dayliz_api_client::endpoints::{TownRow, ZoneRow};
use dayliz_geo::{parse_lat_lng, LatLngPoint};
use dayliz_zones::{Town, Zone, ZoneError, ZoneShape};
use tracing::warn;

/// Converts a town row into the domain model.
#[must_use]
pub fn town_from_row(row: TownRow) -> Town {
    Town {
        id: row.id,
        name: row.name,
        state: row.state,
        is_active: row.is_active,
        default_delivery_fee: row.default_delivery_fee,
        default_min_order_amount: row.default_min_order_amount,
        default_estimated_delivery_time: row.default_estimated_delivery_time,
    }
}

/// Converts a zone row into the domain model, enforcing the shape invariant.
///
/// # Errors
/// Returns a [`ZoneError`] when the row's `zone_type` is unknown, geometry
/// columns are missing, or the shape fails validation (e.g. a polygon with
/// fewer than 3 points).
pub fn zone_from_row(row: ZoneRow) -> Result<Zone, ZoneError> {
    let shape = match row.zone_type.as_str() {
        "polygon" => {
            let boundary_value = row
                .boundary_coordinates
                .as_ref()
                .filter(|v| !v.is_null())
                .ok_or(ZoneError::MissingBoundary)?;
            let points = boundary_value
                .as_array()
                .ok_or(ZoneError::MissingBoundary)?;

            let mut boundary = Vec::with_capacity(points.len());
            for (index, point) in points.iter().enumerate() {
                let coordinate = parse_lat_lng(point)
                    .ok_or(ZoneError::InvalidBoundaryPoint { index })?;
                boundary.push(coordinate);
            }
            ZoneShape::polygon(boundary)?
        }
        "circle" => {
            let lat = row
                .center_lat
                .ok_or(ZoneError::MissingCircleField { field: "center_lat" })?;
            let lng = row
                .center_lng
                .ok_or(ZoneError::MissingCircleField { field: "center_lng" })?;
            let radius_km = row
                .radius_km
                .ok_or(ZoneError::MissingCircleField { field: "radius_km" })?;
            ZoneShape::circle(dayliz_geo::Coordinate::new(lat, lng), radius_km)?
        }
        other => return Err(ZoneError::UnknownShapeType(other.to_string())),
    };

    Ok(Zone {
        id: row.id,
        name: row.name,
        town_id: row.town_id,
        zone_number: row.zone_number,
        shape,
        is_active: row.is_active,
        delivery_fee: row.delivery_fee,
        min_order_amount: row.min_order_amount,
        estimated_delivery_time: row.estimated_delivery_time,
    })
}

/// Converts a batch of zone rows, discarding rows that fail validation.
///
/// Malformed zones are a data-quality problem, not an outage: they are logged
/// with their id and reason, the rest of the set loads normally, and no error
/// reaches the caller.
#[must_use]
pub fn zones_from_rows(rows: Vec<ZoneRow>) -> Vec<Zone> {
    rows.into_iter()
        .filter_map(|row| {
            let zone_id = row.id.clone();
            match zone_from_row(row) {
                Ok(zone) => Some(zone),
                Err(error) => {
                    warn!(zone_id = %zone_id, %error, "discarding zone row that failed validation");
                    None
                }
            }
        })
        .collect()
}

/// Re-serializes a zone into its row form.
///
/// Boundary points are emitted in the canonical `{lat, lng}` object encoding.
/// A row produced here and converted back with [`zone_from_row`] yields an
/// identical zone.
#[must_use]
pub fn zone_to_row(zone: &Zone) -> ZoneRow {
    let (zone_type, boundary_coordinates, center_lat, center_lng, radius_km) = match &zone.shape {
        ZoneShape::Polygon { boundary } => {
            let points: Vec<serde_json::Value> = boundary
                .iter()
                .map(|c| {
                    let point = LatLngPoint::from(*c);
                    serde_json::json!({"lat": point.lat, "lng": point.lng})
                })
                .collect();
            ("polygon", Some(serde_json::Value::Array(points)), None, None, None)
        }
        ZoneShape::Circle { center, radius_km } => (
            "circle",
            None,
            Some(center.latitude),
            Some(center.longitude),
            Some(*radius_km),
        ),
    };

    ZoneRow {
        id: zone.id.clone(),
        name: zone.name.clone(),
        town_id: zone.town_id.clone(),
        zone_number: zone.zone_number,
        zone_type: zone_type.to_string(),
        boundary_coordinates,
        center_lat,
        center_lng,
        radius_km,
        is_active: zone.is_active,
        delivery_fee: zone.delivery_fee,
        min_order_amount: zone.min_order_amount,
        estimated_delivery_time: zone.estimated_delivery_time.clone(),
    }
}
