//! Coordinates, bounding boxes and zoom estimation.
//!
//! Store coordinates arrive as decimal-degree strings. They are parsed here
//! and nowhere else, so a malformed value only ever drops a store from the
//! map, never from the listing.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use storefinder_core::Store;

use crate::error::InvalidCoordinate;

/// Pixel width of one tile at zoom 0 in Web Mercator.
const WORLD_PX: f64 = 256.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for an empty input.
    pub fn covering<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds {
                    south_west: p,
                    north_east: p,
                },
                Some(b) => Bounds {
                    south_west: LatLng::new(
                        b.south_west.lat.min(p.lat),
                        b.south_west.lng.min(p.lng),
                    ),
                    north_east: LatLng::new(
                        b.north_east.lat.max(p.lat),
                        b.north_east.lng.max(p.lng),
                    ),
                },
            })
        })
    }

    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&point.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&point.lng)
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

/// Parse a store's coordinate strings into a map position.
///
/// # Errors
///
/// Returns [`InvalidCoordinate`] when either value is not a finite number or
/// lies outside the valid latitude/longitude range.
pub fn store_position(store: &Store) -> Result<LatLng, InvalidCoordinate> {
    let lat = parse_axis(&store.id, "latitude", &store.latitude, 90.0)?;
    let lng = parse_axis(&store.id, "longitude", &store.longitude, 180.0)?;
    Ok(LatLng::new(lat, lng))
}

fn parse_axis(
    store_id: &str,
    axis: &'static str,
    raw: &str,
    limit: f64,
) -> Result<f64, InvalidCoordinate> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InvalidCoordinate::NotANumber {
            store_id: store_id.to_string(),
            axis,
            raw: raw.to_string(),
        })?;
    if value.abs() > limit {
        return Err(InvalidCoordinate::OutOfRange {
            store_id: store_id.to_string(),
            axis,
            value,
            limit,
        });
    }
    Ok(value)
}

/// Highest whole zoom level at which `bounds` fits a viewport of the given
/// pixel size, capped at `max_zoom`.
///
/// Mirrors how slippy-map widgets resolve a fit-bounds request, so headless
/// maps can report the zoom a real widget would settle on.
#[must_use]
pub fn fit_zoom(bounds: &Bounds, width_px: f64, height_px: f64, max_zoom: f64) -> f64 {
    fn mercator_lat(lat: f64) -> f64 {
        let sin = lat.to_radians().sin();
        let rad_x2 = ((1.0 + sin) / (1.0 - sin)).ln() / 2.0;
        rad_x2.clamp(-PI, PI) / 2.0
    }
    fn zoom_for(px: f64, fraction: f64) -> f64 {
        (px / WORLD_PX / fraction).log2().floor()
    }

    let lat_fraction =
        (mercator_lat(bounds.north_east.lat) - mercator_lat(bounds.south_west.lat)) / PI;
    let lng_fraction = (bounds.north_east.lng - bounds.south_west.lng) / 360.0;

    zoom_for(height_px, lat_fraction)
        .min(zoom_for(width_px, lng_fraction))
        .min(max_zoom)
        .max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::store;

    fn store_at(lat: &str, lng: &str) -> Store {
        store("S1", "Delhi", "New Delhi", lat, lng)
    }

    #[test]
    fn store_position_parses_trimmed_strings() {
        let p = store_position(&store_at(" 28.61 ", "77.20")).unwrap();
        assert!((p.lat - 28.61).abs() < 1e-9);
        assert!((p.lng - 77.20).abs() < 1e-9);
    }

    #[test]
    fn store_position_rejects_garbage() {
        let err = store_position(&store_at("28.6abc", "77.2")).unwrap_err();
        assert!(matches!(
            err,
            InvalidCoordinate::NotANumber {
                axis: "latitude",
                ..
            }
        ));
    }

    #[test]
    fn store_position_rejects_empty_and_nan() {
        assert!(store_position(&store_at("", "77.2")).is_err());
        assert!(store_position(&store_at("NaN", "77.2")).is_err());
        assert!(store_position(&store_at("28.6", "inf")).is_err());
    }

    #[test]
    fn store_position_rejects_out_of_range() {
        let err = store_position(&store_at("28.6", "190")).unwrap_err();
        assert!(matches!(
            err,
            InvalidCoordinate::OutOfRange {
                axis: "longitude",
                ..
            }
        ));
    }

    #[test]
    fn covering_empty_is_none() {
        assert!(Bounds::covering(Vec::<LatLng>::new()).is_none());
    }

    #[test]
    fn covering_contains_every_point() {
        let points = [
            LatLng::new(28.61, 77.20),
            LatLng::new(19.05, 72.82),
            LatLng::new(18.52, 73.85),
            LatLng::new(-33.86, 151.21),
        ];
        let bounds = Bounds::covering(points).unwrap();
        for p in points {
            assert!(bounds.contains(p), "{p:?} outside {bounds:?}");
        }
        assert!((bounds.south_west.lat - -33.86).abs() < 1e-9);
        assert!((bounds.north_east.lng - 151.21).abs() < 1e-9);
    }

    #[test]
    fn single_point_box_is_degenerate() {
        let p = LatLng::new(19.05, 72.82);
        let bounds = Bounds::covering([p]).unwrap();
        assert_eq!(bounds.south_west, p);
        assert_eq!(bounds.north_east, p);
        assert_eq!(bounds.center(), p);
    }

    #[test]
    fn fit_zoom_degenerate_box_hits_max() {
        let p = LatLng::new(19.05, 72.82);
        let bounds = Bounds::covering([p]).unwrap();
        assert!((fit_zoom(&bounds, 640.0, 500.0, 21.0) - 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fit_zoom_shrinks_with_span() {
        let city = Bounds::covering([LatLng::new(19.0, 72.8), LatLng::new(19.1, 72.9)]).unwrap();
        let country = Bounds::covering([LatLng::new(8.0, 68.0), LatLng::new(35.0, 97.0)]).unwrap();
        let city_zoom = fit_zoom(&city, 640.0, 500.0, 21.0);
        let country_zoom = fit_zoom(&country, 640.0, 500.0, 21.0);
        assert!(city_zoom > country_zoom, "{city_zoom} <= {country_zoom}");
        assert!(country_zoom >= 0.0);
    }
}
