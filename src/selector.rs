use crate::geo::{geodesic_distance_m, Center};
use crate::models::FlightRecord;

/// Altitude ceiling for a candidate, in feet (strictly below).
// TODO: decide whether "low-flying" should mean under 10,000 ft; this ceiling admits cruise traffic.
pub const MAX_ALTITUDE_FT: f64 = 50_000.0;

/// The aircraft picked for the response.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub record: &'a FlightRecord,
    pub distance_m: f64,
}

/// Picks the low-altitude aircraft closest to `center`.
///
/// Records missing altitude or position, or at/above [`MAX_ALTITUDE_FT`],
/// are ignored, as are positions off the globe or whose distance isn't finite.
/// Returns `None` when nothing qualifies. On equal distances the earlier
/// record wins.
pub fn select_nearest(center: Center, flights: &[FlightRecord]) -> Option<Selection<'_>> {
    flights
        .iter()
        .filter_map(|record| match (record.alt, record.lat, record.lon) {
            (Some(alt), Some(lat), Some(lon))
                if alt < MAX_ALTITUDE_FT && is_position(lat, lon) =>
            {
                Some(Selection {
                    record,
                    distance_m: geodesic_distance_m(center, lat, lon),
                })
            }
            _ => None,
        })
        .filter(|selection| selection.distance_m.is_finite())
        .min_by(|a, b| a.distance_m.total_cmp(&b.distance_m))
}

fn is_position(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Center = Center {
        lat: 40.0,
        lon: -74.0,
    };

    fn at(flight: &str, alt: Option<f64>, lat: Option<f64>, lon: Option<f64>) -> FlightRecord {
        FlightRecord {
            flight: Some(flight.to_string()),
            alt,
            lat,
            lon,
            ..FlightRecord::default()
        }
    }

    #[test]
    fn test_excludes_high_and_incomplete() {
        let flights = vec![
            at("HIGH", Some(50_000.0), Some(40.0), Some(-74.0)),
            at("HIGHER", Some(61_000.0), Some(40.0), Some(-74.0)),
            at("NOALT", None, Some(40.0), Some(-74.0)),
            at("NOLAT", Some(1000.0), None, Some(-74.0)),
            at("NOLON", Some(1000.0), Some(40.0), None),
        ];
        assert_eq!(select_nearest(CENTER, &flights), None);
        assert_eq!(select_nearest(CENTER, &[]), None);
    }

    #[test]
    fn test_picks_closest_regardless_of_order() {
        let near = at("NEAR", Some(3000.0), Some(40.001), Some(-74.001));
        let far = at("FAR", Some(3000.0), Some(40.01), Some(-74.01));

        for flights in [vec![near.clone(), far.clone()], vec![far.clone(), near.clone()]] {
            let picked = select_nearest(CENTER, &flights).unwrap();
            assert_eq!(picked.record.flight_number(), "NEAR");
        }
    }

    #[test]
    fn test_ignores_closer_but_too_high() {
        let flights = vec![
            at("OVERHEAD", Some(50_000.0), Some(40.0), Some(-74.0)),
            at("LOW", Some(49_999.0), Some(40.005), Some(-74.0)),
        ];
        let picked = select_nearest(CENTER, &flights).unwrap();
        assert_eq!(picked.record.flight_number(), "LOW");
        assert!(picked.distance_m > 500.0 && picked.distance_m < 600.0);
    }

    #[test]
    fn test_tie_keeps_first() {
        let flights = vec![
            at("FIRST", Some(2000.0), Some(40.002), Some(-74.0)),
            at("SECOND", Some(2000.0), Some(40.002), Some(-74.0)),
        ];
        let picked = select_nearest(CENTER, &flights).unwrap();
        assert_eq!(picked.record.flight_number(), "FIRST");
    }

    #[test]
    fn test_unmeasurable_positions_never_win() {
        let good = at("GOOD", Some(2000.0), Some(40.01), Some(-74.0));
        for bad_lat in [f64::NAN, -f64::NAN] {
            let bad = at("BAD", Some(2000.0), Some(bad_lat), Some(-74.0));
            for flights in [vec![bad.clone(), good.clone()], vec![good.clone(), bad.clone()]] {
                let picked = select_nearest(CENTER, &flights).unwrap();
                assert_eq!(picked.record.flight_number(), "GOOD");
                assert!(picked.distance_m.is_finite());
            }
            assert_eq!(select_nearest(CENTER, &[bad]), None);
        }

        let off_globe = at("OFF", Some(2000.0), Some(40.0), Some(-274.0));
        let flights = [off_globe, good];
        let picked = select_nearest(CENTER, &flights).unwrap();
        assert_eq!(picked.record.flight_number(), "GOOD");
    }
}
