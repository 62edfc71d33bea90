use serde::Deserialize;
use tracing::debug;

pub const UNKNOWN_FLIGHT: &str = "Unknown flight";
pub const UNKNOWN_AIRLINE: &str = "unknown";
pub const UNKNOWN_AIRPORT: &str = "an unknown airport";
pub const UNKNOWN_AIRCRAFT: &str = "an aircraft";

/// One aircraft from the live-positions feed. Every field may be absent or null.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FlightRecord {
    #[serde(default)]
    pub flight: Option<String>,
    #[serde(default)]
    pub painted_as: Option<String>,
    #[serde(default)]
    pub dest_icao: Option<String>,
    #[serde(default, rename = "type")]
    pub aircraft_type: Option<String>,
    /// Feet.
    #[serde(default)]
    pub alt: Option<f64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl FlightRecord {
    pub fn flight_number(&self) -> &str {
        self.flight.as_deref().unwrap_or(UNKNOWN_FLIGHT)
    }

    /// Airline code used for the name lookup.
    pub fn airline_code(&self) -> &str {
        self.painted_as.as_deref().unwrap_or(UNKNOWN_AIRLINE)
    }

    /// Destination ICAO code used for the name lookup.
    pub fn destination_code(&self) -> &str {
        self.dest_icao.as_deref().unwrap_or(UNKNOWN_AIRPORT)
    }

    pub fn aircraft_type(&self) -> &str {
        self.aircraft_type.as_deref().unwrap_or(UNKNOWN_AIRCRAFT)
    }
}

/// Body of the live-positions endpoint, which arrives in one of two shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FlightsResponse {
    List(Vec<serde_json::Value>),
    Wrapped { data: Vec<serde_json::Value> },
}

impl FlightsResponse {
    /// Normalizes either shape into records, dropping entries that don't decode.
    pub fn into_records(self) -> Vec<FlightRecord> {
        let raw = match self {
            FlightsResponse::List(list) => list,
            FlightsResponse::Wrapped { data } => data,
        };
        raw.into_iter()
            .filter_map(|value| match serde_json::from_value::<FlightRecord>(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    debug!("Skipping undecodable flight record: {}", e);
                    None
                }
            })
            .collect()
    }
}

/// Body of the static airline and airport endpoints.
#[derive(Debug, Deserialize)]
pub struct NameResponse {
    #[serde(default)]
    pub name: Option<String>,
}

/// Outcome of a name lookup. Both variants carry the string to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameLookup {
    Resolved(String),
    /// The service didn't give us a name; this holds the original code.
    Fallback(String),
}

impl NameLookup {
    pub fn into_name(self) -> String {
        match self {
            NameLookup::Resolved(name) | NameLookup::Fallback(name) => name,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, NameLookup::Resolved(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn united() -> serde_json::Value {
        json!({
            "fr24_id": "3a4b5c",
            "flight": "UAL123",
            "painted_as": "UAL",
            "dest_icao": "KJFK",
            "type": "B738",
            "alt": 5000,
            "lat": 40.001,
            "lon": -74.001
        })
    }

    #[test]
    fn test_list_and_wrapped_normalize_alike() {
        let list: FlightsResponse = serde_json::from_value(json!([united()])).unwrap();
        let wrapped: FlightsResponse = serde_json::from_value(json!({ "data": [united()] })).unwrap();

        let list = list.into_records();
        assert_eq!(list, wrapped.into_records());
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].flight_number(), "UAL123");
        assert_eq!(list[0].aircraft_type(), "B738");
        assert_eq!(list[0].alt, Some(5000.0));
    }

    #[test]
    fn test_other_shapes_rejected() {
        assert!(serde_json::from_value::<FlightsResponse>(json!({ "flights": [] })).is_err());
        assert!(serde_json::from_value::<FlightsResponse>(json!("nope")).is_err());
        assert!(serde_json::from_value::<FlightsResponse>(json!({ "data": 3 })).is_err());
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let body = json!({ "data": [united(), { "alt": "high" }, 7, { "flight": null }] });
        let records = serde_json::from_value::<FlightsResponse>(body)
            .unwrap()
            .into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], FlightRecord::default());
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let record = FlightRecord::default();
        assert_eq!(record.flight_number(), UNKNOWN_FLIGHT);
        assert_eq!(record.airline_code(), UNKNOWN_AIRLINE);
        assert_eq!(record.destination_code(), UNKNOWN_AIRPORT);
        assert_eq!(record.aircraft_type(), UNKNOWN_AIRCRAFT);
    }

    #[test]
    fn test_name_lookup_collapses() {
        assert_eq!(NameLookup::Resolved("United Airlines".into()).into_name(), "United Airlines");
        assert_eq!(NameLookup::Fallback("XYZ".into()).into_name(), "XYZ");
        assert!(!NameLookup::Fallback("XYZ".into()).is_resolved());
    }
}
