use crate::models::FlightRecord;

pub const NO_AIRCRAFT: &str = "There are no low-flying aircraft nearby right now.";

/// Builds the spoken description of `record` with its resolved names.
pub fn describe(record: &FlightRecord, airline: &str, destination: &str) -> String {
    format!(
        "That plane overhead is {} flight {} headed to {} in a {}.",
        airline,
        record.flight_number(),
        destination,
        record.aircraft_type()
    )
}
