use crate::api::FlightSource;
use crate::config::Config;
use crate::render::{describe, NO_AIRCRAFT};
use crate::selector::select_nearest;
use color_eyre::Result;
use tracing::info;

/// Produces the one-sentence answer for whatever is overhead right now.
///
/// Calls run strictly one after another: flights, then airline, then airport.
/// Name lookups are skipped when no aircraft qualifies.
pub async fn describe_overhead<S>(source: &S, config: &Config) -> Result<String>
where
    S: FlightSource + Sync,
{
    let flights = source.fetch_nearby_flights(&config.bounds).await?;

    let Some(selection) = select_nearest(config.center, &flights) else {
        info!("No low-flying candidates among {} flights.", flights.len());
        return Ok(NO_AIRCRAFT.to_string());
    };
    let record = selection.record;
    info!(
        "Selected {} at {:.0} m from center.",
        record.flight_number(),
        selection.distance_m
    );

    let airline = source
        .resolve_airline_name(record.airline_code())
        .await?
        .into_name();
    let destination = source
        .resolve_airport_name(record.destination_code())
        .await?
        .into_name();

    Ok(describe(record, &airline, &destination))
}
