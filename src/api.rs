use crate::config::ApiConfig;
use crate::geo::BoundingBox;
use crate::models::{FlightRecord, FlightsResponse, NameLookup, NameResponse};
use async_trait::async_trait;
use color_eyre::{eyre::eyre, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, StatusCode, Url};
use tracing::{debug, info, warn};

/// Read access to the flight-data service.
///
/// Non-200 answers never surface as errors: the flight feed degrades to an
/// empty list and name lookups fall back to the code that was asked for.
/// Only transport failures are returned as `Err`.
#[async_trait]
pub trait FlightSource {
    async fn fetch_nearby_flights(&self, bounds: &BoundingBox) -> Result<Vec<FlightRecord>>;
    async fn resolve_airline_name(&self, code: &str) -> Result<NameLookup>;
    async fn resolve_airport_name(&self, icao: &str) -> Result<NameLookup>;
}

/// Flightradar24 API client.
pub struct Fr24Client {
    client: Client,
    base_url: Url,
}

impl Fr24Client {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Self::with_builder(config, Client::builder())
    }

    /// Like [`Fr24Client::new`], starting from a caller-supplied builder.
    pub fn with_builder(config: &ApiConfig, builder: ClientBuilder) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("accept-version"),
            HeaderValue::from_static("v1"),
        );
        match &config.api_key {
            Some(key) => {
                let mut auth = HeaderValue::from_str(&format!("Bearer {}", key))
                    .map_err(|_| eyre!("FR24_API_KEY contains characters not allowed in a header"))?;
                auth.set_sensitive(true);
                headers.insert(AUTHORIZATION, auth);
            }
            None => warn!("No FR24_API_KEY configured; requests will be sent without a bearer token."),
        }

        let client = builder.default_headers(headers).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| eyre!("API base URL cannot carry a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn flights_url(&self, bounds: &BoundingBox) -> Result<Url> {
        let mut url = self.endpoint(&["api", "live", "flight-positions", "full"])?;
        // Commas stay literal; the service expects `bounds=n,s,w,e`.
        url.set_query(Some(&format!("bounds={}", bounds.query_value())));
        Ok(url)
    }

    async fn lookup_name(&self, kind: &str, code: &str) -> Result<NameLookup> {
        let url = self.endpoint(&["api", "static", kind, code, "light"])?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            info!("No {} name for '{}' (HTTP {}); using the code.", kind, code, status);
            return Ok(NameLookup::Fallback(code.to_string()));
        }

        let body = response.text().await?;
        let lookup = decode_name(&body, code);
        if !lookup.is_resolved() {
            info!("No {} name in the answer for '{}'; using the code.", kind, code);
        }
        Ok(lookup)
    }
}

#[async_trait]
impl FlightSource for Fr24Client {
    async fn fetch_nearby_flights(&self, bounds: &BoundingBox) -> Result<Vec<FlightRecord>> {
        let url = self.flights_url(bounds)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!("Live feed answered HTTP {}; treating as no flights.", status);
            return Ok(Vec::new());
        }

        let body = response.text().await?;
        let flights = decode_flights(&body);
        info!("Live feed returned {} flights.", flights.len());
        Ok(flights)
    }

    async fn resolve_airline_name(&self, code: &str) -> Result<NameLookup> {
        self.lookup_name("airlines", code).await
    }

    async fn resolve_airport_name(&self, icao: &str) -> Result<NameLookup> {
        self.lookup_name("airports", icao).await
    }
}

/// Decodes a 200 live-positions body. A body of neither known shape is "no flights".
pub fn decode_flights(body: &str) -> Vec<FlightRecord> {
    match serde_json::from_str::<FlightsResponse>(body) {
        Ok(response) => response.into_records(),
        Err(e) => {
            warn!("Malformed live feed body: {}. Treating as no flights.", e);
            Vec::new()
        }
    }
}

/// Decodes a 200 airline/airport body, falling back to `code`.
pub fn decode_name(body: &str, code: &str) -> NameLookup {
    match serde_json::from_str::<NameResponse>(body) {
        Ok(NameResponse { name: Some(name) }) => NameLookup::Resolved(name),
        Ok(_) => NameLookup::Fallback(code.to_string()),
        Err(e) => {
            warn!("Malformed name body for '{}': {}", code, e);
            NameLookup::Fallback(code.to_string())
        }
    }
}
