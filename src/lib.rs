pub mod api;
pub mod config;
pub mod error;
pub mod geo;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod selector;

pub use api::{FlightSource, Fr24Client};
pub use config::Config;
pub use pipeline::describe_overhead;
