//! HTTP adapter for the AC Quantum cloud service
//!
//! Provides [`HttpTransport`], a reqwest-backed implementation of
//! [`acq_hal::Transport`], and [`ConnectorConfig`] for loading endpoint and
//! session settings.
//!
//! # Authentication
//!
//! The service uses a browser-style session: a CSRF token sent as
//! `X-CSRF-TOKEN` and a session cookie. Both are taken from an already
//! established login and supplied through `ACQ_CSRF_TOKEN` and
//! `ACQ_SESSION_COOKIE` (or the config file).
//!
//! # Example
//!
//! ```ignore
//! use acq_adapter_http::{ConnectorConfig, connect};
//!
//! let config = ConnectorConfig::load(None)?;
//! let connector = connect(&config)?;
//! for exp in connector.get_experiments().await? {
//!     println!("{} {}", exp.experiment_id, exp.name);
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod session;

use acq_hal::Connector;

pub use api::HttpTransport;
pub use config::{ConfigError, ConnectorConfig};
pub use error::{HttpError, HttpResult};
pub use session::Session;

/// Connector speaking HTTP to the service.
pub type AcqConnector = Connector<HttpTransport>;

/// Build a connector from loaded configuration.
pub fn connect(config: &ConnectorConfig) -> HttpResult<AcqConnector> {
    Ok(Connector::new(HttpTransport::from_config(config)?))
}
