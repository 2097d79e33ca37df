use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::{
    error::{BoxError, FetchError},
    model::{Coordinates, ForecastPayload},
};

pub mod openmeteo;

pub use openmeteo::OpenMeteoProvider;

/// Anything that can produce the current conditions for a coordinate pair.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, coordinates: Coordinates) -> Result<ForecastPayload, FetchError>;
}

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The single outbound GET a provider needs.
///
/// Errors returned here mean no response was obtained at all; non-success
/// statuses are reported through [`HttpResponse::status`].
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, url: &str) -> Result<HttpResponse, BoxError>;
}

#[async_trait]
impl HttpTransport for Client {
    async fn get(&self, url: &str) -> Result<HttpResponse, BoxError> {
        let res = Client::get(self, url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
