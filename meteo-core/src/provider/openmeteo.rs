use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::{
    error::FetchError,
    model::{CURRENT_FIELDS, Coordinates, ForecastPayload},
};

use super::{HttpTransport, WeatherProvider};

pub const DEFAULT_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

/// Current conditions from the Open-Meteo forecast API.
///
/// Issues exactly one GET per call and never retries.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider<T = Client> {
    endpoint: String,
    http: T,
}

impl OpenMeteoProvider<Client> {
    pub fn new() -> Self {
        Self::with_transport(Client::new())
    }
}

impl Default for OpenMeteoProvider<Client> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> OpenMeteoProvider<T> {
    pub fn with_transport(http: T) -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_string(), http }
    }

    /// Point the provider at another forecast endpoint, e.g. a self-hosted mirror.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full request URL for `coordinates`.
    pub fn request_url(&self, coordinates: Coordinates) -> Result<Url, FetchError> {
        let latitude = coordinates.latitude.to_string();
        let longitude = coordinates.longitude.to_string();
        let current = CURRENT_FIELDS.join(",");

        Url::parse_with_params(
            &self.endpoint,
            &[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", current.as_str()),
            ],
        )
        .map_err(FetchError::transport)
    }

    pub async fn fetch(&self, coordinates: Coordinates) -> Result<ForecastPayload, FetchError> {
        let url = self.request_url(coordinates)?;
        debug!(%url, "requesting current conditions");

        let res = self.http.get(url.as_str()).await.map_err(FetchError::Transport)?;

        if !res.is_success() {
            warn!(status = res.status, "forecast request failed");
            return Err(FetchError::Status {
                status: res.status,
                status_text: res.status_text,
            });
        }

        serde_json::from_str(&res.body).map_err(FetchError::transport)
    }
}

#[async_trait]
impl<T: HttpTransport> WeatherProvider for OpenMeteoProvider<T> {
    async fn current(&self, coordinates: Coordinates) -> Result<ForecastPayload, FetchError> {
        self.fetch(coordinates).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{BoxError, FetchErrorKind},
        provider::HttpResponse,
    };
    use std::sync::Mutex;

    /// Replays one canned outcome and records every requested URL.
    #[derive(Debug)]
    struct StubTransport {
        outcome: Mutex<Option<Result<HttpResponse, BoxError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl StubTransport {
        fn responding(status: u16, status_text: &str, body: &str) -> Self {
            Self::new(Ok(HttpResponse {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            }))
        }

        fn failing(message: &str) -> Self {
            Self::new(Err(std::io::Error::other(message.to_string()).into()))
        }

        fn new(outcome: Result<HttpResponse, BoxError>) -> Self {
            Self { outcome: Mutex::new(Some(outcome)), calls: Mutex::new(Vec::new()) }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, BoxError> {
            self.calls.lock().unwrap().push(url.to_string());
            self.outcome.lock().unwrap().take().expect("stub called more than once")
        }
    }

    #[tokio::test]
    async fn returns_payload_and_issues_one_call() {
        let provider = OpenMeteoProvider::with_transport(StubTransport::responding(
            200,
            "OK",
            r#"{"current":{"temperature_2m":20}}"#,
        ));

        let payload = provider.current(Coordinates::new(40.0, -3.0)).await.expect("payload");

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "current": { "temperature_2m": 20.0 } })
        );

        let calls = provider.http.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].contains("latitude=40"));
        assert!(calls[0].contains("longitude=-3"));
        assert!(calls[0].starts_with(DEFAULT_ENDPOINT));
    }

    #[tokio::test]
    async fn requests_all_current_fields() {
        let provider =
            OpenMeteoProvider::with_transport(StubTransport::responding(200, "OK", "{}"));

        let url = provider.request_url(Coordinates::new(43.2833, -2.1667)).unwrap();
        let current = url
            .query_pairs()
            .find(|(k, _)| k == "current")
            .map(|(_, v)| v.into_owned())
            .expect("current parameter");

        assert_eq!(current, CURRENT_FIELDS.join(","));
        assert!(url.as_str().contains("latitude=43.2833"));
    }

    #[tokio::test]
    async fn non_success_status_is_a_request_failure() {
        let provider =
            OpenMeteoProvider::with_transport(StubTransport::responding(404, "Not Found", ""));

        let err = provider.current(Coordinates::new(40.0, -3.0)).await.unwrap_err();

        assert_eq!(err.to_string(), "Request failed: 404 Not Found");
        assert_eq!(err.kind(), FetchErrorKind::Request);
    }

    #[tokio::test]
    async fn transport_rejection_is_a_transport_failure() {
        let provider = OpenMeteoProvider::with_transport(StubTransport::failing("Network Error"));

        let err = provider.current(Coordinates::new(40.0, -3.0)).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to retrieve weather data: Network Error");
        assert_eq!(err.kind(), FetchErrorKind::Transport);
    }

    #[tokio::test]
    async fn invalid_json_is_a_transport_failure() {
        let provider =
            OpenMeteoProvider::with_transport(StubTransport::responding(200, "OK", "not json"));

        let err = provider.current(Coordinates::new(40.0, -3.0)).await.unwrap_err();

        assert_eq!(err.kind(), FetchErrorKind::Transport);
        assert!(err.to_string().starts_with("Failed to retrieve weather data: "));
    }

    #[tokio::test]
    async fn custom_endpoint_is_used() {
        let provider =
            OpenMeteoProvider::with_transport(StubTransport::responding(200, "OK", "{}"))
                .with_endpoint("http://localhost:8080/v1/forecast");

        provider.current(Coordinates::new(1.0, 2.0)).await.expect("payload");

        let calls = provider.http.calls();
        assert!(calls[0].starts_with("http://localhost:8080/v1/forecast?latitude=1&longitude=2"));
    }

    #[test]
    fn malformed_endpoint_is_a_transport_failure() {
        let provider =
            OpenMeteoProvider::with_transport(StubTransport::responding(200, "OK", "{}"))
                .with_endpoint("not a url");

        let err = provider.request_url(Coordinates::new(1.0, 2.0)).unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Transport);
    }
}
