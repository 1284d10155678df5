use crate::config::Config;
use crate::models::{
    cost::CostPage,
    energy::EnergyPage,
    error::AppError,
    query::{DateRangeQuery, PageCursor},
};
use serde::de::DeserializeOwned;

// ENDPOINT PATHS
const ENERGY_BALANCE_PATH: &str = "/balanco-energia/horario";
const WEEKLY_COSTS_PATH: &str = "/cmo/semanal";
const HALF_HOURLY_COSTS_PATH: &str = "/cmo/semihorario";

/// Publication cadence of the marginal-cost series.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CostFrequency {
    /// One value per week, published since 2005.
    Weekly,
    /// One value per half hour, published since 2020.
    HalfHourly,
}

impl CostFrequency {
    /// API path serving this cadence.
    pub fn path(&self) -> &'static str {
        match self {
            CostFrequency::Weekly => WEEKLY_COSTS_PATH,
            CostFrequency::HalfHourly => HALF_HOURLY_COSTS_PATH,
        }
    }
}

/// HTTP client for the SIN data API. Every request carries the caller's
/// bearer token; the API rejects anonymous calls.
pub struct SinApi {
    http: reqwest::Client,
    base_url: String,
}

impl SinApi {
    /// Creates a client against the configured base URL.
    pub fn new() -> Result<Self, AppError> {
        Self::with_base_url(Config::API_BASE_URL)
    }

    /// Creates a client against a custom base URL (primarily for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetches one page of hourly energy-balance records.
    pub async fn energy_balance(
        &self,
        token: &str,
        query: &DateRangeQuery,
        cursor: PageCursor,
    ) -> Result<EnergyPage, AppError> {
        self.fetch_page(ENERGY_BALANCE_PATH, token, query, cursor)
            .await
    }

    /// Fetches one page of marginal-cost records at the given cadence.
    pub async fn marginal_costs(
        &self,
        token: &str,
        query: &DateRangeQuery,
        cursor: PageCursor,
        frequency: CostFrequency,
    ) -> Result<CostPage, AppError> {
        self.fetch_page(frequency.path(), token, query, cursor)
            .await
    }

    /// Constructs the full URL for one page of a date-range query.
    fn page_url(&self, path: &str, query: &DateRangeQuery, cursor: PageCursor) -> String {
        format!(
            "{}{}?data_inicial={}&data_final={}&limite={}&deslocamento={}",
            self.base_url,
            path,
            query.data_inicial.format("%Y-%m-%d"),
            query.data_final.format("%Y-%m-%d"),
            query.limite,
            cursor.offset,
        )
    }

    /// Executes a single authenticated fetch.
    async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        query: &DateRangeQuery,
        cursor: PageCursor,
    ) -> Result<T, AppError> {
        let url = self.page_url(path, query, cursor);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches one page of hourly energy-balance records with a default client.
pub async fn fetch_energy_balance(
    token: &str,
    query: &DateRangeQuery,
    cursor: PageCursor,
) -> Result<EnergyPage, AppError> {
    SinApi::new()?.energy_balance(token, query, cursor).await
}

/// Fetches one page of marginal-cost records with a default client.
pub async fn fetch_marginal_costs(
    token: &str,
    query: &DateRangeQuery,
    cursor: PageCursor,
    frequency: CostFrequency,
) -> Result<CostPage, AppError> {
    SinApi::new()?
        .marginal_costs(token, query, cursor, frequency)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_query() -> DateRangeQuery {
        DateRangeQuery {
            data_inicial: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            data_final: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            limite: 1000,
        }
    }

    #[test]
    fn test_client_creation() {
        assert!(SinApi::new().is_ok());
    }

    #[test]
    fn test_page_url_parameters() {
        let api = SinApi::with_base_url("http://localhost:8000").unwrap();
        let url = api.page_url(
            ENERGY_BALANCE_PATH,
            &sample_query(),
            PageCursor {
                offset: 200,
                limit: 1000,
            },
        );

        assert_eq!(
            url,
            "http://localhost:8000/balanco-energia/horario\
             ?data_inicial=2024-01-01&data_final=2024-03-08&limite=1000&deslocamento=200"
        );
    }

    #[test]
    fn test_page_url_custom_base() {
        let api = SinApi::with_base_url("https://sin.example.org/api").unwrap();
        let url = api.page_url(WEEKLY_COSTS_PATH, &sample_query(), PageCursor::first(1000));

        assert!(url.starts_with("https://sin.example.org/api/cmo/semanal?"));
        assert!(url.contains("deslocamento=0"));
    }

    #[test]
    fn test_frequency_paths() {
        assert_eq!(CostFrequency::Weekly.path(), "/cmo/semanal");
        assert_eq!(CostFrequency::HalfHourly.path(), "/cmo/semihorario");
    }

    #[test]
    fn test_error_for_status_maps_variants() {
        let api = SinApi::new().unwrap();

        let unauthorized = api.error_for_status(reqwest::StatusCode::UNAUTHORIZED, "");
        assert!(matches!(unauthorized, AppError::AuthError(_)));

        let missing = api.error_for_status(reqwest::StatusCode::NOT_FOUND, "{\"detail\":\"...\"}");
        assert!(matches!(missing, AppError::NotFound(_)));

        let server = api.error_for_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "");
        assert!(matches!(server, AppError::ApiError(_)));
    }

    #[test]
    fn test_half_hourly_page_url() {
        let api = SinApi::new().unwrap();
        let url = api.page_url(
            CostFrequency::HalfHourly.path(),
            &sample_query(),
            PageCursor::first(100),
        );

        assert!(url.contains("/cmo/semihorario?"));
        assert!(url.contains("limite=1000"));
    }
}
