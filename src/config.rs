/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the SIN data API
    pub const API_BASE_URL: &'static str = "http://localhost:8000";

    /// Identity provider tenant that hosts the login flow
    pub const AUTH_DOMAIN: &'static str = "sin-dashboard.us.auth0.com";

    /// SPA client id registered with the provider
    pub const AUTH_CLIENT_ID: &'static str = "hT5kq0BvXoDd1KkEJm4s2GfWYRqC8aUz";

    /// Audience every access token is scoped to
    pub const AUTH_AUDIENCE: &'static str = "https://sin-dashboard/api";

    /// Smallest page size the API accepts
    pub const MIN_LIMIT: u32 = 100;

    /// Page size preloaded into the filter forms
    pub const DEFAULT_LIMIT: u32 = 1000;
}
