use crate::entity::strength::PasswordStrength;
use crate::utils::env::{get_env, get_env_parsed};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_SIGNUP_PATH: &str = "/public/tenants/signup";
pub const DEFAULT_LOGIN_PATH: &str = "/api/login";
pub const DEFAULT_MIN_PASSWORD_SCORE: u8 = 4;

/// Centralized configuration for the front-end forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL of the remote API, without a trailing slash
    pub api_base_url: String,
    /// Path of the tenant signup endpoint
    pub signup_path: String,
    /// Path of the login endpoint
    pub login_path: String,
    /// Minimum strength score a signup password must reach (0-5)
    pub min_password_score: u8,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_API_BASE_URL,
            DEFAULT_SIGNUP_PATH,
            DEFAULT_LOGIN_PATH,
            DEFAULT_MIN_PASSWORD_SCORE,
        )
    }
}

impl FrontendConfig {
    /// Create a new configuration with custom settings
    pub fn new(
        api_base_url: &str,
        signup_path: &str,
        login_path: &str,
        min_password_score: u8,
    ) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            signup_path: signup_path.to_string(),
            login_path: login_path.to_string(),
            min_password_score: min_password_score.min(PasswordStrength::MAX),
        }
    }

    /// Get configuration from environment variables
    pub fn from_env() -> Self {
        Self::new(
            &get_env("API_BASE_URL", DEFAULT_API_BASE_URL),
            &get_env("SIGNUP_PATH", DEFAULT_SIGNUP_PATH),
            &get_env("LOGIN_PATH", DEFAULT_LOGIN_PATH),
            get_env_parsed("MIN_PASSWORD_SCORE", DEFAULT_MIN_PASSWORD_SCORE),
        )
    }

    pub fn signup_url(&self) -> String {
        self.endpoint(&self.signup_path)
    }

    pub fn login_url(&self) -> String {
        self.endpoint(&self.login_path)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

/// Global configuration instance
pub fn get_config() -> &'static FrontendConfig {
    static CONFIG: once_cell::sync::Lazy<FrontendConfig> =
        once_cell::sync::Lazy::new(FrontendConfig::from_env);
    &CONFIG
}
