//! Frontend configuration.
//!
//! The backend origin is the one piece of environment the client needs; it
//! can be baked in at build time via `STUDYPORTAL_API_URL`.

/// Frontend configuration for backend URLs.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Origin of the portal backend.
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("STUDYPORTAL_API_URL")
                .unwrap_or("http://localhost:5000")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the backend origin
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(config.api_base_url.starts_with("http"));
    }

    #[test]
    fn test_frontend_config_new() {
        let config = FrontendConfig::new();
        assert!(!config.api_base_url().is_empty());
    }
}
