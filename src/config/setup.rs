//! Interactive setup wizard for first-time configuration
//!
//! This module handles the prompts for creating an initial configuration
//! when selectr is run for the first time.

use super::{DEFAULT_API_URL, SelectrConfig};
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};

/// Interactive first-time setup - prompts for server URL and token
///
/// 1. Prompts for the API root URL (default: local server)
/// 2. Prompts for an authentication token (may be left empty)
/// 3. Saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or if saving the
/// configuration fails.
pub fn first_time_setup() -> Result<SelectrConfig, ConfigError> {
    println!("Welcome to selectr! Let's connect to a resource server.\n");

    let api_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("API URL")
        .default(DEFAULT_API_URL.to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let token: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Authentication token (leave empty for anonymous access)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = config_from_answers(api_url, token);
    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

/// Build the configuration from the wizard answers; an empty token means none
fn config_from_answers(api_url: String, token: String) -> SelectrConfig {
    SelectrConfig {
        api_url,
        token: Some(token).filter(|t| !t.is_empty()),
        ..SelectrConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_answer_means_anonymous() {
        let config = config_from_answers(DEFAULT_API_URL.to_string(), String::new());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.token.is_none());
        assert_eq!(config.page_limit, super::super::DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_token_answer_is_stored() {
        let config = config_from_answers("https://data.example.org/api/v1".into(), "abc".into());
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.api_url, "https://data.example.org/api/v1");
    }
}
