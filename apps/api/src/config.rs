use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let raw = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    let value = normalize(&raw);
    if value.is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

/// Strips surrounding whitespace and wrapping double quotes from an env
/// value. Secrets pasted into deployment dashboards routinely arrive as
/// `"AIza..."` with the quotes included.
fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = trimmed.trim_start_matches('"').trim_end_matches('"');
    unquoted.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_wrapping_quotes() {
        assert_eq!(normalize("\"AIzaSyTest\""), "AIzaSyTest");
    }

    #[test]
    fn normalize_strips_whitespace() {
        assert_eq!(normalize("  postgres://localhost/db  "), "postgres://localhost/db");
    }

    #[test]
    fn normalize_strips_quotes_then_inner_whitespace() {
        assert_eq!(normalize("\" AIzaSyTest \""), "AIzaSyTest");
    }

    #[test]
    fn normalize_leaves_plain_values_alone() {
        assert_eq!(normalize("plain-value"), "plain-value");
    }

    #[test]
    fn normalize_collapses_quote_only_value_to_empty() {
        assert_eq!(normalize("\"\""), "");
    }
}
