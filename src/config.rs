use std::env;

use crate::naver::NaverCredentials;

/// Fallback value shipped in `.env.example`. Credentials left at this value
/// count as unconfigured.
pub const PLACEHOLDER_CREDENTIAL: &str = "replace-me";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// `None` when either credential is missing, empty, or still the
    /// placeholder. Lookup is disabled with a visible warning in that case,
    /// never a startup failure.
    pub naver: Option<NaverCredentials>,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://shelfscan.db?mode=rwc".to_string());

        let naver = match (
            read_credential("NAVER_CLIENT_ID"),
            read_credential("NAVER_CLIENT_SECRET"),
        ) {
            (Some(client_id), Some(client_secret)) => Some(NaverCredentials {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        Self {
            database_url,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            naver,
        }
    }
}

fn read_credential(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != PLACEHOLDER_CREDENTIAL)
}
