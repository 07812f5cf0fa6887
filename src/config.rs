// SPDX-License-Identifier: MIT

//! Application configuration resolved from build-time defaults and the
//! environment.

use anyhow::{Context, Result};
use url::Url;

/// Compile-time default for the API base, baked by the build pipeline.
const DEFAULT_API_URL: &str = match option_env!("PORTAL_API_URL") {
    Some(url) => url,
    None => "http://localhost:4000/api/",
};

/// Runtime configuration shared by the gateways.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: Url,
    /// Landing URL the provider redirects to while the handshake is pending.
    pub callback_in_progress: Url,
    /// Landing URL the provider redirects to once the handshake completed.
    pub callback_completed: Url,
}

impl AppConfig {
    /// Resolve configuration: `.env` file, then environment, then the baked
    /// default.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let raw = std::env::var("PORTAL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_base_url =
            parse_base(&raw).with_context(|| format!("invalid PORTAL_API_URL: {raw}"))?;

        let callback_in_progress = api_base_url
            .join("auth/callback/pending")
            .context("building in-progress callback URL")?;
        let callback_completed = api_base_url
            .join("auth/callback/done")
            .context("building completed callback URL")?;

        Ok(Self {
            api_base_url,
            callback_in_progress,
            callback_completed,
        })
    }
}

/// Parse a base URL, normalizing the trailing slash so relative joins keep
/// the full path.
fn parse_base(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Ok(Url::parse(&normalized)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_keeps_path_segment_on_join() {
        let base = parse_base("https://portal.example.com/api").unwrap();

        let joined = base.join("auth/register").unwrap();

        assert_eq!(joined.as_str(), "https://portal.example.com/api/auth/register");
    }
}
