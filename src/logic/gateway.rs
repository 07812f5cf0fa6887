// SPDX-License-Identifier: MIT

//! Ports to the external identity service and settings backend.
//!
//! The UI never talks to the network directly: commands executed on worker
//! threads call through these traits, so tests can substitute deterministic
//! doubles and production wiring stays in one place.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::models::profile::SectionPayload;
use crate::models::registration::RegistrationPayload;
use crate::models::session::Session;

/// Failure kinds surfaced by the gateways. Both are recoverable: the UI
/// shows a toast and keeps the user's input for retry.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The call never produced a usable response.
    #[error("network error: {0}")]
    Network(String),
    /// The service answered and said no.
    #[error("{0}")]
    Rejected(String),
}

/// Federated identity strategies offered as sign-up shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FederatedStrategy {
    Google,
    LinkedIn,
}

impl FederatedStrategy {
    /// Strategy identifier in the provider redirect URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            FederatedStrategy::Google => "google",
            FederatedStrategy::LinkedIn => "linkedin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FederatedStrategy::Google => "Google",
            FederatedStrategy::LinkedIn => "LinkedIn",
        }
    }
}

/// Registration and federated-login operations of the identity service.
pub trait IdentityGateway: Send + Sync {
    /// Submit a validated registration payload.
    fn register(&self, payload: &RegistrationPayload) -> Result<(), GatewayError>;

    /// Kick off the redirect handshake for `strategy`.
    fn start_federated(&self, strategy: FederatedStrategy) -> Result<(), GatewayError>;

    /// Complete a pending handshake. Called exactly once per callback mount.
    fn complete_handshake(&self) -> Result<Session, GatewayError>;
}

/// Persistence port for the settings editor.
pub trait SettingsStore: Send + Sync {
    fn save(&self, payload: &SectionPayload) -> Result<(), GatewayError>;
}

/// Error body shape the identity service uses for rejections.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// reqwest-backed identity gateway.
pub struct HttpIdentityGateway {
    client: Client,
    base: Url,
    callback_in_progress: Url,
    callback_completed: Url,
}

impl HttpIdentityGateway {
    pub fn new(base: Url, callback_in_progress: Url, callback_completed: Url) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base,
            callback_in_progress,
            callback_completed,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base
            .join(path)
            .map_err(|err| GatewayError::Network(err.to_string()))
    }

    /// Turn a non-success response into a `Rejected` with the service's own
    /// message when it sent one.
    fn rejection(response: reqwest::blocking::Response) -> GatewayError {
        let status = response.status();
        match response.json::<ErrorBody>() {
            Ok(body) => GatewayError::Rejected(body.message),
            Err(_) => GatewayError::Rejected(format!("request failed with status {status}")),
        }
    }
}

impl IdentityGateway for HttpIdentityGateway {
    fn register(&self, payload: &RegistrationPayload) -> Result<(), GatewayError> {
        let url = self.endpoint("auth/register")?;
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .map_err(|err| GatewayError::Network(err.to_string()))?;

        if response.status().is_success() {
            tracing::info!(email = %payload.email, "registration accepted");
            Ok(())
        } else {
            tracing::warn!(status = %response.status(), "registration rejected");
            Err(Self::rejection(response))
        }
    }

    fn start_federated(&self, strategy: FederatedStrategy) -> Result<(), GatewayError> {
        let mut url = self.endpoint(&format!("auth/federated/{}", strategy.as_str()))?;
        let state = Uuid::new_v4();
        url.query_pairs_mut()
            .append_pair("in_progress", self.callback_in_progress.as_str())
            .append_pair("completed", self.callback_completed.as_str())
            .append_pair("state", &state.to_string());

        tracing::info!(strategy = strategy.as_str(), "opening federated sign-in in browser");
        open::that(url.as_str()).map_err(|err| GatewayError::Network(err.to_string()))
    }

    fn complete_handshake(&self) -> Result<Session, GatewayError> {
        let url = self.endpoint("auth/federated/complete")?;
        let response = self
            .client
            .post(url)
            .send()
            .map_err(|err| GatewayError::Network(err.to_string()))?;

        if response.status().is_success() {
            response
                .json::<Session>()
                .map_err(|err| GatewayError::Network(err.to_string()))
        } else {
            tracing::warn!(status = %response.status(), "handshake completion rejected");
            Err(Self::rejection(response))
        }
    }
}

/// Default settings store. No backend contract exists for settings
/// persistence yet, so accepted payloads are only logged; real wiring
/// replaces this behind the same port.
#[derive(Default)]
pub struct InProcessSettingsStore;

impl SettingsStore for InProcessSettingsStore {
    fn save(&self, payload: &SectionPayload) -> Result<(), GatewayError> {
        let body = serde_json::to_string(payload)
            .map_err(|err| GatewayError::Rejected(err.to_string()))?;
        tracing::info!(section = payload.section().label(), %body, "settings section saved");
        Ok(())
    }
}
