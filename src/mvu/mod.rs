// SPDX-License-Identifier: MIT

//! Root Model-View-Update kernel wiring screens, messages, and commands.

use std::sync::Arc;

use crate::logic::gateway::{FederatedStrategy, IdentityGateway, SettingsStore};
use crate::models::profile::SectionPayload;
use crate::models::registration::RegistrationPayload;
use crate::models::session::Session;
use crate::ui::components::oauth_callback::{self, CallbackCommand, CallbackModel, CallbackMsg};
use crate::ui::components::register::{self, RegisterCommand, RegisterModel, RegisterMsg};
use crate::ui::components::settings::{self, SettingsCommand, SettingsModel, SettingsMsg};

/// Logical locations of the portal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    SignIn,
    SignUp,
    OauthCallback,
    VerifyEmail { email: String },
    Dashboard,
}

impl Screen {
    /// Deterministic route string for the screen, mirroring the hosted SPA.
    pub fn route(&self) -> String {
        match self {
            Screen::SignIn => "/login".to_string(),
            Screen::SignUp => "/register".to_string(),
            Screen::OauthCallback => "/oauth/callback".to_string(),
            Screen::VerifyEmail { email } => {
                let encoded: String =
                    url::form_urlencoded::byte_serialize(email.as_bytes()).collect();
                format!("/verify-email?email={encoded}")
            }
            Screen::Dashboard => "/dashboard".to_string(),
        }
    }
}

/// Browser-style history: a current location plus a back stack.
#[derive(Clone, Debug)]
pub struct Nav {
    current: Screen,
    back: Vec<Screen>,
}

impl Default for Nav {
    fn default() -> Self {
        Self {
            current: Screen::SignUp,
            back: Vec::new(),
        }
    }
}

impl Nav {
    pub fn current(&self) -> &Screen {
        &self.current
    }

    /// Push a new location, keeping the current one reachable via back.
    pub fn push(&mut self, screen: Screen) {
        let previous = std::mem::replace(&mut self.current, screen);
        self.back.push(previous);
    }

    /// Replace the current location; back never returns to it.
    pub fn replace(&mut self, screen: Screen) {
        self.current = screen;
    }

    /// Go back one entry when possible.
    pub fn back(&mut self) -> bool {
        match self.back.pop() {
            Some(screen) => {
                self.current = screen;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }
}

/// Transient user feedback shown in the status panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub is_error: bool,
}

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    pub nav: Nav,
    pub register: RegisterModel,
    pub callback: CallbackModel,
    pub settings: SettingsModel,
    /// Present once a federated sign-in completed; passed explicitly into
    /// the components that need it.
    pub session: Option<Session>,
    pub toast: Option<Toast>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
#[derive(Clone, Debug)]
pub enum Msg {
    Navigate(Screen),
    NavigateBack,
    Register(RegisterMsg),
    Callback(CallbackMsg),
    Settings(SettingsMsg),
    StartFederated(FederatedStrategy),
    FederatedStarted(Result<(), String>),
    DismissToast,
}

/// Commands represent side effects executed on worker threads.
#[derive(Clone, Debug)]
pub enum Command {
    SubmitRegistration(RegistrationPayload),
    StartFederated(FederatedStrategy),
    CompleteHandshake,
    SaveSection(SectionPayload),
}

/// Ports used during command execution. Production wiring is HTTP; tests
/// substitute deterministic doubles.
#[derive(Clone)]
pub struct Services {
    pub identity: Arc<dyn IdentityGateway>,
    pub settings: Arc<dyn SettingsStore>,
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Navigate(screen) => navigate(model, screen),
        Msg::NavigateBack => {
            model.nav.back();
        }
        Msg::DismissToast => model.toast = None,
        Msg::StartFederated(strategy) => cmds.push(Command::StartFederated(strategy)),
        Msg::FederatedStarted(result) => match result {
            Ok(()) => surface_toast(model, "Continue sign-in in your browser.".to_string(), false),
            Err(err) => surface_toast(
                model,
                format!("Could not start federated sign-in: {err}"),
                true,
            ),
        },
        Msg::Register(m) => {
            let registered_email = match &m {
                RegisterMsg::SubmitCompleted(Ok(email)) => Some(email.clone()),
                _ => None,
            };

            let mut reg_cmds = Vec::new();
            if let Some(event) = register::update(&mut model.register, m, &mut reg_cmds) {
                surface_toast(model, event.message, event.is_error);
            }
            for c in reg_cmds {
                match c {
                    RegisterCommand::Submit(payload) => {
                        cmds.push(Command::SubmitRegistration(payload))
                    }
                    RegisterCommand::StartFederated(strategy) => {
                        cmds.push(Command::StartFederated(strategy))
                    }
                }
            }

            // Successful registration routes to the verify-email location
            // that encodes the submitted address.
            if let Some(email) = registered_email {
                model.nav.push(Screen::VerifyEmail { email });
            }
        }
        Msg::Callback(m) => {
            let outcome = match &m {
                CallbackMsg::Completed(result) => Some(result.clone()),
                _ => None,
            };

            let mut cb_cmds = Vec::new();
            if let Some(event) = oauth_callback::update(&mut model.callback, m, &mut cb_cmds) {
                surface_toast(model, event.message, event.is_error);
            }
            for c in cb_cmds {
                match c {
                    CallbackCommand::Complete => cmds.push(Command::CompleteHandshake),
                }
            }

            // Route by outcome, replacing history so back never lands on
            // the callback screen again.
            if let Some(result) = outcome {
                match result {
                    Ok(session) => {
                        settings::adopt_session(&mut model.settings, &session);
                        model.session = Some(session);
                        model.nav.replace(Screen::Dashboard);
                    }
                    Err(_) => model.nav.replace(Screen::SignIn),
                }
            }
        }
        Msg::Settings(m) => {
            let mut set_cmds = Vec::new();
            if let Some(event) = settings::update(&mut model.settings, m, &mut set_cmds) {
                surface_toast(model, event.message, event.is_error);
            }
            for c in set_cmds {
                match c {
                    SettingsCommand::Save(payload) => cmds.push(Command::SaveSection(payload)),
                }
            }
        }
    }
}

/// Execute a command on a worker thread and report the outcome as a message.
pub fn run_command(cmd: Command, services: &Services) -> Msg {
    match cmd {
        Command::SubmitRegistration(payload) => {
            let email = payload.email.clone();
            let result = services
                .identity
                .register(&payload)
                .map(|()| email)
                .map_err(|err| err.to_string());
            Msg::Register(RegisterMsg::SubmitCompleted(result))
        }
        Command::StartFederated(strategy) => Msg::FederatedStarted(
            services
                .identity
                .start_federated(strategy)
                .map_err(|err| err.to_string()),
        ),
        Command::CompleteHandshake => Msg::Callback(CallbackMsg::Completed(
            services
                .identity
                .complete_handshake()
                .map_err(|err| err.to_string()),
        )),
        Command::SaveSection(payload) => {
            let section = payload.section();
            let result = services
                .settings
                .save(&payload)
                .map_err(|err| err.to_string());
            Msg::Settings(SettingsMsg::SectionSaved { section, result })
        }
    }
}

/// Route changes that also reset per-screen mount state.
fn navigate(model: &mut AppModel, screen: Screen) {
    if screen == Screen::OauthCallback {
        // A fresh mount gets a fresh exactly-once guard.
        model.callback = CallbackModel::default();
    }
    model.nav.push(screen);
}

/// Update the toast consistently for user feedback.
fn surface_toast(model: &mut AppModel, message: String, is_error: bool) {
    model.toast = Some(Toast { message, is_error });
}
