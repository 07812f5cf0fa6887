// SPDX-License-Identifier: MIT

//! Interstitial that completes a pending federated-login handshake exactly
//! once per mount. Navigation by outcome is handled by the root update.

use eframe::egui;

use crate::models::session::Session;

/// Lifecycle of the callback screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CallbackPhase {
    /// Mounted, completion not yet dispatched.
    #[default]
    Idle,
    /// Completion call in flight.
    Completing,
    /// Outcome received.
    Done,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackModel {
    pub phase: CallbackPhase,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackMsg {
    /// Emitted by the view on its first frame.
    Mounted,
    Completed(Result<Session, String>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackCommand {
    Complete,
}

/// Feedback surfaced to the toast channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackEvent {
    pub message: String,
    pub is_error: bool,
}

/// Apply a message. The phase guard makes the completion call single-shot;
/// there is no retry, a failed handshake restarts the login flow.
pub fn update(
    model: &mut CallbackModel,
    msg: CallbackMsg,
    cmds: &mut Vec<CallbackCommand>,
) -> Option<CallbackEvent> {
    match msg {
        CallbackMsg::Mounted => {
            if model.phase == CallbackPhase::Idle {
                model.phase = CallbackPhase::Completing;
                cmds.push(CallbackCommand::Complete);
            }
            None
        }
        CallbackMsg::Completed(result) => {
            model.phase = CallbackPhase::Done;
            match result {
                Ok(session) => Some(CallbackEvent {
                    message: format!("Signed in as {}.", session.display_name),
                    is_error: false,
                }),
                Err(err) => Some(CallbackEvent {
                    message: format!("Sign-in could not be completed: {err}"),
                    is_error: true,
                }),
            }
        }
    }
}

/// Render the interstitial; emits `Mounted` until the completion dispatches.
pub fn view(ui: &mut egui::Ui, model: &CallbackModel) -> Vec<CallbackMsg> {
    let mut msgs = Vec::new();

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.add(egui::Spinner::new().size(22.0));
        ui.add_space(8.0);
        ui.label("Completing sign-in…");
    });

    if model.phase == CallbackPhase::Idle {
        msgs.push(CallbackMsg::Mounted);
    }

    msgs
}
