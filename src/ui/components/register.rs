// SPDX-License-Identifier: MIT

//! Registration form component: local form state, inline field errors, and
//! an at-most-one-in-flight submission guarded by the busy flag.

use eframe::egui;

use crate::logic::gateway::FederatedStrategy;
use crate::logic::validate;
use crate::models::registration::{Field, FieldErrors, RegistrationInput, RegistrationPayload, Role};

/// UI model for the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterModel {
    pub input: RegistrationInput,
    pub errors: FieldErrors,
    /// True while a submission is in flight; the trigger stays disabled.
    pub busy: bool,
}

/// Messages emitted by the registration view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterMsg {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmChanged(String),
    RoleSelected(Role),
    SubmitRequested,
    /// Outcome of the submission; carries the registered email on success.
    SubmitCompleted(Result<String, String>),
    FederatedRequested(FederatedStrategy),
}

/// Side effects requested by the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterCommand {
    Submit(RegistrationPayload),
    StartFederated(FederatedStrategy),
}

/// Feedback surfaced to the toast channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterEvent {
    pub message: String,
    pub is_error: bool,
}

/// Apply a message to the model. Returns a feedback event when relevant.
pub fn update(
    model: &mut RegisterModel,
    msg: RegisterMsg,
    cmds: &mut Vec<RegisterCommand>,
) -> Option<RegisterEvent> {
    match msg {
        RegisterMsg::NameChanged(text) => {
            model.input.name = text;
            revalidate(model);
            None
        }
        RegisterMsg::EmailChanged(text) => {
            model.input.email = text;
            revalidate(model);
            None
        }
        RegisterMsg::PasswordChanged(text) => {
            model.input.password = text;
            revalidate(model);
            None
        }
        RegisterMsg::ConfirmChanged(text) => {
            model.input.confirm_password = text;
            revalidate(model);
            None
        }
        RegisterMsg::RoleSelected(role) => {
            model.input.role = role;
            None
        }
        RegisterMsg::SubmitRequested => {
            // The disabled trigger already prevents this while busy; the
            // guard keeps at-most-one-in-flight even without the UI.
            if model.busy {
                return None;
            }
            match validate::validate(&model.input) {
                Ok(payload) => {
                    model.errors.clear();
                    model.busy = true;
                    cmds.push(RegisterCommand::Submit(payload));
                    None
                }
                Err(errors) => {
                    model.errors = errors;
                    None
                }
            }
        }
        RegisterMsg::SubmitCompleted(result) => {
            // Cleared on both paths, never a stuck spinner.
            model.busy = false;
            match result {
                Ok(email) => {
                    model.input = RegistrationInput::default();
                    model.errors.clear();
                    Some(RegisterEvent {
                        message: format!("Account created. Check {email} to confirm."),
                        is_error: false,
                    })
                }
                Err(err) => Some(RegisterEvent {
                    message: format!("Registration failed: {err}"),
                    is_error: true,
                }),
            }
        }
        RegisterMsg::FederatedRequested(strategy) => {
            // Bypasses the validation engine and leaves the form untouched.
            cmds.push(RegisterCommand::StartFederated(strategy));
            None
        }
    }
}

/// Re-run validation so inline messages track the current input. Until the
/// first failed submit the map is empty and nothing gets flagged mid-typing.
fn revalidate(model: &mut RegisterModel) {
    if model.errors.is_empty() {
        return;
    }
    model.errors = validate::validate(&model.input).err().unwrap_or_default();
}

/// Render the form; returns messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &RegisterModel) -> Vec<RegisterMsg> {
    let mut msgs = Vec::new();

    ui.heading("Create your account");
    ui.add_space(8.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        text_field(
            ui,
            "Full name",
            "e.g., Jane Doe",
            &model.input.name,
            false,
            model.errors.get(&Field::Name),
            &mut msgs,
            RegisterMsg::NameChanged,
        );
        text_field(
            ui,
            "Email",
            "you@company.com",
            &model.input.email,
            false,
            model.errors.get(&Field::Email),
            &mut msgs,
            RegisterMsg::EmailChanged,
        );
        text_field(
            ui,
            "Password",
            "At least 8 characters",
            &model.input.password,
            true,
            model.errors.get(&Field::Password),
            &mut msgs,
            RegisterMsg::PasswordChanged,
        );
        text_field(
            ui,
            "Confirm password",
            "Repeat your password",
            &model.input.confirm_password,
            true,
            model.errors.get(&Field::ConfirmPassword),
            &mut msgs,
            RegisterMsg::ConfirmChanged,
        );

        ui.label("I am a");
        ui.add_space(4.0);
        render_role_picker(ui, model.input.role, &mut msgs);
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            let submit = egui::Button::new(format!(
                "{} Create account",
                egui_phosphor::regular::USER_PLUS
            ));
            if ui
                .add_enabled(!model.busy, submit)
                .on_disabled_hover_text("Submitting…")
                .clicked()
            {
                msgs.push(RegisterMsg::SubmitRequested);
            }
            if model.busy {
                ui.add(egui::Spinner::new().size(14.0));
            }
        });
    });

    ui.add_space(10.0);
    ui.label(
        egui::RichText::new("or continue with")
            .small()
            .color(egui::Color32::from_gray(110)),
    );
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        for (icon, strategy) in [
            (egui_phosphor::regular::GOOGLE_LOGO, FederatedStrategy::Google),
            (egui_phosphor::regular::LINKEDIN_LOGO, FederatedStrategy::LinkedIn),
        ] {
            if ui.button(format!("{icon} {}", strategy.label())).clicked() {
                msgs.push(RegisterMsg::FederatedRequested(strategy));
            }
        }
    });

    msgs
}

/// Render three segmented buttons for the account role.
fn render_role_picker(ui: &mut egui::Ui, current: Role, msgs: &mut Vec<RegisterMsg>) {
    ui.horizontal(|ui| {
        for role in Role::ALL {
            let button = egui::Button::new(role.label()).selected(role == current);
            if ui.add(button).clicked() && role != current {
                msgs.push(RegisterMsg::RoleSelected(role));
            }
        }
    });
}

/// Labeled single-line input with an optional inline error underneath.
#[allow(clippy::too_many_arguments)]
fn text_field(
    ui: &mut egui::Ui,
    label: &str,
    hint: &str,
    value: &str,
    mask: bool,
    error: Option<&String>,
    msgs: &mut Vec<RegisterMsg>,
    wrap: fn(String) -> RegisterMsg,
) {
    ui.label(label);
    let mut buffer = value.to_string();
    let edit = egui::TextEdit::singleline(&mut buffer)
        .hint_text(hint)
        .password(mask)
        .desired_width(f32::INFINITY);
    if ui.add(edit).changed() {
        msgs.push(wrap(buffer));
    }
    if let Some(message) = error {
        ui.label(
            egui::RichText::new(message)
                .small()
                .color(ui.visuals().error_fg_color),
        );
    }
    ui.add_space(6.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_model() -> RegisterModel {
        RegisterModel {
            input: RegistrationInput {
                name: "Jane Doe".into(),
                email: "jane@x.com".into(),
                password: "abcd1234".into(),
                confirm_password: "abcd1234".into(),
                role: Role::Brand,
            },
            ..Default::default()
        }
    }

    #[test]
    fn submit_sets_busy_and_enqueues_payload() {
        let mut model = valid_model();
        let mut cmds = Vec::new();

        let event = update(&mut model, RegisterMsg::SubmitRequested, &mut cmds);

        assert!(event.is_none());
        assert!(model.busy);
        assert_eq!(cmds.len(), 1);
        match &cmds[0] {
            RegisterCommand::Submit(payload) => assert_eq!(payload.email, "jane@x.com"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn second_submit_while_busy_is_ignored() {
        let mut model = valid_model();
        let mut cmds = Vec::new();

        update(&mut model, RegisterMsg::SubmitRequested, &mut cmds);
        update(&mut model, RegisterMsg::SubmitRequested, &mut cmds);

        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn invalid_input_sets_errors_and_no_command() {
        let mut model = valid_model();
        model.input.name = "J".into();
        let mut cmds = Vec::new();

        update(&mut model, RegisterMsg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert!(!model.busy);
        assert!(model.errors.contains_key(&Field::Name));
    }

    #[test]
    fn errors_update_as_the_user_types() {
        let mut model = valid_model();
        model.input.name = "J".into();
        let mut cmds = Vec::new();
        update(&mut model, RegisterMsg::SubmitRequested, &mut cmds);
        assert!(model.errors.contains_key(&Field::Name));

        update(&mut model, RegisterMsg::NameChanged("Jane".into()), &mut cmds);

        assert!(model.errors.is_empty());
    }

    #[test]
    fn success_clears_busy_and_resets_form() {
        let mut model = valid_model();
        let mut cmds = Vec::new();
        update(&mut model, RegisterMsg::SubmitRequested, &mut cmds);

        let event = update(
            &mut model,
            RegisterMsg::SubmitCompleted(Ok("jane@x.com".into())),
            &mut cmds,
        )
        .expect("event expected");

        assert!(!model.busy);
        assert!(!event.is_error);
        assert_eq!(model.input, RegistrationInput::default());
    }

    #[test]
    fn failure_clears_busy_and_preserves_input() {
        let mut model = valid_model();
        let mut cmds = Vec::new();
        update(&mut model, RegisterMsg::SubmitRequested, &mut cmds);

        let event = update(
            &mut model,
            RegisterMsg::SubmitCompleted(Err("email already in use".into())),
            &mut cmds,
        )
        .expect("event expected");

        assert!(!model.busy);
        assert!(event.is_error);
        assert_eq!(model.input.email, "jane@x.com");
        assert_eq!(model.input.password, "abcd1234");
    }

    #[test]
    fn federated_request_leaves_form_untouched() {
        let mut model = valid_model();
        model.input.name = "J".into(); // would fail validation
        let before = model.clone();
        let mut cmds = Vec::new();

        let event = update(
            &mut model,
            RegisterMsg::FederatedRequested(FederatedStrategy::Google),
            &mut cmds,
        );

        assert!(event.is_none());
        assert_eq!(model, before);
        assert_eq!(
            cmds,
            vec![RegisterCommand::StartFederated(FederatedStrategy::Google)]
        );
    }
}
