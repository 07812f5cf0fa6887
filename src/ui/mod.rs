// SPDX-License-Identifier: MIT

//! Top-level egui application shell for the portal.
//! Handles the worker pool, message inbox, layout, and screen routing.

pub mod components;

use std::sync::Arc;

use eframe::egui;

use crate::config::AppConfig;
use crate::logic::gateway::{FederatedStrategy, HttpIdentityGateway, InProcessSettingsStore};
use crate::mvu::{self, AppModel, Command, Msg, Screen, Services};
use crate::ui::components::{oauth_callback, register, settings};

/// Stateful egui application for the portal.
pub struct PortalApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl PortalApp {
    /// Wire the production services and spawn the command workers.
    pub fn new(config: &AppConfig) -> Self {
        let services = Services {
            identity: Arc::new(HttpIdentityGateway::new(
                config.api_base_url.clone(),
                config.callback_in_progress.clone(),
                config.callback_completed.clone(),
            )),
            settings: Arc::new(InProcessSettingsStore),
        };
        Self::with_services(services)
    }

    /// Spawn the worker pool around an explicit set of service ports.
    pub fn with_services(services: Services) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().clamp(2, 4))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let services = services.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd, &services);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
        self.inbox = msgs;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Brand Portal");
                ui.label(
                    egui::RichText::new(self.model.nav.current().route())
                        .small()
                        .color(egui::Color32::from_gray(110)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    ui.separator();
                    let back = egui::Button::new(format!(
                        "{} Back",
                        egui_phosphor::regular::ARROW_LEFT
                    ));
                    if ui
                        .add_enabled(self.model.nav.can_go_back(), back)
                        .clicked()
                    {
                        self.inbox.push(Msg::NavigateBack);
                    }
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| {
                let screen = self.model.nav.current().clone();
                match screen {
                    Screen::SignUp => self.render_sign_up(ui),
                    Screen::SignIn => self.render_sign_in(ui),
                    Screen::OauthCallback => self.render_callback(ui),
                    Screen::VerifyEmail { email } => self.render_verify_email(ui, &email),
                    Screen::Dashboard => self.render_dashboard(ui),
                }
                ui.add_space(8.0);
            });
        });
    }
}

impl PortalApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_sign_up(&mut self, ui: &mut egui::Ui) {
        let reg_msgs = register::view(ui, &self.model.register);
        self.inbox.extend(reg_msgs.into_iter().map(Msg::Register));

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.label("Already have an account?");
            if ui.link("Sign in").clicked() {
                self.inbox.push(Msg::Navigate(Screen::SignIn));
            }
        });
    }

    fn render_sign_in(&mut self, ui: &mut egui::Ui) {
        ui.heading("Sign in");
        ui.add_space(8.0);
        ui.label("Use a federated account to continue.");
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            for (icon, strategy) in [
                (egui_phosphor::regular::GOOGLE_LOGO, FederatedStrategy::Google),
                (egui_phosphor::regular::LINKEDIN_LOGO, FederatedStrategy::LinkedIn),
            ] {
                if ui.button(format!("{icon} {}", strategy.label())).clicked() {
                    self.inbox.push(Msg::StartFederated(strategy));
                }
            }
        });

        ui.add_space(8.0);
        if ui
            .button(format!(
                "{} I finished signing in with the browser",
                egui_phosphor::regular::SIGN_IN
            ))
            .clicked()
        {
            self.inbox.push(Msg::Navigate(Screen::OauthCallback));
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.label("New here?");
            if ui.link("Create an account").clicked() {
                self.inbox.push(Msg::Navigate(Screen::SignUp));
            }
        });
    }

    fn render_callback(&mut self, ui: &mut egui::Ui) {
        let cb_msgs = oauth_callback::view(ui, &self.model.callback);
        self.inbox.extend(cb_msgs.into_iter().map(Msg::Callback));
    }

    fn render_verify_email(&mut self, ui: &mut egui::Ui, email: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.heading("Confirm your email");
            ui.add_space(8.0);
            ui.label(format!("We sent a confirmation link to {email}."));
            ui.add_space(12.0);
            if ui.button("Back to sign in").clicked() {
                self.inbox.push(Msg::Navigate(Screen::SignIn));
            }
        });
    }

    fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let set_msgs = settings::view(ui, &self.model.settings, self.model.session.as_ref());
        self.inbox.extend(set_msgs.into_iter().map(Msg::Settings));
    }

    /// Render the toast and pending-command spinner when present.
    fn render_status(&mut self, ui: &mut egui::Ui) {
        let Some(toast) = self.model.toast.clone() else {
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0));
            }
            return;
        };

        ui.horizontal(|ui| {
            let color = if toast.is_error {
                ui.visuals().error_fg_color
            } else {
                egui::Color32::from_gray(68)
            };
            ui.label(egui::RichText::new(&toast.message).color(color));
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                    "{} task(s) running in background",
                    self.model.pending_commands
                ));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui::RichText::new(egui_phosphor::regular::X).small())
                    .on_hover_text("Dismiss")
                    .clicked()
                {
                    self.inbox.push(Msg::DismissToast);
                }
            });
        });
    }
}
