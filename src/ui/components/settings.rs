// SPDX-License-Identifier: MIT

//! Tabbed settings editor over the account and brand profile.
//!
//! Every tab owns its state and its own save action: saving one section
//! never validates or submits another section's fields, and saves on
//! different sections may be in flight at the same time.

use eframe::egui;

use crate::models::activity::ActivityLog;
use crate::models::profile::{
    BrandProfile, GeneralSettings, NotificationSettings, Preferences, Section, SectionPayload,
    SecurityChange,
};
use crate::models::session::Session;
use crate::ui::components::tags::{self, TagListModel, TagListMsg};
use crate::ui::components::toggle_switch;

/// Tabs of the settings page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    General,
    BrandProfile,
    Notifications,
    Security,
    Preferences,
    Activity,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 6] = [
        SettingsTab::General,
        SettingsTab::BrandProfile,
        SettingsTab::Notifications,
        SettingsTab::Security,
        SettingsTab::Preferences,
        SettingsTab::Activity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::BrandProfile => "Brand profile",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Security => "Security",
            SettingsTab::Preferences => "Preferences",
            SettingsTab::Activity => "Activity",
        }
    }
}

/// General tab state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneralModel {
    pub display_name: String,
    pub email: String,
    pub phone: String,
    pub busy: bool,
}

/// Brand profile tab state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrandModel {
    pub company_name: String,
    pub description: String,
    pub website: String,
    pub tags: TagListModel,
    pub categories: TagListModel,
    pub busy: bool,
}

/// Notifications tab state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsModel {
    pub order_alerts: bool,
    pub partner_requests: bool,
    pub product_updates: bool,
    pub newsletter: bool,
    pub busy: bool,
}

/// Security tab state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SecurityModel {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub two_factor: bool,
    pub busy: bool,
}

/// Preferences tab state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferencesModel {
    pub language: String,
    pub timezone: String,
    pub dark_mode: bool,
    pub busy: bool,
}

impl Default for PreferencesModel {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            timezone: "UTC".to_string(),
            dark_mode: false,
            busy: false,
        }
    }
}

/// Whole settings page state.
#[derive(Clone, Debug, Default)]
pub struct SettingsModel {
    pub tab: SettingsTab,
    pub general: GeneralModel,
    pub brand: BrandModel,
    pub notifications: NotificationsModel,
    pub security: SecurityModel,
    pub preferences: PreferencesModel,
    pub activity: ActivityLog,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeneralMsg {
    DisplayNameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrandMsg {
    CompanyChanged(String),
    DescriptionChanged(String),
    WebsiteChanged(String),
    Tags(TagListMsg),
    Categories(TagListMsg),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotificationsMsg {
    OrderAlerts(bool),
    PartnerRequests(bool),
    ProductUpdates(bool),
    Newsletter(bool),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SecurityMsg {
    CurrentChanged(String),
    NewChanged(String),
    ConfirmChanged(String),
    TwoFactor(bool),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreferencesMsg {
    LanguageChanged(String),
    TimezoneChanged(String),
    DarkMode(bool),
}

/// Messages routed through the settings page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsMsg {
    TabSelected(SettingsTab),
    General(GeneralMsg),
    Brand(BrandMsg),
    Notifications(NotificationsMsg),
    Security(SecurityMsg),
    Preferences(PreferencesMsg),
    SaveRequested(Section),
    SectionSaved {
        section: Section,
        result: Result<(), String>,
    },
}

/// Side effects requested by the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsCommand {
    Save(SectionPayload),
}

/// Feedback surfaced to the toast channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsEvent {
    pub message: String,
    pub is_error: bool,
}

/// Seed the editor from the signed-in session. The session object is
/// injected explicitly; nothing here reads ambient state.
pub fn adopt_session(model: &mut SettingsModel, session: &Session) {
    model.general.display_name = session.display_name.clone();
    model.general.email = session.email.clone();
}

/// Apply a message to the model. Returns a feedback event when relevant.
pub fn update(
    model: &mut SettingsModel,
    msg: SettingsMsg,
    cmds: &mut Vec<SettingsCommand>,
) -> Option<SettingsEvent> {
    match msg {
        SettingsMsg::TabSelected(tab) => {
            model.tab = tab;
            None
        }
        SettingsMsg::General(m) => {
            match m {
                GeneralMsg::DisplayNameChanged(text) => model.general.display_name = text,
                GeneralMsg::EmailChanged(text) => model.general.email = text,
                GeneralMsg::PhoneChanged(text) => model.general.phone = text,
            }
            None
        }
        SettingsMsg::Brand(m) => {
            match m {
                BrandMsg::CompanyChanged(text) => model.brand.company_name = text,
                BrandMsg::DescriptionChanged(text) => model.brand.description = text,
                BrandMsg::WebsiteChanged(text) => model.brand.website = text,
                BrandMsg::Tags(tag_msg) => tags::update(&mut model.brand.tags, tag_msg),
                BrandMsg::Categories(tag_msg) => tags::update(&mut model.brand.categories, tag_msg),
            }
            None
        }
        SettingsMsg::Notifications(m) => {
            match m {
                NotificationsMsg::OrderAlerts(on) => model.notifications.order_alerts = on,
                NotificationsMsg::PartnerRequests(on) => model.notifications.partner_requests = on,
                NotificationsMsg::ProductUpdates(on) => model.notifications.product_updates = on,
                NotificationsMsg::Newsletter(on) => model.notifications.newsletter = on,
            }
            None
        }
        SettingsMsg::Security(m) => {
            match m {
                SecurityMsg::CurrentChanged(text) => model.security.current_password = text,
                SecurityMsg::NewChanged(text) => model.security.new_password = text,
                SecurityMsg::ConfirmChanged(text) => model.security.confirm_password = text,
                SecurityMsg::TwoFactor(on) => model.security.two_factor = on,
            }
            None
        }
        SettingsMsg::Preferences(m) => {
            match m {
                PreferencesMsg::LanguageChanged(text) => model.preferences.language = text,
                PreferencesMsg::TimezoneChanged(text) => model.preferences.timezone = text,
                PreferencesMsg::DarkMode(on) => model.preferences.dark_mode = on,
            }
            None
        }
        SettingsMsg::SaveRequested(section) => request_save(model, section, cmds),
        SettingsMsg::SectionSaved { section, result } => section_saved(model, section, result),
    }
}

/// Build the payload for `section` and dispatch the save, unless the section
/// is already in flight or fails its local precheck.
fn request_save(
    model: &mut SettingsModel,
    section: Section,
    cmds: &mut Vec<SettingsCommand>,
) -> Option<SettingsEvent> {
    if *busy_flag(model, section) {
        return None;
    }

    let payload = match section {
        Section::General => SectionPayload::General(GeneralSettings {
            display_name: model.general.display_name.trim().to_string(),
            email: model.general.email.trim().to_string(),
            phone: model.general.phone.trim().to_string(),
        }),
        Section::BrandProfile => SectionPayload::BrandProfile(BrandProfile {
            company_name: model.brand.company_name.trim().to_string(),
            description: model.brand.description.trim().to_string(),
            website: model.brand.website.trim().to_string(),
            tags: model.brand.tags.items().to_vec(),
            categories: model.brand.categories.items().to_vec(),
        }),
        Section::Notifications => SectionPayload::Notifications(NotificationSettings {
            order_alerts: model.notifications.order_alerts,
            partner_requests: model.notifications.partner_requests,
            product_updates: model.notifications.product_updates,
            newsletter: model.notifications.newsletter,
        }),
        Section::Security => {
            let security = &model.security;
            // Abort before any persistence call when the new password and
            // its confirmation disagree.
            if !security.new_password.is_empty()
                && security.new_password != security.confirm_password
            {
                return Some(SettingsEvent {
                    message: "New password and confirmation do not match.".to_string(),
                    is_error: true,
                });
            }
            SectionPayload::Security(SecurityChange {
                current_password: security.current_password.clone(),
                new_password: security.new_password.clone(),
                two_factor: security.two_factor,
            })
        }
        Section::Preferences => SectionPayload::Preferences(Preferences {
            language: model.preferences.language.trim().to_string(),
            timezone: model.preferences.timezone.trim().to_string(),
            dark_mode: model.preferences.dark_mode,
        }),
    };

    *busy_flag(model, section) = true;
    cmds.push(SettingsCommand::Save(payload));
    None
}

/// Clear the section's busy flag and record the outcome.
fn section_saved(
    model: &mut SettingsModel,
    section: Section,
    result: Result<(), String>,
) -> Option<SettingsEvent> {
    // Restored on both paths, never a stuck spinner.
    *busy_flag(model, section) = false;

    match result {
        Ok(()) => {
            if section == Section::Security {
                model.security.current_password.clear();
                model.security.new_password.clear();
                model.security.confirm_password.clear();
            }
            model.activity.record(format!("{} updated", section.label()));
            Some(SettingsEvent {
                message: format!("{} saved.", section.label()),
                is_error: false,
            })
        }
        Err(err) => {
            model
                .activity
                .record(format!("{} save failed", section.label()));
            Some(SettingsEvent {
                message: format!("Could not save {}: {err}", section.label()),
                is_error: true,
            })
        }
    }
}

fn busy_flag(model: &mut SettingsModel, section: Section) -> &mut bool {
    match section {
        Section::General => &mut model.general.busy,
        Section::BrandProfile => &mut model.brand.busy,
        Section::Notifications => &mut model.notifications.busy,
        Section::Security => &mut model.security.busy,
        Section::Preferences => &mut model.preferences.busy,
    }
}

/// Render the settings page; returns messages triggered by the user.
pub fn view(ui: &mut egui::Ui, model: &SettingsModel, session: Option<&Session>) -> Vec<SettingsMsg> {
    let mut msgs = Vec::new();

    ui.heading("Settings");
    if let Some(session) = session {
        ui.label(
            egui::RichText::new(format!("Signed in as {} ({})", session.email, session.role))
                .small()
                .color(egui::Color32::from_gray(110)),
        );
    }
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        for tab in SettingsTab::ALL {
            let button = egui::Button::new(tab.label()).selected(tab == model.tab);
            if ui.add(button).clicked() && tab != model.tab {
                msgs.push(SettingsMsg::TabSelected(tab));
            }
        }
    });
    ui.add_space(10.0);

    match model.tab {
        SettingsTab::General => render_general(ui, &model.general, &mut msgs),
        SettingsTab::BrandProfile => render_brand(ui, &model.brand, &mut msgs),
        SettingsTab::Notifications => render_notifications(ui, &model.notifications, &mut msgs),
        SettingsTab::Security => render_security(ui, &model.security, &mut msgs),
        SettingsTab::Preferences => render_preferences(ui, &model.preferences, &mut msgs),
        SettingsTab::Activity => render_activity(ui, &model.activity),
    }

    msgs
}

fn render_general(ui: &mut egui::Ui, model: &GeneralModel, msgs: &mut Vec<SettingsMsg>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        text_row(ui, "Display name", &model.display_name, false, msgs, |s| {
            SettingsMsg::General(GeneralMsg::DisplayNameChanged(s))
        });
        text_row(ui, "Email", &model.email, false, msgs, |s| {
            SettingsMsg::General(GeneralMsg::EmailChanged(s))
        });
        text_row(ui, "Phone", &model.phone, false, msgs, |s| {
            SettingsMsg::General(GeneralMsg::PhoneChanged(s))
        });

        save_row(ui, model.busy, Section::General, msgs);
    });
}

fn render_brand(ui: &mut egui::Ui, model: &BrandModel, msgs: &mut Vec<SettingsMsg>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        text_row(ui, "Company name", &model.company_name, false, msgs, |s| {
            SettingsMsg::Brand(BrandMsg::CompanyChanged(s))
        });

        ui.label("Description");
        let mut description = model.description.clone();
        if ui
            .add(
                egui::TextEdit::multiline(&mut description)
                    .desired_width(f32::INFINITY)
                    .desired_rows(4),
            )
            .changed()
        {
            msgs.push(SettingsMsg::Brand(BrandMsg::DescriptionChanged(description)));
        }
        ui.add_space(6.0);

        text_row(ui, "Website", &model.website, false, msgs, |s| {
            SettingsMsg::Brand(BrandMsg::WebsiteChanged(s))
        });

        let tag_msgs = tags::view(ui, "brand_tags", "Tags", "e.g., Organic", &model.tags);
        msgs.extend(
            tag_msgs
                .into_iter()
                .map(|m| SettingsMsg::Brand(BrandMsg::Tags(m))),
        );
        ui.add_space(6.0);

        let cat_msgs = tags::view(
            ui,
            "brand_categories",
            "Categories",
            "e.g., Beverages",
            &model.categories,
        );
        msgs.extend(
            cat_msgs
                .into_iter()
                .map(|m| SettingsMsg::Brand(BrandMsg::Categories(m))),
        );

        save_row(ui, model.busy, Section::BrandProfile, msgs);
    });
}

fn render_notifications(ui: &mut egui::Ui, model: &NotificationsModel, msgs: &mut Vec<SettingsMsg>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        toggle_row(ui, "Order alerts", model.order_alerts, msgs, |on| {
            SettingsMsg::Notifications(NotificationsMsg::OrderAlerts(on))
        });
        toggle_row(ui, "Partner requests", model.partner_requests, msgs, |on| {
            SettingsMsg::Notifications(NotificationsMsg::PartnerRequests(on))
        });
        toggle_row(ui, "Product updates", model.product_updates, msgs, |on| {
            SettingsMsg::Notifications(NotificationsMsg::ProductUpdates(on))
        });
        toggle_row(ui, "Newsletter", model.newsletter, msgs, |on| {
            SettingsMsg::Notifications(NotificationsMsg::Newsletter(on))
        });

        save_row(ui, model.busy, Section::Notifications, msgs);
    });
}

fn render_security(ui: &mut egui::Ui, model: &SecurityModel, msgs: &mut Vec<SettingsMsg>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        text_row(ui, "Current password", &model.current_password, true, msgs, |s| {
            SettingsMsg::Security(SecurityMsg::CurrentChanged(s))
        });
        text_row(ui, "New password", &model.new_password, true, msgs, |s| {
            SettingsMsg::Security(SecurityMsg::NewChanged(s))
        });
        text_row(ui, "Confirm new password", &model.confirm_password, true, msgs, |s| {
            SettingsMsg::Security(SecurityMsg::ConfirmChanged(s))
        });

        toggle_row(ui, "Two-factor authentication", model.two_factor, msgs, |on| {
            SettingsMsg::Security(SecurityMsg::TwoFactor(on))
        });

        save_row(ui, model.busy, Section::Security, msgs);
    });
}

fn render_preferences(ui: &mut egui::Ui, model: &PreferencesModel, msgs: &mut Vec<SettingsMsg>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        text_row(ui, "Language", &model.language, false, msgs, |s| {
            SettingsMsg::Preferences(PreferencesMsg::LanguageChanged(s))
        });
        text_row(ui, "Time zone", &model.timezone, false, msgs, |s| {
            SettingsMsg::Preferences(PreferencesMsg::TimezoneChanged(s))
        });
        toggle_row(ui, "Dark mode", model.dark_mode, msgs, |on| {
            SettingsMsg::Preferences(PreferencesMsg::DarkMode(on))
        });

        save_row(ui, model.busy, Section::Preferences, msgs);
    });
}

fn render_activity(ui: &mut egui::Ui, log: &ActivityLog) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        if log.entries().is_empty() {
            ui.label(
                egui::RichText::new("No activity yet.")
                    .italics()
                    .color(egui::Color32::from_gray(110)),
            );
            return;
        }

        for entry in log.entries() {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(entry.timestamp())
                        .small()
                        .color(egui::Color32::from_gray(110)),
                );
                ui.label(&entry.message);
            });
        }
    });
}

/// Labeled single-line input row.
fn text_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &str,
    mask: bool,
    msgs: &mut Vec<SettingsMsg>,
    wrap: fn(String) -> SettingsMsg,
) {
    ui.label(label);
    let mut buffer = value.to_string();
    if ui
        .add(
            egui::TextEdit::singleline(&mut buffer)
                .password(mask)
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        msgs.push(wrap(buffer));
    }
    ui.add_space(6.0);
}

/// Toggle switch with a trailing label.
fn toggle_row(
    ui: &mut egui::Ui,
    label: &str,
    value: bool,
    msgs: &mut Vec<SettingsMsg>,
    wrap: fn(bool) -> SettingsMsg,
) {
    ui.horizontal(|ui| {
        let mut on = value;
        if toggle_switch(ui, &mut on).changed() {
            msgs.push(wrap(on));
        }
        ui.label(label);
    });
    ui.add_space(4.0);
}

/// Save button with busy spinner; the trigger disables while in flight.
fn save_row(ui: &mut egui::Ui, busy: bool, section: Section, msgs: &mut Vec<SettingsMsg>) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let button = egui::Button::new(format!(
            "{} Save changes",
            egui_phosphor::regular::FLOPPY_DISK
        ));
        if ui
            .add_enabled(!busy, button)
            .on_disabled_hover_text("Saving…")
            .clicked()
        {
            msgs.push(SettingsMsg::SaveRequested(section));
        }
        if busy {
            ui.add(egui::Spinner::new().size(14.0));
        }
    });
}

#[cfg(test)]
mod tests {
    #![allow(clippy::field_reassign_with_default)]

    use super::*;

    #[test]
    fn save_general_sets_busy_and_builds_payload() {
        let mut model = SettingsModel::default();
        model.general.display_name = "  Jane Doe ".into();
        model.general.email = "jane@x.com".into();
        let mut cmds = Vec::new();

        let event = update(&mut model, SettingsMsg::SaveRequested(Section::General), &mut cmds);

        assert!(event.is_none());
        assert!(model.general.busy);
        match &cmds[..] {
            [SettingsCommand::Save(SectionPayload::General(settings))] => {
                assert_eq!(settings.display_name, "Jane Doe");
                assert_eq!(settings.email, "jane@x.com");
            }
            other => panic!("unexpected commands: {other:?}"),
        }
    }

    #[test]
    fn saving_one_section_never_touches_another() {
        let mut model = SettingsModel::default();
        model.brand.company_name = "Acme".into();
        model.security.new_password = "x".into(); // would fail security precheck
        let mut cmds = Vec::new();

        update(
            &mut model,
            SettingsMsg::SaveRequested(Section::BrandProfile),
            &mut cmds,
        );

        // The brand save went out even though the security tab holds an
        // inconsistent draft; only the brand flag is busy.
        assert_eq!(cmds.len(), 1);
        assert!(model.brand.busy);
        assert!(!model.security.busy);
        assert_eq!(model.security.new_password, "x");
    }

    #[test]
    fn concurrent_saves_across_sections_are_permitted() {
        let mut model = SettingsModel::default();
        let mut cmds = Vec::new();

        update(&mut model, SettingsMsg::SaveRequested(Section::General), &mut cmds);
        update(
            &mut model,
            SettingsMsg::SaveRequested(Section::Preferences),
            &mut cmds,
        );

        assert_eq!(cmds.len(), 2);
        assert!(model.general.busy);
        assert!(model.preferences.busy);

        // Completing one leaves the other in flight.
        update(
            &mut model,
            SettingsMsg::SectionSaved {
                section: Section::General,
                result: Ok(()),
            },
            &mut cmds,
        );
        assert!(!model.general.busy);
        assert!(model.preferences.busy);
    }

    #[test]
    fn repeated_save_while_busy_is_ignored() {
        let mut model = SettingsModel::default();
        let mut cmds = Vec::new();

        update(&mut model, SettingsMsg::SaveRequested(Section::General), &mut cmds);
        update(&mut model, SettingsMsg::SaveRequested(Section::General), &mut cmds);

        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn security_mismatch_aborts_before_persistence() {
        let mut model = SettingsModel::default();
        model.security.new_password = "x".into();
        model.security.confirm_password = "y".into();
        model.security.two_factor = true;
        let mut cmds = Vec::new();

        let event = update(&mut model, SettingsMsg::SaveRequested(Section::Security), &mut cmds)
            .expect("event expected");

        assert!(event.is_error);
        assert!(cmds.is_empty(), "mismatch must never reach the store");
        assert!(!model.security.busy);
        // Prior security settings untouched.
        assert!(model.security.two_factor);
        assert_eq!(model.security.new_password, "x");
    }

    #[test]
    fn security_save_without_new_password_is_allowed() {
        let mut model = SettingsModel::default();
        model.security.two_factor = true;
        let mut cmds = Vec::new();

        update(&mut model, SettingsMsg::SaveRequested(Section::Security), &mut cmds);

        match &cmds[..] {
            [SettingsCommand::Save(SectionPayload::Security(change))] => {
                assert!(change.new_password.is_empty());
                assert!(change.two_factor);
            }
            other => panic!("unexpected commands: {other:?}"),
        }
    }

    #[test]
    fn successful_security_save_clears_password_fields() {
        let mut model = SettingsModel::default();
        model.security.current_password = "old-secret".into();
        model.security.new_password = "new-secret".into();
        model.security.confirm_password = "new-secret".into();
        let mut cmds = Vec::new();
        update(&mut model, SettingsMsg::SaveRequested(Section::Security), &mut cmds);

        update(
            &mut model,
            SettingsMsg::SectionSaved {
                section: Section::Security,
                result: Ok(()),
            },
            &mut cmds,
        );

        assert!(model.security.current_password.is_empty());
        assert!(model.security.new_password.is_empty());
        assert!(model.security.confirm_password.is_empty());
    }

    #[test]
    fn completion_records_activity_most_recent_first() {
        let mut model = SettingsModel::default();
        let mut cmds = Vec::new();
        update(&mut model, SettingsMsg::SaveRequested(Section::General), &mut cmds);
        update(
            &mut model,
            SettingsMsg::SectionSaved {
                section: Section::General,
                result: Ok(()),
            },
            &mut cmds,
        );
        update(
            &mut model,
            SettingsMsg::SaveRequested(Section::Preferences),
            &mut cmds,
        );
        update(
            &mut model,
            SettingsMsg::SectionSaved {
                section: Section::Preferences,
                result: Ok(()),
            },
            &mut cmds,
        );

        let messages: Vec<_> = model
            .activity
            .entries()
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(messages, vec!["Preferences updated", "General settings updated"]);
    }

    #[test]
    fn failed_save_clears_busy_and_reports_error() {
        let mut model = SettingsModel::default();
        let mut cmds = Vec::new();
        update(&mut model, SettingsMsg::SaveRequested(Section::General), &mut cmds);

        let event = update(
            &mut model,
            SettingsMsg::SectionSaved {
                section: Section::General,
                result: Err("backend unavailable".into()),
            },
            &mut cmds,
        )
        .expect("event expected");

        assert!(!model.general.busy);
        assert!(event.is_error);
        assert!(event.message.contains("backend unavailable"));
    }

    #[test]
    fn adopt_session_seeds_general_tab() {
        let mut model = SettingsModel::default();
        let session = Session {
            account_id: "acc-1".into(),
            email: "jane@x.com".into(),
            display_name: "Jane Doe".into(),
            role: "brand".into(),
        };

        adopt_session(&mut model, &session);

        assert_eq!(model.general.display_name, "Jane Doe");
        assert_eq!(model.general.email, "jane@x.com");
    }
}
