// SPDX-License-Identifier: MIT

//! Settings section payloads sent through the settings store port.
//!
//! Each section saves independently; a payload carries exactly one section's
//! data so saving one tab can never touch another tab's state.

use serde::Serialize;

/// Saveable settings sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    General,
    BrandProfile,
    Notifications,
    Security,
    Preferences,
}

impl Section {
    /// Human-facing name used in toasts and activity entries.
    pub fn label(&self) -> &'static str {
        match self {
            Section::General => "General settings",
            Section::BrandProfile => "Brand profile",
            Section::Notifications => "Notification settings",
            Section::Security => "Security settings",
            Section::Preferences => "Preferences",
        }
    }
}

/// Account basics shown on the general tab.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct GeneralSettings {
    pub display_name: String,
    pub email: String,
    pub phone: String,
}

/// Public brand profile including tag and category lists.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct BrandProfile {
    pub company_name: String,
    pub description: String,
    pub website: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
}

/// Opt-in notification channels.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct NotificationSettings {
    pub order_alerts: bool,
    pub partner_requests: bool,
    pub product_updates: bool,
    pub newsletter: bool,
}

/// Credential/2FA change. `new_password` may be empty when only the
/// two-factor toggle changed.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct SecurityChange {
    pub current_password: String,
    pub new_password: String,
    pub two_factor: bool,
}

/// Display and locale preferences.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Preferences {
    pub language: String,
    pub timezone: String,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            timezone: "UTC".to_string(),
            dark_mode: false,
        }
    }
}

/// One saved section, tagged for the store.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SectionPayload {
    General(GeneralSettings),
    BrandProfile(BrandProfile),
    Notifications(NotificationSettings),
    Security(SecurityChange),
    Preferences(Preferences),
}

impl SectionPayload {
    pub fn section(&self) -> Section {
        match self {
            SectionPayload::General(_) => Section::General,
            SectionPayload::BrandProfile(_) => Section::BrandProfile,
            SectionPayload::Notifications(_) => Section::Notifications,
            SectionPayload::Security(_) => Section::Security,
            SectionPayload::Preferences(_) => Section::Preferences,
        }
    }
}
