// SPDX-License-Identifier: MIT

//! Registration domain model: form state, roles, and field-addressed errors.

use std::collections::BTreeMap;

use serde::Serialize;

/// Account roles offered at sign-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Manufacturer,
    #[default]
    Brand,
    Retailer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Manufacturer, Role::Brand, Role::Retailer];

    /// Wire identifier expected by the identity service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manufacturer => "manufacturer",
            Role::Brand => "brand",
            Role::Retailer => "retailer",
        }
    }

    /// Human-facing label for the role picker.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Manufacturer => "Manufacturer",
            Role::Brand => "Brand",
            Role::Retailer => "Retailer",
        }
    }
}

/// Form fields addressable by validation messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// Field-level validation failures keyed by the offending field.
pub type FieldErrors = BTreeMap<Field, String>;

/// Current registration form state.
///
/// Created empty when the form mounts, mutated per keystroke/selection,
/// consumed once by a submit action, and replaced by a fresh instance after
/// a successful submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

/// Wire payload accepted by the identity service.
///
/// `company_name` is a placeholder the service schema expects; the portal
/// fills it in later from the brand profile.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RegistrationPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: &'static str,
    pub company_name: String,
}
