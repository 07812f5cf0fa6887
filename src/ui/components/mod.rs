// SPDX-License-Identifier: MIT

//! Reusable egui components structured for MVU-style updates.

pub mod oauth_callback;
pub mod register;
pub mod settings;
pub mod tags;
pub mod toggle;

pub use toggle::toggle_switch;
