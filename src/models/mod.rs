// SPDX-License-Identifier: MIT

//! Domain layer: pure data types shared between UI, validation, and gateways.

pub mod activity;
pub mod profile;
pub mod registration;
pub mod session;
