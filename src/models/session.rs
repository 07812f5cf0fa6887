// SPDX-License-Identifier: MIT

//! Explicit session object handed to components after sign-in.

use serde::Deserialize;

/// Authenticated session returned by federated handshake completion.
///
/// Components that need the signed-in user receive this struct explicitly;
/// nothing reads an ambient "current user".
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub account_id: String,
    pub email: String,
    pub display_name: String,
    pub role: String,
}
