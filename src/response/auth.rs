// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Token responses from the authentication exchange.

use serde::Deserialize;

/// Response of the identity provider's `verifyPassword` call.
///
/// Only the id token is used; the provider sends more fields.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityTokenResponse {
    /// Identity token, absent on failure.
    #[serde(default)]
    pub id_token: Option<String>,
}

impl IdentityTokenResponse {
    /// Returns the id token if present and non-empty.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.id_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Response of the Anova `/authenticate` call.
#[derive(Clone, Default, Deserialize)]
pub struct SessionTokenResponse {
    /// Session JWT, absent on failure.
    #[serde(default)]
    pub jwt: Option<String>,
}

impl SessionTokenResponse {
    /// Returns the session token if present and non-empty.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.jwt.as_deref().filter(|t| !t.is_empty())
    }
}

// Tokens are bearer secrets: keep them out of Debug output.
impl std::fmt::Debug for IdentityTokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityTokenResponse")
            .field("id_token", &self.id_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl std::fmt::Debug for SessionTokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenResponse")
            .field("jwt", &self.jwt.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
