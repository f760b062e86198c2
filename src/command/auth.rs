// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identity provider login body.

use serde::Serialize;

/// Body of the identity provider's `verifyPassword` call.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPasswordRequest<'a> {
    /// Account email.
    pub email: &'a str,
    /// Account password.
    pub password: &'a str,
    /// Always true; asks the provider for an id token.
    pub return_secure_token: bool,
}

impl<'a> VerifyPasswordRequest<'a> {
    /// Creates a login body.
    #[must_use]
    pub fn new(email: &'a str, password: &'a str) -> Self {
        Self {
            email,
            password,
            return_secure_token: true,
        }
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for VerifyPasswordRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifyPasswordRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("return_secure_token", &self.return_secure_token)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let body = VerifyPasswordRequest::new("cook@example.com", "hunter2");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "cook@example.com",
                "password": "hunter2",
                "returnSecureToken": true
            })
        );
    }

    #[test]
    fn debug_hides_password() {
        let body = VerifyPasswordRequest::new("cook@example.com", "hunter2");
        assert!(!format!("{body:?}").contains("hunter2"));
    }
}
