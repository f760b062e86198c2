// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Anova library.
//!
//! Every operation on a [`Cooker`](crate::Cooker) reports failures through a
//! single [`Error`] enum. Each failure kind is its own variant so callers can
//! match on it, and variants carry whatever diagnostic data is available
//! (HTTP status, offending value, response body).

use std::fmt;

use thiserror::Error;

/// Maximum number of body bytes kept in [`Error::UnexpectedError`].
const BODY_SNIPPET_LEN: usize = 256;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The device-state service answered with a non-success status.
    #[error("error connecting to Anova: HTTP {status}")]
    ConnectionFailure {
        /// HTTP status code returned by the service.
        status: u16,
    },

    /// The device-state service returned no record for the device id.
    #[error("unknown device id: {device_id}")]
    UnknownDevice {
        /// The device id that was looked up.
        device_id: String,
    },

    /// The identity exchange did not yield the expected token.
    #[error("authentication failed at {stage}: {message}")]
    AuthenticationFailure {
        /// Which step of the exchange failed.
        stage: AuthStage,
        /// Description of the failure.
        message: String,
    },

    /// A write was attempted before a successful authentication.
    #[error("not authenticated: call authenticate(email, password) before save()")]
    NotAuthenticated,

    /// The display unit is not `C` or `F`.
    #[error("invalid temperature unit {0:?}: only F or C are supported")]
    InvalidTemperatureUnit(String),

    /// The cook time is negative.
    #[error("invalid cook time: {0} seconds")]
    InvalidCookTime(i64),

    /// The target temperature is not a finite number.
    #[error("invalid target temperature: {0}")]
    InvalidTargetTemperature(f64),

    /// The current-job endpoint rejected the job or did not echo it back.
    #[error("an unexpected error occurred (HTTP {status}): {body}")]
    UnexpectedError {
        /// HTTP status code of the response.
        status: u16,
        /// Leading part of the response body.
        body: String,
    },

    /// HTTP transport failed (DNS, TLS, timeout, connection reset).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response payload could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Builds an [`Error::UnexpectedError`], keeping only the start of the body.
    pub(crate) fn unexpected(status: u16, body: &str) -> Self {
        Self::UnexpectedError {
            status,
            body: snippet(body),
        }
    }

    /// Builds an [`Error::AuthenticationFailure`].
    pub(crate) fn auth(stage: AuthStage, message: impl Into<String>) -> Self {
        Self::AuthenticationFailure {
            stage,
            message: message.into(),
        }
    }
}

/// Step of the two-step authentication exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthStage {
    /// Email/password verification against the identity provider.
    IdentityProvider,
    /// Exchange of the identity token for an Anova session token.
    DeviceService,
}

impl fmt::Display for AuthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdentityProvider => f.write_str("identity provider"),
            Self::DeviceService => f.write_str("device service"),
        }
    }
}

/// Errors related to decoding Anova responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// A field could not be coerced to its expected type.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// Path of the field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

fn snippet(body: &str) -> String {
    if body.len() <= BODY_SNIPPET_LEN {
        return body.to_string();
    }
    let mut end = BODY_SNIPPET_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
