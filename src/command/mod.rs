// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound request bodies sent to the Anova API.
//!
//! | Request | Endpoint |
//! |---------|----------|
//! | [`JobRequest`] | `PUT /devices/{id}/current-job` |
//! | [`VerifyPasswordRequest`] | identity provider `verifyPassword` |

mod auth;
mod job;

pub use auth::VerifyPasswordRequest;
pub use job::JobRequest;
