// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for Anova API responses.
//!
//! - [`StateRecord`]: one device-state snapshot
//! - [`IdentityTokenResponse`]: identity provider login result
//! - [`SessionTokenResponse`]: Anova session token exchange result

mod auth;
mod coerce;
mod device_state;

pub use auth::{IdentityTokenResponse, SessionTokenResponse};
pub use device_state::StateRecord;
