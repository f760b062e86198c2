// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for the Anova cloud API.
//!
//! - [`ApiConfig`]: service endpoints, identity provider key, timeout
//! - [`ApiClient`]: one method per remote call (state fetch, password
//!   verification, token exchange, current-job replacement)

mod http;

pub use http::{ApiClient, ApiConfig};
