// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Anova cooker control.
//!
//! # Types
//!
//! - [`TemperatureUnit`] - `C` or `F` display unit
//! - [`JobMode`] - `COOK` or `IDLE`, the wire form of the cook flag
//! - [`JobId`] - 22-character random job identifier

mod job_id;
mod mode;
mod temperature_unit;

pub use job_id::JobId;
pub use mode::JobMode;
pub use temperature_unit::TemperatureUnit;
