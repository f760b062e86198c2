// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mirrored cooker state.
//!
//! [`CookerState`] holds the fourteen fields read from a device-state
//! snapshot. Four of them (`cook_time`, `cook`, `target_temp`,
//! `temp_display_unit`) can be edited locally and pushed back with
//! [`Cooker::save`](crate::Cooker::save); the rest are read-only telemetry.

mod cooker_state;

pub use cooker_state::CookerState;
