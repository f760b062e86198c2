// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-state snapshot parsing.

use serde::Deserialize;
use serde_json::Value;

use super::coerce;
use crate::error::ParseError;
use crate::state::CookerState;

/// Connection status reported when the cooker is joined to an access point.
const CONNECTED_STATION: &str = "connected-station";

/// One element of the `GET /devices/{id}/states/` array.
///
/// # Examples
///
/// ```
/// use anova_lib::response::StateRecord;
///
/// let json = r#"{"body": {
///     "job": {"cook-time-seconds": 3600, "mode": "COOK", "target-temperature": 60, "temperature-unit": "C"},
///     "job-status": {"state": "COOKING", "cook-time-remaining": 1800},
///     "heater-control": {"duty-cycle": 0.4},
///     "motor-control": {"duty-cycle": 1},
///     "network-info": {"connection-status": "connected-station", "ssid": "kitchen"},
///     "pin-info": {"device-safe": 1, "water-leak": 0, "water-level-critical": 0, "water-level-low": 0},
///     "temperature-info": {"heater-temperature": 61.2, "triac-temperature": 40.1, "water-temperature": 59.8}
/// }}"#;
///
/// let record: StateRecord = serde_json::from_str(json).unwrap();
/// let state = record.to_state().unwrap();
/// assert!(state.cook());
/// assert_eq!(state.cook_time(), 3600);
/// assert!(state.wifi_connected());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct StateRecord {
    /// Raw state body.
    pub body: Value,
}

impl StateRecord {
    /// Decodes the body into a [`CookerState`].
    ///
    /// Either every field decodes or none is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingField`] if a path is absent and
    /// [`ParseError::InvalidValue`] if a value cannot be coerced.
    pub fn to_state(&self) -> Result<CookerState, ParseError> {
        let b = &self.body;
        Ok(CookerState {
            cook_time: coerce::int(b, &["job", "cook-time-seconds"])?,
            cook: coerce::string(b, &["job", "mode"])? != "IDLE",
            target_temp: coerce::float(b, &["job", "target-temperature"])?,
            temp_display_unit: coerce::string(b, &["job", "temperature-unit"])?,

            job_status: coerce::string(b, &["job-status", "state"])?,
            job_time_remaining: coerce::int(b, &["job-status", "cook-time-remaining"])?,

            heater_duty_cycle: coerce::float(b, &["heater-control", "duty-cycle"])?,
            motor_duty_cycle: coerce::float(b, &["motor-control", "duty-cycle"])?,

            wifi_connected: coerce::string(b, &["network-info", "connection-status"])?
                == CONNECTED_STATION,
            wifi_ssid: coerce::string(b, &["network-info", "ssid"])?,

            device_safe: coerce::boolean(b, &["pin-info", "device-safe"])?,
            water_leak: coerce::boolean(b, &["pin-info", "water-leak"])?,
            water_level_critical: coerce::boolean(b, &["pin-info", "water-level-critical"])?,
            water_level_low: coerce::boolean(b, &["pin-info", "water-level-low"])?,

            heater_temp: coerce::float(b, &["temperature-info", "heater-temperature"])?,
            triac_temp: coerce::float(b, &["temperature-info", "triac-temperature"])?,
            water_temp: coerce::float(b, &["temperature-info", "water-temperature"])?,
        })
    }
}
