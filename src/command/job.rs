// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Current-job request body.

use serde::Serialize;

use crate::types::{JobId, JobMode, TemperatureUnit};

/// Body of `PUT /devices/{id}/current-job`.
///
/// Field order matches the wire schema. The service echoes the accepted job
/// back verbatim.
///
/// # Examples
///
/// ```
/// use anova_lib::command::JobRequest;
/// use anova_lib::types::{JobMode, TemperatureUnit};
///
/// let job = JobRequest::new(3600, JobMode::Cook, 57.5, TemperatureUnit::Celsius);
/// let json = serde_json::to_value(&job).unwrap();
///
/// assert_eq!(json["mode"], "COOK");
/// assert_eq!(json["cook-time-seconds"], 3600);
/// assert_eq!(json["ota-url"], "");
/// assert_eq!(json["id"].as_str().unwrap().len(), 22);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct JobRequest {
    /// Cook duration in seconds.
    pub cook_time_seconds: i64,
    /// Fresh id for this job.
    pub id: JobId,
    /// Job mode.
    pub mode: JobMode,
    /// Firmware update URL; always empty.
    pub ota_url: String,
    /// Target water temperature.
    pub target_temperature: f64,
    /// Unit of `target_temperature`.
    pub temperature_unit: TemperatureUnit,
}

impl JobRequest {
    /// Creates a job request with a newly generated [`JobId`].
    #[must_use]
    pub fn new(
        cook_time_seconds: i64,
        mode: JobMode,
        target_temperature: f64,
        temperature_unit: TemperatureUnit,
    ) -> Self {
        Self {
            cook_time_seconds,
            id: JobId::random(),
            mode,
            ota_url: String::new(),
            target_temperature,
            temperature_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_full_wire_shape() {
        let job = JobRequest::new(90, JobMode::Idle, 140.0, TemperatureUnit::Fahrenheit);
        let json = serde_json::to_value(&job).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "cook-time-seconds",
                "id",
                "mode",
                "ota-url",
                "target-temperature",
                "temperature-unit"
            ]
        );
        assert_eq!(obj["mode"], "IDLE");
        assert_eq!(obj["temperature-unit"], "F");
        assert_eq!(obj["target-temperature"], 140.0);
        assert_eq!(obj["id"], job.id.as_str());
    }

    #[test]
    fn each_request_gets_new_id() {
        let a = JobRequest::new(1, JobMode::Cook, 60.0, TemperatureUnit::Celsius);
        let b = JobRequest::new(1, JobMode::Cook, 60.0, TemperatureUnit::Celsius);
        assert_ne!(a.id, b.id);
    }
}
