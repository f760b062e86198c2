// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mirrored cooker state.

use crate::types::{JobMode, TemperatureUnit};

/// Local mirror of one cooker's remote state.
///
/// A value of this type is always built from a single device-state snapshot,
/// then optionally edited through the setters for the four writable fields.
/// The other ten fields only change when a new snapshot replaces the whole
/// value.
///
/// # Examples
///
/// ```
/// use anova_lib::state::CookerState;
///
/// let mut state = CookerState::new();
/// state.set_cook(true);
/// state.set_cook_time(5400);
/// state.set_target_temp(63.5);
/// state.set_temp_display_unit("C");
///
/// assert!(state.cook());
/// assert_eq!(state.cook_time(), 5400);
/// assert_eq!(state.temperature_unit(), Some(anova_lib::TemperatureUnit::Celsius));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookerState {
    // Writable
    pub(crate) cook_time: i64,
    pub(crate) cook: bool,
    pub(crate) target_temp: f64,
    pub(crate) temp_display_unit: String,

    // Job
    pub(crate) job_status: String,
    pub(crate) job_time_remaining: i64,

    // Duty cycle
    pub(crate) heater_duty_cycle: f64,
    pub(crate) motor_duty_cycle: f64,

    // WiFi
    pub(crate) wifi_connected: bool,
    pub(crate) wifi_ssid: String,

    // Safety
    pub(crate) device_safe: bool,
    pub(crate) water_leak: bool,
    pub(crate) water_level_critical: bool,
    pub(crate) water_level_low: bool,

    // Temperature
    pub(crate) heater_temp: f64,
    pub(crate) triac_temp: f64,
    pub(crate) water_temp: f64,
}

impl CookerState {
    /// Creates an empty state with zeroed fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Writable fields ==========

    /// Cook duration in seconds.
    #[must_use]
    pub fn cook_time(&self) -> i64 {
        self.cook_time
    }

    /// Sets the cook duration in seconds.
    ///
    /// Negative values are accepted here and rejected by
    /// [`Cooker::save`](crate::Cooker::save).
    pub fn set_cook_time(&mut self, seconds: i64) {
        self.cook_time = seconds;
    }

    /// Whether a cook job is active.
    #[must_use]
    pub fn cook(&self) -> bool {
        self.cook
    }

    /// Starts (`true`) or stops (`false`) cooking on the next save.
    pub fn set_cook(&mut self, cook: bool) {
        self.cook = cook;
    }

    /// Job mode corresponding to [`cook`](Self::cook).
    #[must_use]
    pub fn mode(&self) -> JobMode {
        JobMode::from(self.cook)
    }

    /// Target water temperature in the display unit.
    #[must_use]
    pub fn target_temp(&self) -> f64 {
        self.target_temp
    }

    /// Sets the target water temperature.
    pub fn set_target_temp(&mut self, temp: f64) {
        self.target_temp = temp;
    }

    /// Raw display unit as reported by the device or set locally.
    #[must_use]
    pub fn temp_display_unit(&self) -> &str {
        &self.temp_display_unit
    }

    /// Sets the raw display unit. It is validated on save.
    pub fn set_temp_display_unit(&mut self, unit: impl Into<String>) {
        self.temp_display_unit = unit.into();
    }

    /// Sets the display unit from a typed value.
    pub fn set_temperature_unit(&mut self, unit: TemperatureUnit) {
        self.temp_display_unit = unit.as_str().to_string();
    }

    /// Display unit, if it is one of the supported units.
    #[must_use]
    pub fn temperature_unit(&self) -> Option<TemperatureUnit> {
        self.temp_display_unit.parse().ok()
    }

    // ========== Read-only fields ==========

    /// Job state as reported by the device (for example `PREHEATING`).
    #[must_use]
    pub fn job_status(&self) -> &str {
        &self.job_status
    }

    /// Seconds left in the current job.
    #[must_use]
    pub fn job_time_remaining(&self) -> i64 {
        self.job_time_remaining
    }

    /// Heater duty cycle.
    #[must_use]
    pub fn heater_duty_cycle(&self) -> f64 {
        self.heater_duty_cycle
    }

    /// Circulation motor duty cycle.
    #[must_use]
    pub fn motor_duty_cycle(&self) -> f64 {
        self.motor_duty_cycle
    }

    /// Whether the cooker is connected to a WiFi access point.
    #[must_use]
    pub fn wifi_connected(&self) -> bool {
        self.wifi_connected
    }

    /// SSID of the WiFi network.
    #[must_use]
    pub fn wifi_ssid(&self) -> &str {
        &self.wifi_ssid
    }

    /// Device safety pin.
    #[must_use]
    pub fn device_safe(&self) -> bool {
        self.device_safe
    }

    /// Water leak pin.
    #[must_use]
    pub fn water_leak(&self) -> bool {
        self.water_leak
    }

    /// Critical water level pin.
    #[must_use]
    pub fn water_level_critical(&self) -> bool {
        self.water_level_critical
    }

    /// Low water level pin.
    #[must_use]
    pub fn water_level_low(&self) -> bool {
        self.water_level_low
    }

    /// Heater temperature.
    #[must_use]
    pub fn heater_temp(&self) -> f64 {
        self.heater_temp
    }

    /// Triac temperature.
    #[must_use]
    pub fn triac_temp(&self) -> f64 {
        self.triac_temp
    }

    /// Water bath temperature.
    #[must_use]
    pub fn water_temp(&self) -> f64 {
        self.water_temp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_zeroed() {
        let state = CookerState::new();
        assert_eq!(state.cook_time(), 0);
        assert!(!state.cook());
        assert_eq!(state.temp_display_unit(), "");
        assert_eq!(state.temperature_unit(), None);
        assert_eq!(state.mode(), JobMode::Idle);
    }

    #[test]
    fn writable_fields_round_trip() {
        let mut state = CookerState::new();
        state.set_cook_time(-1);
        state.set_cook(true);
        state.set_target_temp(135.0);
        state.set_temperature_unit(TemperatureUnit::Fahrenheit);

        assert_eq!(state.cook_time(), -1);
        assert_eq!(state.mode(), JobMode::Cook);
        assert!((state.target_temp() - 135.0).abs() < f64::EPSILON);
        assert_eq!(state.temp_display_unit(), "F");
    }

    #[test]
    fn unknown_unit_is_kept_raw() {
        let mut state = CookerState::new();
        state.set_temp_display_unit("K");
        assert_eq!(state.temp_display_unit(), "K");
        assert_eq!(state.temperature_unit(), None);
    }
}
