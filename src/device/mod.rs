// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for one Anova cooker.
//!
//! A [`Cooker`] mirrors the remote state of a single device. Reading is
//! unauthenticated; writing requires a session obtained with
//! [`Cooker::authenticate`].
//!
//! ```no_run
//! use anova_lib::Cooker;
//!
//! # async fn example() -> anova_lib::Result<()> {
//! let mut cooker = Cooker::connect("anova-device-id").await?;
//! println!("water at {}°{}", cooker.water_temp(), cooker.temp_display_unit());
//!
//! cooker.authenticate("cook@example.com", "password").await?;
//! cooker.set_target_temp(57.0);
//! cooker.set_cook_time(2 * 60 * 60);
//! cooker.set_cook(true);
//! cooker.save().await?;
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::CookerBuilder;

use secrecy::SecretString;

use crate::command::JobRequest;
use crate::error::Error;
use crate::protocol::{ApiClient, ApiConfig};
use crate::state::CookerState;
use crate::types::{JobMode, TemperatureUnit};

/// Client for one Anova cooker.
///
/// Holds the device id, the optional session token, and the last fetched
/// [`CookerState`]. Operations that touch the network take `&mut self` or
/// `&self` and return once every request they issue has completed.
#[derive(Debug)]
pub struct Cooker {
    device_id: String,
    client: ApiClient,
    token: Option<SecretString>,
    state: CookerState,
}

impl Cooker {
    /// Returns a builder for the given device id.
    #[must_use]
    pub fn builder(device_id: impl Into<String>) -> CookerBuilder {
        CookerBuilder::new(device_id.into())
    }

    /// Creates a cooker with [`ApiConfig::from_env`] and fetches its state.
    ///
    /// # Errors
    ///
    /// Returns error if the initial state fetch fails.
    pub async fn connect(device_id: impl Into<String>) -> Result<Self, Error> {
        Self::builder(device_id).build().await
    }

    /// Returns the device id.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Returns the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        self.client.config()
    }

    /// Returns true once [`authenticate`](Self::authenticate) has succeeded.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Returns the mirrored state.
    #[must_use]
    pub fn state(&self) -> &CookerState {
        &self.state
    }

    /// Fetches the latest snapshot and replaces the whole mirrored state.
    ///
    /// The snapshot is decoded completely before it is stored, so on error
    /// the previous state is left untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::ConnectionFailure`] if the service answers with an error status
    /// - [`Error::UnknownDevice`] if the service has no record for this id
    /// - [`Error::Parse`] if the record is malformed
    pub async fn update_state(&mut self) -> Result<(), Error> {
        let record = self.client.fetch_state(&self.device_id).await?;
        let state = record.to_state()?;

        tracing::debug!(
            device_id = %self.device_id,
            job_status = %state.job_status(),
            water_temp = state.water_temp(),
            "Device state updated"
        );

        self.state = state;
        Ok(())
    }

    /// Exchanges account credentials for a session token and keeps it.
    ///
    /// The token lives in memory only, for the lifetime of this value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthenticationFailure`] if either step of the
    /// exchange yields no token. A previously stored token is kept.
    pub async fn authenticate(&mut self, email: &str, password: &str) -> Result<(), Error> {
        let id_token = self.client.verify_password(email, password).await?;
        let token = self.client.exchange_token(&id_token).await?;

        tracing::debug!(device_id = %self.device_id, "Authenticated with Anova");

        self.token = Some(token);
        Ok(())
    }

    /// Validates the writable fields and pushes them as a new job.
    ///
    /// Every save creates a new job with a fresh id, replacing whatever the
    /// cooker is running.
    ///
    /// # Errors
    ///
    /// Checked in order, before any request is sent:
    /// - [`Error::NotAuthenticated`] without a session token
    /// - [`Error::InvalidTemperatureUnit`] if the unit is not `C` or `F`
    /// - [`Error::InvalidCookTime`] if the cook time is negative
    /// - [`Error::InvalidTargetTemperature`] if the target is not finite
    ///
    /// Then [`Error::UnexpectedError`] if the service rejects the job or does
    /// not echo it back.
    pub async fn save(&self) -> Result<(), Error> {
        let token = self.token.as_ref().ok_or(Error::NotAuthenticated)?;
        let job = self.job_request().inspect_err(|e| {
            tracing::warn!(device_id = %self.device_id, error = %e, "Refusing to save job");
        })?;

        self.client
            .put_current_job(&self.device_id, token, &job)
            .await
    }

    fn job_request(&self) -> Result<JobRequest, Error> {
        let unit: TemperatureUnit = self.state.temp_display_unit.parse()?;

        let cook_time = self.state.cook_time;
        if cook_time < 0 {
            return Err(Error::InvalidCookTime(cook_time));
        }

        let target = self.state.target_temp;
        if !target.is_finite() {
            return Err(Error::InvalidTargetTemperature(target));
        }

        Ok(JobRequest::new(
            cook_time,
            JobMode::from(self.state.cook),
            target,
            unit,
        ))
    }

    // ========== Writable fields ==========

    /// Cook duration in seconds.
    #[must_use]
    pub fn cook_time(&self) -> i64 {
        self.state.cook_time()
    }

    /// Sets the cook duration in seconds.
    pub fn set_cook_time(&mut self, seconds: i64) {
        self.state.set_cook_time(seconds);
    }

    /// Whether a cook job is active.
    #[must_use]
    pub fn cook(&self) -> bool {
        self.state.cook()
    }

    /// Starts (`true`) or stops (`false`) cooking on the next save.
    pub fn set_cook(&mut self, cook: bool) {
        self.state.set_cook(cook);
    }

    /// Target water temperature.
    #[must_use]
    pub fn target_temp(&self) -> f64 {
        self.state.target_temp()
    }

    /// Sets the target water temperature.
    pub fn set_target_temp(&mut self, temp: f64) {
        self.state.set_target_temp(temp);
    }

    /// Raw display unit.
    #[must_use]
    pub fn temp_display_unit(&self) -> &str {
        self.state.temp_display_unit()
    }

    /// Sets the raw display unit. Only `C` and `F` pass [`save`](Self::save).
    pub fn set_temp_display_unit(&mut self, unit: impl Into<String>) {
        self.state.set_temp_display_unit(unit);
    }

    /// Sets the display unit from a typed value.
    pub fn set_temperature_unit(&mut self, unit: TemperatureUnit) {
        self.state.set_temperature_unit(unit);
    }

    // ========== Read-only fields ==========

    /// Job state reported by the device.
    #[must_use]
    pub fn job_status(&self) -> &str {
        self.state.job_status()
    }

    /// Seconds left in the current job.
    #[must_use]
    pub fn job_time_remaining(&self) -> i64 {
        self.state.job_time_remaining()
    }

    /// Heater duty cycle.
    #[must_use]
    pub fn heater_duty_cycle(&self) -> f64 {
        self.state.heater_duty_cycle()
    }

    /// Motor duty cycle.
    #[must_use]
    pub fn motor_duty_cycle(&self) -> f64 {
        self.state.motor_duty_cycle()
    }

    /// Whether the cooker is on WiFi.
    #[must_use]
    pub fn wifi_connected(&self) -> bool {
        self.state.wifi_connected()
    }

    /// WiFi SSID.
    #[must_use]
    pub fn wifi_ssid(&self) -> &str {
        self.state.wifi_ssid()
    }

    /// Device safety pin.
    #[must_use]
    pub fn device_safe(&self) -> bool {
        self.state.device_safe()
    }

    /// Water leak pin.
    #[must_use]
    pub fn water_leak(&self) -> bool {
        self.state.water_leak()
    }

    /// Critical water level pin.
    #[must_use]
    pub fn water_level_critical(&self) -> bool {
        self.state.water_level_critical()
    }

    /// Low water level pin.
    #[must_use]
    pub fn water_level_low(&self) -> bool {
        self.state.water_level_low()
    }

    /// Heater temperature.
    #[must_use]
    pub fn heater_temp(&self) -> f64 {
        self.state.heater_temp()
    }

    /// Triac temperature.
    #[must_use]
    pub fn triac_temp(&self) -> f64 {
        self.state.triac_temp()
    }

    /// Water temperature.
    #[must_use]
    pub fn water_temp(&self) -> f64 {
        self.state.water_temp()
    }
}
