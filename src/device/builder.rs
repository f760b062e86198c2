// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cooker builder.

use crate::device::Cooker;
use crate::error::Error;
use crate::protocol::ApiConfig;
use crate::state::CookerState;

/// Builder for creating a [`Cooker`].
///
/// Created with [`Cooker::builder`]. Starts from [`ApiConfig::from_env`], so
/// `ANOVA_API_KEY`, `ANOVA_SERVICE_URL` and `ANOVA_IDENTITY_URL` apply unless
/// [`with_config`](Self::with_config) replaces the configuration.
///
/// # Examples
///
/// ```no_run
/// use anova_lib::Cooker;
/// use anova_lib::protocol::ApiConfig;
/// use std::time::Duration;
///
/// # async fn example() -> anova_lib::Result<()> {
/// // Default endpoints, initial state fetched immediately
/// let cooker = Cooker::builder("anova-device-id").build().await?;
///
/// // Custom configuration, no network access until update_state()
/// let mut cooker = Cooker::builder("anova-device-id")
///     .with_config(ApiConfig::from_env().with_timeout(Duration::from_secs(5)))
///     .build_without_sync()?;
/// cooker.update_state().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CookerBuilder {
    device_id: String,
    config: ApiConfig,
}

impl CookerBuilder {
    pub(crate) fn new(device_id: String) -> Self {
        Self {
            device_id,
            config: ApiConfig::from_env(),
        }
    }

    /// Sets the API configuration.
    #[must_use]
    pub fn with_config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the device id.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Builds the cooker and fetches its initial state.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created or the initial
    /// [`update_state`](Cooker::update_state) fails.
    pub async fn build(self) -> Result<Cooker, Error> {
        let mut cooker = self.build_without_sync()?;
        cooker.update_state().await?;
        Ok(cooker)
    }

    /// Builds the cooker without contacting the service.
    ///
    /// The state holds [`CookerState::default`] values until the first
    /// [`update_state`](Cooker::update_state).
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build_without_sync(self) -> Result<Cooker, Error> {
        let client = self.config.into_client()?;
        Ok(Cooker {
            device_id: self.device_id,
            client,
            token: None,
            state: CookerState::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_sync_has_default_state() {
        let cooker = Cooker::builder("dev-1").build_without_sync().unwrap();
        assert_eq!(cooker.device_id(), "dev-1");
        assert!(!cooker.is_authenticated());
        assert_eq!(cooker.state(), &CookerState::default());
    }

    #[test]
    fn default_config_reads_environment() {
        let expected = ApiConfig::from_env();
        let builder = Cooker::builder("dev-1");
        assert_eq!(builder.config.api_key(), expected.api_key());
        assert_eq!(builder.config.service_url(), expected.service_url());
        assert_eq!(builder.config.identity_url(), expected.identity_url());
    }

    #[test]
    fn with_config_is_used() {
        let cooker = Cooker::builder("dev-1")
            .with_config(ApiConfig::new().with_service_url("http://localhost:1"))
            .build_without_sync()
            .unwrap();
        assert_eq!(cooker.config().service_url(), "http://localhost:1");
    }
}
