// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Anova Lib - A Rust library for Anova WiFi sous-vide cookers.
//!
//! This library mirrors the state of a cooker from the Anova cloud API and
//! pushes new cook jobs back to it.
//!
//! # Supported Features
//!
//! - **State sync**: target and water temperatures, job status, time
//!   remaining, duty cycles, WiFi and safety pins
//! - **Authentication**: email/password login exchanged for a session token
//! - **Cook control**: set temperature, unit, duration, start or stop a job
//!
//! # Quick Start
//!
//! ## Reading state
//!
//! State is public telemetry and needs no login:
//!
//! ```no_run
//! use anova_lib::Cooker;
//!
//! #[tokio::main]
//! async fn main() -> anova_lib::Result<()> {
//!     let mut cooker = Cooker::connect("anova-device-id").await?;
//!     println!("{} - water {}", cooker.job_status(), cooker.water_temp());
//!
//!     // Later
//!     cooker.update_state().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Starting a cook
//!
//! ```no_run
//! use anova_lib::{Cooker, TemperatureUnit};
//!
//! #[tokio::main]
//! async fn main() -> anova_lib::Result<()> {
//!     let mut cooker = Cooker::connect("anova-device-id").await?;
//!     cooker.authenticate("cook@example.com", "password").await?;
//!
//!     cooker.set_temperature_unit(TemperatureUnit::Celsius);
//!     cooker.set_target_temp(56.5);
//!     cooker.set_cook_time(90 * 60);
//!     cooker.set_cook(true);
//!     cooker.save().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Handling errors
//!
//! ```no_run
//! use anova_lib::{Cooker, Error};
//!
//! # async fn example() {
//! match Cooker::connect("not-a-device").await {
//!     Ok(_) => {}
//!     Err(Error::UnknownDevice { device_id }) => eprintln!("no cooker {device_id}"),
//!     Err(Error::ConnectionFailure { status }) => eprintln!("service said {status}"),
//!     Err(other) => eprintln!("{other}"),
//! }
//! # }
//! ```

pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use command::JobRequest;
pub use device::{Cooker, CookerBuilder};
pub use error::{AuthStage, Error, ParseError, Result};
pub use protocol::{ApiClient, ApiConfig};
pub use state::CookerState;
pub use types::{JobId, JobMode, TemperatureUnit};
