// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature display unit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Unit the cooker uses to display and interpret temperatures.
///
/// The Anova API only accepts the exact strings `"C"` and `"F"`; parsing is
/// case-sensitive.
///
/// # Examples
///
/// ```
/// use anova_lib::types::TemperatureUnit;
///
/// let unit: TemperatureUnit = "C".parse().unwrap();
/// assert_eq!(unit, TemperatureUnit::Celsius);
/// assert_eq!(TemperatureUnit::Fahrenheit.as_str(), "F");
///
/// assert!("c".parse::<TemperatureUnit>().is_err());
/// assert!("K".parse::<TemperatureUnit>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[serde(rename = "C")]
    Celsius,
    /// Degrees Fahrenheit.
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Self::Celsius),
            "F" => Ok(Self::Fahrenheit),
            _ => Err(Error::InvalidTemperatureUnit(s.to_string())),
        }
    }
}
