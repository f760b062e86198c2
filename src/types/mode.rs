// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Job mode vocabulary used by the current-job endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mode of a cook job.
///
/// Locally the cooker exposes a plain `cook` flag; the API speaks in modes.
///
/// # Examples
///
/// ```
/// use anova_lib::types::JobMode;
///
/// assert_eq!(JobMode::from(true), JobMode::Cook);
/// assert_eq!(JobMode::from(false).as_str(), "IDLE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobMode {
    /// An active cook job.
    Cook,
    /// No job running.
    Idle,
}

impl JobMode {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cook => "COOK",
            Self::Idle => "IDLE",
        }
    }

    /// Returns true for [`JobMode::Cook`].
    #[must_use]
    pub const fn is_cooking(&self) -> bool {
        matches!(self, Self::Cook)
    }
}

impl From<bool> for JobMode {
    fn from(cook: bool) -> Self {
        if cook { Self::Cook } else { Self::Idle }
    }
}

impl fmt::Display for JobMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
