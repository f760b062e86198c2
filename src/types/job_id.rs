// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Random job identifiers.

use std::fmt;

use rand::Rng;
use serde::Serialize;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Identifier of a cook job.
///
/// The service treats every unknown id as a new job, so a fresh id is drawn
/// for each save.
///
/// # Examples
///
/// ```
/// use anova_lib::types::JobId;
///
/// let id = JobId::random();
/// assert_eq!(id.as_str().len(), JobId::LEN);
/// assert!(id.as_str().bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Length of a generated id.
    pub const LEN: usize = 22;

    /// Generates a new random id of [`JobId::LEN`] lowercase alphanumerics.
    #[must_use]
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        let id = (0..Self::LEN)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect();
        Self(id)
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
