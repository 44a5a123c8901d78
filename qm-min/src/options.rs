// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Options controlling minimization.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MinimizeOptions {
    max_residual_implicants: usize,
}

impl MinimizeOptions {
    /// The default limit on residual implicants for the minimum cover search.
    pub const DEFAULT_MAX_RESIDUAL_IMPLICANTS: usize = 20;

    /// Subsets are enumerated as `u64` masks, so this is a hard ceiling.
    pub const MAX_RESIDUAL_IMPLICANTS_CEILING: usize = 63;

    pub fn new() -> Self {
        Self {
            max_residual_implicants: Self::DEFAULT_MAX_RESIDUAL_IMPLICANTS,
        }
    }

    /// Sets the largest number of non-essential prime implicants the minimum cover search will
    /// enumerate subsets of. Minimization fails past this point.
    ///
    /// Panics if `max` is greater than [`Self::MAX_RESIDUAL_IMPLICANTS_CEILING`].
    pub fn with_max_residual_implicants(mut self, max: usize) -> Self {
        assert!(
            max <= Self::MAX_RESIDUAL_IMPLICANTS_CEILING,
            "max residual implicants {} must be at most {}",
            max,
            Self::MAX_RESIDUAL_IMPLICANTS_CEILING
        );
        self.max_residual_implicants = max;
        self
    }

    #[inline]
    pub fn max_residual_implicants(&self) -> usize {
        self.max_residual_implicants
    }
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        Self::new()
    }
}
