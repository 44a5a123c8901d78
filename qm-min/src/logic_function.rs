// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::Cover,
    errors::{InvalidFunction, MinimizeError},
    implicant::MAX_VARIABLES,
    options::MinimizeOptions,
};
use log::debug;
use once_cell::sync::OnceCell;
use std::collections::HashSet;

/// A single-output Boolean function, given by its variable names and its on-set: the input
/// rows (read as binary numbers, first variable most significant) where it is true.
#[derive(Clone, Debug)]
pub struct LogicFunction {
    variables: Vec<String>,
    on_set: Vec<u32>,
    options: MinimizeOptions,
    cover: OnceCell<Cover>,
}

impl LogicFunction {
    /// Creates a new function.
    ///
    /// Duplicate on-set values are dropped, keeping the first occurrence. Returns an error if
    /// there are no variables, too many variables, or an on-set value that doesn't fit.
    pub fn new<S: Into<String>>(
        variables: impl IntoIterator<Item = S>,
        on_set: impl IntoIterator<Item = u32>,
    ) -> Result<Self, InvalidFunction> {
        let variables: Vec<String> = variables.into_iter().map(Into::into).collect();
        let variable_count = variables.len();
        if variable_count == 0 {
            return Err(InvalidFunction::EmptyVariableList);
        }
        if variable_count > MAX_VARIABLES {
            return Err(InvalidFunction::TooManyVariables {
                count: variable_count,
                max: MAX_VARIABLES,
            });
        }

        let mut seen = HashSet::new();
        let mut deduped = Vec::new();
        let mut duplicates = 0;
        for value in on_set {
            if u64::from(value) >= 1_u64 << variable_count {
                return Err(InvalidFunction::InvalidRange {
                    value,
                    variable_count,
                });
            }
            if seen.insert(value) {
                deduped.push(value);
            } else {
                duplicates += 1;
            }
        }
        if duplicates > 0 {
            debug!("dropped {} duplicate on-set values", duplicates);
        }

        Ok(Self {
            variables,
            on_set: deduped,
            options: MinimizeOptions::default(),
            cover: OnceCell::new(),
        })
    }

    /// Creates a new function with variables named `A`, `B`, ..., `Z`, `AA`, `AB`, ...
    pub fn with_default_variables(
        variable_count: usize,
        on_set: impl IntoIterator<Item = u32>,
    ) -> Result<Self, InvalidFunction> {
        Self::new((0..variable_count).map(default_variable_name), on_set)
    }

    /// Replaces the options used by [`Self::minimize`].
    pub fn with_options(mut self, options: MinimizeOptions) -> Self {
        if options != self.options {
            self.options = options;
            self.cover = OnceCell::new();
        }
        self
    }

    #[inline]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// The on-set, without duplicates, in the order it was given.
    #[inline]
    pub fn on_set(&self) -> &[u32] {
        &self.on_set
    }

    #[inline]
    pub fn options(&self) -> &MinimizeOptions {
        &self.options
    }

    /// Returns true if the function is true for `value`.
    pub fn evaluate(&self, value: u32) -> bool {
        self.on_set.contains(&value)
    }

    /// Returns the minimal cover for this function, computing it on first use.
    pub fn minimize(&self) -> Result<&Cover, MinimizeError> {
        self.cover.get_or_try_init(|| Cover::minimize(self))
    }

    /// Returns the minimal cover rendered with the default expression format.
    pub fn expression(&self) -> Result<String, MinimizeError> {
        Ok(self.minimize()?.expression_display().to_string())
    }
}

impl PartialEq for LogicFunction {
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables
            && self.on_set == other.on_set
            && self.options == other.options
    }
}

impl Eq for LogicFunction {}

/// Returns the default name for the variable at `ix`: `A` through `Z`, then `AA`, `AB`, ...
pub fn default_variable_name(ix: usize) -> String {
    const LETTERS: [char; 26] = [
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
        'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    ];

    let last = LETTERS[ix % 26];
    if ix < 26 {
        last.to_string()
    } else {
        let mut name = default_variable_name(ix / 26 - 1);
        name.push(last);
        name
    }
}
