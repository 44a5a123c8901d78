// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use color_eyre::{eyre::bail, Result};
use qm_min::{cover::Cover, logic_function::LogicFunction};
use std::fmt;

/// The shape a fixture's minimized cover is expected to have.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExpectedCover {
    /// The function is true everywhere.
    ConstantTrue,
    /// The function is false everywhere.
    ConstantFalse,
    /// A minimum cover has exactly this many terms.
    Terms(usize),
}

impl fmt::Display for ExpectedCover {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConstantTrue => write!(f, "constant true"),
            Self::ConstantFalse => write!(f, "constant false"),
            Self::Terms(count) => write!(f, "{} terms", count),
        }
    }
}

/// A hand-checked function along with what its minimized cover should look like.
#[derive(Clone, Debug)]
pub struct FixtureDetails {
    name: &'static str,
    description: &'static str,
    function: LogicFunction,
    expected: ExpectedCover,
}

impl FixtureDetails {
    pub(crate) fn new(
        name: &'static str,
        description: &'static str,
        variables: &[&str],
        on_set: &[u32],
        expected: ExpectedCover,
    ) -> Self {
        let function = LogicFunction::new(variables.iter().copied(), on_set.iter().copied())
            .unwrap_or_else(|err| panic!("fixture {} is invalid: {}", name, err));
        Self {
            name,
            description,
            function,
            expected,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn description(&self) -> &'static str {
        self.description
    }

    #[inline]
    pub fn function(&self) -> &LogicFunction {
        &self.function
    }

    #[inline]
    pub fn expected(&self) -> ExpectedCover {
        self.expected
    }

    /// Minimizes the function and checks the result against the truth table and the expected
    /// shape.
    pub fn verify(&self) -> Result<&Cover> {
        let cover = self.function.minimize()?;
        if let Err(row) = cover.check_logically_equivalent(self.function.on_set()) {
            bail!(
                "fixture {}: cover disagrees with the on-set at row {}",
                self.name,
                row
            );
        }

        let matches = match self.expected {
            ExpectedCover::ConstantTrue => cover.is_tautology(),
            ExpectedCover::ConstantFalse => cover.is_empty(),
            ExpectedCover::Terms(count) => cover.len() == count,
        };
        if !matches {
            bail!(
                "fixture {}: expected {}, got {} terms:\n{}",
                self.name,
                self.expected,
                cover.len(),
                cover.matrix_display().with_covered(true)
            );
        }

        Ok(cover)
    }
}
