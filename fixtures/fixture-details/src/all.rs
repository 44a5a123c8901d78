// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    details::{ExpectedCover, FixtureDetails},
    value_generator::ValueGenerator,
};
use color_eyre::{eyre::bail, Result};
use log::debug;
use once_cell::sync::Lazy;
use proptest::prelude::*;
use qm_min::{errors::MinimizeError, logic_function::LogicFunction, options::MinimizeOptions};
use std::{collections::BTreeMap, fmt};

pub struct AllFixtures {
    fixtures: BTreeMap<&'static str, FixtureDetails>,
}

static ALL_FIXTURES_STATIC: Lazy<AllFixtures> = Lazy::new(AllFixtures::init);

impl AllFixtures {
    pub fn get() -> &'static Self {
        &*ALL_FIXTURES_STATIC
    }

    fn init() -> Self {
        let fixtures = vec![
            FixtureDetails::new(
                "tautology-2",
                "every row of a two-variable function",
                &["A", "B"],
                &[0, 1, 2, 3],
                ExpectedCover::ConstantTrue,
            ),
            FixtureDetails::new(
                "contradiction-2",
                "empty on-set",
                &["A", "B"],
                &[],
                ExpectedCover::ConstantFalse,
            ),
            FixtureDetails::new(
                "xnor-2",
                "00 and 11 differ in two bits and never combine",
                &["A", "B"],
                &[0, 3],
                ExpectedCover::Terms(2),
            ),
            FixtureDetails::new(
                "tautology-3",
                "every row of a three-variable function",
                &["A", "B", "C"],
                &[0, 1, 2, 3, 4, 5, 6, 7],
                ExpectedCover::ConstantTrue,
            ),
            FixtureDetails::new(
                "classic-4",
                "textbook minimum cover: two essentials plus one residual pick",
                &["A", "B", "C", "D"],
                &[0, 1, 2, 5, 6, 7, 8, 9, 10, 14],
                ExpectedCover::Terms(3),
            ),
            FixtureDetails::new(
                "cyclic-3",
                "cyclic core with no essential implicants",
                &["A", "B", "C"],
                &[0, 1, 2, 5, 6, 7],
                ExpectedCover::Terms(3),
            ),
            FixtureDetails::new(
                "majority-3",
                "true when at least two inputs are true",
                &["A", "B", "C"],
                &[3, 5, 6, 7],
                ExpectedCover::Terms(3),
            ),
            FixtureDetails::new(
                "parity-3",
                "odd parity: no two minterms are adjacent",
                &["A", "B", "C"],
                &[1, 2, 4, 7],
                ExpectedCover::Terms(4),
            ),
            FixtureDetails::new(
                "duplicates-3",
                "repeated on-set values contribute nothing",
                &["A", "B", "C"],
                &[1, 3, 1, 7, 3],
                ExpectedCover::Terms(2),
            ),
            FixtureDetails::new(
                "single-literal-4",
                "the upper half of a four-variable function",
                &["A", "B", "C", "D"],
                &[8, 9, 10, 11, 12, 13, 14, 15],
                ExpectedCover::Terms(1),
            ),
        ];

        Self {
            fixtures: fixtures
                .into_iter()
                .map(|fixture| (fixture.name(), fixture))
                .collect(),
        }
    }

    pub fn fixtures(&self) -> impl Iterator<Item = &FixtureDetails> + '_ {
        self.fixtures.values()
    }

    pub fn fixture(&self, name: &str) -> Option<&FixtureDetails> {
        self.fixtures.get(name)
    }

    /// Verifies every fixture, returning the first failure.
    pub fn verify_all(&self) -> Result<()> {
        for fixture in self.fixtures() {
            fixture.verify()?;
            debug!("fixture {} verified", fixture.name());
        }
        Ok(())
    }

    /// The widest functions [`Self::check_random`] generates.
    pub const MAX_RANDOM_VARIABLES: usize = 10;

    /// Generates `count` random functions of `variable_count` variables from `seed`, minimizes
    /// them, and checks every cover against its truth table.
    ///
    /// `variable_count` must be between 1 and [`Self::MAX_RANDOM_VARIABLES`].
    pub fn check_random(
        variable_count: usize,
        count: usize,
        seed: &str,
        max_residual_implicants: usize,
    ) -> Result<RandomCheckSummary> {
        if !(1..=Self::MAX_RANDOM_VARIABLES).contains(&variable_count) {
            bail!(
                "random functions need between 1 and {} variables, got {}",
                Self::MAX_RANDOM_VARIABLES,
                variable_count
            );
        }
        if max_residual_implicants > MinimizeOptions::MAX_RESIDUAL_IMPLICANTS_CEILING {
            bail!(
                "residual implicant limit must be at most {}, got {}",
                MinimizeOptions::MAX_RESIDUAL_IMPLICANTS_CEILING,
                max_residual_implicants
            );
        }

        let mut value_gen = ValueGenerator::from_seed(seed);
        let options = MinimizeOptions::new()
            .with_max_residual_implicants(max_residual_implicants);
        let strategy = any_with::<LogicFunction>(Some((variable_count, variable_count)));

        let mut summary = RandomCheckSummary::default();
        for _ in 0..count {
            let mut gen = value_gen.partial_clone();
            let function = gen.generate(strategy.clone()).with_options(options);

            let cover = match function.minimize() {
                Ok(cover) => cover,
                Err(MinimizeError::TooManyResidualImplicants { count: residual, .. }) => {
                    debug!(
                        "skipping function with {} residual implicants: {:?}",
                        residual,
                        function.on_set()
                    );
                    summary.skipped += 1;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            if let Err(row) = cover.check_logically_equivalent(function.on_set()) {
                bail!(
                    "cover for on-set {:?} disagrees at row {}:\n{}",
                    function.on_set(),
                    row,
                    cover.matrix_display().with_covered(true)
                );
            }

            summary.checked += 1;
            summary.total_terms += cover.len();
            if cover.is_tautology() {
                summary.tautologies += 1;
            } else if cover.is_empty() {
                summary.contradictions += 1;
            }
        }

        Ok(summary)
    }
}

/// Statistics collected by [`AllFixtures::check_random`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RandomCheckSummary {
    pub checked: usize,
    pub skipped: usize,
    pub tautologies: usize,
    pub contradictions: usize,
    pub total_terms: usize,
}

impl fmt::Display for RandomCheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "checked: {}, skipped: {}, tautologies: {}, contradictions: {}, total terms: {}",
            self.checked, self.skipped, self.tautologies, self.contradictions, self.total_terms
        )
    }
}
