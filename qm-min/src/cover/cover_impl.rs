// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::{minimum_cover, CoverMatrixDisplay, ExpressionDisplay},
    errors::MinimizeError,
    essentials::EssentialSelection,
    grouping::Grouping,
    implicant::Implicant,
    logic_function::LogicFunction,
};
use log::debug;
use std::collections::BTreeSet;

/// A minimal sum-of-products cover: essential prime implicants first, followed by the
/// non-essential primes selected to cover the rest of the on-set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cover {
    variables: Vec<String>,
    implicants: Vec<Implicant>,
    essential_count: usize,
}

impl Cover {
    /// Runs the tabulation method over `function`.
    pub fn minimize(function: &LogicFunction) -> Result<Self, MinimizeError> {
        let on_set = function.on_set();
        let primes = Grouping::initial(on_set, function.variable_count()).prime_implicants();
        let selection = EssentialSelection::select(on_set, &primes);

        let mut implicants: Vec<Implicant> = selection.essential().cloned().collect();
        let essential_count = implicants.len();

        if !selection.is_complete() {
            let residual_values = selection.residual_values();
            let residual_implicants = selection.residual_implicants();
            debug!(
                "{} essential implicants leave {} values and {} implicants",
                essential_count,
                residual_values.len(),
                residual_implicants.len()
            );

            let selected =
                minimum_cover(&residual_values, &residual_implicants, function.options())?;
            implicants.extend(
                selected
                    .into_iter()
                    .map(|ix| residual_implicants[ix].clone()),
            );
        }

        Ok(Self {
            variables: function.variables().to_vec(),
            implicants,
            essential_count,
        })
    }

    #[inline]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// All implicants in the cover, in order.
    #[inline]
    pub fn implicants(&self) -> &[Implicant] {
        &self.implicants
    }

    /// The essential prime implicants.
    #[inline]
    pub fn essential(&self) -> &[Implicant] {
        &self.implicants[..self.essential_count]
    }

    /// The non-essential prime implicants chosen by the minimum cover search.
    #[inline]
    pub fn selected(&self) -> &[Implicant] {
        &self.implicants[self.essential_count..]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.implicants.len()
    }

    /// Returns true if the cover has no implicants, i.e. it is constant false.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    /// Evaluates the cover at the input row `value`.
    pub fn evaluate(&self, value: u32) -> bool {
        self.implicants
            .iter()
            .any(|implicant| implicant.pattern().evaluate(value))
    }

    /// The union of the values covered by each implicant.
    pub fn covered_values(&self) -> BTreeSet<u32> {
        self.implicants
            .iter()
            .flat_map(|implicant| implicant.covered().iter().copied())
            .collect()
    }

    /// Checks that this cover evaluates to true on exactly the values in `on_set`, over every
    /// row of the truth table.
    ///
    /// Returns the first mismatching row as an error.
    pub fn check_logically_equivalent(&self, on_set: &[u32]) -> Result<(), u32> {
        let on_set: BTreeSet<_> = on_set.iter().copied().collect();
        for value in 0..(1_u64 << self.variable_count()) {
            let value = value as u32;
            if self.evaluate(value) != on_set.contains(&value) {
                return Err(value);
            }
        }
        Ok(())
    }

    #[inline]
    pub fn matrix_display(&self) -> CoverMatrixDisplay<'_> {
        CoverMatrixDisplay::new(self)
    }

    #[inline]
    pub fn expression_display(&self) -> ExpressionDisplay<'_> {
        ExpressionDisplay::new(self)
    }
}
