// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// An error returned while constructing a [`LogicFunction`](crate::logic_function::LogicFunction).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidFunction {
    /// No variable names were provided.
    #[error("variable list is empty")]
    EmptyVariableList,

    /// More variables were provided than a pattern can hold.
    #[error("{count} variables provided, but at most {max} are supported")]
    TooManyVariables { count: usize, max: usize },

    /// An on-set value does not fit in `variable_count` bits.
    #[error("on-set value {value} is out of range for {variable_count} variables")]
    InvalidRange { value: u32, variable_count: usize },
}

/// An error returned while minimizing a function.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MinimizeError {
    /// The minimum cover search would have to enumerate too many subsets.
    #[error(
        "{count} residual prime implicants left after essential selection, \
         but the cover search is limited to {limit}"
    )]
    TooManyResidualImplicants { count: usize, limit: usize },

    /// No subset of the residual prime implicants covers the residual on-set.
    #[error("no cover found for residual on-set values {residual_values:?}")]
    NoCoverFound { residual_values: Vec<u32> },
}
