// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-level minimization of single-output Boolean functions with the Quine–McCluskey
//! tabulation method.
//!
//! ```
//! use qm_min::logic_function::LogicFunction;
//!
//! let function = LogicFunction::new(["A", "B"], [0, 3]).unwrap();
//! assert_eq!(function.expression().unwrap(), "(NOT A AND NOT B) OR (A AND B)");
//! ```

pub mod cover;
pub mod errors;
pub mod essentials;
pub mod grouping;
pub mod implicant;
pub mod logic_function;
pub mod options;
mod primes;
#[cfg(any(test, feature = "proptest1"))]
mod proptest_helpers;
