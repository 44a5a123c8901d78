// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cover::Cover;

impl Cover {
    /// Returns true if this cover is constant true: a single implicant with every position a
    /// don't-care.
    ///
    /// A minimized cover of a function that is true everywhere always has this shape, since the
    /// all-don't-care implicant subsumes every other one.
    pub fn is_tautology(&self) -> bool {
        match self.implicants() {
            [only] => only.pattern().is_universe(),
            _ => false,
        }
    }

    #[cfg(test)]
    fn is_tautology_exhaustive(&self) -> bool {
        (0..(1_u64 << self.variable_count())).all(|value| self.evaluate(value as u32))
    }
}

#[cfg(test)]
mod tests {
    use crate::{cover::Cover, logic_function::LogicFunction};
    use proptest::prelude::*;

    #[test]
    fn test_tautology_basic() {
        for variable_count in 1..=5 {
            let function =
                LogicFunction::with_default_variables(variable_count, 0..(1 << variable_count))
                    .unwrap();
            let cover = Cover::minimize(&function).unwrap();
            assert!(cover.is_tautology(), "{} variables", variable_count);
            assert!(cover.is_tautology_exhaustive());
        }

        let missing_one = LogicFunction::with_default_variables(3, 1..8).unwrap();
        let cover = Cover::minimize(&missing_one).unwrap();
        assert!(!cover.is_tautology());
        assert!(!cover.is_tautology_exhaustive());
    }

    proptest! {
        #[test]
        fn proptest_tautology(function: LogicFunction) {
            let cover = Cover::minimize(&function).unwrap();
            prop_assert_eq!(
                cover.is_tautology(),
                cover.is_tautology_exhaustive(),
                "tautology matches exhaustive search",
            );
        }
    }
}
