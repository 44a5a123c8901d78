// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::logic_function::LogicFunction;
use proptest::prelude::*;

impl Arbitrary for LogicFunction {
    /// The inclusive range of variable counts to generate functions for.
    type Parameters = Option<(usize, usize)>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        // Past 4 variables the number of prime implicants (and so the cover search) can blow up.
        let (min_variables, max_variables) = params.unwrap_or((1, 4));
        assert!(
            min_variables >= 1 && min_variables <= max_variables && max_variables < 32,
            "variable counts must satisfy 1 <= min <= max < 32, got ({}, {})",
            min_variables,
            max_variables
        );
        (min_variables..=max_variables)
            .prop_flat_map(|variable_count| {
                let universe = 1_u32 << variable_count;
                // Duplicates are allowed here: construction is expected to drop them.
                prop::collection::vec(0..universe, 0..=(universe as usize)).prop_map(
                    move |on_set| {
                        LogicFunction::with_default_variables(variable_count, on_set)
                            .expect("on-set values are in range")
                    },
                )
            })
            .boxed()
    }
}
