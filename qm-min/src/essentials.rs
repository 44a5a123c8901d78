// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::implicant::Implicant;
use bitvec::prelude::*;
use log::debug;
use std::collections::HashMap;

/// The essential prime implicants of a function, and the on-set values they satisfy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EssentialSelection<'a> {
    on_set: &'a [u32],
    primes: &'a [Implicant],
    // Indexes into `primes`, in the order they were found.
    essential: Vec<usize>,
    // One bit per prime, set if it is essential.
    is_essential: BitVec,
    // One bit per on-set position.
    satisfied: BitVec,
}

impl<'a> EssentialSelection<'a> {
    /// Finds the prime implicants that are the only cover for some on-set value.
    ///
    /// On-set values are visited in order. Whenever exactly one prime covers a value, that prime
    /// is recorded (once) and every on-set value it covers is marked as satisfied.
    pub fn select(on_set: &'a [u32], primes: &'a [Implicant]) -> Self {
        let positions: HashMap<u32, usize> = on_set
            .iter()
            .enumerate()
            .map(|(position, &value)| (value, position))
            .collect();

        let mut essential = Vec::new();
        let mut is_essential = bitvec![0; primes.len()];
        let mut satisfied = bitvec![0; on_set.len()];

        for &value in on_set {
            let mut covering = primes
                .iter()
                .enumerate()
                .filter(|(_, prime)| prime.covers(value));
            let prime_ix = match (covering.next(), covering.next()) {
                (Some((prime_ix, _)), None) => prime_ix,
                _ => continue,
            };
            if is_essential[prime_ix] {
                continue;
            }

            debug!("{} is essential (sole cover of {})", primes[prime_ix], value);
            for covered in primes[prime_ix].covered() {
                if let Some(&position) = positions.get(covered) {
                    satisfied.set(position, true);
                }
            }
            is_essential.set(prime_ix, true);
            essential.push(prime_ix);
        }

        Self {
            on_set,
            primes,
            essential,
            is_essential,
            satisfied,
        }
    }

    /// Indexes of the essential implicants into the prime implicant list.
    #[inline]
    pub fn essential_indexes(&self) -> &[usize] {
        &self.essential
    }

    pub fn essential(&self) -> impl Iterator<Item = &'a Implicant> + '_ {
        let primes = self.primes;
        self.essential.iter().map(move |&ix| &primes[ix])
    }

    /// Returns true if the essential implicants alone cover the whole on-set.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.satisfied.all()
    }

    #[inline]
    pub fn is_satisfied(&self, position: usize) -> bool {
        self.satisfied[position]
    }

    /// On-set values not covered by any essential implicant, in on-set order.
    pub fn residual_values(&self) -> Vec<u32> {
        self.on_set
            .iter()
            .zip(self.satisfied.iter().by_vals())
            .filter_map(|(&value, satisfied)| (!satisfied).then(|| value))
            .collect()
    }

    /// Prime implicants that are not essential, in prime order.
    pub fn residual_implicants(&self) -> Vec<&'a Implicant> {
        self.primes
            .iter()
            .zip(self.is_essential.iter().by_vals())
            .filter_map(|(prime, essential)| (!essential).then(|| prime))
            .collect()
    }
}
