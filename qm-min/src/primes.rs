// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{grouping::Grouping, implicant::Implicant};
use log::{debug, trace};
use std::collections::HashSet;

impl Grouping {
    /// Generates every prime implicant reachable from this level.
    ///
    /// Each level's implicants are combined across adjacent groups. Whatever did not take part in
    /// any combination at a level cannot be generalized further and is prime. Primes from
    /// shallower levels come first, and each prime is returned once.
    pub fn prime_implicants(self) -> Vec<Implicant> {
        let mut primes = Vec::new();
        let mut seen = HashSet::new();
        let mut level = self;
        let mut depth = 0;

        loop {
            debug!(
                "level {}: {} implicants in {} groups",
                depth,
                level.implicants().len(),
                level.group_count()
            );

            if level.group_count() <= 1 {
                // Nothing left to compare against: everything here is prime.
                for implicant in level.into_implicants() {
                    if seen.insert(implicant.clone()) {
                        primes.push(implicant);
                    }
                }
                break;
            }

            // "Unused" is only decided once every comparison at this level has been made.
            let (next, consumed) = level.combine_adjacent();
            for (implicant, _) in level
                .implicants()
                .iter()
                .zip(consumed.iter().by_vals())
                .filter(|(_, consumed)| !consumed)
            {
                if seen.insert(implicant.clone()) {
                    trace!("prime implicant: {}", implicant);
                    primes.push(implicant.clone());
                }
            }

            if next.is_empty() {
                break;
            }
            level = next;
            depth += 1;
        }

        debug!("found {} prime implicants", primes.len());
        primes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn patterns(primes: &[Implicant]) -> Vec<String> {
        primes
            .iter()
            .map(|imp| imp.pattern().to_string())
            .collect()
    }

    #[test]
    fn test_tautology() {
        let primes = Grouping::initial(&[0, 1, 2, 3], 2).prime_implicants();
        assert_eq!(patterns(&primes), vec!["--"]);
        assert_eq!(primes[0].covered(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_no_combinations() {
        let primes = Grouping::initial(&[0, 3], 2).prime_implicants();
        assert_eq!(patterns(&primes), vec!["00", "11"]);
    }

    #[test]
    fn test_empty() {
        let primes = Grouping::initial(&[], 3).prime_implicants();
        assert!(primes.is_empty());
    }

    #[test]
    fn test_mixed_levels() {
        // 0, 1, 2 combine into 00- and 0-0; 7 stays on its own.
        let primes = Grouping::initial(&[0, 1, 2, 7], 3).prime_implicants();
        assert_eq!(patterns(&primes), vec!["111", "00-", "0-0"]);
    }

    #[test]
    fn test_classic() {
        let on_set = [0, 1, 2, 5, 6, 7, 8, 9, 10, 14];
        let primes = Grouping::initial(&on_set, 4).prime_implicants();

        let mut actual = patterns(&primes);
        actual.sort();
        let mut expected = vec!["-00-", "-0-0", "--10", "0-01", "01-1", "011-"];
        expected.sort_unstable();
        assert_eq!(actual, expected);

        for prime in &primes {
            for &value in prime.covered() {
                assert!(on_set.contains(&value), "{} covers only on-set values", prime);
                assert!(prime.pattern().evaluate(value));
            }
        }
    }
}
