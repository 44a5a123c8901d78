// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::MinimizeError, implicant::Implicant, options::MinimizeOptions};
use bitvec::prelude::*;
use log::{debug, trace};
use std::collections::HashMap;

/// Finds the smallest subset of `implicants` that covers exactly `residual_values`.
///
/// Returns indexes into `implicants`, in ascending order.
///
/// Subsets are enumerated as masks from `1` to `2^k - 1`, where `k = implicants.len()`. A mask is
/// read as a `k`-digit binary number with the most significant digit first, so implicant `j` is
/// in the subset when bit `k - 1 - j` is set. Among subsets of minimal size, the first one found
/// wins. This is an arbitrary (but deterministic) choice when several minimum covers exist.
///
/// A single residual implicant is returned without checking what it covers.
pub fn minimum_cover(
    residual_values: &[u32],
    implicants: &[&Implicant],
    options: &MinimizeOptions,
) -> Result<Vec<usize>, MinimizeError> {
    let k = implicants.len();
    match k {
        0 => {
            return Err(MinimizeError::NoCoverFound {
                residual_values: residual_values.to_vec(),
            })
        }
        1 => return Ok(vec![0]),
        _ => {}
    }

    let limit = options.max_residual_implicants();
    if k > limit {
        return Err(MinimizeError::TooManyResidualImplicants { count: k, limit });
    }

    let mut sorted_values = residual_values.to_vec();
    sorted_values.sort_unstable();
    sorted_values.dedup();
    let positions: HashMap<u32, usize> = sorted_values
        .iter()
        .enumerate()
        .map(|(position, &value)| (value, position))
        .collect();

    // For each implicant, the residual values it covers.
    let coverage: Vec<BitVec> = implicants
        .iter()
        .map(|implicant| {
            let mut bits = bitvec![0; sorted_values.len()];
            for value in implicant.covered() {
                if let Some(&position) = positions.get(value) {
                    bits.set(position, true);
                }
            }
            bits
        })
        .collect();

    debug!(
        "searching {} subsets of {} residual implicants for a cover of {:?}",
        (1_u64 << k) - 1,
        k,
        sorted_values
    );

    let mut best: Option<u64> = None;
    let mut covered = bitvec![0; sorted_values.len()];
    for mask in 1..(1_u64 << k) {
        if let Some(best) = best {
            // Only a strictly smaller subset can replace the current best.
            if mask.count_ones() >= best.count_ones() {
                continue;
            }
        }

        covered.fill(false);
        for j in members(mask, k) {
            for position in coverage[j].iter_ones() {
                covered.set(position, true);
            }
        }
        if covered.all() {
            trace!("mask {:#b} covers the residual on-set", mask);
            best = Some(mask);
        }
    }

    match best {
        Some(mask) => Ok(members(mask, k).collect()),
        None => Err(MinimizeError::NoCoverFound {
            residual_values: sorted_values,
        }),
    }
}

/// The implicant indexes selected by `mask`, in ascending order.
fn members(mask: u64, k: usize) -> impl Iterator<Item = usize> {
    (0..k).filter(move |j| (mask >> (k - 1 - j)) & 1 == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::implicant::Pattern;

    fn implicant(covered: &[u32], variable_count: usize) -> Implicant {
        // The pattern doesn't matter for the search.
        Implicant::new(
            covered.iter().copied(),
            Pattern::from_value(covered[0], variable_count),
        )
    }

    #[test]
    fn test_members() {
        assert_eq!(members(0b100, 3).collect::<Vec<_>>(), vec![0]);
        assert_eq!(members(0b011, 3).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(members(0b101, 3).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_single_implicant() {
        let a = implicant(&[1], 3);
        // No coverage check is made for a single implicant.
        let result = minimum_cover(&[5], &[&a], &MinimizeOptions::default()).unwrap();
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_no_implicants() {
        let result = minimum_cover(&[5], &[], &MinimizeOptions::default());
        assert_eq!(
            result,
            Err(MinimizeError::NoCoverFound {
                residual_values: vec![5]
            })
        );
    }

    #[test]
    fn test_smallest_subset() {
        let a = implicant(&[1, 5], 3);
        let b = implicant(&[5, 7], 3);
        let c = implicant(&[1, 3], 3);
        let d = implicant(&[3, 7], 3);
        let e = implicant(&[1, 3, 5, 7], 3);
        let implicants = [&a, &b, &c, &d, &e];

        let result = minimum_cover(&[7, 1, 5, 3], &implicants, &MinimizeOptions::default());
        assert_eq!(result, Ok(vec![4]));
    }

    #[test]
    fn test_tie_break() {
        // {a, d} and {b, c} both cover exactly; masks are scanned upwards and implicant 0 is the
        // most significant digit, so {b, c} (0b0110) is found before {a, d} (0b1001).
        let a = implicant(&[1, 5], 3);
        let b = implicant(&[5, 7], 3);
        let c = implicant(&[1, 3], 3);
        let d = implicant(&[3, 7], 3);
        let implicants = [&a, &b, &c, &d];

        let result = minimum_cover(&[1, 3, 5, 7], &implicants, &MinimizeOptions::default());
        assert_eq!(result, Ok(vec![1, 2]));
    }

    #[test]
    fn test_uncoverable() {
        let a = implicant(&[1], 3);
        let b = implicant(&[3], 3);
        let result = minimum_cover(&[1, 3, 5], &[&a, &b], &MinimizeOptions::default());
        assert_eq!(
            result,
            Err(MinimizeError::NoCoverFound {
                residual_values: vec![1, 3, 5]
            })
        );
    }

    #[test]
    fn test_limit() {
        let implicants: Vec<_> = (0..4).map(|v| implicant(&[v], 2)).collect();
        let refs: Vec<_> = implicants.iter().collect();
        let options = MinimizeOptions::new().with_max_residual_implicants(3);
        let result = minimum_cover(&[0, 1, 2, 3], &refs, &options);
        assert_eq!(
            result,
            Err(MinimizeError::TooManyResidualImplicants { count: 4, limit: 3 })
        );
    }
}
