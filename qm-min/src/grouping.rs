// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::implicant::Implicant;
use bitvec::prelude::*;
use itertools::Itertools;
use std::{collections::HashSet, ops::Range};

/// One level of the tabulation: implicants bucketed into ordered groups.
///
/// The implicants live in a single flat arena and each group is a range into it. At the initial
/// level, group `k` holds the values with `k` one bits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grouping {
    implicants: Vec<Implicant>,
    groups: Vec<Range<usize>>,
}

impl Grouping {
    /// Buckets the on-set by the number of `1` bits in each value's binary form.
    ///
    /// There are always `variable_count + 1` groups, some of which may be empty. Within a group,
    /// values keep their on-set order.
    pub fn initial(on_set: &[u32], variable_count: usize) -> Self {
        let mut buckets = vec![Vec::new(); variable_count + 1];
        for &value in on_set {
            let implicant = Implicant::minterm(value, variable_count);
            buckets[implicant.pattern().ones()].push(implicant);
        }
        Self::from_groups(buckets)
    }

    /// Flattens ordered groups into a grouping.
    pub fn from_groups(groups: impl IntoIterator<Item = Vec<Implicant>>) -> Self {
        let mut implicants = Vec::new();
        let mut ranges = Vec::new();
        for group in groups {
            let start = implicants.len();
            implicants.extend(group);
            ranges.push(start..implicants.len());
        }
        Self {
            implicants,
            groups: ranges,
        }
    }

    #[inline]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn group(&self, group_ix: usize) -> &[Implicant] {
        &self.implicants[self.groups[group_ix].clone()]
    }

    #[inline]
    pub fn groups(&self) -> impl Iterator<Item = &[Implicant]> + '_ {
        self.groups
            .iter()
            .map(move |range| &self.implicants[range.clone()])
    }

    /// All implicants at this level, group by group.
    #[inline]
    pub fn implicants(&self) -> &[Implicant] {
        &self.implicants
    }

    #[inline]
    pub fn into_implicants(self) -> Vec<Implicant> {
        self.implicants
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    /// Combines every implicant in each group with every implicant in the group after it.
    ///
    /// Returns the next level, which has one fewer group, along with a bitmap over this level's
    /// implicants recording which of them took part in at least one successful combination.
    /// Results from the same pair of groups are deduplicated.
    pub fn combine_adjacent(&self) -> (Self, BitVec) {
        let mut consumed = bitvec![0; self.implicants.len()];
        let mut next_groups = Vec::with_capacity(self.group_count().saturating_sub(1));

        for (lower, upper) in self.groups.iter().tuple_windows() {
            let mut seen = HashSet::new();
            let mut next_group = Vec::new();
            for (i, j) in lower.clone().cartesian_product(upper.clone()) {
                if let Some(combined) = self.implicants[i].combine(&self.implicants[j]) {
                    consumed.set(i, true);
                    consumed.set(j, true);
                    if seen.insert(combined.clone()) {
                        next_group.push(combined);
                    }
                }
            }
            next_groups.push(next_group);
        }

        (Self::from_groups(next_groups), consumed)
    }
}
