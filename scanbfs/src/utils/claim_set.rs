/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::sync::atomic::Ordering;
use sux::prelude::*;

/// A set of nodes that threads can claim concurrently.
///
/// Each node can be claimed once: [`claim`](ClaimSet::claim) atomically marks
/// a node and reports whether the calling thread is the one that did it. If
/// many threads try to claim the same node at the same time, exactly one of
/// them wins.
///
/// The set uses one bit per node.
///
/// # Examples
///
/// ```
/// use scanbfs::utils::ClaimSet;
///
/// let claims = ClaimSet::new(4);
/// assert_eq!(claims.len(), 4);
/// assert!(!claims.is_empty());
/// assert!(claims.claim(2));
/// assert!(!claims.claim(2));
/// assert!(claims.is_claimed(2));
/// assert!(!claims.is_claimed(3));
/// ```
pub struct ClaimSet {
    bits: AtomicBitVec,
}

impl ClaimSet {
    /// Creates a set of `len` unclaimed nodes.
    pub fn new(len: usize) -> Self {
        Self {
            bits: AtomicBitVec::new(len),
        }
    }

    /// Returns the number of nodes of the set.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if the set contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Claims a node, returning true if this call changed its state from
    /// unclaimed to claimed.
    ///
    /// Claims use relaxed atomics: visits publish the effects of successful
    /// claims to other threads at the end of each parallel step, when all
    /// tasks are joined.
    ///
    /// The node must be smaller than [`len`](ClaimSet::len).
    #[inline(always)]
    pub fn claim(&self, node: usize) -> bool {
        !self.bits.swap(node, true, Ordering::Relaxed)
    }

    /// Returns whether a node has been claimed.
    #[inline(always)]
    pub fn is_claimed(&self, node: usize) -> bool {
        self.bits.get(node, Ordering::Relaxed)
    }
}
