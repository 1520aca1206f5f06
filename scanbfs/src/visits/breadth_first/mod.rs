/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! Both visits assign to each node reachable from the source its distance
//! from the source, that is, the BFS level at which it is discovered.

mod seq;
pub use seq::*;

mod par_scan;
pub use par_scan::*;
