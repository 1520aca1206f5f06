/*
 * SPDX-FileCopyrightText: 2025 The scanbfs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rayon::prelude::*;
use std::ops::Add;

/// Minimum number of elements per block in [`par_exclusive_scan`].
const MIN_SCAN_BLOCK: usize = 1 << 12;

/// Applies a function to all elements of a slice in parallel.
///
/// The output is in the same order as the input.
///
/// # Examples
///
/// ```
/// use scanbfs::utils::par_map;
///
/// assert_eq!(par_map(&[1, 2, 3], |x| x * 10), [10, 20, 30]);
/// ```
pub fn par_map<T: Sync, U: Send>(input: &[T], f: impl Fn(&T) -> U + Sync + Send) -> Vec<U> {
    input.par_iter().map(f).collect()
}

/// Replaces in parallel the elements of a slice with their exclusive prefix
/// sums, and returns the sum of all elements.
///
/// After the call, the element in position `i` is the sum of the elements
/// that were in positions `[0..i)`; in particular, the first element is
/// [`T::default()`](Default::default), which must be the identity of the sum.
///
/// The slice is split in blocks: blocks are scanned in parallel, the block
/// totals are scanned sequentially, and finally each block is shifted in
/// parallel by the total of the preceding blocks.
///
/// # Examples
///
/// ```
/// use scanbfs::utils::par_exclusive_scan;
///
/// let mut v = [3, 1, 0, 2];
/// assert_eq!(par_exclusive_scan(&mut v), 6);
/// assert_eq!(v, [0, 3, 4, 4]);
/// ```
pub fn par_exclusive_scan<T>(values: &mut [T]) -> T
where
    T: Copy + Default + Add<Output = T> + Send + Sync,
{
    let block_size = values
        .len()
        .div_ceil(4 * rayon::current_num_threads())
        .max(MIN_SCAN_BLOCK);

    let mut block_sums = values
        .par_chunks_mut(block_size)
        .map(exclusive_scan)
        .collect::<Vec<_>>();

    let total = exclusive_scan(&mut block_sums);

    // The first block has offset zero, so it is already in place
    if block_sums.len() > 1 {
        values
            .par_chunks_mut(block_size)
            .zip(block_sums.par_iter())
            .skip(1)
            .for_each(|(block, &offset)| {
                for x in block.iter_mut() {
                    *x = offset + *x;
                }
            });
    }

    total
}

/// Sequential in-place exclusive prefix sum; returns the total.
fn exclusive_scan<T: Copy + Default + Add<Output = T>>(values: &mut [T]) -> T {
    let mut acc = T::default();
    for x in values.iter_mut() {
        let value = *x;
        *x = acc;
        acc = acc + value;
    }
    acc
}

/// Returns in parallel the elements of a slice satisfying a predicate.
///
/// The output preserves the relative order of the input.
///
/// # Examples
///
/// ```
/// use scanbfs::utils::par_filter;
///
/// assert_eq!(par_filter(&[5, usize::MAX, 7, usize::MAX], |&x| x != usize::MAX), [5, 7]);
/// ```
pub fn par_filter<T: Copy + Send + Sync>(
    input: &[T],
    pred: impl Fn(&T) -> bool + Sync + Send,
) -> Vec<T> {
    input.par_iter().copied().filter(pred).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq_scan(values: &[u64]) -> (Vec<u64>, u64) {
        let mut acc = 0;
        let mut result = Vec::with_capacity(values.len());
        for &x in values {
            result.push(acc);
            acc += x;
        }
        (result, acc)
    }

    #[test]
    fn test_scan_empty() {
        let mut v: [usize; 0] = [];
        assert_eq!(par_exclusive_scan(&mut v), 0);
    }

    #[test]
    fn test_scan_block_boundaries() {
        let pool = crate::thread_pool![4];
        for len in [
            1,
            MIN_SCAN_BLOCK - 1,
            MIN_SCAN_BLOCK,
            MIN_SCAN_BLOCK + 1,
            3 * MIN_SCAN_BLOCK + 17,
            100_000,
        ] {
            let input = (0..len as u64).map(|x| x % 7).collect::<Vec<_>>();
            let (expected, expected_total) = seq_scan(&input);
            let mut actual = input.clone();
            let total = pool.install(|| par_exclusive_scan(&mut actual));
            assert_eq!(total, expected_total, "len {len}");
            assert_eq!(actual, expected, "len {len}");
        }
    }

    #[test]
    fn test_map_preserves_order() {
        let input = (0..50_000).collect::<Vec<usize>>();
        let output = par_map(&input, |&x| 2 * x);
        assert!(output.iter().enumerate().all(|(i, &x)| x == 2 * i));
    }

    #[test]
    fn test_filter_preserves_order() {
        let input = (0..50_000).collect::<Vec<usize>>();
        let output = par_filter(&input, |&x| x % 3 == 0);
        assert_eq!(output, (0..50_000).step_by(3).collect::<Vec<_>>());
    }
}
