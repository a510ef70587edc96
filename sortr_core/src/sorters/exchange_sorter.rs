use indicatif::{ProgressBar, ProgressStyle};

use crate::sorters::Sorter;

/// An implementation of [Exchange Sort](https://en.wikipedia.org/wiki/Sorting_algorithm#Exchange_sort)
///
/// # Usage
///```
/// use sortr_core::sorters::{ExchangeSorter, Sorter};
///
/// let mut slice = [5, 3, 8, 1];
/// ExchangeSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 3, 5, 8]);
///```
/// # Explanation
///
/// Exchange sort walks an outer index `i` over the slice and, for every `i`,
/// compares the element at `i` against every element after it. Whenever the
/// element at `i` is larger, the two are swapped. Unlike bubble sort the outer
/// index itself is one of the two compared positions and gets overwritten
/// repeatedly inside the inner loop.
///
/// The net effect is selection-like: once the inner loop finishes, position
/// `i` holds the minimum of the subrange `[i, n)`, so the slice ends up in
/// non-decreasing order after the last outer pass.
///
/// # Algorithm
///
/// ```
/// let mut slice = vec![5, 3, 8, 1];
/// let n = slice.len();
///
/// for i in 0..n.saturating_sub(1) {
///     for j in (i + 1)..n {
///         // swap whenever the element at the outer index is bigger
///         // than the element at the inner index.
///         if slice[i] > slice[j] {
///             slice.swap(i, j);
///         }
///     }
/// }
/// ```
#[derive(Default)]
pub struct ExchangeSorter;

impl<T> Sorter<T> for ExchangeSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        let pb = ProgressBar::new(slice.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "Exchange Sort -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] On Slice: ({pos}/{len}, ETA: {eta})",
            )
            .unwrap(),
        );

        let n = slice.len();

        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                if slice[i] > slice[j] {
                    slice.swap(i, j);
                }
            }
            pb.inc(1);
        }
    }
}
