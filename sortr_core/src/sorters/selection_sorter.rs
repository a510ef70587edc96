use indicatif::{ProgressBar, ProgressStyle};

use crate::sorters::Sorter;

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// The explicit formulation of what [`ExchangeSorter`](super::ExchangeSorter)
/// does implicitly: find the smallest element of the unsorted suffix and swap
/// it into place, so the swap happens at most once per outer pass instead of
/// on every out-of-order comparison. Both produce the same sorted output.
///
/// # Usage
///```
/// use sortr_core::sorters::{SelectionSorter, Sorter};
///
/// let mut slice = [5, 3, 8, 1];
/// SelectionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 3, 5, 8]);
///```
pub struct SelectionSorter;

impl<T> Sorter<T> for SelectionSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        let pb = ProgressBar::new(slice.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "Selection Sort -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] On Slice: ({pos}/{len}, ETA: {eta})",
            )
            .unwrap(),
        );

        for unsorted in 0..slice.len() {
            let mut smallest_in_rest = unsorted;
            for i in (unsorted + 1)..slice.len() {
                if slice[i] < slice[smallest_in_rest] {
                    smallest_in_rest = i;
                }
            }
            if unsorted != smallest_in_rest {
                slice.swap(unsorted, smallest_in_rest);
            }
            pb.inc(1);
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::sorters::ExchangeSorter;
    use rand::Rng;

    #[test]
    fn arbitrary_array() {
        let mut slice = [5, 3, 8, 1];
        SelectionSorter.sort(&mut slice);
        assert_eq!(slice, [1, 3, 5, 8]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        SelectionSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        SelectionSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i64> = vec![];
        SelectionSorter.sort(&mut empty);
        assert_eq!(empty, vec![]);

        let mut one = vec![1];
        SelectionSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        SelectionSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);
    }

    #[test]
    fn agrees_with_exchange_sorter() {
        let mut rng = rand::thread_rng();
        let original: Vec<i64> = (0..300).map(|_| rng.gen_range(-50..50)).collect();

        let mut by_selection = original.clone();
        SelectionSorter.sort(&mut by_selection);

        let mut by_exchange = original;
        ExchangeSorter.sort(&mut by_exchange);

        assert_eq!(by_selection, by_exchange);
    }
}
