//! The sorting routines behind `sortr sort run`.
//!
//! # Example
//!
//! ```
//! use sortr_core::sorters::ExchangeSorter;
//! use sortr_core::sorters::Sorter;
//!
//! let mut slice = vec![5, 3, 8, 1];
//! ExchangeSorter.sort(&mut slice);
//! assert_eq!(vec![1, 3, 5, 8], slice);
//! ```

pub mod benchmark;

mod exchange_sorter;
mod selection_sorter;

pub use exchange_sorter::ExchangeSorter;
pub use selection_sorter::SelectionSorter;

/// The sorting algorithm must implement the trait `Sorter`.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]);
}
