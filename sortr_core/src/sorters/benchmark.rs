use colored::Colorize;
use rand::{self, Rng};
use std::{cell::Cell, rc::Rc, time::Instant};

use prettytable::{row, Table};

use super::{ExchangeSorter, SelectionSorter, Sorter};

const SIZES: [usize; 4] = [0, 1, 100, 10_000];

// Wraps a value so that every comparison made on it bumps a shared counter.
// The counter has to be mutated from `cmp`, which only gets `&self`, so it
// lives behind `Rc<Cell<_>>`.
#[derive(Clone)]
struct Counted<T> {
    value: T,
    comparisons: Rc<Cell<usize>>,
}

impl<T> Counted<T> {
    fn new(value: T, comparisons: Rc<Cell<usize>>) -> Self {
        Self { value, comparisons }
    }
}

impl<T: Eq> Eq for Counted<T> {}

impl<T: PartialEq> PartialEq for Counted<T> {
    fn eq(&self, other: &Self) -> bool {
        self.comparisons.set(self.comparisons.get() + 1);
        self.value == other.value
    }
}

impl<T: PartialOrd> PartialOrd for Counted<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.comparisons.set(self.comparisons.get() + 1);
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for Counted<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.comparisons.set(self.comparisons.get() + 1);
        self.value.cmp(&other.value)
    }
}

fn count_comparisons<T, S>(
    sorter: S,
    values: &mut [Counted<T>],
    comparisons: Rc<Cell<usize>>,
) -> usize
where
    T: Ord + Eq + Clone,
    S: Sorter<Counted<T>>,
{
    comparisons.set(0);
    sorter.sort(values);

    comparisons.get()
}

/// Sorts random arrays of several sizes with both formulations and prints a
/// table of comparisons made and time taken for each.
pub fn run_benchmark() {
    let mut random = rand::thread_rng();
    let counter = Rc::new(Cell::new(0));

    for &n in &SIZES {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(Counted::new(random.gen::<i64>(), counter.clone()));
        }

        println!(
            "{} {}",
            "Array Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        let now = Instant::now();
        let took = count_comparisons(ExchangeSorter, &mut values.clone(), counter.clone());
        table.add_row(row![
            "Exchange Sort",
            took.to_string(),
            format!("{:?}", now.elapsed())
        ]);

        let now = Instant::now();
        let took = count_comparisons(SelectionSorter, &mut values, counter.clone());
        table.add_row(row![
            "Selection Sort",
            took.to_string(),
            format!("{:?}", now.elapsed())
        ]);

        table.printstd();
        println!();
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn comparisons_are_counted() {
        let counter = Rc::new(Cell::new(0));
        let mut values: Vec<Counted<i64>> = [3, 1, 2]
            .iter()
            .map(|&v| Counted::new(v, counter.clone()))
            .collect();

        let took = count_comparisons(ExchangeSorter, &mut values, counter.clone());

        // Three elements make exactly three (i, j) pairs.
        assert_eq!(took, 3);
        let sorted: Vec<i64> = values.into_iter().map(|c| c.value).collect();
        assert_eq!(sorted, vec![1, 2, 3]);
    }

    #[test]
    fn both_formulations_compare_equally_often() {
        let counter = Rc::new(Cell::new(0));
        let make = |counter: &Rc<Cell<usize>>| -> Vec<Counted<i64>> {
            [9, 4, 7, 1, 8]
                .iter()
                .map(|&v| Counted::new(v, counter.clone()))
                .collect()
        };

        // Both visit every (i, j) pair with i < j exactly once: n(n-1)/2.
        let exchange = count_comparisons(ExchangeSorter, &mut make(&counter), counter.clone());
        let selection = count_comparisons(SelectionSorter, &mut make(&counter), counter.clone());
        assert_eq!(exchange, 10);
        assert_eq!(selection, 10);
    }
}
