//! [0/1 Knapsack]: Choose a subset of items maximizing total value while their
//! total weight stays within a capacity, using each item at most once.
//!
//! [0/1 Knapsack]: https://en.wikipedia.org/wiki/Knapsack_problem#0-1_knapsack_problem

/// An item that can be put in the knapsack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    /// Capacity the item uses up.
    pub weight: usize,
    /// Value the item adds.
    pub value: u64,
}

impl Item {
    /// Creates an item with the given `weight` and `value`.
    pub const fn new(weight: usize, value: u64) -> Self {
        Self { weight, value }
    }
}

/// An optimal knapsack packing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KnapsackSolution {
    /// Total value of the selected items.
    pub max_value: u64,
    /// Indices of the selected items in the input, in ascending order.
    pub selected: Vec<usize>,
}

impl KnapsackSolution {
    /// Returns the combined weight of the selected `items`.
    ///
    /// `items` must be the slice the solution was computed from.
    pub fn total_weight(&self, items: &[Item]) -> usize {
        self.selected.iter().map(|&i| items[i].weight).sum()
    }
}

/// Returns the best value achievable within `capacity`, by trying both
/// excluding and including every item in turn.
///
/// # Time Complexity
///
/// Takes *O*(*2^n*) time and *O*(*n*) stack space.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// let items = [Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)];
///
/// assert_eq!(knapsack_recursive(&items, 50), 220);
/// ```
pub fn knapsack_recursive(items: &[Item], capacity: usize) -> u64 {
    let Some((item, rest)) = items.split_first() else {
        return 0;
    };

    let exclude = knapsack_recursive(rest, capacity);

    if item.weight <= capacity {
        let include = item.value + knapsack_recursive(rest, capacity - item.weight);
        include.max(exclude)
    } else {
        exclude
    }
}

/// Returns an optimal packing within `capacity`, built bottom-up.
///
/// Cell `(i, w)` of the table holds the best value using the first `i` items
/// within weight budget `w`. The chosen items are recovered by walking back
/// from the last cell: whenever a row differs from the one above it, that
/// row's item was taken and its weight is released from the budget.
///
/// # Time Complexity
///
/// Takes *O*(*n · capacity*) time and space.
///
/// # Examples
///
/// ```
/// use algos::prelude::*;
///
/// let items = [Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)];
/// let solution = knapsack_tabulation(&items, 50);
///
/// assert_eq!(solution.max_value, 220);
/// assert_eq!(solution.selected, [1, 2]);
/// assert_eq!(solution.total_weight(&items), 50);
/// ```
pub fn knapsack_tabulation(items: &[Item], capacity: usize) -> KnapsackSolution {
    let n = items.len();
    let mut dp = vec![vec![0u64; capacity + 1]; n + 1];

    for i in 1..=n {
        let item = items[i - 1];

        for w in 0..=capacity {
            dp[i][w] = if item.weight <= w {
                dp[i - 1][w].max(dp[i - 1][w - item.weight] + item.value)
            } else {
                dp[i - 1][w]
            };
        }
    }

    let mut selected = Vec::new();
    let mut w = capacity;

    for i in (1..=n).rev() {
        if dp[i][w] != dp[i - 1][w] {
            selected.push(i - 1);
            w -= items[i - 1].weight;
        }
    }

    selected.reverse();

    KnapsackSolution {
        max_value: dp[n][capacity],
        selected,
    }
}
