use std::hint::black_box;
use std::time::{Duration, Instant};

use algos::prelude::*;
use log::{debug, info, warn};

pub const DEFAULT_SEARCH_SIZE: usize = 1_000_000;
pub const DEFAULT_FIB_N: u32 = 40;

/// Above this the naive recursion takes seconds, so it is left out of the
/// timing comparison.
const NAIVE_FIB_LIMIT: u32 = 35;

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = black_box(f());
    (out, start.elapsed())
}

fn micros(d: Duration) -> f64 {
    d.as_secs_f64() * 1e6
}

pub fn search(size: usize) -> algos::Result<()> {
    println!("=== Binary Search ===");

    let arr = [1, 2, 2, 2, 3, 4, 4, 5, 6, 7, 8, 9];
    let target = 2;

    println!("array:  {arr:?}");
    println!("target: {target}");
    println!("binary_search: {:?}", binary_search(&arr, &target));
    println!("find_first:    {:?}", find_first(&arr, &target));
    println!("find_last:     {:?}", find_last(&arr, &target));
    println!("lower_bound:   {}", lower_bound(&arr, &target));
    println!("upper_bound:   {}", upper_bound(&arr, &target));

    let rotated = [4, 5, 6, 7, 0, 1, 2];
    println!();
    println!("rotated: {rotated:?}");
    println!("search_rotated(0): {:?}", search_rotated(&rotated, &0));
    println!("search_rotated(3): {:?}", search_rotated(&rotated, &3));

    let unimodal = [1, 2, 3, 1];
    println!();
    println!("unimodal: {unimodal:?}");
    println!("find_peak: {:?}", find_peak(&unimodal));

    let (x, precision) = (25.0_f64, 1e-6);
    println!();
    println!("sqrt({x}, {precision:e}) = {}", sqrt(x, precision)?);

    search_timing(size);
    Ok(())
}

fn search_timing(size: usize) {
    if size == 0 {
        warn!("empty array, skipping search timing");
        return;
    }

    // Even numbers, searching for the last one.
    let arr: Vec<u64> = (0..size as u64).map(|i| i * 2).collect();
    let target = arr[size - 1];
    debug!("timing searches for {target} in {size} elements");

    let (binary, binary_time) = timed(|| binary_search(&arr, &target));
    let (linear, linear_time) = timed(|| linear_search(&arr, &target));

    println!();
    println!("binary_search: {binary:?}");
    println!("linear_search: {linear:?}");

    info!("array size: {size}");
    info!("binary search: {:.3} us", micros(binary_time));
    info!("linear search: {:.3} us", micros(linear_time));
    if !binary_time.is_zero() {
        info!(
            "binary search is {:.1}x faster",
            linear_time.as_secs_f64() / binary_time.as_secs_f64()
        );
    }
}

pub fn dynamic_programming(fib_n: u32) {
    println!("=== Dynamic Programming ===");

    fibonacci_timing(fib_n);

    let (text1, text2) = ("ABCDGH", "AEDFHR");
    let lcs = lcs_tabulation(text1, text2);
    println!();
    println!("text1: {text1}");
    println!("text2: {text2}");
    println!("lcs:   {lcs} (length {})", lcs.chars().count());

    let items = [Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)];
    let capacity = 50;
    let solution = knapsack_tabulation(&items, capacity);
    println!();
    println!("capacity:       {capacity}");
    println!("max value:      {}", solution.max_value);
    println!("selected items: {:?}", solution.selected);
    debug!(
        "selected weight {} of {capacity}",
        solution.total_weight(&items)
    );
}

fn fibonacci_timing(n: u32) {
    // F(93) is the last term that fits in a u64.
    if n > 93 {
        warn!("F({n}) overflows u64, skipping Fibonacci");
        return;
    }

    let (value, optimized_time) = timed(|| fib_optimized(n));
    let (_, tabulation_time) = timed(|| fib_tabulation(n));
    let (_, memo_time) = timed(|| fib_memo(n));

    println!("fibonacci({n}) = {value}");
    info!("optimized:  {:.3} us", micros(optimized_time));
    info!("tabulation: {:.3} us", micros(tabulation_time));
    info!("memoized:   {:.3} us", micros(memo_time));

    if n <= NAIVE_FIB_LIMIT {
        let (_, naive_time) = timed(|| fib_recursive(n));
        info!("recursive:  {:.3} us", micros(naive_time));
    } else {
        debug!("skipping naive recursion for n = {n} > {NAIVE_FIB_LIMIT}");
    }
}
