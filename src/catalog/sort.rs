//! Deterministic ordering for the course listing
//!
//! A top-down two-way merge sort: O(n log n) comparisons in every case,
//! O(n) auxiliary space per merge level, and stable. Courses are ordered by
//! identifier using ordinal byte comparison on the original casing, unlike
//! the case-folded keys used for lookup.

use super::course::Course;
use std::cmp::Ordering;

/// Sort courses by identifier, keeping input order for equal identifiers
pub fn sort_courses(courses: Vec<Course>) -> Vec<Course> {
    merge_sort_by(courses, &|a: &Course, b: &Course| a.id().cmp(b.id()))
}

/// Stable merge sort over an owned vector
pub fn merge_sort_by<T, F>(mut items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mid = items.len() / 2;
    let right = items.split_off(mid);

    let left = merge_sort_by(items, compare);
    let right = merge_sort_by(right, compare);

    merge(left, right, compare)
}

/// Merge two sorted runs. Ties take from the left run.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
