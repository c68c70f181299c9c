#![allow(dead_code)]

use switchyard::{Capability, OperationError};
use thiserror::Error;

// ============================================================================
// Sorting Strategies
// ============================================================================

pub struct SortAscending;

impl Capability<Vec<i32>> for SortAscending {
    type Output = Vec<i32>;

    fn execute(&self, mut input: Vec<i32>) -> Result<Vec<i32>, OperationError> {
        input.sort_unstable();
        Ok(input)
    }
}

pub struct SortDescending;

impl Capability<Vec<i32>> for SortDescending {
    type Output = Vec<i32>;

    fn execute(&self, mut input: Vec<i32>) -> Result<Vec<i32>, OperationError> {
        input.sort_unstable_by(|a, b| b.cmp(a));
        Ok(input)
    }
}

pub fn sample() -> Vec<i32> {
    vec![5, 3, 6, 3, 7, 8, 5]
}

// ============================================================================
// Implementation-defined errors
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("refusing to sort {0} elements")]
    TooLarge(usize),
}

/// A strategy that refuses inputs above a size limit.
pub struct BoundedSort {
    pub limit: usize,
}

impl Capability<Vec<i32>> for BoundedSort {
    type Output = Vec<i32>;

    fn execute(&self, input: Vec<i32>) -> Result<Vec<i32>, OperationError> {
        if input.len() > self.limit {
            return Err(OperationError::new(SortError::TooLarge(input.len())));
        }
        SortAscending.execute(input)
    }
}
