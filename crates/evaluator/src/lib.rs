//! Decides whether a player's result set is equivalent to a mission's
//! reference result set and explains the first discrepancy.

mod compare;
mod options;
mod verdict;

pub use {
    compare::compare_results,
    options::EvaluationOptions,
    verdict::{Mismatch, Verdict, SUCCESS_MESSAGE},
};
