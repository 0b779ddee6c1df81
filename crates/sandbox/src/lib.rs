//! Throwaway databases that mission queries run against.

mod error;
mod sqlite;

pub use {
    error::{Error, Result},
    sqlite::SqliteSandbox,
};

use def::ResultSet;

/// Runs SQL on behalf of the mission layer.
pub trait QueryExecutor {
    /// Runs each statement in order, stopping at the first failure.
    fn execute_script(&self, statements: &[String]) -> Result<()>;

    /// Runs one query. Statements that produce no columns yield an empty
    /// result set.
    fn query(&self, sql: &str) -> Result<ResultSet>;
}
