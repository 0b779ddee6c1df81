mod catalog;
mod error;
mod evaluate;
pub mod guard;
mod progress;

pub use {
    catalog::Catalog,
    error::{Error, Result},
    evaluate::{evaluate, play, Outcome},
    progress::{Progress, Stage},
};

use {
    evaluator::EvaluationOptions,
    serde::{Deserialize, Serialize},
};

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Correct query!";

/// A narrative prompt paired with the query whose result the player must
/// reproduce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: u32,
    pub title: String,
    pub subject: String,
    pub briefing: String,
    /// Builds the mission database; runs before every attempt.
    #[serde(default)]
    pub setup_sql: Vec<String>,
    pub reference_query: String,
    #[serde(default)]
    pub evaluation_options: EvaluationOptions,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub success_message: Option<String>,
    /// Archived when the mission is completed. `{rows}` is replaced with the
    /// number of rows the player returned.
    #[serde(default)]
    pub finding: Option<String>,
    #[serde(default)]
    pub allow_restricted_keywords: bool,
}

impl Mission {
    pub fn success_message(&self) -> &str {
        self.success_message
            .as_deref()
            .unwrap_or(DEFAULT_SUCCESS_MESSAGE)
    }
}
