use serde::{Deserialize, Serialize};

/// Which properties of a result set are part of correctness.
///
/// Flags missing from a mission definition default to `true`, the strictest
/// reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationOptions {
    pub check_column_names: bool,
    /// Only meaningful when `check_column_names` is set.
    pub column_order_matters: bool,
    pub order_matters: bool,
}

impl EvaluationOptions {
    pub const STRICT: Self = Self {
        check_column_names: true,
        column_order_matters: true,
        order_matters: true,
    };

    /// Whether the player's columns are permuted into the reference's order
    /// before comparing data.
    pub fn realigns_columns(&self) -> bool {
        self.check_column_names && !self.column_order_matters
    }
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self::STRICT
    }
}
