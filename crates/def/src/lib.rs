mod result_set;
mod value;

pub use {
    result_set::{normalize_column_name, ResultSet, Row},
    value::Value,
};
