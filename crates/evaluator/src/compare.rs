
use {
    crate::{EvaluationOptions, Mismatch, Verdict},
    def::{ResultSet, Row, Value},
    std::{
        borrow::Cow,
        collections::{HashMap, HashSet},
    },
};

type Result<T> = std::result::Result<T, Mismatch>;

/// Compares `user` against `reference` under `options`.
///
/// Stages run in a fixed order and stop at the first discrepancy: column
/// names, column realignment, row count (unordered rows only), then data.
pub fn compare_results(
    user: &ResultSet,
    reference: &ResultSet,
    options: &EvaluationOptions,
) -> Verdict {
    compare(user, reference, options).into()
}

fn compare(user: &ResultSet, reference: &ResultSet, options: &EvaluationOptions) -> Result<()> {
    let user_columns = user.normalized_columns();
    let reference_columns = reference.normalized_columns();

    if options.check_column_names {
        if options.column_order_matters {
            check_column_sequence(user, reference, &user_columns, &reference_columns)?;
        } else {
            check_column_set(&user_columns, &reference_columns)?;
        }
    }

    // rows are already tuples in their own header's order
    let user_rows = if options.realigns_columns() {
        Cow::Owned(realign(user.rows(), &user_columns, &reference_columns))
    } else {
        Cow::Borrowed(user.rows())
    };
    let reference_rows = reference.rows();

    if options.order_matters {
        compare_ordered(&user_rows, reference_rows)
    } else {
        check_row_count(&user_rows, reference_rows)?;
        compare_unordered(&user_rows, reference_rows)
    }
}

fn check_column_sequence(
    user: &ResultSet,
    reference: &ResultSet,
    user_columns: &[String],
    reference_columns: &[String],
) -> Result<()> {
    if user_columns == reference_columns {
        return Ok(());
    }

    Err(Mismatch::ColumnSequence {
        expected: reference.columns().to_vec(),
        actual: user.columns().to_vec(),
    })
}

fn check_column_set(user_columns: &[String], reference_columns: &[String]) -> Result<()> {
    let missing = difference(reference_columns, user_columns);
    let extra = difference(user_columns, reference_columns);

    if missing.is_empty() && extra.is_empty() {
        Ok(())
    } else {
        Err(Mismatch::ColumnSet { missing, extra })
    }
}

/// Names of `left` absent from `right`, deduplicated, in `left` order.
fn difference(left: &[String], right: &[String]) -> Vec<String> {
    let right: HashSet<&String> = right.iter().collect();
    let mut seen = HashSet::new();

    left.iter()
        .filter(|name| !right.contains(name) && seen.insert(*name))
        .cloned()
        .collect()
}

fn realign(rows: &[Row], user_columns: &[String], reference_columns: &[String]) -> Vec<Row> {
    // a repeated name resolves to its last occurrence
    let positions: HashMap<&str, usize> = user_columns
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let layout: Vec<Option<usize>> = reference_columns
        .iter()
        .map(|name| positions.get(name.as_str()).copied())
        .collect();

    rows.iter()
        .map(|row| {
            layout
                .iter()
                .map(|&position| {
                    position
                        .and_then(|i| row.get(i))
                        .cloned()
                        .unwrap_or(Value::Null)
                })
                .collect()
        })
        .collect()
}

fn check_row_count(user_rows: &[Row], reference_rows: &[Row]) -> Result<()> {
    if user_rows.len() == reference_rows.len() {
        return Ok(());
    }

    Err(Mismatch::RowCount {
        expected: reference_rows.len(),
        actual: user_rows.len(),
    })
}

fn compare_ordered(user_rows: &[Row], reference_rows: &[Row]) -> Result<()> {
    let first_difference = reference_rows
        .iter()
        .zip(user_rows)
        .position(|(expected, actual)| expected != actual);

    if let Some(i) = first_difference {
        return Err(Mismatch::Row {
            number: i + 1,
            expected: reference_rows[i].clone(),
            actual: user_rows[i].clone(),
        });
    }

    check_row_count(user_rows, reference_rows)
}

/// Bag equality: every distinct row must occur equally often on both sides.
/// The reported row is the first, in reference order, whose count differs.
fn compare_unordered(user_rows: &[Row], reference_rows: &[Row]) -> Result<()> {
    let user_counts = count(user_rows);
    let reference_counts = count(reference_rows);

    let differing = |rows: &[Row]| {
        rows.iter().find_map(|row| {
            let expected = reference_counts.get(row).copied().unwrap_or(0);
            let actual = user_counts.get(row).copied().unwrap_or(0);

            (expected != actual).then(|| Mismatch::RowMultiplicity {
                row: row.clone(),
                expected,
                actual,
            })
        })
    };

    match differing(reference_rows).or_else(|| differing(user_rows)) {
        Some(mismatch) => Err(mismatch),
        None => Ok(()),
    }
}

fn count(rows: &[Row]) -> HashMap<&Row, usize> {
    let mut counts = HashMap::with_capacity(rows.len());
    for row in rows {
        *counts.entry(row).or_insert(0) += 1;
    }
    counts
}
