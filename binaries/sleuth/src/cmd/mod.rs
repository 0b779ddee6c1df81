mod error;


pub use error::{Error, Result};

use {
    def::{ResultSet, Value},
    error::{MissionSnafu, ParseResultSetSnafu, ReadResultSetSnafu},
    evaluator::{compare_results, EvaluationOptions, Verdict},
    mission::{Catalog, Outcome},
    snafu::ResultExt,
    std::{fs, path::Path},
    tracing::debug,
};

/// Reads a result set stored as JSON: `{"columns": [...], "rows": [...]}`.
pub fn load_result_set(path: &Path) -> Result<ResultSet> {
    let content = fs::read_to_string(path).context(ReadResultSetSnafu { path })?;
    let result_set: ResultSet =
        serde_json::from_str(&content).context(ParseResultSetSnafu { path })?;

    debug!(
        path = %path.display(),
        columns = result_set.columns().len(),
        rows = result_set.row_count(),
        "loaded result set"
    );

    Ok(result_set)
}

pub fn compare_files(user: &Path, reference: &Path, options: &EvaluationOptions) -> Result<Verdict> {
    let user = load_result_set(user)?;
    let reference = load_result_set(reference)?;

    Ok(compare_results(&user, &reference, options))
}

/// The missions in `path`, or the built-in campaign.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path).context(MissionSnafu),
        None => Ok(Catalog::builtin()),
    }
}

pub fn list_missions(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(|m| format!("{:>3}  {}\n", m.id, m.title))
        .collect()
}

pub fn play_mission(catalog: &Catalog, id: u32, query: &str) -> Result<Outcome> {
    let mission = catalog.get(id).context(MissionSnafu)?;

    mission::play(mission, query).context(MissionSnafu)
}

/// Lays out a result set as a plain text table.
pub fn render_result_set(result_set: &ResultSet) -> String {
    let cells: Vec<Vec<String>> = result_set
        .rows()
        .iter()
        .map(|row| row.iter().map(cell).collect())
        .collect();

    let mut widths: Vec<usize> = result_set
        .columns()
        .iter()
        .map(|c| c.chars().count())
        .collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_line(&mut out, result_set.columns(), &widths);
    write_line(
        &mut out,
        &widths.iter().map(|&w| "-".repeat(w)).collect::<Vec<_>>(),
        &widths,
    );
    for row in &cells {
        write_line(&mut out, row, &widths);
    }

    let rows = result_set.row_count();
    out.push_str(&format!("({} row{})\n", rows, if rows == 1 { "" } else { "s" }));

    out
}

fn cell(value: &Value) -> String {
    match value {
        Value::Text(text) => text.clone(),
        value => value.to_string(),
    }
}

fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" | ");

    out.push_str(line.trim_end());
    out.push('\n');
}
