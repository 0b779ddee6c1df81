use {
    crate::Value,
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Values of one row, positionally aligned with the header of its result set.
pub type Row = Vec<Value>;

/// Column names compare case-insensitively; this is the canonical form.
pub fn normalize_column_name(name: &str) -> String {
    name.to_lowercase()
}

/// Rows in the order the engine returned them, under a header in projection
/// order.
///
/// Every row holds exactly one value per header column. Construction is
/// lenient: a value the header names but the row lacks is read as
/// [`Value::Null`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawResultSet")]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl ResultSet {
    /// Builds a result set from positional rows. Short rows are padded with
    /// nulls; values beyond the header have no column and are dropped.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let width = columns.len();

        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Value::Null);
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// Builds a result set from keyed records. A column is looked up by its
    /// exact name first, then case-insensitively; absent keys read as null.
    pub fn from_records<R>(columns: Vec<String>, records: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = (String, Value)>,
    {
        let rows = records
            .into_iter()
            .map(|record| {
                let record: Vec<(String, Value)> = record.into_iter().collect();

                columns
                    .iter()
                    .map(|column| field(&record, column))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn normalized_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| normalize_column_name(c))
            .collect()
    }

    /// Position of the first column whose normalized name matches `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = normalize_column_name(name);

        self.columns
            .iter()
            .position(|c| normalize_column_name(c) == name)
    }
}

fn field(record: &[(String, Value)], column: &str) -> Value {
    let position = record.iter().position(|(key, _)| key == column).or_else(|| {
        let column = normalize_column_name(column);

        record
            .iter()
            .position(|(key, _)| normalize_column_name(key) == column)
    });

    // duplicate header names all read the same field
    position.map_or(Value::Null, |i| record[i].1.clone())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRow {
    Positional(Vec<Value>),
    Record(BTreeMap<String, Value>),
}

#[derive(Deserialize)]
struct RawResultSet {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<RawRow>,
}

impl From<RawResultSet> for ResultSet {
    fn from(raw: RawResultSet) -> Self {
        let RawResultSet { columns, rows } = raw;

        let rows = rows
            .into_iter()
            .map(|row| match row {
                RawRow::Positional(values) => values,
                RawRow::Record(record) => {
                    let record: Vec<_> = record.into_iter().collect();

                    columns
                        .iter()
                        .map(|column| field(&record, column))
                        .collect()
                }
            })
            .collect();

        Self::new(columns, rows)
    }
}

#[cfg(test)]
mod test {
    use {super::*, std::collections::HashMap};

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn pad_and_truncate_positional_rows() {
        let set = ResultSet::new(
            columns(&["id", "name"]),
            vec![
                vec![Value::Integer(1)],
                vec![Value::Integer(2), "Umbra".into(), Value::Boolean(true)],
            ],
        );

        assert_eq!(
            set.rows(),
            &[
                vec![Value::Integer(1), Value::Null],
                vec![Value::Integer(2), Value::from("Umbra")],
            ]
        );
    }

    #[test]
    fn records_default_missing_keys_to_null() {
        let mut complete = HashMap::new();
        complete.insert("id".to_string(), Value::Integer(1));
        complete.insert("NAME".to_string(), Value::from("Nex"));

        let mut partial = HashMap::new();
        partial.insert("id".to_string(), Value::Integer(2));

        let set = ResultSet::from_records(columns(&["id", "name"]), vec![complete, partial]);

        assert_eq!(set.row_count(), 2);
        assert_eq!(set.rows()[0], vec![Value::Integer(1), Value::from("Nex")]);
        assert_eq!(set.rows()[1], vec![Value::Integer(2), Value::Null]);
    }

    #[test]
    fn exact_key_wins_over_case_insensitive_match() {
        let record = vec![
            ("Name".to_string(), Value::from("upper")),
            ("name".to_string(), Value::from("lower")),
        ];

        let set = ResultSet::from_records(columns(&["name"]), vec![record]);

        assert_eq!(set.rows()[0], vec![Value::from("lower")]);
    }

    #[test]
    fn column_lookup_is_case_insensitive() {
        let set = ResultSet::new(columns(&["ID", "Name", "name"]), vec![]);

        assert_eq!(set.normalized_columns(), columns(&["id", "name", "name"]));
        assert_eq!(set.column_index("name"), Some(1));
        assert_eq!(set.column_index("missing"), None);
        assert!(set.is_empty());
    }

    #[test]
    fn decode_json() {
        let set: ResultSet = serde_json::from_str(
            r#"{
                "columns": ["id", "name"],
                "rows": [
                    {"id": 1, "name": "Nex"},
                    [2, "Umbra"],
                    {"ID": 3},
                    [4]
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            set.rows(),
            &[
                vec![Value::Integer(1), Value::from("Nex")],
                vec![Value::Integer(2), Value::from("Umbra")],
                vec![Value::Integer(3), Value::Null],
                vec![Value::Integer(4), Value::Null],
            ]
        );
    }

    #[test]
    fn decode_without_rows() {
        let set: ResultSet = serde_json::from_str(r#"{"columns": []}"#).unwrap();

        assert!(set.columns().is_empty());
        assert!(set.is_empty());
    }
}
