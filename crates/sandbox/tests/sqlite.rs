use {
    def::Value,
    sandbox::{Error, QueryExecutor, SqliteSandbox},
};

fn setup() -> Vec<String> {
    [
        "CREATE TABLE employees (id INTEGER PRIMARY KEY, name TEXT, clearance INTEGER, rating REAL);",
        "INSERT INTO employees VALUES (1, 'Analyst 734', 2, 4.5);",
        "INSERT INTO employees VALUES (2, 'Supervisor Nex', 3, NULL);",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn query_maps_sqlite_types() {
    let sandbox = SqliteSandbox::open().unwrap();
    sandbox.execute_script(&setup()).unwrap();

    let result = sandbox
        .query("SELECT id, name AS Agent, rating FROM employees ORDER BY id")
        .unwrap();

    assert_eq!(result.columns(), &["id", "Agent", "rating"]);
    assert_eq!(
        result.rows(),
        &[
            vec![Value::Integer(1), Value::from("Analyst 734"), Value::Float(4.5)],
            vec![Value::Integer(2), Value::from("Supervisor Nex"), Value::Null],
        ]
    );
}

#[test]
fn empty_result_keeps_columns() {
    let sandbox = SqliteSandbox::open().unwrap();
    sandbox.execute_script(&setup()).unwrap();

    let result = sandbox
        .query("SELECT id, name FROM employees WHERE clearance > 9")
        .unwrap();

    assert_eq!(result.columns(), &["id", "name"]);
    assert!(result.is_empty());
}

#[test]
fn statement_without_columns_yields_empty_set() {
    let sandbox = SqliteSandbox::open().unwrap();
    sandbox.execute_script(&setup()).unwrap();

    let result = sandbox
        .query("UPDATE employees SET clearance = 5 WHERE id = 1")
        .unwrap();
    assert!(result.columns().is_empty());

    let clearance = sandbox
        .query("SELECT clearance FROM employees WHERE id = 1")
        .unwrap();
    assert_eq!(clearance.rows(), &[vec![Value::Integer(5)]]);
}

#[test]
fn failing_setup_names_the_statement() {
    let sandbox = SqliteSandbox::open().unwrap();
    let script = vec!["CREATE TABLE t (a INTEGER);".to_string(), "INSERT INTO missing VALUES (1);".to_string()];

    match sandbox.execute_script(&script) {
        Err(Error::Setup { statement, .. }) => assert_eq!(statement, script[1]),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn invalid_query_is_an_error() {
    let sandbox = SqliteSandbox::open().unwrap();

    let err = sandbox.query("SELECT nope FROM nowhere").unwrap_err();

    assert!(matches!(err, Error::Query { .. }));
    assert!(err.to_string().contains("nowhere"));
}

#[test]
fn sandboxes_are_isolated() {
    let first = SqliteSandbox::open().unwrap();
    first.execute_script(&setup()).unwrap();

    let second = SqliteSandbox::open().unwrap();

    assert!(second.query("SELECT * FROM employees").is_err());
}
