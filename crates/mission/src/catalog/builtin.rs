use {crate::Mission, evaluator::EvaluationOptions};

const UNIT: &str = "Information Scrutiny Unit";

const EMPLOYEES_TABLE: &str = "CREATE TABLE employees (id INTEGER PRIMARY KEY, name TEXT, \
    department TEXT, position TEXT, security_clearance INTEGER, hire_date TEXT);";

const EMPLOYEES: [(i64, &str, &str, &str, i64, &str); 5] = [
    (1, "Analyst 734 (You)", UNIT, "Junior Data Analyst", 2, "2025-05-10"),
    (2, "Supervisor Nex", UNIT, "Analyst Supervisor", 3, "2023-02-15"),
    (3, "External Agent K", "External Consultants", "Data Security Specialist", 4, "2024-11-01"),
    (4, "Director General Umbra", "Executive Board", "Director General", 5, "2010-01-05"),
    (5, "Archive Technician Rho", "Central Archive", "Chief Archivist", 2, "2018-07-22"),
];

const DOCUMENTS_TABLE: &str = "CREATE TABLE documents (id INTEGER PRIMARY KEY AUTOINCREMENT, \
    document_token TEXT UNIQUE NOT NULL, title TEXT, classification_level INTEGER, creation_date TEXT);";

const DOCUMENTS: [(&str, &str, i64, &str); 3] = [
    ("UEI_MANUAL_001", "Information Scrutiny Unit Handbook", 1, "2025-01-10 00:00:00"),
    ("PROYECTO_QUIMERA", "Project Chimera - Top Secret", 5, "2024-06-15 00:00:00"),
    ("HISTORICAL_RECORD_77B", "Historical Record 77B", 4, "2023-03-22 00:00:00"),
];

const ACCESS_LOGS_TABLE: &str = "CREATE TABLE document_access_logs (log_id INTEGER PRIMARY KEY AUTOINCREMENT, \
    employee_id INTEGER, document_token_fk TEXT, access_timestamp TEXT, action TEXT, remarks TEXT, \
    FOREIGN KEY (employee_id) REFERENCES employees(id), \
    FOREIGN KEY (document_token_fk) REFERENCES documents(document_token));";

const ACCESS_LOGS: [(i64, &str, &str, &str, &str); 4] = [
    (1, "UEI_MANUAL_001", "2025-05-19 09:15:00", "VIEW", "Standard orientation access."),
    (2, "PROYECTO_QUIMERA", "2025-05-19 09:30:00", "VIEW", "Supervisor review."),
    (3, "PROYECTO_QUIMERA", "2025-05-19 11:05:30", "CLASSIFIED_VIEW", "Unscheduled access. Requires follow-up."),
    (1, "PROYECTO_QUIMERA", "2025-05-19 14:20:00", "VIEW", "Authorized access for audit task."),
];

const EMPLOYEE_COLUMNS: &str = "id, name, department, position, security_clearance, hire_date";

fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

fn employees_setup(count: usize) -> Vec<String> {
    let mut statements = vec!["DROP TABLE IF EXISTS employees;".to_string(), EMPLOYEES_TABLE.to_string()];

    statements.extend(EMPLOYEES.iter().take(count).map(
        |(id, name, department, position, clearance, hire_date)| {
            format!(
                "INSERT INTO employees ({}) VALUES ({}, {}, {}, {}, {}, {});",
                EMPLOYEE_COLUMNS,
                id,
                quote(name),
                quote(department),
                quote(position),
                clearance,
                quote(hire_date)
            )
        },
    ));

    statements
}

fn access_audit_setup() -> Vec<String> {
    let mut statements = employees_setup(3);

    statements.push("DROP TABLE IF EXISTS documents;".to_string());
    statements.push(DOCUMENTS_TABLE.to_string());
    statements.extend(DOCUMENTS.iter().map(|(token, title, level, created)| {
        format!(
            "INSERT INTO documents (document_token, title, classification_level, creation_date) \
             VALUES ({}, {}, {}, {});",
            quote(token),
            quote(title),
            level,
            quote(created)
        )
    }));

    statements.push("DROP TABLE IF EXISTS document_access_logs;".to_string());
    statements.push(ACCESS_LOGS_TABLE.to_string());
    statements.extend(ACCESS_LOGS.iter().map(
        |(employee, token, timestamp, action, remarks)| {
            format!(
                "INSERT INTO document_access_logs \
                 (employee_id, document_token_fk, access_timestamp, action, remarks) \
                 VALUES ({}, {}, {}, {}, {});",
                employee,
                quote(token),
                quote(timestamp),
                quote(action),
                quote(remarks)
            )
        },
    ));

    statements
}

pub(super) fn missions() -> Vec<Mission> {
    let mut orientation_setup = vec![
        "DROP TABLE IF EXISTS documents;".to_string(),
        "DROP TABLE IF EXISTS document_access_logs;".to_string(),
    ];
    orientation_setup.extend(employees_setup(EMPLOYEES.len()));

    vec![
        Mission {
            id: 1,
            title: "Initial Orientation".to_string(),
            subject: "Onboarding Directive 001-A".to_string(),
            briefing: "Analyst, welcome to the Information Scrutiny Unit (ISU).\n\
                Your first directive is to get acquainted with the staff assigned to this Unit.\n\
                Submit a complete list of every employee of the 'Information Scrutiny Unit'."
                .to_string(),
            setup_sql: orientation_setup,
            reference_query: format!(
                "SELECT {} FROM employees WHERE department = {} ORDER BY id ASC;",
                EMPLOYEE_COLUMNS,
                quote(UNIT)
            ),
            evaluation_options: EvaluationOptions::STRICT,
            hint: Some(
                "Use SELECT to pick the columns, FROM to name the 'employees' table and WHERE to \
                 filter on the 'Information Scrutiny Unit' department. Order by 'id'."
                    .to_string(),
            ),
            success_message: Some(
                "Record accepted. Your initial orientation has been processed.".to_string(),
            ),
            finding: None,
            allow_restricted_keywords: false,
        },
        Mission {
            id: 2,
            title: "Credential Check".to_string(),
            subject: "Confidential Information Request R-002".to_string(),
            briefing: "Analyst, an urgent check of the credentials of employee ID 2 is required.\n\
                Extract and submit that individual's complete record."
                .to_string(),
            setup_sql: employees_setup(EMPLOYEES.len()),
            reference_query: format!("SELECT {} FROM employees WHERE id = 2;", EMPLOYEE_COLUMNS),
            evaluation_options: EvaluationOptions::STRICT,
            hint: Some(
                "Select every column of the 'employees' table where 'id' equals 2.".to_string(),
            ),
            success_message: Some(
                "Data for employee ID 2 verified and filed. Proceed.".to_string(),
            ),
            finding: None,
            allow_restricted_keywords: false,
        },
        Mission {
            id: 3,
            title: "Sensitive Document Access Audit".to_string(),
            subject: "Temporary Security Alert - Log Review".to_string(),
            briefing: "Analyst, an anomalous fluctuation in the access protocols for classified \
                documents has been detected.\n\
                Your task is to audit the 'document_access_logs' table.\n\
                Identify and report every access to the document with token 'PROYECTO_QUIMERA' \
                that happened after '2025-05-19 10:00:00'.\n\
                Pay attention to any unusual detail."
                .to_string(),
            setup_sql: access_audit_setup(),
            reference_query: "SELECT log_id, employee_id, document_token_fk, access_timestamp, \
                action, remarks FROM document_access_logs \
                WHERE document_token_fk = 'PROYECTO_QUIMERA' \
                AND access_timestamp > '2025-05-19 10:00:00' ORDER BY log_id ASC;"
                .to_string(),
            evaluation_options: EvaluationOptions::STRICT,
            hint: Some(
                "Query 'document_access_logs'. Filter on 'document_token_fk' and \
                 'access_timestamp'. Timestamps are compared as text in SQLite, which works \
                 for full ISO 8601 values."
                    .to_string(),
            ),
            success_message: Some(
                "Access records for 'PROYECTO_QUIMERA' compiled. Your diligence is noted."
                    .to_string(),
            ),
            finding: Some(
                "Anomaly detected in PROYECTO_QUIMERA: {rows} suspicious record(s) found."
                    .to_string(),
            ),
            allow_restricted_keywords: false,
        },
        Mission {
            id: 4,
            title: "The Mysterious Contact".to_string(),
            subject: "Intercepted Message - Secure Channel 7".to_string(),
            briefing: "A new communication has reached your terminal. It looks encrypted, but \
                the sender is unknown.\n\
                SENDER: 'Silent Observer'\n\
                MESSAGE: 'Analyst 734. Your skills are... promising. There are truths hidden \
                in the data you handle.\n\
                Search the employee records for those with a security clearance \
                ('security_clearance') above 3. Not everyone who watches guards the truth. \
                Be careful.'"
                .to_string(),
            setup_sql: employees_setup(EMPLOYEES.len()),
            reference_query: format!(
                "SELECT {} FROM employees WHERE security_clearance > 3 ORDER BY id ASC;",
                EMPLOYEE_COLUMNS
            ),
            evaluation_options: EvaluationOptions::STRICT,
            hint: Some(
                "Query the 'employees' table. Filter the 'security_clearance' column for values \
                 above 3. Order by 'id'."
                    .to_string(),
            ),
            success_message: Some(
                "Information obtained. Discretion is your best ally. Keep this data to yourself."
                    .to_string(),
            ),
            finding: None,
            allow_restricted_keywords: false,
        },
    ]
}
