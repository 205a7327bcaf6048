use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Finance tables, created on startup when missing
const SCHEMA: &[(&str, &str)] = &[
    (
        "a001_commission_period",
        r#"
        CREATE TABLE IF NOT EXISTS a001_commission_period (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'Opened',
            created_at TEXT,
            updated_at TEXT
        );
        "#,
    ),
    (
        "a002_commission_range",
        r#"
        CREATE TABLE IF NOT EXISTS a002_commission_range (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            lower_limit REAL NOT NULL,
            upper_limit REAL NOT NULL,
            percentage REAL NOT NULL,
            created_at TEXT,
            updated_at TEXT
        );
        "#,
    ),
    (
        "p900_marketer_commission",
        r#"
        CREATE TABLE IF NOT EXISTS p900_marketer_commission (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            marketer TEXT NOT NULL,
            total_commissionable_amount REAL NOT NULL,
            commission_percentage REAL NOT NULL,
            commission_earned REAL NOT NULL,
            calculated_at TEXT,
            period_start TEXT NOT NULL,
            period_end TEXT NOT NULL,
            commission_period INTEGER
        );
        "#,
    ),
    (
        "p901_lead_commission",
        r#"
        CREATE TABLE IF NOT EXISTS p901_lead_commission (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            lead_file TEXT NOT NULL UNIQUE,
            marketer TEXT,
            plot_number TEXT,
            purchase_price REAL NOT NULL,
            total_paid REAL NOT NULL,
            percentage REAL NOT NULL
        );
        "#,
    ),
    (
        "p901_payment_history",
        r#"
        CREATE TABLE IF NOT EXISTS p901_payment_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            lead_file TEXT NOT NULL,
            total_paid REAL NOT NULL,
            plot_number TEXT,
            paid_status TEXT,
            current_amount REAL NOT NULL,
            prev_amount REAL NOT NULL,
            percentage REAL NOT NULL,
            commission_qualifies INTEGER NOT NULL DEFAULT 0,
            date_recorded TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_p901_payment_history_lead_file
            ON p901_payment_history (lead_file);
        "#,
    ),
    (
        "p902_refund_transaction",
        r#"
        CREATE TABLE IF NOT EXISTS p902_refund_transaction (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            marketer TEXT NOT NULL,
            lead_file TEXT NOT NULL,
            previous_total_paid REAL NOT NULL,
            new_total_paid REAL NOT NULL,
            recorded_at TEXT NOT NULL
        );
        "#,
    ),
];

/// Build the sqlx URL for a database file, creating its directory
fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

/// Create every missing finance table
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, ddl) in SCHEMA {
        // sqlite executes one statement per call
        for statement in ddl.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            conn.execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                statement.to_string(),
            ))
            .await
            .map_err(|e| anyhow::anyhow!("failed to create {}: {}", table, e))?;
        }
        tracing::debug!("Table {} ready", table);
    }
    Ok(())
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Single-connection in-memory database with the finance schema
#[cfg(test)]
pub async fn memory_connection() -> DatabaseConnection {
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);
    let conn = Database::connect(options)
        .await
        .expect("in-memory sqlite");
    bootstrap_schema(&conn).await.expect("schema");
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bootstrap_is_idempotent() {
        let conn = memory_connection().await;
        bootstrap_schema(&conn).await.unwrap();

        let tables = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%';"
                    .to_string(),
            ))
            .await
            .unwrap();
        let mut names: Vec<String> = tables
            .iter()
            .map(|row| row.try_get("", "name").unwrap())
            .collect();
        names.sort();
        let mut expected: Vec<String> = SCHEMA.iter().map(|(t, _)| t.to_string()).collect();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn url_uses_rwc_mode() {
        let url = sqlite_url(&std::env::temp_dir().join("finance-test").join("db.sqlite")).unwrap();
        assert!(url.starts_with("sqlite://"));
        assert!(url.ends_with("db.sqlite?mode=rwc"));
    }
}
