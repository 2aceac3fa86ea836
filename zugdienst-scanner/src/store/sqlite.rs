//! SQLite result store.
//!
//! Each batch run replaces two tables: `_00_latest`, which downstream
//! consumers always query, and a dated snapshot `_DD_MM_YYYY` that keeps a
//! history of runs side by side in the same file.

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{Connection, params};
use tracing::info;

use crate::record::{COLUMNS, ServiceRecord};

use super::error::StoreError;

/// Table downstream consumers query for the newest batch.
const LATEST_TABLE: &str = "_00_latest";

/// Writer for the result database.
pub struct ServiceStore {
    conn: Connection,
}

impl ServiceStore {
    /// Open (or create) the database file.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// In-memory store, for tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Replace both result tables with the given records.
    ///
    /// `run_date` names the dated snapshot table (`_DD_MM_YYYY`).
    pub fn write_all(
        &mut self,
        records: &[ServiceRecord],
        run_date: NaiveDate,
    ) -> Result<(), StoreError> {
        let dated_table = format!("_{}", run_date.format("%d_%m_%Y"));

        for table in [LATEST_TABLE, dated_table.as_str()] {
            self.replace_table(table, records)?;
        }

        info!(
            rows = records.len(),
            snapshot = dated_table,
            "result tables written"
        );
        Ok(())
    }

    /// Number of rows in the latest table.
    pub fn latest_count(&self) -> Result<i64, StoreError> {
        let count = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {LATEST_TABLE}"), [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }

    fn replace_table(&mut self, table: &str, records: &[ServiceRecord]) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;

        tx.execute_batch(&format!("DROP TABLE IF EXISTS {table}"))?;
        tx.execute_batch(&create_table_sql(table))?;

        {
            let mut stmt = tx.prepare(&insert_sql(table))?;
            for record in records {
                stmt.execute(params![
                    record.art,
                    record.gattung,
                    record.zugnr,
                    record.begin,
                    record.fahrzeit,
                    record.br,
                    record.laenge,
                    record.masse,
                    record.nhalte,
                    record.ev,
                    record.w1,
                    record.start,
                    record.ende,
                    record.s_km,
                    record.dv,
                    record.country,
                    record.route,
                    record.fahrplan,
                    record.aufgleispunkt,
                    record.zuglauf,
                    record.halte,
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }
}

fn create_table_sql(table: &str) -> String {
    let columns = COLUMNS
        .iter()
        .map(|c| match *c {
            "laenge" | "masse" | "nhalte" | "ev" | "w1" | "s_km" | "dv" => {
                format!("{c} INTEGER")
            }
            _ => format!("{c} TEXT"),
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("CREATE TABLE {table} ({columns})")
}

fn insert_sql(table: &str) -> String {
    let placeholders = (1..=COLUMNS.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {table} ({}) VALUES ({placeholders})",
        COLUMNS.join(", ")
    )
}
