use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel::sql_query;

/// In-memory SQLite connection with an empty `log` table.
pub fn connection() -> SqliteConnection {
    let mut conn = SqliteConnection::establish(":memory:").expect("open in-memory sqlite");
    sql_query("CREATE TABLE log (timestamp TIMESTAMP NOT NULL, entry TEXT NOT NULL)")
        .execute(&mut conn)
        .expect("create log table");
    conn
}

/// 2024-01-01 12:00 plus the given offset.
pub fn at(second: u32, milli: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_milli_opt(12, 0, second, milli))
        .expect("valid test timestamp")
}
