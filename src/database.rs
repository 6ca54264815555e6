use chrono::NaiveDateTime;
use diesel::dsl::{max, min};
use diesel::prelude::*;
use diesel::{PgConnection, SqliteConnection};

use crate::error::Result;

pub mod model;
pub mod schema;
#[cfg(test)]
pub mod test_utils;

use model::NewLog;
use schema::log;

/// Read and write access to the `log` table.
///
/// Every method issues exactly one statement on the underlying connection.
pub trait LogStore {
    fn count(&mut self) -> Result<i64>;

    /// Deletes every row, returning how many were removed.
    fn clear(&mut self) -> Result<usize>;

    fn insert(&mut self, record: &NewLog<'_>) -> Result<()>;

    /// `None` when the table is empty.
    fn earliest(&mut self) -> Result<Option<NaiveDateTime>>;

    /// `None` when the table is empty.
    fn latest(&mut self) -> Result<Option<NaiveDateTime>>;

    /// Counts rows with `low < timestamp < high`.
    fn count_between(&mut self, low: NaiveDateTime, high: NaiveDateTime) -> Result<i64>;
}

macro_rules! impl_log_store {
    ($($connection:ty),+ $(,)?) => {
        $(
            impl LogStore for $connection {
                fn count(&mut self) -> Result<i64> {
                    Ok(log::table.count().get_result(self)?)
                }

                fn clear(&mut self) -> Result<usize> {
                    Ok(diesel::delete(log::table).execute(self)?)
                }

                fn insert(&mut self, record: &NewLog<'_>) -> Result<()> {
                    diesel::insert_into(log::table)
                        .values(record)
                        .execute(self)?;
                    Ok(())
                }

                fn earliest(&mut self) -> Result<Option<NaiveDateTime>> {
                    Ok(log::table.select(min(log::timestamp)).get_result(self)?)
                }

                fn latest(&mut self) -> Result<Option<NaiveDateTime>> {
                    Ok(log::table.select(max(log::timestamp)).get_result(self)?)
                }

                fn count_between(&mut self, low: NaiveDateTime, high: NaiveDateTime) -> Result<i64> {
                    Ok(log::table
                        .filter(log::timestamp.gt(low))
                        .filter(log::timestamp.lt(high))
                        .count()
                        .get_result(self)?)
                }
            }
        )+
    };
}

impl_log_store!(PgConnection, SqliteConnection);

/// A connection to whichever backend `DATABASE_URL` points at.
pub enum LogDatabase {
    Postgres(PgConnection),
    Sqlite(SqliteConnection),
}

impl LogDatabase {
    pub fn backend(&self) -> &'static str {
        match self {
            LogDatabase::Postgres(_) => "postgres",
            LogDatabase::Sqlite(_) => "sqlite",
        }
    }
}

impl LogStore for LogDatabase {
    fn count(&mut self) -> Result<i64> {
        match self {
            LogDatabase::Postgres(c) => c.count(),
            LogDatabase::Sqlite(c) => c.count(),
        }
    }

    fn clear(&mut self) -> Result<usize> {
        match self {
            LogDatabase::Postgres(c) => c.clear(),
            LogDatabase::Sqlite(c) => c.clear(),
        }
    }

    fn insert(&mut self, record: &NewLog<'_>) -> Result<()> {
        match self {
            LogDatabase::Postgres(c) => c.insert(record),
            LogDatabase::Sqlite(c) => c.insert(record),
        }
    }

    fn earliest(&mut self) -> Result<Option<NaiveDateTime>> {
        match self {
            LogDatabase::Postgres(c) => c.earliest(),
            LogDatabase::Sqlite(c) => c.earliest(),
        }
    }

    fn latest(&mut self) -> Result<Option<NaiveDateTime>> {
        match self {
            LogDatabase::Postgres(c) => c.latest(),
            LogDatabase::Sqlite(c) => c.latest(),
        }
    }

    fn count_between(&mut self, low: NaiveDateTime, high: NaiveDateTime) -> Result<i64> {
        match self {
            LogDatabase::Postgres(c) => c.count_between(low, high),
            LogDatabase::Sqlite(c) => c.count_between(low, high),
        }
    }
}

/// `postgres://` and `postgresql://` URLs go to Postgres, anything else is
/// opened as a SQLite database (an optional `sqlite://` prefix is stripped).
pub fn establish_connection(database_url: &str) -> Result<LogDatabase> {
    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        return Ok(LogDatabase::Postgres(PgConnection::establish(database_url)?));
    }
    let path = database_url
        .strip_prefix("sqlite://")
        .unwrap_or(database_url);
    Ok(LogDatabase::Sqlite(SqliteConnection::establish(path)?))
}
