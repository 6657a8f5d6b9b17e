//! Repository interfaces over the time-entry store and the session marker,
//! plus their SQLite implementation on [`DbPool`].

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::time_entry::{NewTimeEntry, TimeEntry};
use crate::models::user::SessionUser;
use chrono::NaiveDate;
use rusqlite::{Connection, TransactionBehavior};

/// Read and write access to time entries.
pub trait EntryStore {
    /// The user's latest entry with no clock-out yet. It may belong to an
    /// earlier day when a shift runs past midnight.
    fn latest_open_entry(&self, email: &str) -> AppResult<Option<TimeEntry>>;

    /// All of the user's entries for `date`, oldest first.
    fn entries_for_day(&self, email: &str, date: NaiveDate) -> AppResult<Vec<TimeEntry>>;

    fn all_entries(&self) -> AppResult<Vec<TimeEntry>>;

    fn insert(&self, entry: &NewTimeEntry) -> AppResult<TimeEntry>;

    fn update(&self, entry: &TimeEntry) -> AppResult<()>;
}

/// An [`EntryStore`] that can group reads and writes into one atomic unit.
pub trait EntryRepository: EntryStore {
    /// Run `f` against a transactional view of the store. Everything `f`
    /// wrote is committed when it returns `Ok`, and discarded otherwise.
    fn transaction<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&dyn EntryStore) -> AppResult<T>;
}

/// Persistence of the logged-in marker.
pub trait SessionStore {
    fn current_user(&self) -> AppResult<Option<SessionUser>>;

    fn set_current_user(&mut self, user: &SessionUser) -> AppResult<()>;

    /// Returns whether a marker was present.
    fn clear_current_user(&mut self) -> AppResult<bool>;
}

/// [`EntryStore`] backed by a borrowed SQLite connection or transaction.
pub struct SqliteEntries<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteEntries<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl EntryStore for SqliteEntries<'_> {
    fn latest_open_entry(&self, email: &str) -> AppResult<Option<TimeEntry>> {
        queries::load_latest_open_entry(self.conn, email)
    }

    fn entries_for_day(&self, email: &str, date: NaiveDate) -> AppResult<Vec<TimeEntry>> {
        queries::load_entries_for_day(self.conn, email, &date)
    }

    fn all_entries(&self) -> AppResult<Vec<TimeEntry>> {
        queries::load_all_entries(self.conn)
    }

    fn insert(&self, entry: &NewTimeEntry) -> AppResult<TimeEntry> {
        queries::insert_entry(self.conn, entry)
    }

    fn update(&self, entry: &TimeEntry) -> AppResult<()> {
        queries::update_entry(self.conn, entry)
    }
}

impl EntryStore for DbPool {
    fn latest_open_entry(&self, email: &str) -> AppResult<Option<TimeEntry>> {
        SqliteEntries::new(&self.conn).latest_open_entry(email)
    }

    fn entries_for_day(&self, email: &str, date: NaiveDate) -> AppResult<Vec<TimeEntry>> {
        SqliteEntries::new(&self.conn).entries_for_day(email, date)
    }

    fn all_entries(&self) -> AppResult<Vec<TimeEntry>> {
        SqliteEntries::new(&self.conn).all_entries()
    }

    fn insert(&self, entry: &NewTimeEntry) -> AppResult<TimeEntry> {
        SqliteEntries::new(&self.conn).insert(entry)
    }

    fn update(&self, entry: &TimeEntry) -> AppResult<()> {
        SqliteEntries::new(&self.conn).update(entry)
    }
}

impl EntryRepository for DbPool {
    fn transaction<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&dyn EntryStore) -> AppResult<T>,
    {
        // IMMEDIATE takes the write lock up front, so the read-modify-write
        // below cannot interleave with another writer.
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let out = f(&SqliteEntries::new(&tx))?;
        tx.commit()?;
        Ok(out)
    }
}

impl SessionStore for DbPool {
    fn current_user(&self) -> AppResult<Option<SessionUser>> {
        queries::load_session(&self.conn)
    }

    fn set_current_user(&mut self, user: &SessionUser) -> AppResult<()> {
        queries::save_session(&self.conn, user)
    }

    fn clear_current_user(&mut self) -> AppResult<bool> {
        queries::delete_session(&self.conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::errors::AppError;
    use chrono::{Local, TimeZone};

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool
    }

    fn new_entry(email: &str) -> NewTimeEntry {
        NewTimeEntry {
            user_email: email.to_string(),
            user_name: "John Smith".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            clock_in: Local.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn failed_transaction_rolls_back() {
        let mut pool = pool();

        let res: AppResult<()> = pool.transaction(|store| {
            store.insert(&new_entry("john@example.com"))?;
            Err(AppError::TimeOrder("abort".into()))
        });

        assert!(res.is_err());
        assert!(pool.all_entries().unwrap().is_empty());
    }

    #[test]
    fn committed_transaction_is_visible() {
        let mut pool = pool();

        let inserted = pool
            .transaction(|store| store.insert(&new_entry("john@example.com")))
            .unwrap();

        let open = pool.latest_open_entry("john@example.com").unwrap();
        assert_eq!(open, Some(inserted));
        assert!(pool.latest_open_entry("jane@example.com").unwrap().is_none());
    }

    #[test]
    fn session_marker_round_trip() {
        let mut pool = pool();
        assert!(pool.current_user().unwrap().is_none());

        let user = SessionUser {
            email: "jane@example.com".into(),
            name: "Jane Doe".into(),
            logged_in_at: Local.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap(),
        };
        pool.set_current_user(&user).unwrap();
        assert_eq!(pool.current_user().unwrap(), Some(user));

        assert!(pool.clear_current_user().unwrap());
        assert!(!pool.clear_current_user().unwrap());
        assert!(pool.current_user().unwrap().is_none());
    }
}
