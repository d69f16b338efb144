//! Transaction management utilities.
//!
//! Every compound write runs in a `BEGIN IMMEDIATE` transaction. The write
//! lock is taken before the first read, so two writers can never interleave
//! their check-then-insert sequences. Dropping the transaction without
//! committing rolls it back.

use rusqlite::{Transaction, TransactionBehavior};

use crate::error::Result;

use super::connection::Database;

impl Database {
    /// Begins an IMMEDIATE transaction on this handle.
    ///
    /// Waits up to the configured busy timeout for the write lock.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StorageUnavailable`] if the lock cannot be
    /// taken in time.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use roombook::database::{Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/roombook.db")).unwrap();
    /// let tx = db.begin_transaction().unwrap();
    /// let rooms = Database::list_rooms(&tx).unwrap();
    /// tx.commit().unwrap();
    /// # let _ = rooms;
    /// ```
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?)
    }
}
