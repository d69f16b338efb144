//! Storage side of the password reset workflow.

use chrono::{DateTime, SubsecRound, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::password::{hash_password, validate_password};
use crate::reset::{generate_code, ResetCode};

use super::connection::Database;
use super::reservations::{from_unix_secs, to_unix_secs};

const UPSERT_RESET_CODE: &str = r"
    INSERT OR REPLACE INTO reset_codes (email, code, expiry)
    VALUES (?1, ?2, ?3)
";

const SELECT_RESET_CODE: &str = "SELECT email, code, expiry FROM reset_codes WHERE email = ?";

const DELETE_RESET_CODE: &str = "DELETE FROM reset_codes WHERE email = ?";

const DELETE_EXPIRED_RESET_CODES: &str = "DELETE FROM reset_codes WHERE expiry <= ?";

impl Database {
    /// Issues a fresh reset code for `email`, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserNotFound`] if no account has this email; no code
    /// is stored in that case.
    pub fn issue_reset_code(&mut self, email: &str) -> Result<ResetCode> {
        self.issue_reset_code_at(email, Utc::now())
    }

    /// [`issue_reset_code`](Self::issue_reset_code) with an explicit clock
    /// reading.
    ///
    /// The expiry is `now`, truncated to whole seconds, plus the configured
    /// reset-code lifetime.
    ///
    /// # Errors
    ///
    /// See [`issue_reset_code`](Self::issue_reset_code). A lifetime that
    /// takes the expiry out of range is a validation error.
    pub fn issue_reset_code_at(&mut self, email: &str, now: DateTime<Utc>) -> Result<ResetCode> {
        let now = now.trunc_subsecs(0);
        let out_of_range = |message: String| Error::Validation {
            field: "reset_code_ttl".into(),
            message,
        };
        let ttl = chrono::Duration::from_std(self.config.reset_code_ttl)
            .map_err(|e| out_of_range(e.to_string()))?;
        let expiry = now
            .checked_add_signed(ttl)
            .ok_or_else(|| out_of_range("expiry is out of range".into()))?;
        let expiry_secs = to_unix_secs(expiry);

        let tx = self.begin_transaction()?;
        let user = Self::find_by_email(&tx, email)?.ok_or_else(|| Error::UserNotFound {
            key: email.to_string(),
        })?;

        let purged = tx.execute(DELETE_EXPIRED_RESET_CODES, [to_unix_secs(now)])?;
        if purged > 0 {
            log::debug!("purged {purged} expired reset code(s)");
        }

        let code = generate_code();
        tx.execute(UPSERT_RESET_CODE, params![user.email(), code, expiry_secs])?;
        tx.commit()?;

        log::info!("issued reset code for {}", user.email());
        Ok(ResetCode::new(
            user.email().to_string(),
            code,
            from_unix_secs(expiry_secs)?,
        ))
    }

    /// Returns the outstanding code for `email`, expired or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_reset_code(conn: &Connection, email: &str) -> Result<Option<ResetCode>> {
        Ok(conn
            .query_row(SELECT_RESET_CODE, [email], |row| {
                Ok(ResetCode::new(
                    row.get(0)?,
                    row.get(1)?,
                    from_unix_secs(row.get(2)?)?,
                ))
            })
            .optional()?)
    }

    /// Checks `code` against the outstanding code for `email`.
    ///
    /// Verification does not consume the code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrExpiredCode`] if there is no code, it does
    /// not match, or it has expired.
    pub fn verify_reset_code(conn: &Connection, email: &str, code: &str) -> Result<()> {
        Self::verify_reset_code_at(conn, email, code, Utc::now())
    }

    /// [`verify_reset_code`](Self::verify_reset_code) with an explicit clock
    /// reading.
    ///
    /// # Errors
    ///
    /// See [`verify_reset_code`](Self::verify_reset_code).
    pub fn verify_reset_code_at(
        conn: &Connection,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        match Self::get_reset_code(conn, email)? {
            Some(stored) if stored.accepts(code, now) => Ok(()),
            _ => Err(Error::InvalidOrExpiredCode),
        }
    }

    /// Sets a new password for the account behind `email` and consumes the
    /// code.
    ///
    /// The code is re-checked, the hash replaced and the code deleted in one
    /// IMMEDIATE transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrExpiredCode`] if the code no longer
    /// verifies, or [`Error::UserNotFound`] if the account is gone.
    pub fn complete_password_reset(
        &mut self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<()> {
        self.complete_password_reset_at(email, code, new_password, Utc::now())
    }

    /// [`complete_password_reset`](Self::complete_password_reset) with an
    /// explicit clock reading.
    ///
    /// # Errors
    ///
    /// See [`complete_password_reset`](Self::complete_password_reset).
    pub fn complete_password_reset_at(
        &mut self,
        email: &str,
        code: &str,
        new_password: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        validate_password(new_password)?;
        let hash = hash_password(new_password)?;

        let tx = self.begin_transaction()?;
        Self::verify_reset_code_at(&tx, email, code, now)?;
        let user = Self::find_by_email(&tx, email)?.ok_or_else(|| Error::UserNotFound {
            key: email.to_string(),
        })?;
        Self::set_password_hash(&tx, user.username(), &hash)?;
        tx.execute(DELETE_RESET_CODE, [email])?;
        tx.commit()?;

        log::info!("password reset completed for {}", user.username());
        Ok(())
    }
}
