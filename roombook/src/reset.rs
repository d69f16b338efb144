//! Self-service password reset.
//!
//! A reset runs through three states: the user names their email, proves
//! control of it with a short one-time code, then chooses a new password.
//! [`PasswordReset`] tracks which step comes next; the storage side lives in
//! `Database::issue_reset_code`, `Database::verify_reset_code` and
//! `Database::complete_password_reset`.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::{Error, Result};

/// Number of characters in a reset code.
pub const RESET_CODE_LENGTH: usize = 6;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a fresh uppercase alphanumeric reset code.
///
/// # Examples
///
/// ```
/// use roombook::reset::{generate_code, RESET_CODE_LENGTH};
///
/// let code = generate_code();
/// assert_eq!(code.len(), RESET_CODE_LENGTH);
/// assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
/// ```
#[must_use]
pub fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..RESET_CODE_LENGTH)
        .map(|_| char::from(CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())]))
        .collect()
}

/// An outstanding reset code for one email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetCode {
    email: String,
    code: String,
    expiry: DateTime<Utc>,
}

impl ResetCode {
    pub(crate) fn new(email: String, code: String, expiry: DateTime<Utc>) -> Self {
        Self {
            email,
            code,
            expiry,
        }
    }

    /// Returns the email the code was issued for.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the code itself.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the instant after which the code no longer verifies.
    #[must_use]
    pub const fn expiry(&self) -> DateTime<Utc> {
        self.expiry
    }

    /// A code is valid only if it matches exactly and `now < expiry`.
    #[must_use]
    pub fn accepts(&self, code: &str, now: DateTime<Utc>) -> bool {
        self.code == code && now < self.expiry
    }
}

/// Where a [`PasswordReset`] currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetState {
    /// Waiting for the account email.
    AwaitingEmail,
    /// A code was issued for `email`.
    AwaitingCode {
        /// Email the code was sent to.
        email: String,
    },
    /// The code verified; waiting for the new password.
    AwaitingNewPassword {
        /// Email being reset.
        email: String,
        /// The verified code, re-checked when committing.
        code: String,
    },
    /// The password was changed.
    Completed,
    /// The user gave up.
    Cancelled,
}

impl ResetState {
    const fn name(&self) -> &'static str {
        match self {
            Self::AwaitingEmail => "awaiting email",
            Self::AwaitingCode { .. } => "awaiting code",
            Self::AwaitingNewPassword { .. } => "awaiting new password",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the workflow has finished.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for ResetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Drives one password reset from email to new password.
///
/// A failed step leaves the state unchanged. Requesting a new code while a
/// code or password is pending starts the flow over.
///
/// # Examples
///
/// ```no_run
/// use roombook::database::{Database, DatabaseConfig};
/// use roombook::reset::PasswordReset;
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/roombook.db")).unwrap();
/// let mut flow = PasswordReset::new();
///
/// let issued = flow.request(&mut db, "admin@utopia.com").unwrap();
/// flow.verify(&db, issued.code()).unwrap();
/// flow.commit(&mut db, "a-new-password").unwrap();
/// assert!(flow.state().is_terminal());
/// ```
#[derive(Debug, Clone)]
pub struct PasswordReset {
    state: ResetState,
}

impl Default for PasswordReset {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordReset {
    /// Starts a workflow waiting for an email.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ResetState::AwaitingEmail,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &ResetState {
        &self.state
    }

    /// Issues a code for `email`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserNotFound`] if no account has this email, or
    /// [`Error::InvalidResetState`] once the workflow has finished.
    pub fn request(&mut self, db: &mut Database, email: &str) -> Result<ResetCode> {
        self.request_at(db, email, Utc::now())
    }

    /// [`request`](Self::request) with an explicit clock reading.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn request_at(
        &mut self,
        db: &mut Database,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<ResetCode> {
        if self.state.is_terminal() {
            return Err(self.wrong_state("awaiting email"));
        }
        let issued = db.issue_reset_code_at(email, now)?;
        self.state = ResetState::AwaitingCode {
            email: issued.email().to_string(),
        };
        Ok(issued)
    }

    /// Checks the code the user typed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrExpiredCode`] on a mismatch or expired code,
    /// or [`Error::InvalidResetState`] if no code has been requested.
    pub fn verify(&mut self, db: &Database, code: &str) -> Result<()> {
        self.verify_at(db, code, Utc::now())
    }

    /// [`verify`](Self::verify) with an explicit clock reading.
    ///
    /// # Errors
    ///
    /// See [`verify`](Self::verify).
    pub fn verify_at(&mut self, db: &Database, code: &str, now: DateTime<Utc>) -> Result<()> {
        let ResetState::AwaitingCode { email } = &self.state else {
            return Err(self.wrong_state("awaiting code"));
        };
        Database::verify_reset_code_at(db.connection(), email, code, now)?;
        self.state = ResetState::AwaitingNewPassword {
            email: email.clone(),
            code: code.to_string(),
        };
        Ok(())
    }

    /// Sets the new password and consumes the code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserNotFound`] if the account vanished,
    /// [`Error::InvalidOrExpiredCode`] if the code expired since it was
    /// verified, or [`Error::InvalidResetState`] before a successful verify.
    pub fn commit(&mut self, db: &mut Database, new_password: &str) -> Result<()> {
        self.commit_at(db, new_password, Utc::now())
    }

    /// [`commit`](Self::commit) with an explicit clock reading.
    ///
    /// # Errors
    ///
    /// See [`commit`](Self::commit).
    pub fn commit_at(
        &mut self,
        db: &mut Database,
        new_password: &str,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let ResetState::AwaitingNewPassword { email, code } = &self.state else {
            return Err(self.wrong_state("awaiting new password"));
        };
        db.complete_password_reset_at(email, code, new_password, now)?;
        self.state = ResetState::Completed;
        Ok(())
    }

    /// Abandons the workflow from any state.
    pub fn cancel(&mut self) {
        self.state = ResetState::Cancelled;
    }

    fn wrong_state(&self, expected: &str) -> Error {
        Error::InvalidResetState {
            expected: expected.to_string(),
            actual: self.state.to_string(),
        }
    }
}
