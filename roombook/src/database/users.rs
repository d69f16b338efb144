//! User repository: registration, lookup and credential checks.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::password::{hash_password, verify_against_dummy, verify_password};
use crate::{NewUser, User};

use super::connection::Database;
use super::schema::{INSERT_USER, USER_COLUMNS};

const UPDATE_PASSWORD: &str = "UPDATE users SET password_hash = ?1 WHERE username = ?2";

fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    Ok(User::from_parts(
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

impl Database {
    /// Registers a new, non-administrator account.
    ///
    /// The password is hashed before the write lock is taken; the username
    /// check, the email check and the insert share one IMMEDIATE
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateUsername`] or [`Error::DuplicateEmail`] if
    /// either identity is taken. Nothing is written in that case.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use roombook::database::{Database, DatabaseConfig};
    /// use roombook::NewUser;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/roombook.db")).unwrap();
    /// let alice = NewUser::new("alice", "s3cret", "a@x.com", "Alice").unwrap();
    /// let user = db.register(&alice).unwrap();
    /// assert!(!user.is_admin());
    /// ```
    pub fn register(&mut self, new_user: &NewUser) -> Result<User> {
        let hash = hash_password(new_user.password())?;

        let tx = self.begin_transaction()?;
        if Self::find_user(&tx, new_user.username())?.is_some() {
            return Err(Error::DuplicateUsername {
                username: new_user.username().to_string(),
            });
        }
        if Self::find_by_email(&tx, new_user.email())?.is_some() {
            return Err(Error::DuplicateEmail {
                email: new_user.email().to_string(),
            });
        }

        tx.execute(
            INSERT_USER,
            params![
                new_user.username(),
                hash,
                new_user.email(),
                new_user.full_name(),
                false,
            ],
        )?;
        tx.commit()?;

        log::info!("registered user {}", new_user.username());
        Ok(User::from_parts(
            new_user.username().to_string(),
            hash,
            new_user.email().to_string(),
            new_user.full_name().to_string(),
            false,
        ))
    }

    /// Looks up a user by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_user(conn: &Connection, username: &str) -> Result<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?");
        Ok(conn.query_row(&sql, [username], row_to_user).optional()?)
    }

    /// Looks up a user by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?");
        Ok(conn.query_row(&sql, [email], row_to_user).optional()?)
    }

    /// Returns the user if it exists and the password verifies.
    ///
    /// An unknown username and a wrong password both yield `Ok(None)`, and
    /// both run one Argon2 verification.
    ///
    /// # Errors
    ///
    /// Returns an error only if the lookup fails.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>> {
        let user = match Self::find_user(&self.conn, username)? {
            Some(user) => Some(user).filter(|user| verify_password(password, user.password_hash())),
            None => {
                verify_against_dummy(password);
                None
            }
        };
        match &user {
            Some(_) => log::debug!("authenticated {username}"),
            None => log::debug!("authentication failed for {username}"),
        }
        Ok(user)
    }

    /// Like [`authenticate`](Self::authenticate) but treats a failed check
    /// as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCredentials`] if the pair does not match.
    pub fn login(&self, username: &str, password: &str) -> Result<User> {
        self.authenticate(username, password)?
            .ok_or(Error::InvalidCredentials)
    }

    /// Overwrites a user's password hash using an existing transaction.
    ///
    /// Returns whether a row was updated.
    pub(super) fn set_password_hash(conn: &Connection, username: &str, hash: &str) -> Result<bool> {
        Ok(conn.execute(UPDATE_PASSWORD, params![hash, username])? > 0)
    }
}
