//! User accounts.

use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// A stored user account.
///
/// The password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    username: String,
    #[serde(skip_serializing, default)]
    password_hash: String,
    email: String,
    full_name: String,
    is_admin: bool,
}

impl User {
    pub(crate) fn from_parts(
        username: String,
        password_hash: String,
        email: String,
        full_name: String,
        is_admin: bool,
    ) -> Self {
        Self {
            username,
            password_hash,
            email,
            full_name,
            is_admin,
        }
    }

    /// Returns the username (primary identity).
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the full display name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns whether this account is the administrator.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub(crate) fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

/// A self-registration request.
///
/// There is no admin flag: accounts created through registration are never
/// administrators.
///
/// # Examples
///
/// ```
/// use roombook::NewUser;
///
/// let user = NewUser::new("alice", "s3cret", "a@x.com", "Alice Example").unwrap();
/// assert_eq!(user.username(), "alice");
/// assert!(NewUser::new("bob", "pw", "not-an-email", "Bob").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NewUser {
    username: String,
    password: String,
    email: String,
    full_name: String,
}

impl NewUser {
    /// Creates a registration request.
    ///
    /// Username, email and full name are trimmed; the password is kept as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the username, password or full name is empty, or
    /// the email has no `@`.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = username.into().trim().to_string();
        let password = password.into();
        let email = email.into().trim().to_string();
        let full_name = full_name.into().trim().to_string();

        if username.is_empty() {
            return Err(ValidationError::new("username", "username must be non-empty"));
        }
        if password.is_empty() {
            return Err(ValidationError::new("password", "password must be non-empty"));
        }
        if !email.contains('@') {
            return Err(ValidationError::new(
                "email",
                "email must be an address like name@example.com",
            ));
        }
        if full_name.is_empty() {
            return Err(ValidationError::new(
                "full_name",
                "full name must be non-empty",
            ));
        }

        Ok(Self {
            username,
            password,
            email,
            full_name,
        })
    }

    /// Returns the requested username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the requested email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the requested full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_trims() {
        let user = NewUser::new(" alice ", " pw ", " a@x.com ", " Alice ").unwrap();
        assert_eq!(user.username(), "alice");
        assert_eq!(user.email(), "a@x.com");
        assert_eq!(user.full_name(), "Alice");
        assert_eq!(user.password(), " pw ");
    }

    #[test]
    fn test_new_user_validation() {
        assert_eq!(
            NewUser::new("", "pw", "a@x.com", "A").unwrap_err().field,
            "username"
        );
        assert_eq!(
            NewUser::new("a", "", "a@x.com", "A").unwrap_err().field,
            "password"
        );
        assert_eq!(
            NewUser::new("a", "pw", "ax.com", "A").unwrap_err().field,
            "email"
        );
        assert_eq!(
            NewUser::new("a", "pw", "a@x.com", " ").unwrap_err().field,
            "full_name"
        );
    }

    #[test]
    fn test_user_serialization_skips_hash() {
        let user = User::from_parts(
            "alice".into(),
            "$argon2id$secret".into(),
            "a@x.com".into(),
            "Alice".into(),
            false,
        );
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2"));
        assert!(json.contains("alice"));
    }
}
