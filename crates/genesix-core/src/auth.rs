use crate::error::{GenesixError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Snapshot of the authentication state the navigator gates on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthSession {
    pub is_loading: bool,
    pub user: Option<User>,
}

impl AuthSession {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Authentication collaborator passed explicitly to the navigator.
///
/// Failures come back as `Err`, never as panics.
pub trait AuthProvider {
    fn session(&self) -> AuthSession;

    fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    fn login(&mut self, email: &str, password: &str) -> Result<User>;

    fn register(&mut self, request: RegisterRequest) -> Result<User>;

    fn logout(&mut self) -> Result<()>;
}

// ---------------------------------------------------------------------------
// MemoryAuthProvider
// ---------------------------------------------------------------------------

struct Account {
    user: User,
    password: String,
}

/// In-process account store. Not a security boundary; meant for tests and
/// local runs.
#[derive(Default)]
pub struct MemoryAuthProvider {
    accounts: HashMap<String, Account>,
    session: AuthSession,
}

impl MemoryAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(
        mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let email = email.into();
        self.accounts.insert(
            email.to_lowercase(),
            Account {
                user: User {
                    name: name.into(),
                    email,
                },
                password: password.into(),
            },
        );
        self
    }

    /// Start with `user` already signed in.
    pub fn signed_in(mut self, user: User) -> Self {
        self.session.user = Some(user);
        self
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.session.is_loading = loading;
    }
}

impl AuthProvider for MemoryAuthProvider {
    fn session(&self) -> AuthSession {
        self.session.clone()
    }

    fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let account = self
            .accounts
            .get(&email.trim().to_lowercase())
            .filter(|a| a.password == password)
            .ok_or(GenesixError::InvalidCredentials)?;
        let user = account.user.clone();
        info!(email = %user.email, "signed in");
        self.session.user = Some(user.clone());
        Ok(user)
    }

    fn register(&mut self, request: RegisterRequest) -> Result<User> {
        let email = request.email.trim().to_string();
        if request.name.trim().is_empty() {
            return Err(GenesixError::InvalidRegistration("name is required".into()));
        }
        if !email.contains('@') {
            return Err(GenesixError::InvalidRegistration(format!(
                "invalid email '{email}'"
            )));
        }
        if request.password.is_empty() {
            return Err(GenesixError::InvalidRegistration(
                "password is required".into(),
            ));
        }
        let key = email.to_lowercase();
        if self.accounts.contains_key(&key) {
            return Err(GenesixError::AccountExists(email));
        }

        let user = User {
            name: request.name.trim().to_string(),
            email,
        };
        self.accounts.insert(
            key,
            Account {
                user: user.clone(),
                password: request.password,
            },
        );
        info!(email = %user.email, "registered");
        self.session.user = Some(user.clone());
        Ok(user)
    }

    fn logout(&mut self) -> Result<()> {
        self.session.user = None;
        Ok(())
    }
}
