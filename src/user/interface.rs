//! User Fluent Interface - a separate builder that owns the user under construction
//!
//! `User` keeps its setters private to this module, so the only code able to
//! change a `User` after it exists is `UserFluentInterface`. Callers get
//! read-only getters.

use serde::{Deserialize, Serialize};

use super::UserView;
use crate::error::{Error, Result};

/// User record produced by [`UserFluentInterface`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    name: String,
    age: i32,
}

impl User {
    /// Create a builder owning a fresh, default user.
    #[must_use]
    pub fn builder() -> UserFluentInterface {
        UserFluentInterface::new()
    }

    /// Get the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the age.
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn set_age(&mut self, age: i32) {
        self.age = age;
    }
}

impl UserView for User {
    fn name(&self) -> &str {
        Self::name(self)
    }

    fn age(&self) -> i32 {
        Self::age(self)
    }
}

/// Lifecycle of a [`UserFluentInterface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuilderState {
    /// Builder owns a user and accepts setters.
    Building,
    /// `build()` has handed the user to the caller; every further call fails.
    Built,
}

/// Builder for [`User`].
///
/// Every call after `build()` returns [`Error::BuilderReused`].
#[derive(Debug)]
pub struct UserFluentInterface {
    user: Option<User>,
}

impl UserFluentInterface {
    /// Create a builder owning a fresh, default user.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user: Some(User::default()),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> BuilderState {
        if self.user.is_some() {
            BuilderState::Building
        } else {
            BuilderState::Built
        }
    }

    /// Set the name of the owned user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BuilderReused`] if `build()` was already called.
    pub fn with_name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.user_mut("with_name")?.set_name(name.into());
        Ok(self)
    }

    /// Set the age of the owned user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BuilderReused`] if `build()` was already called.
    pub fn with_age(&mut self, age: i32) -> Result<&mut Self> {
        self.user_mut("with_age")?.set_age(age);
        Ok(self)
    }

    /// Hand the owned user to the caller, leaving the builder empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BuilderReused`] on a second call.
    pub fn build(&mut self) -> Result<User> {
        let user = self.user.take().ok_or_else(|| reused("build"))?;
        tracing::trace!(name = %user.name, age = user.age, "built User");
        Ok(user)
    }

    fn user_mut(&mut self, operation: &'static str) -> Result<&mut User> {
        self.user.as_mut().ok_or_else(|| reused(operation))
    }
}

impl Default for UserFluentInterface {
    fn default() -> Self {
        Self::new()
    }
}

fn reused(operation: &'static str) -> Error {
    tracing::warn!(operation, "UserFluentInterface used after build()");
    Error::BuilderReused { operation }
}
