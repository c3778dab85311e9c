//! User Class - the builder is the record, fields are reachable only through getters

use serde::{Deserialize, Serialize};

use super::UserView;

/// Fluent builder with private fields.
///
/// Only `UserClass` itself touches `name` and `age`; everyone else reads
/// them through [`UserClass::name`] and [`UserClass::age`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserClass {
    name: String,
    age: i32,
}

impl UserClass {
    /// Set the name.
    pub fn with_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Set the age.
    pub fn with_age(&mut self, age: i32) -> &mut Self {
        self.age = age;
        self
    }

    /// Build an owned copy of the current state.
    #[must_use]
    pub fn build(&self) -> Self {
        tracing::trace!(name = %self.name, age = self.age, "built UserClass");
        self.clone()
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
}

impl UserView for UserClass {
    fn name(&self) -> &str {
        Self::name(self)
    }

    fn age(&self) -> i32 {
        Self::age(self)
    }
}
