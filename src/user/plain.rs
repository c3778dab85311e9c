//! User Struct - the builder is the record, fields are public

use serde::{Deserialize, Serialize};

use super::UserView;

/// Fluent builder that doubles as the record it builds.
///
/// Setters mutate in place and hand back `&mut Self`, so a temporary can be
/// configured and finalized in a single expression.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStruct {
    /// User name, empty until set.
    pub name: String,
    /// User age, zero until set.
    pub age: i32,
}

impl UserStruct {
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
    ///
    /// The builder stays usable; later changes to it do not reach the copy.
    #[must_use]
    pub fn build(&self) -> Self {
        tracing::trace!(name = %self.name, age = self.age, "built UserStruct");
        self.clone()
    }
}

impl UserView for UserStruct {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> i32 {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_struct_chain() {
        let user = UserStruct::default().with_name("Pippo").with_age(30).build();
        assert_eq!(user.name, "Pippo");
        assert_eq!(user.age, 30);
    }

    #[test]
    fn test_user_struct_defaults() {
        let user = UserStruct::default().build();
        assert_eq!(user.name, "");
        assert_eq!(user.age, 0);
    }

    #[test]
    fn test_user_struct_build_is_a_copy() {
        let mut builder = UserStruct::default();
        builder.with_name("Pippo").with_age(30);
        let user = builder.build();

        builder.with_name("Pluto").with_age(31);

        assert_eq!(user.name, "Pippo");
        assert_eq!(user.age, 30);
        assert_eq!(builder.name, "Pluto");
    }
}
