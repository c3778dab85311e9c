//! User records and their fluent builders
//!
//! Three ways of writing the same fluent builder for a `(name, age)` record:
//!
//! ```text
//! UserStruct           builder == record, public fields
//! UserClass            builder == record, private fields + getters
//! UserFluentInterface ──> User
//!                      separate builder, sole writer of User's fields
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use fluent_user::user::{User, UserClass, UserStruct};
//!
//! let plain = UserStruct::default().with_name("Pippo").with_age(30).build();
//! assert_eq!(plain.name, "Pippo");
//!
//! let class = UserClass::default().with_age(30).with_name("Pippo").build();
//! assert_eq!(class.name(), "Pippo");
//!
//! let user = User::builder().with_name("Pippo")?.with_age(30)?.build()?;
//! assert_eq!(user.age(), 30);
//! # Ok::<(), fluent_user::Error>(())
//! ```

mod encapsulated;
mod interface;
mod plain;

pub use encapsulated::UserClass;
pub use interface::{BuilderState, User, UserFluentInterface};
pub use plain::UserStruct;

/// Read-only view shared by every user record flavour.
pub trait UserView {
    /// Get the user name.
    fn name(&self) -> &str;

    /// Get the user age.
    fn age(&self) -> i32;
}
