//! # fluent-user: Fluent Builders for a Two-Field Record
//!
//! Three flavours of the fluent builder pattern applied to the same
//! `(name, age)` user record:
//!
//! - **`UserStruct`**: the builder is the record, fields are public
//! - **`UserClass`**: the builder is the record, fields are read through getters
//! - **`UserFluentInterface`**: a separate builder owns the `User` under
//!   construction and is the only code allowed to mutate it
//!
//! ## Example Usage
//!
//! ```rust
//! use fluent_user::user::User;
//!
//! let mut builder = User::builder();
//! let user = builder.with_age(30)?.with_name("Pippo")?.build()?;
//! assert_eq!(user.name(), "Pippo");
//!
//! // The user has moved out; the builder refuses further work.
//! assert!(builder.build().is_err());
//! # Ok::<(), fluent_user::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod demo;
pub mod error;
pub mod user;

pub use demo::DemoConfig;
pub use error::{Error, Result};
pub use user::{BuilderState, User, UserClass, UserFluentInterface, UserStruct, UserView};
