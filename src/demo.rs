//! Demo driver - builds one user with each builder flavour and prints it
//!
//! ## Output
//!
//! ```text
//! Fluent with struct
//! Name: Pippo
//! Age: 30
//!
//! Fluent with class
//! ...
//! ```

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::user::{User, UserClass, UserStruct, UserView};

/// Values fed to every builder by [`run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Name given to each user.
    pub name: String,
    /// Age given to each user.
    pub age: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            name: "Pippo".to_string(),
            age: 30,
        }
    }
}

impl DemoConfig {
    /// Create the default configuration (`Pippo`, 30).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON, e.g. `{"name":"Pippo","age":30}`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the JSON is malformed or a field is missing.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the age.
    #[must_use]
    pub const fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }
}

/// Write all three demonstrations to `out`.
///
/// Sections are separated by one blank line; the last one has no trailing
/// blank line.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if writing fails.
pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<()> {
    let user_struct = UserStruct::default()
        .with_name(config.name.as_str())
        .with_age(config.age)
        .build();
    write_section(out, "Fluent with struct", &user_struct)?;
    writeln!(out)?;

    let user_class = UserClass::default()
        .with_name(config.name.as_str())
        .with_age(config.age)
        .build();
    write_section(out, "Fluent with class", &user_class)?;
    writeln!(out)?;

    let user = User::builder()
        .with_name(config.name.as_str())?
        .with_age(config.age)?
        .build()?;
    write_section(out, "Fluent with interface class", &user)?;

    out.flush()?;
    Ok(())
}

/// Render the demonstrations into a `String`.
///
/// # Errors
///
/// Returns an error only if the report is not valid UTF-8, which cannot
/// happen for UTF-8 names.
pub fn render(config: &DemoConfig) -> Result<String> {
    let mut buf = Vec::new();
    run(&mut buf, config)?;
    String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

fn write_section<W: Write>(out: &mut W, title: &str, user: &impl UserView) -> Result<()> {
    tracing::debug!(title, name = user.name(), age = user.age(), "writing section");
    writeln!(out, "{title}")?;
    writeln!(out, "Name: {}", user.name())?;
    writeln!(out, "Age: {}", user.age())?;
    Ok(())
}
