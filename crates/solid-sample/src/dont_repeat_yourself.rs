//! # Don't Repeat Yourself
//!
//! Authentication, admin and registration-data checks are each defined once as a predicate
//! and reused by every call site. The [`duplicated`] submodule keeps the version with the
//! conditions written inline so the two can be compared.

use demo_framework::{Console, Demo, DemoError};
use serde::{Deserialize, Deserializer, Serialize};

/// The parts of a web user the access checks look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    pub is_authenticated: bool,
    pub is_admin: bool,
}

impl User {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn member() -> Self {
        Self {
            is_authenticated: true,
            is_admin: false,
        }
    }

    pub fn admin() -> Self {
        Self {
            is_authenticated: true,
            is_admin: true,
        }
    }
}

/// Registration form data.
///
/// The outer `Option` records whether the key was sent at all; the inner one holds its value,
/// so `{"password": null}` is `Some(None)` and an absent key is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub username: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub password: Option<Option<String>>,
}

impl UserData {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(Some(username.into())),
            password: Some(Some(password.into())),
        }
    }
}

// Only called for keys that appear in the input, null included.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

pub fn is_authenticated(user: &User) -> bool {
    user.is_authenticated
}

/// Admin rights only count for an authenticated user.
pub fn is_admin(user: &User) -> bool {
    user.is_authenticated && user.is_admin
}

/// Both username and password keys must be present; their values are not inspected.
pub fn validate_user_data(user_data: &UserData) -> bool {
    user_data.username.is_some() && user_data.password.is_some()
}

pub fn access_dashboard(console: &Console, user: &User) {
    if is_authenticated(user) {
        console.line("Accessing dashboard");
    } else {
        console.line("Please log in");
    }
}

pub fn access_admin_panel(console: &Console, user: &User) {
    if is_authenticated(user) {
        if is_admin(user) {
            console.line("Accessing admin panel");
        } else {
            console.line("Admin privileges required");
        }
    } else {
        console.line("Please log in");
    }
}

pub fn register_user(console: &Console, user_data: &UserData) {
    if validate_user_data(user_data) {
        console.line("User registered");
    } else {
        console.line("Invalid user data");
    }
}

/// The same call sites before the checks were extracted.
pub mod duplicated {
    use super::{User, UserData};
    use demo_framework::Console;

    pub fn access_dashboard(console: &Console, user: &User) {
        if user.is_authenticated {
            console.line("Accessing dashboard");
        } else {
            console.line("Please log in");
        }
    }

    pub fn access_admin_panel(console: &Console, user: &User) {
        if user.is_authenticated {
            if user.is_admin {
                console.line("Accessing admin panel");
            } else {
                console.line("Admin privileges required");
            }
        } else {
            console.line("Please log in");
        }
    }

    pub fn register_user(console: &Console, user_data: &UserData) {
        if user_data.username.is_some() && user_data.password.is_some() {
            console.line("User registered");
        } else {
            console.line("Invalid user data");
        }
    }
}

pub struct DontRepeatYourselfDemo;

impl Demo for DontRepeatYourselfDemo {
    fn name(&self) -> &'static str {
        "dont-repeat-yourself"
    }

    fn summary(&self) -> &'static str {
        "Repeated checks live in one reusable function each"
    }

    fn run(&self, console: &Console) -> Result<(), DemoError> {
        access_dashboard(console, &User::anonymous());
        access_dashboard(console, &User::member());
        access_admin_panel(console, &User::member());
        access_admin_panel(console, &User::admin());

        let complete = UserData::new("alice", "s3cret");
        let missing_password = UserData {
            username: Some(Some("a".to_string())),
            password: None,
        };
        register_user(console, &complete);
        register_user(console, &missing_password);
        Ok(())
    }
}
