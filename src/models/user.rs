use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A member of staff allowed to log in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaffUser {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl StaffUser {
    pub fn new(email: &str, name: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        }
    }
}

/// The logged-in marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub email: String,
    pub name: String,
    pub logged_in_at: DateTime<Local>,
}

impl SessionUser {
    pub fn from_staff(user: &StaffUser, at: DateTime<Local>) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
            logged_in_at: at,
        }
    }
}
