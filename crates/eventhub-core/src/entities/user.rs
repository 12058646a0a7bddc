//! User entity - an account that owns events

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// User account (the password hash never leaves the repository layer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub email: String,
    pub name: String,
    pub registration_date: DateTime<Utc>,
}

/// Data for creating a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
}

impl NewUser {
    /// Emails are compared case-insensitively, so they are stored lowercased
    pub fn new(email: &str, name: String) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            name,
        }
    }
}
