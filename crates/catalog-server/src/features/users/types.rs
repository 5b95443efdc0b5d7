//! Wire types for the users feature

use serde::Deserialize;

/// Submitted registration record. All fields optional; the registration
/// validator decides what is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Submitted login record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}
