//! Write operations for the users feature

pub mod login;
pub mod register;

pub use login::{LoginUserError, LoginUserResponse};
pub use register::{RegisterUserError, RegisterUserResponse};
