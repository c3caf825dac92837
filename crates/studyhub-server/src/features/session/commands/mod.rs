//! Write operations for the session

pub mod login;
pub mod logout;

pub use login::{LoginCommand, LoginError};
pub use logout::LogoutError;
