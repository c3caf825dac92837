//! Read operations for the session

pub mod current;

pub use current::CurrentSessionResponse;
