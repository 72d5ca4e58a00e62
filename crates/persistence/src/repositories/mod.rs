//! Repository implementations for database operations.

pub mod contact;
pub mod user;

pub use contact::ContactRepository;
pub use user::UserRepository;
