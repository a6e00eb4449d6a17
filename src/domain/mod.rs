//! Domain layer - Core business entities
//!
//! Contains the `User` entity and the transport shapes used to
//! create and update it. No infrastructure concerns live here.

pub mod user;

pub use user::{CreateUserDto, UpdateUserDto, User};
