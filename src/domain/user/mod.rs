// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, ResetToken, User, UserUpdate};
pub use repository::UserRepository;
pub use value_objects::{
    ApprovalStatus, Capability, DisplayName, Email, PasswordHash, Role, UserId,
};
