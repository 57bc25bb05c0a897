pub mod recipes;
pub mod users;
