pub mod comment;
pub mod health;
