pub mod credential;
pub mod errors;
pub mod identity;
