pub mod card;
pub mod errors;
