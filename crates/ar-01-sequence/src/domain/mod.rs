pub mod errors;
pub mod series;
