pub mod memory;
pub mod rendering;
