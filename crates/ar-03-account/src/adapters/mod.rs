pub mod memory;
pub mod recording;
