pub mod export;
pub mod input;
pub mod packer;
pub mod render;
pub mod types;
