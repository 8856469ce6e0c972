//! Output rendering

pub mod block;

pub use block::write_block;
