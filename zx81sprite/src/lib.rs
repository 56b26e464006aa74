pub mod types;
pub mod error;
pub mod grid;
pub mod pattern;
pub mod encode;
pub mod asm;
#[cfg(feature = "serde")]
pub mod config;
pub mod convert;
