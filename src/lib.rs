pub mod blocks;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod getters;
pub mod patcher;

pub use error::PatchError;
