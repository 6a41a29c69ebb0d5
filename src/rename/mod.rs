//! Rename module - the rename table and the batch renamer that applies it

pub mod batch;
pub mod error;
pub mod table;

pub use batch::*;
pub use error::RenameError;
pub use table::*;
