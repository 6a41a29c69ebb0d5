//! camelrename: element thumbnail renaming library
//!
//! Applies a fixed kebab-case to camelCase rename table to the SVG
//! thumbnails in a directory, reporting what was renamed and what was missing.

pub mod cli;
pub mod rename;
pub mod report;
pub mod utils;
