//! Live adapters for real external interactions.

pub mod clock;
pub mod editor;
pub mod filesystem;
pub mod id_gen;
pub mod issues;
