pub mod analyzer;
pub mod error;
pub mod freq;
pub mod text;
// reports is a module of the binary crate (main.rs); everything the
// pipeline needs to be tested against lives here.
