//! vocabdrill-core — vocabulary book, drill rules, and the trainer loop.
//!
//! This crate holds everything the `vocabdrill` binary needs except argument
//! parsing: the built-in Polish/English vocabulary, the loader for extra
//! vocabulary files, answer checking, session scoring, and the interactive
//! session itself.

pub mod book;
mod builtin;
pub mod drill;
pub mod error;
pub mod loader;
pub mod model;
pub mod session;
pub mod trainer;
