//! Tagger adapters available from the command line

pub mod command;

pub use command::CommandTagger;
