//! Data models and structures for the cleanup tool

pub mod config;
pub mod report;

pub use config::{OutputFormat, PartialSettings, RunMode, Settings};
pub use report::{FileAction, FileChange, ImportFixStatus, RunReport};
