pub mod comparison;
pub mod config;
pub mod error;
pub mod report;
pub mod source;
pub mod vector_entry;
pub mod vector_ops;
