pub mod args;
pub mod engine;
pub mod errors;
pub mod persistence;
pub mod report;
pub mod shell;
