pub mod analyzers;
pub mod cleaner;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod stats;
