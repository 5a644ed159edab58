pub mod config;
pub mod dataset;
pub mod errors;
pub mod metrics;
pub mod model;
pub mod providers;
pub mod report;
pub mod rubric;
pub mod scoring;
