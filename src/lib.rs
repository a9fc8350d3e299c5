pub mod catalog;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod provision;
pub mod report;
