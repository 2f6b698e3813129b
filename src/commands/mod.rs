//! CLI commands for symptrace

pub mod ask;
pub mod compare;
pub mod config;
pub mod dispatch;
pub mod graph;
pub mod output;
pub mod render;
pub mod run;
pub mod symptoms;
