pub mod cli;
pub mod commands;
pub mod config;
pub mod fragment;
pub mod telemetry;
pub mod tui;
pub mod views;

pub use runsim_core as core;

pub use runsim_core::AppConfig;
pub use fragment::Fragment;
