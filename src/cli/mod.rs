// src/cli/mod.rs
pub mod cli;
pub mod run;
pub mod run_discovery;
pub mod run_export;
pub mod run_research;
pub mod run_send_emails;
pub mod show_stats;
