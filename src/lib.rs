//! fitness-webapp - Fitness WebApp API and README tooling
//!
//! This library backs two binaries:
//! - `fitness-api`: the HTTP service exposing the welcome endpoint
//! - `update-readme-info`: regenerates the README technology section
//!   from requirements.txt

pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod readme;
pub mod server;
pub mod updater;
