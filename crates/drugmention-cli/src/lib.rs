//! Library side of the `drugmention` command: zone configuration, logging
//! setup and the pipeline orchestrator.

pub mod config;
pub mod logging;
pub mod pipeline;
