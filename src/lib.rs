//! hcae - Hybrid-cloud automation engine
//!
//! This library provides the building blocks behind the `hcae` binary:
//! retrying TCP reachability probes with webhook alerting, and Ansible
//! inventory generation from Terraform outputs.

pub mod alert;
pub mod cli;
pub mod config;
pub mod inventory;
pub mod logging;
pub mod probe;
