//! Core library for the `jtl-report` CLI.
//!
//! This crate turns JMeter results logs (JTL, as XML or CSV) into aggregate
//! metrics or a pass/fail verdict and renders them as a chat notification.
//! The primary user-facing interface is the `jtl-report` command-line
//! application; library APIs may evolve as the CLI grows.
pub mod args;
pub mod config;
pub mod context;
pub mod error;
pub mod jtl;
pub mod metrics;
pub mod notify;
pub mod report;
