//! TOPSIS Service - Multi-criteria ranking of alternatives
//!
//! Scores each alternative of a decision table by its relative closeness to
//! an ideal-best and an ideal-worst solution, ranks the alternatives, and
//! serves the computation over HTTP with optional email delivery of results.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
