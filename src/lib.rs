//! Consultant Workload & Capacity Allocation Engine.
//!
//! This crate computes how payroll processing effort spreads across business days,
//! how full each day is relative to a consultant's declared capacity, and whether a
//! consultant or team is over- or under-loaded over a period.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod sources;
