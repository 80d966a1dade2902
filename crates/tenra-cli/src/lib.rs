//! # tenra-cli — Demo Drivers
//!
//! Scripted scenarios that drive the engine end to end against an
//! in-memory ledger and asset registry. Useful for eyeballing the fund
//! flows without writing a test.

pub mod dispute;
pub mod rental;
