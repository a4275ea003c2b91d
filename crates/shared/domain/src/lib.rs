//! # Domain Models
//!
//! Pure site types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no timers, no rendering. Just data and simple helpers.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod favicon;
pub mod features;
pub mod form;
pub mod images;
pub mod notification;
