//! Feature analyzers
//!
//! Each analyzer is a pure function of `(transaction, history)` that
//! returns a feature vector over its own disjoint key namespace.

pub mod amounts;
pub mod calendar;
pub mod indicators;
pub mod periodicity;
pub mod refund;
pub mod temporal;
pub mod user;
pub mod vendor;
