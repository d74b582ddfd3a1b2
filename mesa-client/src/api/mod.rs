//! Typed operations over the named tables, views and procedures

mod customers;
mod reservations;
mod stats;
mod tables;

pub use customers::*;
pub use reservations::*;
pub use stats::*;
pub use tables::*;
