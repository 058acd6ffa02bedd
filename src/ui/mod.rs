//! Terminal presentation layer

pub mod display;
