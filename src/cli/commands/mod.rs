//! Command execution for the bundle build front-end.

pub mod build;
