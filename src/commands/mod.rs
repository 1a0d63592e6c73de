//! Command implementations

pub mod assist;

pub use assist::run_assist;
