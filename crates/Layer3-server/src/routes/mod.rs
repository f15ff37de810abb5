//! HTTP route handlers

pub mod read;
pub mod run;
