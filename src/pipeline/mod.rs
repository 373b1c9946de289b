//! Staged analysis pipeline
//!
//! - [`spec`] / [`validation`]: JSON configuration and its validation engine
//! - [`traits`]: stage boundaries
//! - [`artifacts`]: typed results flowing between stages
//! - [`observer`]: hooks for logging and timing at stage boundaries
//! - [`runner`]: statically composed pipeline that runs the stages in order

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;
