//! Core library for mkinfo.
//!
//! Loads a version value from a file and stamps it into text templates by literal
//! replacement of the [`renderer::PLACEHOLDER`] token. The [`pipeline`] module ties
//! the steps together; the `mkinfo` binary is a thin CLI over [`pipeline::run`].

pub mod config;
pub mod error;
pub mod pipeline;
pub mod renderer;
pub mod version;
