//! Shared test utilities for the story-presets workspace.
//!
//! This crate provides fixtures reused across crate test suites. It is a
//! dev-dependency only: never published.
//!
//! # Modules
//!
//! - [`recorder`]: thread-safe log of handler invocations
//! - [`project`]: [`TestProject`] builder for layered preset configs

pub mod project;
pub mod recorder;

pub use project::TestProject;
pub use recorder::Recorder;
