//! Android build configuration tools for HabitKit
//!
//! This crate models the app module's build configuration:
//! - key.properties parsing
//! - Release signing resolution
//! - Build variant and compile option settings

#![warn(missing_docs)]

pub mod error;
pub mod project;
pub mod properties;
pub mod signing;
