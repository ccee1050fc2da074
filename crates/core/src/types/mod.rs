//! Core types for Kalspire.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod id;

pub use catalog::{Category, ColorVariant, Product};
pub use id::*;
