//! Consolidated test utilities for rainbowpath
//!
//! This module provides unified testing utilities for integration tests,
//! running the real binary against an isolated home directory.

pub mod assertions;
pub mod fixtures;
pub mod sandbox;
