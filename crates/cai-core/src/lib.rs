//! Core utilities for the CAI coding workspace
//!
//! This crate provides the pieces shared across the channel coding crates:
//! - Small dense GF(2) matrix and bit-vector arithmetic
//! - Logging setup and debug macros

pub mod debug;
pub mod gf2;
