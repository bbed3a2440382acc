//! Channel coding for the DMR / P25 common air interface (CAI)
//!
//! This crate implements the base (17,9,5) binary cyclic block code shared by
//! the DMR and P25 air interfaces, with generator polynomial
//!
//! > g(x) = x⁸ + x⁵ + x⁴ + x³ + 1
//!
//! It can detect up to 4 errors or correct up to 2 errors.
//!
//! Two views of the same code live here:
//! - [`cyclic17`] — the runtime encoder/decoder, with all tables derived from
//!   the generator matrix at compile time
//! - [`tablegen`] — the offline derivation pipeline that prints the
//!   parity-check matrix and syndrome/pattern table as source constants

pub mod cyclic17;
pub mod tablegen;
