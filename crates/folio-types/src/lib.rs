//! Foundation types for folio.
//!
//! This crate contains the platform-agnostic types shared by the emulator
//! core and its front ends: input events, terminal configuration, and
//! error types.

pub mod config;
pub mod error;
pub mod input;
