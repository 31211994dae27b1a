//! Shared test helpers for `saleslens-core` integration tests.
//!
//! In-memory implementations of the source and sink ports plus record
//! fixtures, so scenario tests can focus on behaviour.

#![allow(dead_code)]

pub mod fixtures;
pub mod sources;
