//! WebAssembly bindings for the 2A03 core.
//!
//! This module exposes a console CPU built from an iNES image to JavaScript,
//! for browser-based stepping and state inspection.

pub mod api;

pub use api::NesCore;
