// Library target for integration tests and criterion benchmarks.
// The binary entry point is main.rs; this file re-declares the module tree so
// that harnesses can import types via `ahkmap::script::*` / `ahkmap::render::*`.
// The UI shell is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: the parsing and drawing pipeline
pub mod keyboard;
pub mod label;
pub mod render;
pub mod script;

// Private: terminal shell
mod app;
mod config;
mod ui;
