//! Core utilities shared by the simulation and the wasm facade

#[macro_use]
pub mod console;
