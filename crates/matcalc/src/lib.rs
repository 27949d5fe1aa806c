//! Library surface of the `matcalc` binary, exposed for integration tests.

pub mod app;
pub mod config;
pub mod errors;
pub mod generate;
pub mod matrix_io;
pub mod triangles_demo;
