//! Caja de Herramientas command-line tool
//!
//! Validates, filters and inspects a catalog document with the same core
//! engine the web page runs.

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod report;
