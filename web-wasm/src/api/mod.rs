//! Remote resources

pub mod catalog;
