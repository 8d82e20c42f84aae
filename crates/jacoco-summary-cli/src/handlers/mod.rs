//! Command handlers

pub mod summary;
