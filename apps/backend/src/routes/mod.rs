//! HTTP route handlers

pub mod answers;
pub mod words;
