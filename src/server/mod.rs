//! HTTP front

pub mod api;
