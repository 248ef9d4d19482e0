//! HTTP handlers for movies, directors and genres.

pub mod catalog;
pub mod movie;
