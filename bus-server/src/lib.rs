//! Bus route advisor server.
//!
//! A web application that answers: "I'm standing here and want to get
//! there: which bus do I take, where do I board, and where do I get off?"

pub mod advisor;
pub mod cache;
pub mod catalog;
pub mod domain;
pub mod geocode;
pub mod web;
