//! Constraint-aware product recommendation service.
//!
//! Scores a fixed product catalog against a buyer's budget, brand, feature and
//! use-case preferences and returns a ranked, explained top-K list over HTTP.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
