//! Core domain types and logic.

pub mod bakery;
pub mod cart;
pub mod catalog;
pub mod config_validation;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod forecast;
pub mod pricing;
pub mod recommendations;
