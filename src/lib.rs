//! Email Pattern Service - user records and address pattern inference
//!
//! This crate stores people split into name parts, numbers records that share
//! a naming shape at the same domain, and guesses the likely address of a
//! person at a company domain.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
