//! Credit Status API Library
//!
//! Classifies a CPF as invalid, unreachable, clean or delinquent by asking a
//! pluggable pendency lookup service, and exposes that analysis over HTTP.
//!
//! # Modules
//!
//! - `api`: API definitions.
//! - `core`: Core business logic.
//! - `analysis`: Credit analyzer.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers and router.
//! - `models`: Pendency records, statuses and HTTP payloads.
//! - `services`: Pendency lookup trait and the static registry.
//! - `validation`: CPF format validation.

pub mod api;
pub mod core;

pub mod analysis;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod validation;
