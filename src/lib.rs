//! # Routinely Backend
//!
//! Backend for tracking personal routines and schedules on a calendar.
//!
//! Users attach routine templates to a date range; the backend expands each
//! enrollment into one completion record per calendar day in the range. A
//! calendar view aggregates, per day or per month, which personal schedule
//! items and routine completions exist and whether all of them are done.
//! The backend exposes a REST API via Axum.
//!
//! ## Features
//!
//! - **Routine Enrollment**: idempotent expansion of a date range into daily
//!   completion records
//! - **Calendar Aggregation**: daily views and monthly completion rollups
//! - **Schedule CRUD**: personal schedule items independent of routines
//! - **HTTP API**: RESTful JSON endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Domain types and Data Transfer Objects (DTOs)
//! - [`models`]: Calendar month and date-range primitives
//! - [`db`]: Repository pattern and persistence layer
//! - [`services`]: Enrollment expansion and calendar aggregation logic
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types

// Allow large error types - RepositoryError carries rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
