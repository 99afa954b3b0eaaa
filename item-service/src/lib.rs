//! Item Service - stateless item CRUD over a shared PostgreSQL table.
//!
//! Any number of identical instances can run behind a load balancer; each one
//! reports its hostname so callers can observe which replica answered.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;
