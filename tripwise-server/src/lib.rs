//! Ride fare comparison server.
//!
//! Answers: "If I take a cab between these two stations right now,
//! what will each provider charge and how long will it take?"

pub mod compare;
pub mod config;
pub mod domain;
pub mod fares;
pub mod stations;
pub mod web;
