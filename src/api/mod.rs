//! HTTP API Client
//!
//! Communication with the TaskDeck REST backend.

pub mod client;

pub use client::*;
