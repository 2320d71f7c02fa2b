//! Basket Core - Shared types library.
//!
//! This crate provides the domain types used across all Basket components:
//! - `cart` - The cart state machine and its durable store adapters
//! - `cli` - Command-line tool for inspecting and mutating a cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async runtime, no storage
//! access. Cart state transitions are pure functions on [`types::CartState`],
//! which keeps the invariants testable without any store wired up.
//!
//! # Modules
//!
//! - [`types`] - Validated newtypes for product ids and prices, plus the
//!   cart entry/state value types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
