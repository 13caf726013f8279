//! BIDUA Core - Domain types and pricing logic.
//!
//! This crate holds everything the BIDUA components agree on:
//! - `storefront` - Public-facing storefront and partner pages
//! - `cli` - Offline calculator and shipping tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no sessions. The storefront keeps a [`cart::Cart`] in the visitor's session
//! and calls into here for every total it shows.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, contact fields and statuses
//! - [`shipping`] - Flat-rate shipping tiers
//! - [`cart`] - Cart lines and totals
//! - [`calculator`] - Recipe cost and margin calculator
//! - [`order`] - Checkout details and receipts
//! - [`catalog`] - Fixed product, stock and partner data
//! - [`brpp`] - Partner program membership
//! - [`auth`] - Demonstration login

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod brpp;
pub mod calculator;
pub mod cart;
pub mod catalog;
pub mod order;
pub mod shipping;
pub mod types;

pub use types::*;
