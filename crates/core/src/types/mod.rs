//! Core types for the BIDUA storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod contact;
pub mod id;
pub mod price;
pub mod status;

pub use contact::{ContactError, Email, Phone, Pincode};
pub use id::*;
pub use price::{discount_percent, format_inr, format_inr_f64, format_number};
pub use status::*;
