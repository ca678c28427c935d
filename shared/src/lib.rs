//! # Shared Data Transfer Objects Library
//!
//! This library defines the JSON contract between the blog client and the
//! remote blog API. All DTOs use `serde` for serialization.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Sign-in / sign-up request and response DTOs
//!   - **[`dto::post`]**: Post resource DTOs
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON
//! - Optional fields are omitted from JSON when `None`
//!   (using `#[serde(skip_serializing_if = "Option::is_none")]`)

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
