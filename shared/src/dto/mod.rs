//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the remote blog API over REST.
//!
//! ## Module Organization
//!
//! - [`auth`] - Sign-in and sign-up DTOs
//! - [`post`] - Post resource DTOs
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/signin
//! Content-Type: application/json
//!
//! {
//!   "username": "alice",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//! }
//! ```

pub mod auth;
pub mod post;

pub use auth::*;
pub use post::*;
