//! Application constants

/// Base URL of the remote blog API
pub const API_BASE: &str = "http://localhost:5178";
