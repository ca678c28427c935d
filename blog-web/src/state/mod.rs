//! Reactive application state

pub mod session;
