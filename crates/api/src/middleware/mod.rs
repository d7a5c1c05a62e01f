//! Request extractors for authentication and candidate verification.

pub mod auth;
