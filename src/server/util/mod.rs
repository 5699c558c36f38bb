//! Utility helpers shared across the server.
