//! Repositories for the read-mostly catalog tables.
//!
//! Each catalog table has a unique `name`, which is how duplicate creations are
//! detected before inserting.

pub mod character;
pub mod planet;
pub mod vehicle;

#[cfg(test)]
mod tests;
