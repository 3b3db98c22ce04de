//! Go source fragments for mock expectation helpers.
//!
//! Each fragment is a small `Display` type rendering one syntactic slice of the
//! output file. Larger fragments are composed from smaller ones by direct calls,
//! and `MockFileFragment` lays out the complete file.

pub(crate) mod body;
pub(crate) mod file;
pub(crate) mod literals;
pub(crate) mod mock_api;
pub(crate) mod mock_type;
pub(crate) mod params;
pub(crate) mod preamble;

#[cfg(test)]
mod tests;

pub(crate) use file::{MockFileFragment, SignatureFragment};
