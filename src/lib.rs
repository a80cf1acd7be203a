//! Nucleotide counting behind two request shapes.
//!
//! One pure analyzer ([`analyzer::analyze`]) counts A/C/G/T occurrences in a
//! DNA sequence. Two [`adapter::RequestAdapter`] variants expose it: an
//! invocation-style adapter (structured event in, `{statusCode, body}`
//! envelope out) and an HTTP adapter (`POST /validate`, JSON in and out).
//! The analyzer holds no state, so any number of requests can run at once.

pub mod adapter;
pub mod analyzer;
pub mod consts;
pub mod server;
