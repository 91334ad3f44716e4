//! feedrank: feed ranking from the command line
//!
//! feedrank reads a JSON file holding an actor profile and a list of candidate
//! documents, then ranks, pages or clusters the candidates with the
//! `feedrank-engine` crate. Thresholds, weights and page sizes come from
//! layered `.feedrank.toml` files.

#![warn(missing_docs)]

pub mod cli;
