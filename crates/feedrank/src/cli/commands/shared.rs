//! Shared helpers for command implementations.

use std::{path::Path, process::ExitCode};

use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::cli::input::RankInput;

/// Loads an input file, printing a consistent error on failure.
pub fn load_input(path: &Path) -> Result<RankInput, ExitCode> {
    let input = RankInput::load(path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })?;
    debug!(
        path = %path.display(),
        candidates = input.candidates.len(),
        interests = input.profile.interests.len(),
        history = input.profile.history.len(),
        "loaded input"
    );
    Ok(input)
}

/// A seeded random source, or a fresh one when no seed is given.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
