//! Unbiased mapping of raw entropy onto `[0, M)`.
//!
//! Every chunk is read as a big-endian `u32`. Values at or above the largest
//! multiple of `M` that fits in 2^32 are thrown away and a fresh chunk is
//! drawn, so each index is equally likely regardless of `M`.
use crate::entropy::EntropySource;
use crate::error::PasswordError;
use log::trace;

/// Returns `floor(2^32 / M) * M`, the exclusive upper bound of accepted draws
pub fn acceptance_limit(alphabet_size: u32) -> u64 {
    let range = 1u64 << 32;
    let size = u64::from(alphabet_size);

    range / size * size
}

/// Draws a uniformly distributed index in `[0, alphabet_size)`.
pub fn sample_index(
    ent: &mut dyn EntropySource,
    alphabet_size: u32,
) -> Result<u32, PasswordError> {
    if alphabet_size < 2 {
        return Err(PasswordError::InvalidRequest(format!(
            "Cannot sample from {} symbols",
            alphabet_size
        )));
    }

    let limit = acceptance_limit(alphabet_size);

    loop {
        let value = u32::from_be_bytes(ent.next_chunk()?);

        if u64::from(value) < limit {
            return Ok(value % alphabet_size);
        }

        trace!("Rejected draw above limit {} for size {}", limit, alphabet_size);
    }
}
