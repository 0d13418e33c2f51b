use log::trace;
use rand::rngs::OsRng;
use rand::RngCore;

/// Raw random bytes consumed by a single sampling attempt.
pub type EntropyChunk = [u8; 4];

pub trait EntropySource {
    fn next_chunk(&mut self) -> Result<EntropyChunk, rand::Error>;
}

/// Handle to the operating system CSPRNG.
///
/// Acquired per generation call and released when dropped, so the handle
/// never outlives the request that opened it, error paths included.
pub struct OsEntropy {
    rng: OsRng,
}

impl OsEntropy {
    pub fn acquire() -> Self {
        trace!("Acquired OS entropy handle");
        OsEntropy { rng: OsRng }
    }
}

impl EntropySource for OsEntropy {
    fn next_chunk(&mut self) -> Result<EntropyChunk, rand::Error> {
        let mut out = [0; 4];

        self.rng.try_fill_bytes(&mut out)?;

        Ok(out)
    }
}

impl Drop for OsEntropy {
    fn drop(&mut self) {
        trace!("Released OS entropy handle");
    }
}
