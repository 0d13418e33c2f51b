//! Composition of sampled indices into fixed-length passwords
use crate::alphabet::Alphabet;
use crate::entropy::EntropySource;
use crate::error::PasswordError;
use crate::sampler::sample_index;
use log::debug;
use std::convert::TryFrom;
use std::fmt;

pub const DEFAULT_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub length: usize,
    pub alphabet: Alphabet,
}

impl GenerationRequest {
    pub fn new(length: usize, alphabet: Alphabet) -> Self {
        GenerationRequest { length, alphabet }
    }

    /// Strength estimate of a password built from this request, `length * log2(size)`
    pub fn entropy_bits(&self) -> f64 {
        if self.alphabet.is_empty() {
            return 0.0;
        }

        self.length as f64 * (self.alphabet.len() as f64).log2()
    }

    fn validate(&self) -> Result<u32, PasswordError> {
        if self.length == 0 {
            return Err(PasswordError::InvalidRequest(
                "Password length must be positive".to_string(),
            ));
        }

        if self.alphabet.len() < 2 {
            return Err(PasswordError::InvalidRequest(format!(
                "Alphabet needs at least 2 symbols, got {}",
                self.alphabet.len()
            )));
        }

        u32::try_from(self.alphabet.len()).map_err(|_| {
            PasswordError::InvalidRequest("Alphabet does not fit in 32 bits".to_string())
        })
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        GenerationRequest::new(DEFAULT_LENGTH, Alphabet::default())
    }
}

/// Password produced by [`build`].
///
/// `Debug` hides the value so secrets don't end up in logs by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedSecret(String);

impl GeneratedSecret {
    /// Wraps a value known to satisfy the request it was built for
    pub(crate) fn from_trusted(value: String) -> Self {
        GeneratedSecret(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for GeneratedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedSecret(<{} chars>)", self.len())
    }
}

/// Generates a password as described by `request`
///
/// Each position gets its own independent draw from `ent`, in order. Invalid
/// requests fail before the entropy source is touched, and a failing source
/// aborts the whole password, nothing partial is returned.
///
/// # Example
/// ```
/// use pass_forge::entropy::OsEntropy;
/// use pass_forge::generator::{build, GenerationRequest};
///
/// let mut ent = OsEntropy::acquire();
/// let secret = build(&GenerationRequest::default(), &mut ent).unwrap();
/// assert_eq!(secret.len(), 16);
/// ```
pub fn build(
    request: &GenerationRequest,
    ent: &mut dyn EntropySource,
) -> Result<GeneratedSecret, PasswordError> {
    let size = request.validate()?;

    let mut password = String::with_capacity(request.length);

    for _ in 0..request.length {
        let index = sample_index(ent, size)? as usize;

        // sample_index stays below size, which is the alphabet length
        password.push(request.alphabet.symbols()[index]);
    }

    debug!(
        "Generated password of {} symbols from alphabet of {}, ~{:.1} bits",
        request.length,
        size,
        request.entropy_bits()
    );

    Ok(GeneratedSecret::from_trusted(password))
}
