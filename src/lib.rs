//! Unbiased password generation on top of the operating system CSPRNG
//!
//! Random 32-bit draws are mapped onto an alphabet with rejection sampling,
//! the resulting password is stored as `{ "password": "..." }` in a caller
//! supplied directory.
pub mod alphabet;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod sampler;
pub mod sink;

use entropy::{EntropySource, OsEntropy};
use error::PasswordError;
use generator::{GeneratedSecret, GenerationRequest};
use log::{error, info};
use std::path::Path;

/// Generates a default password with OS entropy and saves it into `output_dir`
pub fn generate(output_dir: &Path) -> Result<GeneratedSecret, PasswordError> {
    let request = GenerationRequest::default();
    let mut ent = OsEntropy::acquire();

    generate_with(&request, &mut ent, output_dir)
}

/// Same as [`generate`], with explicit request and entropy source.
///
/// On a write failure the password is still returned inside
/// [`PasswordError::PersistenceFailure`].
pub fn generate_with(
    request: &GenerationRequest,
    ent: &mut dyn EntropySource,
    output_dir: &Path,
) -> Result<GeneratedSecret, PasswordError> {
    let secret = generator::build(request, ent)?;

    match sink::persist(&secret, output_dir) {
        Ok(_) => Ok(secret),
        Err(source) => Err(PasswordError::PersistenceFailure {
            secret,
            path: output_dir.join(sink::RECORD_FILE_NAME),
            source,
        }),
    }
}

/// Entry point for hosts that hand over a data folder and expect a success flag
pub fn run(data_folder: &Path) -> bool {
    match generate(data_folder) {
        Ok(secret) => {
            info!("Generated password of {} characters", secret.len());
            true
        }
        Err(e) => {
            error!("Password generation failed: {}", e);
            false
        }
    }
}
