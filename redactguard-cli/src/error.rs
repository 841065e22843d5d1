use redactguard_config::ConfigError;
use redactguard_core::MaskError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("pattern compilation error: {0}")]
    Mask(#[from] MaskError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
