//! # redactguard-config
//!
//! Configuration loading and validation for embedding applications:
//! the asterisk-run cap and where patterns come from, layered as
//! defaults → `config/redactguard.yaml` → `REDACTGUARD_*` environment
//! overrides, validated with `validator` before use.

mod error;
mod settings;
mod validation;

pub use error::ConfigError;
pub use settings::MaskSettings;
