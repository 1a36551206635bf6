//! Re-exports of the parameter types.

pub use crate::{depositor::DepositorParams, errors::ConfigurationError};
