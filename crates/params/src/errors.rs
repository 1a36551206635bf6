//! Errors for the depositor parameters.

use thiserror::Error;

/// Error while creating or validating the depositor parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A required collaborator address is the zero address.
    #[error("{field} address cannot be zero")]
    ZeroAddress {
        /// The name of the parameter that holds the zero address.
        field: &'static str,
    },
}
