// Copyright 2023 The RocketMQ Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unified error type for the SASL crates.

use thiserror::Error;

pub use crate::sasl_error::SaslError;

/// Main error type for all RocketMQ SASL operations
#[derive(Debug, Error)]
pub enum RocketMQError {
    // ============================================================================
    // SASL Errors
    // ============================================================================
    /// Mechanism validation and finder lifecycle errors
    #[error(transparent)]
    Sasl(#[from] SaslError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Configuration could not be read or deserialized
    #[error("Configuration parse failed for key '{key}': {reason}")]
    ConfigParseFailed { key: &'static str, reason: String },
}

impl RocketMQError {
    /// Create a configuration parse error
    #[inline]
    pub fn config_parse_failed(key: &'static str, reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            key,
            reason: reason.into(),
        }
    }

    /// Returns the SASL error if this error wraps one.
    pub fn as_sasl(&self) -> Option<&SaslError> {
        match self {
            RocketMQError::Sasl(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "with_config")]
impl From<config::ConfigError> for RocketMQError {
    fn from(e: config::ConfigError) -> Self {
        Self::ConfigParseFailed {
            key: "unknown",
            reason: e.to_string(),
        }
    }
}

/// Result type alias for RocketMQ operations
pub type RocketMQResult<T> = std::result::Result<T, RocketMQError>;
