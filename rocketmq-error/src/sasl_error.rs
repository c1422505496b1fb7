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

//! SASL mechanism registry error types.

use thiserror::Error;

/// Errors raised by the SASL mechanism registry and finder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaslError {
    /// A mechanism outside the default mechanism list was requested for advertisement.
    ///
    /// `allowed` is the full default list at the time of the rejected call.
    #[error(
        "Mechanism '{mechanism}' does not appear in the default mechanism list ([{}])",
        .allowed.join(", ")
    )]
    MechanismNotPermitted { mechanism: String, allowed: Vec<String> },

    /// The process-wide finder was installed twice
    #[error("SASL mechanism finder is already initialized")]
    AlreadyInitialized,

    /// The process-wide finder was queried before installation
    #[error("SASL mechanism finder is not initialized")]
    NotInitialized,
}

impl SaslError {
    #[inline]
    pub fn mechanism_not_permitted<I, S>(mechanism: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MechanismNotPermitted {
            mechanism: mechanism.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// The offending mechanism name, if this is a validation error.
    pub fn rejected_mechanism(&self) -> Option<&str> {
        match self {
            SaslError::MechanismNotPermitted { mechanism, .. } => Some(mechanism.as_str()),
            _ => None,
        }
    }
}
