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

//! Server-side SASL factory and handler contracts.

use std::fmt;

use cheetah_string::CheetahString;

/// Outcome of a finished SASL exchange.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SaslResult {
    user: Option<CheetahString>,
    success: bool,
}

impl SaslResult {
    pub fn success(user: impl Into<CheetahString>) -> Self {
        Self {
            user: Some(user.into()),
            success: true,
        }
    }

    /// Successful exchange with no authenticated identity (e.g. ANONYMOUS).
    pub fn anonymous() -> Self {
        Self {
            user: None,
            success: true,
        }
    }

    pub fn failure() -> Self {
        Self::default()
    }

    #[inline]
    pub fn user(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.as_str())
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Per-connection server handler for one SASL mechanism.
///
/// Handlers are created by [`ServerSaslFactory::create`] and driven by the
/// handshake layer, one instance per connection.
pub trait ServerSasl: Send {
    /// Mechanism name this handler speaks.
    fn name(&self) -> &str;

    /// Consumes a client response and returns the next challenge, or `None` once
    /// the exchange is complete and [`result`](ServerSasl::result) is available.
    fn process_sasl(&mut self, response: &[u8]) -> Option<Vec<u8>>;

    fn result(&self) -> Option<SaslResult>;
}

/// Pluggable factory for one SASL mechanism.
///
/// Multiple factories may claim the same mechanism name; the registry keeps the one
/// with the highest [`precedence`](ServerSaslFactory::precedence).
pub trait ServerSaslFactory: Send + Sync {
    /// SASL mechanism name, e.g. `PLAIN`.
    fn mechanism(&self) -> CheetahString;

    /// Ranks competing factories of the same name and orders the default offer list.
    fn precedence(&self) -> i32;

    /// Whether the mechanism is offered without explicit operator opt-in.
    fn is_default_permitted(&self) -> bool;

    fn create(&self) -> Box<dyn ServerSasl>;
}

impl fmt::Debug for dyn ServerSaslFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSaslFactory")
            .field("mechanism", &self.mechanism())
            .field("precedence", &self.precedence())
            .field("default_permitted", &self.is_default_permitted())
            .finish()
    }
}
