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

use std::sync::Arc;

use cheetah_string::CheetahString;
use rocketmq_error::SaslError;

use crate::factory::ServerSaslFactory;

/// Looks up SASL mechanisms for the authentication handshake.
pub trait SaslMechanismFinder: Send + Sync {
    /// Mechanisms offered when no restriction is configured.
    fn get_default_sasl_mechanisms(&self) -> Vec<CheetahString>;

    /// Mechanisms currently advertised to connecting clients.
    ///
    /// See [`set_sasl_mechanisms`](SaslMechanismFinder::set_sasl_mechanisms).
    fn get_sasl_mechanisms(&self) -> Vec<CheetahString>;

    /// Finds the factory for a mechanism name such as `PLAIN`.
    ///
    /// Resolves against every registered factory, independent of what is currently
    /// advertised. `None` means the mechanism is not supported.
    fn get_factory(&self, mechanism: &str) -> Option<Arc<dyn ServerSaslFactory>>;

    /// Restricts the advertised mechanisms to `mechanisms`, which must all be
    /// default mechanisms. On error the advertised set is left unchanged.
    fn set_sasl_mechanisms(&self, mechanisms: &[CheetahString]) -> Result<(), SaslError>;
}
