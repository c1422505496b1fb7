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

//! Name to factory mapping built once from the discovered factories.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use cheetah_string::CheetahString;
use tracing::debug;
use tracing::warn;

use crate::factory::ServerSaslFactory;

/// Immutable mapping from mechanism name to the winning factory.
///
/// When several factories claim the same name, the one with the strictly highest
/// precedence wins. On an exact precedence tie the factory seen first in the
/// discovery sequence is kept; see [`FactoryRegistry::supersedes`].
#[derive(Default)]
pub struct FactoryRegistry {
    factories: HashMap<CheetahString, Arc<dyn ServerSaslFactory>>,
}

impl FactoryRegistry {
    /// Folds `factories` into a registry in discovery order.
    pub fn build<I>(factories: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn ServerSaslFactory>>,
    {
        let mut map: HashMap<CheetahString, Arc<dyn ServerSaslFactory>> = HashMap::new();
        for incoming in factories {
            match map.entry(incoming.mechanism()) {
                Entry::Vacant(slot) => {
                    slot.insert(incoming);
                }
                Entry::Occupied(mut slot) => {
                    let existing_precedence = slot.get().precedence();
                    if Self::supersedes(incoming.precedence(), existing_precedence) {
                        warn!(
                            "SASL factory for mechanism {} with precedence {} replaces one with precedence {}",
                            slot.key(),
                            incoming.precedence(),
                            existing_precedence
                        );
                        slot.insert(incoming);
                    } else {
                        warn!(
                            "SASL factory for mechanism {} with precedence {} ignored, keeping one with precedence {}",
                            slot.key(),
                            incoming.precedence(),
                            existing_precedence
                        );
                    }
                }
            }
        }
        Self { factories: map }
    }

    /// Merge policy for two factories of the same name: the later one replaces the
    /// earlier one only with strictly greater precedence, so ties keep the first seen.
    #[inline]
    pub fn supersedes(incoming: i32, existing: i32) -> bool {
        incoming > existing
    }

    /// Returns the factory registered for `mechanism`.
    ///
    /// `None` means the mechanism is not supported by this server.
    pub fn lookup(&self, mechanism: &str) -> Option<Arc<dyn ServerSaslFactory>> {
        let factory = self.factories.get(mechanism).cloned();
        if factory.is_none() {
            debug!("no SASL factory registered for mechanism {}", mechanism);
        }
        factory
    }

    pub fn contains(&self, mechanism: &str) -> bool {
        self.factories.contains_key(mechanism)
    }

    pub fn factories(&self) -> impl Iterator<Item = &Arc<dyn ServerSaslFactory>> {
        self.factories.values()
    }

    pub fn mechanisms(&self) -> impl Iterator<Item = &CheetahString> {
        self.factories.keys()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
