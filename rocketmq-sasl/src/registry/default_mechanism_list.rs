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

//! Mechanisms offered by default, computed once from the registry.

use std::sync::Arc;

use cheetah_string::CheetahString;

use crate::registry::FactoryRegistry;

/// Read-only, ordered snapshot of default-permitted mechanism names.
///
/// Ordered by precedence descending. Equal precedences are ordered by mechanism
/// name ascending so the list never depends on map iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultMechanismList {
    mechanisms: Arc<[CheetahString]>,
}

impl DefaultMechanismList {
    pub fn compute(registry: &FactoryRegistry) -> Self {
        let mut permitted: Vec<(i32, CheetahString)> = registry
            .factories()
            .filter(|factory| factory.is_default_permitted())
            .map(|factory| (factory.precedence(), factory.mechanism()))
            .collect();
        permitted.sort_by(|(p1, n1), (p2, n2)| p2.cmp(p1).then_with(|| n1.as_str().cmp(n2.as_str())));

        Self {
            mechanisms: permitted.into_iter().map(|(_, name)| name).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, mechanism: &str) -> bool {
        self.mechanisms.iter().any(|name| name.as_str() == mechanism)
    }

    #[inline]
    pub fn as_slice(&self) -> &[CheetahString] {
        &self.mechanisms
    }

    /// Shared handle to the snapshot; used to seed the active set without copying.
    pub(crate) fn shared(&self) -> Arc<[CheetahString]> {
        Arc::clone(&self.mechanisms)
    }

    pub fn to_vec(&self) -> Vec<CheetahString> {
        self.mechanisms.to_vec()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mechanisms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mechanisms.is_empty()
    }
}
