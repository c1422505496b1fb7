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

//! Registry-backed mechanism finder.

use std::sync::Arc;

use cheetah_string::CheetahString;
use rocketmq_error::SaslError;
use tracing::info;

use crate::factory::ServerSaslFactory;
use crate::finder::SaslMechanismFinder;
use crate::registry::ActiveMechanismSet;
use crate::registry::DefaultMechanismList;
use crate::registry::FactoryRegistry;

/// Default [`SaslMechanismFinder`] over an injected set of factories.
///
/// # Example
///
/// ```rust,ignore
/// let finder = DefaultSaslMechanismFinder::initialize(vec![plain_factory, anonymous_factory]);
/// assert_eq!(finder.get_sasl_mechanisms(), finder.get_default_sasl_mechanisms());
/// ```
pub struct DefaultSaslMechanismFinder {
    registry: FactoryRegistry,
    active: ActiveMechanismSet,
}

impl DefaultSaslMechanismFinder {
    /// Builds the registry and default list from the discovered factories, in
    /// discovery order, and starts advertising the full default list.
    pub fn initialize<I>(factories: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn ServerSaslFactory>>,
    {
        let registry = FactoryRegistry::build(factories);
        let defaults = DefaultMechanismList::compute(&registry);
        info!(
            "SASL registry built with {} mechanism(s), default mechanisms: {:?}",
            registry.len(),
            defaults.as_slice()
        );
        Self {
            registry,
            active: ActiveMechanismSet::new(defaults),
        }
    }

    #[inline]
    pub fn registry(&self) -> &FactoryRegistry {
        &self.registry
    }

    #[inline]
    pub fn default_mechanisms(&self) -> &DefaultMechanismList {
        self.active.defaults()
    }
}

impl SaslMechanismFinder for DefaultSaslMechanismFinder {
    fn get_default_sasl_mechanisms(&self) -> Vec<CheetahString> {
        self.active.defaults().to_vec()
    }

    fn get_sasl_mechanisms(&self) -> Vec<CheetahString> {
        self.active.get()
    }

    fn get_factory(&self, mechanism: &str) -> Option<Arc<dyn ServerSaslFactory>> {
        self.registry.lookup(mechanism)
    }

    fn set_sasl_mechanisms(&self, mechanisms: &[CheetahString]) -> Result<(), SaslError> {
        self.active.set(mechanisms)
    }
}
