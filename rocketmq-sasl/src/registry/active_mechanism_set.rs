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

//! Currently advertised mechanisms.

use std::sync::Arc;

use cheetah_string::CheetahString;
use parking_lot::RwLock;
use rocketmq_error::SaslError;
use tracing::info;
use tracing::warn;

use crate::registry::DefaultMechanismList;

/// The subset of the default mechanism list currently advertised to clients.
///
/// The list is only ever replaced as a whole: readers take a snapshot of the
/// current `Arc` under the read lock, writers swap in a new one under the write
/// lock. Concurrent [`set`](ActiveMechanismSet::set) calls are serialized by the
/// write lock and readers never see a half-written list.
pub struct ActiveMechanismSet {
    defaults: DefaultMechanismList,
    active: RwLock<Arc<[CheetahString]>>,
}

impl ActiveMechanismSet {
    /// Starts out advertising every default mechanism.
    pub fn new(defaults: DefaultMechanismList) -> Self {
        let active = RwLock::new(defaults.shared());
        Self { defaults, active }
    }

    /// Copy of the currently active mechanism names.
    pub fn get(&self) -> Vec<CheetahString> {
        let snapshot = Arc::clone(&*self.active.read());
        snapshot.to_vec()
    }

    /// Replaces the active set with `candidates`, keeping the caller's order.
    ///
    /// Every candidate must be in the default mechanism list. On the first one that
    /// is not, nothing changes and [`SaslError::MechanismNotPermitted`] is returned.
    pub fn set(&self, candidates: &[CheetahString]) -> Result<(), SaslError> {
        if let Some(rejected) = candidates.iter().find(|c| !self.defaults.contains(c.as_str())) {
            warn!(
                "SASL mechanism {} rejected, default mechanisms are {:?}",
                rejected,
                self.defaults.as_slice()
            );
            return Err(SaslError::mechanism_not_permitted(
                rejected.as_str(),
                self.defaults.as_slice().iter().map(|n| n.as_str()),
            ));
        }

        let replacement: Arc<[CheetahString]> = Arc::from(candidates);
        *self.active.write() = replacement;
        info!("SASL mechanisms set to {:?}", candidates);
        Ok(())
    }

    #[inline]
    pub fn defaults(&self) -> &DefaultMechanismList {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::factory_registry::tests::TestFactory;
    use crate::registry::FactoryRegistry;

    fn names(items: &[&str]) -> Vec<CheetahString> {
        items.iter().map(|s| CheetahString::from_slice(s)).collect()
    }

    fn active_set() -> ActiveMechanismSet {
        let registry = FactoryRegistry::build(vec![
            TestFactory::arc("PLAIN", 1, true),
            TestFactory::arc("ANONYMOUS", 0, true),
            TestFactory::arc("EXTERNAL", 3, true),
            TestFactory::arc("XOAUTH2", 2, false),
        ]);
        ActiveMechanismSet::new(DefaultMechanismList::compute(&registry))
    }

    #[test]
    fn test_initially_equals_defaults() {
        let set = active_set();
        assert_eq!(set.get(), names(&["EXTERNAL", "PLAIN", "ANONYMOUS"]));
        assert_eq!(set.get(), set.defaults().to_vec());
    }

    #[test]
    fn test_set_preserves_caller_order() {
        let set = active_set();
        set.set(&names(&["ANONYMOUS", "EXTERNAL"])).unwrap();
        assert_eq!(set.get(), names(&["ANONYMOUS", "EXTERNAL"]));
    }

    #[test]
    fn test_set_rejects_registered_but_not_default() {
        let set = active_set();
        set.set(&names(&["ANONYMOUS"])).unwrap();

        let err = set.set(&names(&["XOAUTH2"])).unwrap_err();
        assert_eq!(err.rejected_mechanism(), Some("XOAUTH2"));
        assert_eq!(set.get(), names(&["ANONYMOUS"]));
    }

    #[test]
    fn test_set_is_all_or_nothing() {
        let set = active_set();
        let before = set.get();

        let err = set.set(&names(&["PLAIN", "GSSAPI", "ANONYMOUS", "XOAUTH2"])).unwrap_err();
        assert_eq!(
            err,
            SaslError::mechanism_not_permitted("GSSAPI", ["EXTERNAL", "PLAIN", "ANONYMOUS"])
        );
        assert_eq!(set.get(), before);
    }

    #[test]
    fn test_set_is_idempotent() {
        let set = active_set();
        let wanted = names(&["PLAIN", "ANONYMOUS"]);
        set.set(&wanted).unwrap();
        let once = set.get();
        set.set(&wanted).unwrap();
        assert_eq!(set.get(), once);
    }

    #[test]
    fn test_set_empty_advertises_nothing() {
        let set = active_set();
        set.set(&[]).unwrap();
        assert!(set.get().is_empty());
        assert_eq!(set.defaults().len(), 3);
    }

    #[test]
    fn test_get_returns_copy() {
        let set = active_set();
        let mut copy = set.get();
        copy.clear();
        assert_eq!(set.get().len(), 3);
    }
}
