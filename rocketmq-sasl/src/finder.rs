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

//! SASL Mechanism Finder Module
//!
//! Facade used by the authentication handshake: which mechanisms to advertise and
//! which factory handles a client-selected mechanism.
//!
//! # Lifecycle
//!
//! - **Uninitialized**: no finder exists yet
//! - **Ready**: [`DefaultSaslMechanismFinder::initialize`] has built the immutable
//!   registry and default list; only the active set changes afterwards
//!
//! The composition root builds the finder once before accepting connections, either
//! keeping it as an owned `Arc` or publishing it through [`install`].

pub mod default_sasl_mechanism_finder;
pub mod sasl_mechanism_finder;

use std::sync::Arc;
use std::sync::OnceLock;

pub use default_sasl_mechanism_finder::DefaultSaslMechanismFinder;
use rocketmq_error::RocketMQResult;
use rocketmq_error::SaslError;
pub use sasl_mechanism_finder::SaslMechanismFinder;
use tracing::info;

static GLOBAL_FINDER: OnceLock<Arc<DefaultSaslMechanismFinder>> = OnceLock::new();

/// Publishes `finder` as the process-wide finder.
///
/// Can succeed only once per process; later calls return
/// [`SaslError::AlreadyInitialized`] and leave the installed finder in place.
pub fn install(finder: DefaultSaslMechanismFinder) -> RocketMQResult<Arc<DefaultSaslMechanismFinder>> {
    let finder = Arc::new(finder);
    GLOBAL_FINDER
        .set(Arc::clone(&finder))
        .map_err(|_| SaslError::AlreadyInitialized)?;
    info!(
        "SASL mechanism finder installed, default mechanisms: {:?}",
        finder.get_default_sasl_mechanisms()
    );
    Ok(finder)
}

/// The finder published by [`install`].
pub fn global() -> RocketMQResult<Arc<DefaultSaslMechanismFinder>> {
    GLOBAL_FINDER
        .get()
        .cloned()
        .ok_or_else(|| SaslError::NotInitialized.into())
}
