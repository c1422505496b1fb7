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

//! SASL mechanism registry for the RocketMQ Rust broker.
//!
//! Collects [`ServerSaslFactory`] implementations supplied at startup, keeps the
//! highest-precedence factory per mechanism name, derives the list of mechanisms
//! offered by default, and lets configuration narrow the advertised subset at
//! runtime.
//!
//! ```rust,ignore
//! use rocketmq_sasl::finder;
//! use rocketmq_sasl::DefaultSaslMechanismFinder;
//! use rocketmq_sasl::SaslMechanismFinder;
//!
//! let finder = finder::install(DefaultSaslMechanismFinder::initialize(discovered_factories))?;
//! let offered = finder.get_sasl_mechanisms();
//! let factory = finder.get_factory("PLAIN");
//! ```

pub mod config;
pub mod factory;
pub mod finder;
pub mod registry;

pub use config::parse_mechanism_list;
pub use config::SaslConfig;
pub use factory::SaslResult;
pub use factory::ServerSasl;
pub use factory::ServerSaslFactory;
pub use finder::DefaultSaslMechanismFinder;
pub use finder::SaslMechanismFinder;
pub use registry::ActiveMechanismSet;
pub use registry::DefaultMechanismList;
pub use registry::FactoryRegistry;
