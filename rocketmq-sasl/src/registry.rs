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

//! SASL Registry Module
//!
//! The three pieces of state behind a mechanism finder:
//!
//! - [`FactoryRegistry`]: immutable name to factory mapping, duplicates merged by precedence
//! - [`DefaultMechanismList`]: immutable, precedence-ordered list of default-permitted names
//! - [`ActiveMechanismSet`]: the currently advertised subset of the default list, replaced
//!   wholesale under a lock

pub mod active_mechanism_set;
pub mod default_mechanism_list;
pub mod factory_registry;

pub use active_mechanism_set::ActiveMechanismSet;
pub use default_mechanism_list::DefaultMechanismList;
pub use factory_registry::FactoryRegistry;
