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

//! SASL Factory Module
//!
//! Capability traits implemented by pluggable SASL mechanisms. A factory carries the
//! metadata the registry needs (name, precedence, default permission) and creates a
//! per-connection [`ServerSasl`] handler for the handshake layer.

pub mod server_sasl_factory;

pub use server_sasl_factory::SaslResult;
pub use server_sasl_factory::ServerSasl;
pub use server_sasl_factory::ServerSaslFactory;
