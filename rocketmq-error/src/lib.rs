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

//! # RocketMQ Error Handling
//!
//! Error types shared by the RocketMQ SASL crates.
//!
//! ```rust
//! use rocketmq_error::RocketMQError;
//! use rocketmq_error::RocketMQResult;
//! use rocketmq_error::SaslError;
//!
//! fn check(name: &str, allowed: &[&str]) -> RocketMQResult<()> {
//!     if !allowed.contains(&name) {
//!         return Err(SaslError::mechanism_not_permitted(name, allowed.iter().map(|s| s.to_string())).into());
//!     }
//!     Ok(())
//! }
//! # assert!(check("PLAIN", &["PLAIN"]).is_ok());
//! # assert!(check("XOAUTH2", &["PLAIN"]).is_err());
//! ```

pub mod sasl_error;
pub mod unified;

pub use sasl_error::SaslError;
pub use unified::RocketMQError;
pub use unified::RocketMQResult;
