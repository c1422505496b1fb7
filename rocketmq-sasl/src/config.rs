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

//! Operator configuration for the advertised SASL mechanisms.

use std::path::Path;

use cheetah_string::CheetahString;
use rocketmq_error::RocketMQError;
use rocketmq_error::RocketMQResult;
use serde::Deserialize;
use serde::Serialize;
use tracing::info;
use tracing::warn;

use crate::finder::SaslMechanismFinder;

/// `saslMechanisms` value: either an acceptor-style comma separated string
/// (`"PLAIN,ANONYMOUS"`) or a list of names.
///
/// Only the joined form is trimmed around each name. List items are passed on
/// verbatim and matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MechanismList {
    Joined(String),
    Items(Vec<String>),
}

impl MechanismList {
    pub fn to_mechanisms(&self) -> Vec<CheetahString> {
        match self {
            MechanismList::Joined(joined) => parse_mechanism_list(joined),
            MechanismList::Items(items) => items.iter().map(|item| CheetahString::from_slice(item)).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaslConfig {
    /// Restriction of the advertised mechanisms; absent means advertise the defaults.
    #[serde(default, alias = "saslmechanisms")]
    pub sasl_mechanisms: Option<MechanismList>,
}

impl SaslConfig {
    /// Loads the configuration from any file format the `config` crate understands.
    pub fn from_file(path: impl AsRef<Path>) -> RocketMQResult<Self> {
        let cfg = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()))
            .build()?;
        let sasl_config = cfg.try_deserialize::<SaslConfig>()?;
        Ok(sasl_config)
    }

    /// Configured restriction, if any.
    pub fn mechanisms(&self) -> Option<Vec<CheetahString>> {
        self.sasl_mechanisms.as_ref().map(MechanismList::to_mechanisms)
    }

    /// Pushes the configured restriction into `finder`.
    ///
    /// Without `saslMechanisms` the finder keeps its current active set. A value that
    /// names no mechanism at all is a configuration error. A rejected mechanism is
    /// returned as-is. In both error cases the finder is left untouched and the
    /// caller decides whether that aborts startup.
    pub fn apply(&self, finder: &dyn SaslMechanismFinder) -> RocketMQResult<()> {
        let Some(mechanisms) = self.mechanisms() else {
            info!("saslMechanisms not configured, advertising {:?}", finder.get_sasl_mechanisms());
            return Ok(());
        };
        if mechanisms.is_empty() {
            warn!(
                "saslMechanisms {:?} names no mechanism, keeping {:?}",
                self.sasl_mechanisms,
                finder.get_sasl_mechanisms()
            );
            return Err(RocketMQError::config_parse_failed(
                "saslMechanisms",
                "no mechanism named",
            ));
        }
        finder.set_sasl_mechanisms(&mechanisms)?;
        Ok(())
    }
}

/// Splits an acceptor-style `saslMechanisms` value such as `"PLAIN, ANONYMOUS"`.
///
/// Whitespace around names is trimmed and empty segments are dropped.
pub fn parse_mechanism_list(value: &str) -> Vec<CheetahString> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(CheetahString::from_slice)
        .collect()
}
