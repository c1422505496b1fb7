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

//! End-to-end behavior of the default SASL mechanism finder.

use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;

use cheetah_string::CheetahString;
use rocketmq_error::SaslError;
use rocketmq_sasl::DefaultSaslMechanismFinder;
use rocketmq_sasl::SaslMechanismFinder;
use rocketmq_sasl::SaslResult;
use rocketmq_sasl::ServerSasl;
use rocketmq_sasl::ServerSaslFactory;

struct StubSasl(&'static str);

impl ServerSasl for StubSasl {
    fn name(&self) -> &str {
        self.0
    }

    fn process_sasl(&mut self, _response: &[u8]) -> Option<Vec<u8>> {
        None
    }

    fn result(&self) -> Option<SaslResult> {
        Some(SaslResult::failure())
    }
}

struct StubFactory {
    name: &'static str,
    precedence: i32,
    default_permitted: bool,
    handler: &'static str,
}

impl ServerSaslFactory for StubFactory {
    fn mechanism(&self) -> CheetahString {
        CheetahString::from_static_str(self.name)
    }

    fn precedence(&self) -> i32 {
        self.precedence
    }

    fn is_default_permitted(&self) -> bool {
        self.default_permitted
    }

    fn create(&self) -> Box<dyn ServerSasl> {
        Box::new(StubSasl(self.handler))
    }
}

fn factory(name: &'static str, precedence: i32, default_permitted: bool) -> Arc<dyn ServerSaslFactory> {
    Arc::new(StubFactory {
        name,
        precedence,
        default_permitted,
        handler: name,
    })
}

fn names(items: &[&str]) -> Vec<CheetahString> {
    items.iter().map(|s| CheetahString::from_slice(s)).collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn scenario_a() -> DefaultSaslMechanismFinder {
    init_tracing();
    DefaultSaslMechanismFinder::initialize(vec![
        factory("PLAIN", 1, true),
        factory("ANONYMOUS", 0, true),
        factory("XOAUTH2", 2, false),
    ])
}

#[test]
fn scenario_a_default_list_excludes_non_default_factories() {
    let finder = scenario_a();

    assert_eq!(finder.get_default_sasl_mechanisms(), names(&["PLAIN", "ANONYMOUS"]));
    let xoauth2 = finder.get_factory("XOAUTH2").expect("XOAUTH2 should resolve");
    assert_eq!(xoauth2.mechanism().as_str(), "XOAUTH2");
}

#[test]
fn scenario_b_higher_precedence_duplicate_wins() {
    init_tracing();
    let finder = DefaultSaslMechanismFinder::initialize(vec![
        Arc::new(StubFactory {
            name: "PLAIN",
            precedence: 5,
            default_permitted: true,
            handler: "plain-5",
        }) as Arc<dyn ServerSaslFactory>,
        Arc::new(StubFactory {
            name: "PLAIN",
            precedence: 3,
            default_permitted: true,
            handler: "plain-3",
        }),
    ]);

    let plain = finder.get_factory("PLAIN").unwrap();
    assert_eq!(plain.precedence(), 5);
    assert_eq!(plain.create().name(), "plain-5");
    assert_eq!(finder.get_default_sasl_mechanisms(), names(&["PLAIN"]));
}

#[test]
fn precedence_tie_keeps_first_discovered() {
    let finder = DefaultSaslMechanismFinder::initialize(vec![
        Arc::new(StubFactory {
            name: "PLAIN",
            precedence: 5,
            default_permitted: true,
            handler: "first",
        }) as Arc<dyn ServerSaslFactory>,
        Arc::new(StubFactory {
            name: "PLAIN",
            precedence: 5,
            default_permitted: false,
            handler: "second",
        }),
    ]);

    assert_eq!(finder.get_factory("PLAIN").unwrap().create().name(), "first");
    assert_eq!(finder.get_default_sasl_mechanisms(), names(&["PLAIN"]));
}

#[test]
fn scenario_c_restriction_does_not_affect_lookup() {
    let finder = scenario_a();

    finder.set_sasl_mechanisms(&names(&["ANONYMOUS"])).unwrap();

    assert_eq!(finder.get_sasl_mechanisms(), names(&["ANONYMOUS"]));
    assert!(finder.get_factory("PLAIN").is_some());
}

#[test]
fn scenario_d_rejected_mechanism_leaves_active_set_unchanged() {
    let finder = scenario_a();
    finder.set_sasl_mechanisms(&names(&["ANONYMOUS"])).unwrap();

    let err = finder.set_sasl_mechanisms(&names(&["XOAUTH2"])).unwrap_err();

    assert_eq!(
        err,
        SaslError::MechanismNotPermitted {
            mechanism: "XOAUTH2".to_string(),
            allowed: vec!["PLAIN".to_string(), "ANONYMOUS".to_string()],
        }
    );
    assert!(err.to_string().contains("'XOAUTH2'"));
    assert!(err.to_string().contains("[PLAIN, ANONYMOUS]"));
    assert_eq!(finder.get_sasl_mechanisms(), names(&["ANONYMOUS"]));
}

#[test]
fn every_registered_mechanism_resolves_to_itself() {
    let finder = DefaultSaslMechanismFinder::initialize(vec![
        factory("PLAIN", 1, true),
        factory("PLAIN", 2, false),
        factory("SCRAM-SHA-256", 9, true),
        factory("EXTERNAL", 4, false),
        factory("ANONYMOUS", 0, true),
    ]);

    for name in finder.registry().mechanisms() {
        let resolved = finder.get_factory(name.as_str()).unwrap();
        assert_eq!(resolved.mechanism(), *name);
    }
}

#[test]
fn default_list_is_unique_permitted_and_ordered() {
    let finder = DefaultSaslMechanismFinder::initialize(vec![
        factory("ANONYMOUS", 0, true),
        factory("PLAIN", 7, true),
        factory("GSSAPI", 7, true),
        factory("EXTERNAL", 12, false),
        factory("SCRAM-SHA-512", 20, true),
        factory("PLAIN", 7, true),
    ]);
    let defaults = finder.get_default_sasl_mechanisms();

    assert_eq!(defaults, names(&["SCRAM-SHA-512", "GSSAPI", "PLAIN", "ANONYMOUS"]));

    let unique: HashSet<&str> = defaults.iter().map(|n| n.as_str()).collect();
    assert_eq!(unique.len(), defaults.len());

    let resolved: Vec<Arc<dyn ServerSaslFactory>> = defaults
        .iter()
        .map(|n| finder.get_factory(n.as_str()).unwrap())
        .collect();
    assert!(resolved.iter().all(|f| f.is_default_permitted()));
    assert!(resolved.windows(2).all(|w| w[0].precedence() >= w[1].precedence()));
}

#[test]
fn repeated_set_is_idempotent() {
    let finder = scenario_a();
    let wanted = names(&["ANONYMOUS", "PLAIN"]);

    finder.set_sasl_mechanisms(&wanted).unwrap();
    let once = finder.get_sasl_mechanisms();
    finder.set_sasl_mechanisms(&wanted).unwrap();

    assert_eq!(finder.get_sasl_mechanisms(), once);
    assert_eq!(once, wanted);
}

#[test]
fn successful_set_keeps_subset_invariant() {
    let finder = scenario_a();
    let defaults: HashSet<CheetahString> = finder.get_default_sasl_mechanisms().into_iter().collect();

    for candidate in [vec![], vec!["PLAIN"], vec!["ANONYMOUS", "PLAIN"], vec!["XOAUTH2"]] {
        let candidate = names(&candidate);
        let before = finder.get_sasl_mechanisms();
        match finder.set_sasl_mechanisms(&candidate) {
            Ok(()) => assert_eq!(finder.get_sasl_mechanisms(), candidate),
            Err(_) => assert_eq!(finder.get_sasl_mechanisms(), before),
        }
        assert!(finder.get_sasl_mechanisms().iter().all(|n| defaults.contains(n)));
    }
}

#[test]
fn readers_never_observe_partial_updates() {
    let finder = Arc::new(DefaultSaslMechanismFinder::initialize(vec![
        factory("SCRAM-SHA-512", 4, true),
        factory("SCRAM-SHA-256", 3, true),
        factory("PLAIN", 2, true),
        factory("ANONYMOUS", 1, true),
    ]));
    let first = names(&["SCRAM-SHA-512", "SCRAM-SHA-256", "PLAIN"]);
    let second = names(&["ANONYMOUS"]);
    let stop = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let finder = Arc::clone(&finder);
            let stop = Arc::clone(&stop);
            let (first, second) = (first.clone(), second.clone());
            let defaults = finder.get_default_sasl_mechanisms();
            thread::spawn(move || {
                while !stop.load(Ordering::Acquire) {
                    let seen = finder.get_sasl_mechanisms();
                    assert!(seen == first || seen == second || seen == defaults, "partial list {:?}", seen);
                }
            })
        })
        .collect();

    let writers: Vec<_> = [first.clone(), second.clone()]
        .into_iter()
        .map(|wanted| {
            let finder = Arc::clone(&finder);
            thread::spawn(move || {
                for _ in 0..1_000 {
                    finder.set_sasl_mechanisms(&wanted).unwrap();
                    assert!(finder.set_sasl_mechanisms(&names(&["XOAUTH2"])).is_err());
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }
    stop.store(true, Ordering::Release);
    for reader in readers {
        reader.join().unwrap();
    }

    let last = finder.get_sasl_mechanisms();
    assert!(last == first || last == second);
}
