/*
Copyright (c) 2022 VMware, Inc.
SPDX-License-Identifier: MIT
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use anyhow::bail;

use futures::future::{self, BoxFuture, FutureExt};

use p4client::{Client, ClientConfig, Registry, Transport};

use proto::p4info::P4Info;
use proto::p4runtime::{Entity, Update};

use serde_json::{json, Value};

use std::sync::Mutex;

use thiserror::Error;

use tokio::sync::mpsc;

pub const IPV4_LPM: u32 = 33554433;
pub const ACL: u32 = 33554434;
pub const ECMP: u32 = 33554435;
pub const SET_NHOP: u32 = 16777217;
pub const DROP: u32 = 16777218;
pub const PORT_COUNTER: u32 = 302011205;
pub const PORT_METER: u32 = 335544321;
pub const LEARN_DIGEST: u32 = 385923478;
pub const ECMP_SELECTOR: u32 = 285217164;

/// A small v1model-style program: an LPM routing table, an ACL with one field of each other
/// match kind, an ECMP table behind an action selector, and one each of counter, meter, and
/// digest.  This is the JSON form that `p4c --p4runtime-files` writes.
pub fn p4info_json() -> Value {
    json!({
        "pkgInfo": { "arch": "v1model" },
        "tables": [
            {
                "preamble": { "id": IPV4_LPM, "name": "ingress.ipv4_lpm", "alias": "ipv4_lpm" },
                "matchFields": [
                    { "id": 1, "name": "hdr.ipv4.dst_addr", "bitwidth": 32, "matchType": "LPM" }
                ],
                "actionRefs": [{ "id": SET_NHOP }, { "id": DROP }],
                "size": "1024"
            },
            {
                "preamble": { "id": ACL, "name": "ingress.acl", "alias": "acl" },
                "matchFields": [
                    { "id": 1, "name": "hdr.ethernet.dst_addr", "bitwidth": 48, "matchType": "TERNARY" },
                    { "id": 2, "name": "standard_metadata.ingress_port", "bitwidth": 9, "matchType": "EXACT" },
                    { "id": 3, "name": "hdr.ipv4.protocol", "bitwidth": 8, "matchType": "RANGE" },
                    { "id": 4, "name": "meta.vrf", "bitwidth": 16, "matchType": "OPTIONAL" }
                ],
                "actionRefs": [{ "id": DROP }],
                "size": "256"
            },
            {
                "preamble": { "id": ECMP, "name": "ingress.ecmp", "alias": "ecmp" },
                "matchFields": [
                    { "id": 1, "name": "meta.nhop_group", "bitwidth": 16, "matchType": "EXACT" }
                ],
                "actionRefs": [{ "id": SET_NHOP }],
                "implementationId": ECMP_SELECTOR,
                "size": "64"
            }
        ],
        "actions": [
            {
                "preamble": { "id": SET_NHOP, "name": "ingress.set_nhop", "alias": "set_nhop" },
                "params": [
                    { "id": 1, "name": "dst_mac", "bitwidth": 48 },
                    { "id": 2, "name": "port", "bitwidth": 9 }
                ]
            },
            {
                "preamble": { "id": DROP, "name": "ingress.drop", "alias": "drop" }
            }
        ],
        "actionProfiles": [
            {
                "preamble": { "id": ECMP_SELECTOR, "name": "ingress.ecmp_selector" },
                "tableIds": [ECMP],
                "withSelector": true,
                "size": "128"
            }
        ],
        "counters": [
            {
                "preamble": { "id": PORT_COUNTER, "name": "ingress.port_counter" },
                "spec": { "unit": "BOTH" },
                "size": "512"
            }
        ],
        "meters": [
            {
                "preamble": { "id": PORT_METER, "name": "ingress.port_meter" },
                "spec": { "unit": "BYTES" },
                "size": 64
            }
        ],
        "digests": [
            { "preamble": { "id": LEARN_DIGEST, "name": "learn_t" } }
        ]
    })
}

pub fn p4info() -> P4Info {
    protobuf::json::parse_from_str(&p4info_json().to_string()).unwrap()
}

pub fn registry() -> Registry {
    p4info().into()
}

/// The error that [`MockTransport`] fails with.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("device is gone")]
pub struct DeviceGone;

/// A transport that records what it is asked to write and replays canned read results.
#[derive(Default)]
pub struct MockTransport {
    /// One element per write request, in order.
    pub writes: Mutex<Vec<Vec<Update>>>,

    /// Requests received by `read_entity_single`.
    pub reads: Mutex<Vec<Entity>>,

    /// What `read_entity_single` returns.
    pub single: Option<Entity>,

    /// What `read_entity_wildcard` streams, in order.
    pub stream: Vec<Entity>,

    /// Makes every call fail with [`DeviceGone`].  A wildcard read still streams everything
    /// first.
    pub fail: bool,
}

impl MockTransport {
    pub fn with_stream(stream: Vec<Entity>) -> Self {
        MockTransport {
            stream,
            ..Default::default()
        }
    }

    pub fn with_single(entity: Entity) -> Self {
        MockTransport {
            single: Some(entity),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        MockTransport {
            fail: true,
            ..Default::default()
        }
    }

    pub fn writes(&self) -> Vec<Vec<Update>> {
        self.writes.lock().unwrap().clone()
    }

    /// All written updates, regardless of how they were batched.
    pub fn updates(&self) -> Vec<Update> {
        self.writes().into_iter().flatten().collect()
    }

    fn record(&self, updates: Vec<Update>) -> anyhow::Result<()> {
        if self.fail {
            return Err(DeviceGone.into());
        }
        self.writes.lock().unwrap().push(updates);
        Ok(())
    }
}

impl MockTransport {
    async fn read_single(&self, entity: Entity) -> anyhow::Result<Entity> {
        self.reads.lock().unwrap().push(entity);
        if self.fail {
            return Err(DeviceGone.into());
        }
        match &self.single {
            Some(entity) => Ok(entity.clone()),
            None => bail!("no such entity"),
        }
    }

    async fn read_stream(&self, entity: Entity, sender: mpsc::Sender<Entity>) -> anyhow::Result<()> {
        self.reads.lock().unwrap().push(entity);
        for item in &self.stream {
            sender.send(item.clone()).await?;
        }
        if self.fail {
            return Err(DeviceGone.into());
        }
        Ok(())
    }
}

impl Transport for MockTransport {
    fn write_update(&self, update: Update) -> BoxFuture<'_, anyhow::Result<()>> {
        future::ready(self.record(vec![update])).boxed()
    }

    fn write_many_updates(&self, updates: Vec<Update>) -> BoxFuture<'_, anyhow::Result<()>> {
        future::ready(self.record(updates)).boxed()
    }

    fn read_entity_single(&self, entity: Entity) -> BoxFuture<'_, anyhow::Result<Entity>> {
        self.read_single(entity).boxed()
    }

    fn read_entity_wildcard(
        &self,
        entity: Entity,
        sender: mpsc::Sender<Entity>,
    ) -> BoxFuture<'_, anyhow::Result<()>> {
        self.read_stream(entity, sender).boxed()
    }
}

pub fn client(transport: MockTransport) -> Client<MockTransport> {
    Client::new(transport, registry(), ClientConfig::default())
}

pub fn canonical_client(transport: MockTransport) -> Client<MockTransport> {
    let config = ClientConfig {
        canonical_bytestrings: true,
        ..Default::default()
    };
    Client::new(transport, registry(), config)
}
