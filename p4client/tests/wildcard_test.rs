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

mod common;

use common::*;

use p4client::wildcard::{read_wildcard, WILDCARD_READ_QUEUE_SIZE};
use p4client::{Client, ClientConfig, Error};

use proto::p4runtime::{CounterEntry, Entity, TableEntry};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing_test::traced_test;

fn table_entries(n: u32) -> Vec<Entity> {
    (0..n)
        .map(|i| {
            let mut entry = TableEntry::new();
            entry.set_table_id(IPV4_LPM);
            entry.set_priority(i as i32);
            entry.into()
        })
        .collect()
}

fn descriptor() -> Entity {
    let mut entry = TableEntry::new();
    entry.set_table_id(IPV4_LPM);
    entry.into()
}

#[tokio::test]
#[traced_test]
async fn empty_stream() {
    let transport = MockTransport::default();
    let items = read_wildcard(&transport, descriptor(), WILDCARD_READ_QUEUE_SIZE, 0, "table entry", Entity::into_table_entry)
        .await
        .unwrap();
    assert!(items.is_empty());
    assert_eq!(transport.reads.lock().unwrap().as_slice(), &[descriptor()]);
}

#[tokio::test]
#[traced_test]
async fn preserves_order() {
    let transport = MockTransport::with_stream(table_entries(5));
    let items = read_wildcard(&transport, descriptor(), WILDCARD_READ_QUEUE_SIZE, 5, "table entry", Entity::into_table_entry)
        .await
        .unwrap();
    let priorities: Vec<i32> = items.iter().map(|e| e.get_priority()).collect();
    assert_eq!(priorities, vec![0, 1, 2, 3, 4]);
}

#[tokio::test]
#[traced_test]
async fn queue_smaller_than_stream() {
    let transport = MockTransport::with_stream(table_entries(250));
    let items = read_wildcard(&transport, descriptor(), 1, 0, "table entry", Entity::into_table_entry)
        .await
        .unwrap();
    assert_eq!(items.len(), 250);
    assert_eq!(items[249].get_priority(), 249);

    // A zero queue size still makes progress.
    let items = read_wildcard(&transport, descriptor(), 0, 0, "table entry", Entity::into_table_entry)
        .await
        .unwrap();
    assert_eq!(items.len(), 250);
}

#[tokio::test]
#[traced_test]
async fn huge_capacity_hint() {
    let transport = MockTransport::with_stream(table_entries(3));
    let items = read_wildcard(&transport, descriptor(), 1, usize::MAX, "table entry", Entity::into_table_entry)
        .await
        .unwrap();
    assert_eq!(items.len(), 3);
}

#[tokio::test]
#[traced_test]
async fn mismatch_drains_everything() {
    let mut stream = table_entries(10);
    stream[2] = CounterEntry::new().into();
    stream[6] = CounterEntry::new().into();
    let transport = MockTransport::with_stream(stream);

    let seen = Arc::new(AtomicUsize::new(0));
    let counter = seen.clone();
    let result = read_wildcard(&transport, descriptor(), 2, 10, "table entry", move |entity| {
        counter.fetch_add(1, Ordering::SeqCst);
        entity.into_table_entry()
    })
    .await;

    assert!(matches!(
        result,
        Err(Error::NotExpectedEntityKind {
            expected: "table entry"
        })
    ));
    assert_eq!(seen.load(Ordering::SeqCst), 10);
}

#[tokio::test]
#[traced_test]
async fn transport_error_wins() {
    let mut stream = table_entries(3);
    stream[1] = CounterEntry::new().into();
    let transport = MockTransport {
        stream,
        fail: true,
        ..Default::default()
    };

    let result = read_wildcard(&transport, descriptor(), 1, 0, "table entry", Entity::into_table_entry).await;
    match result {
        Err(Error::Transport(error)) => assert_eq!(error.downcast_ref::<DeviceGone>(), Some(&DeviceGone)),
        other => panic!("unexpected result {:?}", other.map(|items| items.len())),
    }
}

#[tokio::test]
#[traced_test]
async fn client_uses_configured_queue() {
    let default = client(MockTransport::with_stream(table_entries(20)));
    assert_eq!(default.config().wildcard_read_queue_size, WILDCARD_READ_QUEUE_SIZE);
    let entries = default.read_table_entry_wildcard("ingress.ipv4_lpm").await.unwrap();
    assert_eq!(entries.len(), 20);

    let client = Client::new(
        MockTransport::with_stream(table_entries(20)),
        registry(),
        ClientConfig {
            wildcard_read_queue_size: 3,
            ..Default::default()
        },
    );
    let entries = client.read_table_entry_wildcard("ingress.ipv4_lpm").await.unwrap();
    assert_eq!(entries.len(), 20);

    assert!(matches!(
        client.read_table_entry_wildcard("nope").await,
        Err(Error::UnknownTable(_))
    ));
}
