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

use p4client::pre::build_replicas;
use p4client::{Client, ClientConfig, Error, MatchField, MatchValue, Registry, TableEntryOptions};

use proto::p4runtime::{
    ActionProfileAction_oneof_watch_kind,
    CloneSessionEntry,
    CounterData,
    CounterEntry,
    DigestEntry,
    DigestEntry_Config,
    Entity,
    Index,
    MeterConfig,
    MeterEntry,
    MulticastGroupEntry,
    Replica,
    TableAction_oneof_type,
    TableEntry,
    Update,
    Update_Type,
};

use protobuf::RepeatedField;

use serde_json::json;

use std::time::Duration;

use tracing_test::traced_test;

fn route() -> Vec<MatchField> {
    vec![MatchField::new(
        "hdr.ipv4.dst_addr",
        MatchValue::Lpm {
            value: vec![192, 168, 7, 9],
            prefix_len: 24,
        },
    )]
}

fn index(index: i64) -> Index {
    let mut idx = Index::new();
    idx.set_index(index);
    idx
}

fn counter_data(byte_count: i64, packet_count: i64) -> CounterData {
    let mut data = CounterData::new();
    data.set_byte_count(byte_count);
    data.set_packet_count(packet_count);
    data
}

fn counter_entry(i: i64, data: CounterData) -> CounterEntry {
    let mut entry = CounterEntry::new();
    entry.set_counter_id(PORT_COUNTER);
    entry.set_index(index(i));
    entry.set_data(data);
    entry
}

fn counter_cells(n: i64) -> Vec<Entity> {
    (0..n)
        .map(|i| counter_entry(i, counter_data(i * 100, i)).into())
        .collect()
}

fn replica(egress_port: u32, instance: u32) -> Replica {
    let mut replica = Replica::new();
    replica.set_egress_port(egress_port);
    replica.set_instance(instance);
    replica
}

fn multicast_group(id: u32, ports: &[u32]) -> MulticastGroupEntry {
    let mut group = MulticastGroupEntry::new();
    group.set_multicast_group_id(id);
    group.set_replicas(RepeatedField::from_vec(build_replicas(ports)));
    group
}

#[tokio::test]
#[traced_test]
async fn table_entry_lifecycle() {
    let client = client(MockTransport::default());

    let action = client
        .new_table_action_direct("ingress.set_nhop", vec![vec![0, 0, 0, 0, 0, 9], vec![0, 2]])
        .unwrap();
    let options = TableEntryOptions {
        idle_timeout: Duration::from_secs(30),
        priority: 5,
    };
    let entry = client
        .new_table_entry("ingress.ipv4_lpm", Some(&route()), Some(action.clone()), Some(&options))
        .unwrap();
    assert_eq!(entry.get_table_id(), IPV4_LPM);
    assert_eq!(entry.get_field_match()[0].get_field_id(), 1);
    assert_eq!(entry.get_field_match()[0].get_lpm().get_value(), &[192, 168, 7, 0][..]);
    assert_eq!(entry.get_idle_timeout_ns(), 30_000_000_000);
    assert_eq!(entry.get_priority(), 5);
    assert!(!entry.get_is_default_action());
    assert_eq!(entry.get_action(), &action);

    assert!(action.has_action());
    assert_eq!(action.get_action().get_action_id(), SET_NHOP);
    let ids: Vec<u32> = action.get_action().get_params().iter().map(|p| p.get_param_id()).collect();
    assert_eq!(ids, vec![1, 2]);

    client.insert_table_entry(entry.clone()).await.unwrap();
    client.modify_table_entry(entry.clone()).await.unwrap();
    client.delete_table_entry(entry.clone()).await.unwrap();

    let updates = client.transport().updates();
    let types: Vec<Update_Type> = updates.iter().map(|u| u.get_field_type()).collect();
    assert_eq!(types, vec![Update_Type::INSERT, Update_Type::MODIFY, Update_Type::DELETE]);
    assert!(updates.iter().all(|u| u.get_entity() == &Entity::from(entry.clone())));
}

#[tokio::test]
#[traced_test]
async fn default_table_entry() {
    let client = client(MockTransport::default());
    let action = client.new_table_action_direct("ingress.drop", vec![]).unwrap();
    let entry = client
        .new_table_entry("ingress.ipv4_lpm", None, Some(action), None)
        .unwrap();
    assert!(entry.get_is_default_action());
    assert!(entry.get_field_match().is_empty());
    assert_eq!(entry.get_idle_timeout_ns(), 0);

    let entry = client.new_table_entry("ingress.ipv4_lpm", None, None, None).unwrap();
    assert!(entry.get_is_default_action());
    assert!(!entry.has_action());
}

#[tokio::test]
#[traced_test]
async fn table_builder_errors() {
    let client = client(MockTransport::default());

    assert!(matches!(
        client.new_action("ingress.forward", vec![]),
        Err(Error::UnknownAction(name)) if name == "ingress.forward"
    ));
    assert!(matches!(
        client.new_table_entry("nope", Some(&route()), None, None),
        Err(Error::UnknownTable(name)) if name == "nope"
    ));
    assert!(matches!(
        client.new_table_entry("ingress.acl", Some(&route()), None, None),
        Err(Error::UnknownField { field, .. }) if field == "hdr.ipv4.dst_addr"
    ));
    assert!(matches!(
        client.read_table_entry("nope", &route()).await,
        Err(Error::UnknownTable(_))
    ));
    assert!(client.transport().writes().is_empty());
}

#[tokio::test]
#[traced_test]
async fn canonical_table_entry() {
    let client = canonical_client(MockTransport::default());
    let matches = vec![MatchField::new("meta.nhop_group", MatchValue::Exact { value: vec![0, 4] })];
    let entry = client.new_table_entry("ingress.ecmp", Some(&matches), None, None).unwrap();
    assert_eq!(entry.get_field_match()[0].get_exact().get_value(), &[4][..]);
}

#[tokio::test]
#[traced_test]
async fn action_profile_action_set() {
    let client = client(MockTransport::default());
    let action = client
        .new_action_profile_action_set()
        .add_action("ingress.set_nhop", vec![vec![0, 0, 0, 0, 0, 1], vec![0, 1]], 2, 1)
        .add_action("ingress.set_nhop", vec![vec![0, 0, 0, 0, 0, 2], vec![0, 2]], 1, 2)
        .table_action()
        .unwrap();
    assert!(action.has_action_profile_action_set());
    let members = action.get_action_profile_action_set().get_action_profile_actions();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].get_weight(), 2);
    assert_eq!(members[0].get_action().get_action_id(), SET_NHOP);
    assert_eq!(
        members[1].watch_kind,
        Some(ActionProfileAction_oneof_watch_kind::watch_port(vec![0, 0, 0, 2]))
    );

    let canonical = canonical_client(MockTransport::default());
    let action = canonical
        .new_action_profile_action_set()
        .add_action("ingress.drop", vec![], 1, 258)
        .table_action()
        .unwrap();
    match &action.field_type {
        Some(TableAction_oneof_type::action_profile_action_set(set)) => assert_eq!(
            set.get_action_profile_actions()[0].get_watch_port(),
            &[1, 2][..]
        ),
        other => panic!("unexpected action {:?}", other),
    }
}

#[tokio::test]
#[traced_test]
async fn action_set_defers_first_error() {
    let client = client(MockTransport::default());
    let result = client
        .new_action_profile_action_set()
        .add_action("ingress.drop", vec![], 1, 1)
        .add_action("ingress.first", vec![], 1, 2)
        .add_action("ingress.second", vec![], 1, 3)
        .table_action();
    assert!(matches!(result, Err(Error::UnknownAction(name)) if name == "ingress.first"));
}

#[tokio::test]
#[traced_test]
async fn read_single_table_entry() {
    let mut stored = TableEntry::new();
    stored.set_table_id(IPV4_LPM);
    stored.set_priority(3);
    let client = client(MockTransport::with_single(stored.clone().into()));
    let entry = client.read_table_entry("ingress.ipv4_lpm", &route()).await.unwrap();
    assert_eq!(entry, stored);

    let request = client.transport().reads.lock().unwrap()[0].clone();
    let request = request.into_table_entry().unwrap();
    assert_eq!(request.get_table_id(), IPV4_LPM);
    assert_eq!(request.get_field_match().len(), 1);
    assert!(!request.has_action());

    let client = common::client(MockTransport::with_single(CounterEntry::new().into()));
    assert!(matches!(
        client.read_table_entry("ingress.ipv4_lpm", &route()).await,
        Err(Error::NotExpectedEntityKind {
            expected: "table entry"
        })
    ));
}

#[tokio::test]
#[traced_test]
async fn transport_errors_pass_through() {
    let client = client(MockTransport::failing());
    let entry = client.new_table_entry("ingress.ipv4_lpm", Some(&route()), None, None).unwrap();
    match client.insert_table_entry(entry).await {
        Err(Error::Transport(error)) => {
            assert_eq!(error.to_string(), "device is gone");
            assert!(error.is::<DeviceGone>());
        }
        other => panic!("unexpected result {:?}", other),
    }
    assert!(matches!(
        client.read_counter_entry("ingress.port_counter", 0).await,
        Err(Error::Transport(_))
    ));
}

#[tokio::test]
#[traced_test]
async fn counters() {
    let data = counter_data(1500, 1);
    let stored = counter_entry(4, data.clone());
    let client = client(MockTransport::with_single(stored.clone().into()));

    client
        .modify_counter_entry("ingress.port_counter", 4, data.clone())
        .await
        .unwrap();
    assert_eq!(
        client.transport().updates(),
        vec![Update::with_entity(Update_Type::MODIFY, stored)]
    );

    assert_eq!(
        client.read_counter_entry("ingress.port_counter", 4).await.unwrap(),
        data
    );

    assert!(matches!(
        client.modify_counter_entry("nope", 0, data).await,
        Err(Error::UnknownCounter(name)) if name == "nope"
    ));
    assert!(matches!(
        client.read_counter_entry_wildcard("nope").await,
        Err(Error::UnknownCounter(_))
    ));
}

#[tokio::test]
#[traced_test]
async fn counter_without_data_reads_as_zero() {
    let mut stored = CounterEntry::new();
    stored.set_counter_id(PORT_COUNTER);
    let client = client(MockTransport::with_single(stored.into()));
    assert_eq!(
        client.read_counter_entry("ingress.port_counter", 0).await.unwrap(),
        CounterData::new()
    );
}

#[tokio::test]
#[traced_test]
async fn reset_counters_in_one_write() {
    let client = client(MockTransport::default());
    client
        .modify_many_counter_entries("ingress.port_counter", &[0, 1, 2, 7], CounterData::new())
        .await
        .unwrap();

    let writes = client.transport().writes();
    assert_eq!(writes.len(), 1);
    let indices: Vec<i64> = writes[0]
        .iter()
        .map(|u| {
            assert_eq!(u.get_field_type(), Update_Type::MODIFY);
            let entry = u.get_entity().clone().into_counter_entry().unwrap();
            assert!(entry.has_data());
            assert_eq!(entry.get_data(), &CounterData::new());
            entry.get_index().get_index()
        })
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 7]);
}

#[tokio::test]
#[traced_test]
async fn counter_wildcard() {
    let client = client(MockTransport::with_stream(counter_cells(3)));
    let data = client
        .read_counter_entry_wildcard("ingress.port_counter")
        .await
        .unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[2].get_byte_count(), 200);
    assert!(data.capacity() >= 512);

    let request = client.transport().reads.lock().unwrap()[0].clone();
    let mut descriptor = CounterEntry::new();
    descriptor.set_counter_id(PORT_COUNTER);
    assert_eq!(request, Entity::from(descriptor));
}

#[tokio::test]
#[traced_test]
async fn counter_wildcard_with_huge_declared_size() {
    let mut p4info = p4info_json();
    p4info["counters"][0]["size"] = json!("4611686018427387904");
    let registry = Registry::from_json_str(&p4info.to_string()).unwrap();
    assert_eq!(
        registry.find_counter("ingress.port_counter").unwrap().get_size(),
        4611686018427387904
    );

    let client = Client::new(
        MockTransport::with_stream(counter_cells(2)),
        registry,
        ClientConfig::default(),
    );
    let data = client
        .read_counter_entry_wildcard("ingress.port_counter")
        .await
        .unwrap();
    assert_eq!(data, vec![counter_data(0, 0), counter_data(100, 1)]);
}

#[tokio::test]
#[traced_test]
async fn meters() {
    let mut config = MeterConfig::new();
    config.set_cir(1000);
    config.set_cburst(100);
    config.set_pir(2000);
    config.set_pburst(200);
    let mut stored = MeterEntry::new();
    stored.set_meter_id(PORT_METER);
    stored.set_index(index(1));
    stored.set_config(config.clone());
    let client = client(MockTransport::with_single(stored.into()));

    client
        .modify_meter_entry("ingress.port_meter", 1, config.clone())
        .await
        .unwrap();
    let entry = client.transport().updates()[0]
        .get_entity()
        .clone()
        .into_meter_entry()
        .unwrap();
    assert_eq!(entry.get_meter_id(), PORT_METER);
    assert_eq!(entry.get_index().get_index(), 1);
    assert_eq!(entry.get_config(), &config);

    assert_eq!(
        client.read_meter_entry("ingress.port_meter", 1).await.unwrap(),
        Some(config)
    );
    assert!(matches!(
        client.read_meter_entry("nope", 1).await,
        Err(Error::UnknownMeter(_))
    ));

    let mut unconfigured = MeterEntry::new();
    unconfigured.set_meter_id(PORT_METER);
    let client = common::client(MockTransport::with_single(unconfigured.into()));
    assert_eq!(client.read_meter_entry("ingress.port_meter", 3).await.unwrap(), None);
}

#[test]
fn replicas_number_instances_in_order() {
    assert_eq!(
        build_replicas(&[5, 5, 7]),
        vec![replica(5, 0), replica(5, 1), replica(7, 2)]
    );
    assert!(build_replicas(&[]).is_empty());
}

#[tokio::test]
#[traced_test]
async fn multicast_groups() {
    let client = client(MockTransport::default());
    client.insert_multicast_group(1, &[5, 5, 7]).await.unwrap();
    client.modify_multicast_group(1, &[7]).await.unwrap();
    client.delete_multicast_group(1).await.unwrap();

    let updates = client.transport().updates();
    assert_eq!(
        updates[0],
        Update::with_entity(Update_Type::INSERT, multicast_group(1, &[5, 5, 7]))
    );
    assert_eq!(updates[1].get_field_type(), Update_Type::MODIFY);
    assert_eq!(
        updates[2],
        Update::with_entity(Update_Type::DELETE, multicast_group(1, &[]))
    );
}

#[tokio::test]
#[traced_test]
async fn read_multicast_groups() {
    let groups: Vec<Entity> = (1..=3).map(|id| multicast_group(id, &[id]).into()).collect();
    let client = client(MockTransport {
        single: Some(groups[1].clone()),
        stream: groups,
        ..Default::default()
    });

    let group = client.read_multicast_group(2).await.unwrap();
    assert_eq!(group.get_replicas(), build_replicas(&[2]).as_slice());

    let all = client.read_multicast_group_wildcard().await.unwrap();
    let ids: Vec<u32> = all.iter().map(|g| g.get_multicast_group_id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let reads = client.transport().reads.lock().unwrap().clone();
    assert_eq!(reads[0], Entity::from(multicast_group(2, &[])));
    assert_eq!(reads[1], Entity::from(MulticastGroupEntry::new()));
}

#[tokio::test]
#[traced_test]
async fn clone_sessions() {
    let client = client(MockTransport::default());
    client.insert_clone_session(100, 128, &[3, 4]).await.unwrap();
    client.modify_clone_session(100, 0, &[3]).await.unwrap();
    client.delete_clone_session(100).await.unwrap();

    let updates = client.transport().updates();
    let session = updates[0].get_entity().clone().into_clone_session_entry().unwrap();
    assert_eq!(updates[0].get_field_type(), Update_Type::INSERT);
    assert_eq!(session.get_session_id(), 100);
    assert_eq!(session.get_packet_length_bytes(), 128);
    assert_eq!(session.get_replicas(), build_replicas(&[3, 4]).as_slice());

    let session = updates[2].get_entity().clone().into_clone_session_entry().unwrap();
    assert_eq!(updates[2].get_field_type(), Update_Type::DELETE);
    assert!(session.get_replicas().is_empty());

    // A multicast group is the wrong kind of answer to a clone session read.
    let mut session = CloneSessionEntry::new();
    session.set_session_id(1);
    let client = common::client(MockTransport::with_stream(vec![
        session.into(),
        MulticastGroupEntry::new().into(),
    ]));
    assert!(matches!(
        client.read_clone_session_wildcard().await,
        Err(Error::NotExpectedEntityKind {
            expected: "clone session entry"
        })
    ));
}

#[tokio::test]
#[traced_test]
async fn read_clone_session() {
    let mut stored = CloneSessionEntry::new();
    stored.set_session_id(9);
    stored.set_replicas(RepeatedField::from_vec(build_replicas(&[1])));
    let client = client(MockTransport::with_single(stored.clone().into()));
    assert_eq!(client.read_clone_session(9).await.unwrap(), stored);
}

#[tokio::test]
#[traced_test]
async fn digests() {
    let mut config = DigestEntry_Config::new();
    config.set_max_timeout_ns(1_000_000);
    config.set_max_list_size(10);
    config.set_ack_timeout_ns(5_000_000);
    let client = client(MockTransport::default());
    client.configure_digest("learn_t", config.clone()).await.unwrap();
    client.configure_all_digests(config.clone()).await.unwrap();

    let mut entry = DigestEntry::new();
    entry.set_digest_id(LEARN_DIGEST);
    entry.set_config(config.clone());
    let expected = Update::with_entity(Update_Type::INSERT, entry);
    assert_eq!(client.transport().writes(), vec![vec![expected.clone()], vec![expected]]);

    assert!(matches!(
        client.configure_digest("nope", config).await,
        Err(Error::UnknownDigest(name)) if name == "nope"
    ));

    let client = Client::new(MockTransport::default(), Registry::empty(), ClientConfig::default());
    client.configure_all_digests(DigestEntry_Config::new()).await.unwrap();
    assert!(client.transport().writes().is_empty());
}
