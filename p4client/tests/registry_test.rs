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

use p4client::{MatchKind, MatchValue, Registry, INVALID_ID, UNKNOWN_NAME};

use proto::p4info::{MatchField_MatchType, P4Info, Table};
use proto::p4runtime::FieldMatch;

use protobuf::{Message, RepeatedField};

use serde_json::json;

use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("p4client-{}-{}", std::process::id(), name))
}

#[test]
fn names_and_ids() {
    let registry = registry();

    assert_eq!(registry.table_id("ingress.ipv4_lpm"), IPV4_LPM);
    assert_eq!(registry.table_name(ACL), "ingress.acl");
    assert_eq!(registry.match_field_id("ingress.acl", "meta.vrf"), 4);
    assert_eq!(registry.action_id("ingress.set_nhop"), SET_NHOP);
    assert_eq!(registry.action_param_id("ingress.set_nhop", "port"), 2);
    assert_eq!(registry.action_profile_id("ingress.ecmp_selector"), ECMP_SELECTOR);
    assert_eq!(registry.counter_id("ingress.port_counter"), PORT_COUNTER);
    assert_eq!(registry.meter_id("ingress.port_meter"), PORT_METER);
    assert_eq!(registry.digest_id("learn_t"), LEARN_DIGEST);

    let action = registry.action_by_id(SET_NHOP);
    assert_eq!(registry.action_param_name(action, 1), "dst_mac");

    let table = registry.find_table_by_id(ACL).unwrap();
    let field = registry.find_field_in_table(table, 3);
    assert_eq!(field.get_name(), "hdr.ipv4.protocol");
    assert_eq!(field.get_match_type(), MatchField_MatchType::RANGE);

    assert_eq!(registry.find_counter("ingress.port_counter").unwrap().get_size(), 512);
    assert_eq!(registry.find_meter("ingress.port_meter").unwrap().get_size(), 64);
}

#[test]
fn misses_return_sentinels() {
    let registry = registry();

    assert_eq!(registry.table_id("nope"), INVALID_ID);
    assert_eq!(registry.table_name(1), UNKNOWN_NAME);
    assert_eq!(registry.match_field_id("ingress.acl", "nope"), INVALID_ID);
    assert_eq!(registry.match_field_id("nope", "meta.vrf"), INVALID_ID);
    assert_eq!(registry.action_id("nope"), INVALID_ID);
    assert_eq!(registry.action_param_id("ingress.set_nhop", "nope"), INVALID_ID);
    assert_eq!(registry.action_param_id("nope", "port"), INVALID_ID);
    assert_eq!(registry.action_profile_id("nope"), INVALID_ID);
    assert_eq!(registry.counter_id("nope"), INVALID_ID);
    assert_eq!(registry.meter_id("nope"), INVALID_ID);
    assert_eq!(registry.digest_id("nope"), INVALID_ID);
    assert!(registry.find_table("nope").is_none());
    assert!(registry.find_action("nope").is_none());

    let action = registry.action_by_id(12345);
    assert_eq!(action.get_preamble().get_id(), INVALID_ID);
    assert!(action.get_preamble().get_name().is_empty());
    assert!(action.get_params().is_empty());
    assert_eq!(registry.action_param_name(action, 1), UNKNOWN_NAME);

    let drop = registry.action_by_id(DROP);
    assert_eq!(registry.action_param_name(drop, 1), UNKNOWN_NAME);

    let table = registry.find_table_by_id(IPV4_LPM).unwrap();
    let field = registry.find_field_in_table(table, 9);
    assert!(field.get_name().is_empty());
    assert_eq!(field.get_match_type(), MatchField_MatchType::UNSPECIFIED);
}

#[test]
fn empty_registry() {
    let registry = Registry::empty();

    assert!(registry.p4info().is_none());
    assert_eq!(registry.table_id("ingress.acl"), INVALID_ID);
    assert_eq!(registry.table_name(ACL), UNKNOWN_NAME);
    assert_eq!(registry.match_field_id("ingress.acl", "meta.vrf"), INVALID_ID);
    assert_eq!(registry.action_param_id("ingress.set_nhop", "port"), INVALID_ID);
    assert_eq!(registry.action_by_id(SET_NHOP).get_preamble().get_id(), INVALID_ID);
    assert_eq!(registry.counter_id("ingress.port_counter"), INVALID_ID);
    assert_eq!(registry.digest_id("learn_t"), INVALID_ID);
    assert_eq!(registry.to_string(), "");
}

#[test]
fn first_duplicate_wins() {
    let table = |id, name: &str| {
        let mut table = Table::new();
        table.mut_preamble().set_id(id);
        table.mut_preamble().set_name(name.into());
        table
    };
    let mut p4info = P4Info::new();
    p4info.set_tables(RepeatedField::from_vec(vec![table(1, "t"), table(2, "t"), table(1, "u")]));
    let registry = Registry::from(p4info);

    assert_eq!(registry.table_id("t"), 1);
    assert_eq!(registry.table_name(1), "t");
    assert_eq!(registry.table_id("u"), 1);
}

#[test]
fn display_lists_tables() {
    let text = registry().to_string();
    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("table ingress.ipv4_lpm:"));
    assert!(text.contains("field hdr.ipv4.dst_addr: bit<32> lpm-match"));
    assert!(text.contains("field meta.vrf: bit<16> optional-match"));
    assert!(text.contains("action ingress.set_nhop(dst_mac: bit<48>, port: bit<9>)"));
    assert!(text.contains("size: 1024"));
}

#[test]
fn load_json_file() {
    let path = temp_path("p4info.json");
    std::fs::write(&path, p4info_json().to_string()).unwrap();
    let registry = Registry::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(registry.table_id("ingress.ecmp"), ECMP);
    assert_eq!(registry.p4info(), Some(&p4info()));

    let err = Registry::from_json_file("/nonexistent/p4info.json").unwrap_err();
    assert!(err.to_string().contains("could not open P4Info"));
}

#[test]
fn load_binary_file() {
    let path = temp_path("p4info.bin");
    std::fs::write(&path, p4info().write_to_bytes().unwrap()).unwrap();
    let registry = Registry::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(registry.p4info(), Some(&p4info()));
    assert_eq!(registry.action_param_id("ingress.set_nhop", "dst_mac"), 1);

    let path = temp_path("garbage.p4info.bin");
    std::fs::write(&path, &[0xffu8, 0xff, 0xff]).unwrap();
    let err = Registry::from_binary_file(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(err.to_string().contains("could not read P4Info"));
}

#[test]
fn json_ignores_unmodeled_members() {
    let registry = Registry::from_json_str(
        &json!({
            "pkgInfo": { "arch": "v1model", "doc": { "brief": "routing" } },
            "tables": [{
                "preamble": { "id": 7, "name": "t" },
                "matchFields": [{ "id": 1, "name": "f", "bitwidth": 8, "matchType": "EXACT" }],
                "idleTimeoutBehavior": "NOTIFY_CONTROL",
                "hasInitialEntries": true
            }],
            "registers": [{ "preamble": { "id": 9, "name": "r" }, "size": 4 }],
            "typeInfo": {}
        })
        .to_string(),
    )
    .unwrap();
    assert_eq!(registry.table_id("t"), 7);
    assert_eq!(registry.match_field_id("t", "f"), 1);
}

#[test]
fn unknown_match_type_reads_as_other() {
    let registry = Registry::from_json_str(
        &json!({
            "tables": [{
                "preamble": { "id": 7, "name": "t" },
                "matchFields": [
                    { "id": 1, "name": "f", "bitwidth": 8, "matchType": "MATCH_TYPE_NEW" },
                    { "id": 2, "name": "g", "bitwidth": 8, "matchType": 42 },
                    { "id": 3, "name": "h", "bitwidth": 8, "otherMatchType": "range_list" },
                    { "id": 4, "name": "i", "bitwidth": 8, "matchType": "LPM" }
                ]
            }]
        })
        .to_string(),
    )
    .unwrap();

    let table = registry.find_table("t").unwrap();
    let f = registry.find_field_in_table(table, 1);
    assert_eq!(f.get_match_type(), MatchField_MatchType::UNSPECIFIED);
    assert_eq!(f.get_other_match_type(), "MATCH_TYPE_NEW");
    assert_eq!(MatchKind::from(f.get_match_type()), MatchKind::Other);
    assert_eq!(registry.find_field_in_table(table, 2).get_other_match_type(), "42");
    assert_eq!(registry.find_field_in_table(table, 3).get_other_match_type(), "range_list");
    assert_eq!(
        registry.find_field_in_table(table, 4).get_match_type(),
        MatchField_MatchType::LPM
    );

    let wire = MatchValue::Other { value: vec![3] }.encode(1, false).unwrap();
    assert_eq!(MatchValue::decode(f, &wire), MatchValue::Other { value: vec![3] });
    assert_eq!(
        MatchValue::decode(f, &FieldMatch::new()),
        MatchValue::Other { value: vec![] }
    );

    assert!(registry.to_string().contains("field f: bit<8> MATCH_TYPE_NEW-match"));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(Registry::from_json_str("{").is_err());
    assert!(Registry::from_json_str(r#"{"tables": [{"size": "lots"}]}"#).is_err());
}
