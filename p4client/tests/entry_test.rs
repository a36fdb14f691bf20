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

use p4client::{Action, ActionParam, Error, MatchField, MatchValue, TableEntry};

use proto::p4runtime::{self as wire, FieldMatch, FieldMatch_Exact, TableAction, TableAction_oneof_type};

use protobuf::RepeatedField;

fn acl_entry() -> TableEntry {
    TableEntry {
        name: "ingress.acl".into(),
        fields: Some(vec![
            MatchField::new(
                "hdr.ethernet.dst_addr",
                MatchValue::Ternary {
                    value: vec![0x00, 0x11, 0x22, 0x33, 0x44, 0x55],
                    mask: vec![0xff, 0xff, 0xff, 0x00, 0x00, 0x00],
                },
            ),
            MatchField::new("standard_metadata.ingress_port", MatchValue::Exact { value: vec![0, 3] }),
            MatchField::new(
                "hdr.ipv4.protocol",
                MatchValue::Range {
                    low: vec![6],
                    high: vec![17],
                },
            ),
            MatchField::new("meta.vrf", MatchValue::Optional { value: vec![0, 1] }),
        ]),
        action: Some(Action::new("ingress.drop", vec![])),
        priority: 10,
    }
}

fn route_entry() -> TableEntry {
    TableEntry {
        name: "ingress.ipv4_lpm".into(),
        fields: Some(vec![MatchField::new(
            "hdr.ipv4.dst_addr",
            MatchValue::Lpm {
                value: vec![10, 1, 2, 3],
                prefix_len: 16,
            },
        )]),
        action: Some(Action::new(
            "ingress.set_nhop",
            vec![
                ActionParam::new("dst_mac", vec![0, 0, 0, 0, 0, 1]),
                ActionParam::new("port", vec![0, 7]),
            ],
        )),
        priority: 0,
    }
}

#[test]
fn encode_every_match_kind() {
    let registry = registry();
    let wire = registry.encode_table_entry(&acl_entry(), false).unwrap();

    assert_eq!(wire.get_table_id(), ACL);
    assert_eq!(wire.get_priority(), 10);
    assert!(!wire.get_is_default_action());
    let matches = wire.get_field_match();
    assert_eq!(matches.len(), 4);

    assert_eq!(matches[0].get_field_id(), 1);
    assert!(matches[0].has_ternary());
    let ternary = matches[0].get_ternary();
    assert_eq!(ternary.get_value(), &[0x00, 0x11, 0x22, 0, 0, 0][..]);
    assert_eq!(ternary.get_mask(), &[0xff, 0xff, 0xff, 0, 0, 0][..]);

    assert_eq!(matches[1].get_field_id(), 2);
    assert!(matches[1].has_exact());
    assert_eq!(matches[1].get_exact().get_value(), &[0, 3][..]);

    let range = matches[2].get_range();
    assert_eq!((range.get_low(), range.get_high()), (&[6][..], &[17][..]));

    assert!(matches[3].has_optional());
    assert_eq!(matches[3].get_optional().get_value(), &[0, 1][..]);

    let mut drop = wire::Action::new();
    drop.set_action_id(DROP);
    assert_eq!(wire.get_action().get_action(), &drop);
}

#[test]
fn encode_lpm_and_params() {
    let registry = registry();
    let wire = registry.encode_table_entry(&route_entry(), true).unwrap();

    let lpm = wire.get_field_match()[0].get_lpm();
    assert_eq!(lpm.get_value(), &[10, 1, 0, 0][..]);
    assert_eq!(lpm.get_prefix_len(), 16);

    // Action parameters are passed through as given, even in canonical mode.
    assert!(wire.get_action().has_action());
    let action = wire.get_action().get_action();
    assert_eq!(action.get_action_id(), SET_NHOP);
    let params = action.get_params();
    assert_eq!(params[0].get_param_id(), 1);
    assert_eq!(params[0].get_value(), &[0, 0, 0, 0, 0, 1][..]);
    assert_eq!(params[1].get_param_id(), 2);
    assert_eq!(params[1].get_value(), &[0, 7][..]);
}

#[test]
fn canonical_match_values() {
    let registry = registry();
    let wire = registry.encode_table_entry(&acl_entry(), true).unwrap();
    let matches = wire.get_field_match();

    assert_eq!(matches[1].get_exact().get_value(), &[3][..]);
    assert_eq!(matches[3].get_optional().get_value(), &[1][..]);
    let ternary = matches[0].get_ternary();
    assert_eq!(ternary.get_value(), &[0x11, 0x22, 0, 0, 0][..]);
    assert_eq!(ternary.get_mask(), &[0xff, 0xff, 0xff, 0, 0, 0][..]);
}

#[test]
fn round_trip() {
    let registry = registry();
    for entry in [acl_entry(), route_entry()] {
        let wire = registry.encode_table_entry(&entry, false).unwrap();
        let decoded = registry.decode_table_entry(&wire).unwrap();
        assert_eq!(decoded.name, entry.name);
        assert_eq!(decoded.action, entry.action);
        assert_eq!(decoded.priority, entry.priority);
        let kinds = |e: &TableEntry| -> Vec<_> {
            e.fields
                .iter()
                .flatten()
                .map(|f| (f.name.clone(), f.value.kind()))
                .collect()
        };
        assert_eq!(kinds(&decoded), kinds(&entry));
    }

    // The ACL entry has nothing to normalize, so it comes back exactly.
    let wire = registry.encode_table_entry(&acl_entry(), false).unwrap();
    let mut expected = acl_entry();
    if let Some(fields) = &mut expected.fields {
        fields[0].value = MatchValue::Ternary {
            value: vec![0x00, 0x11, 0x22, 0, 0, 0],
            mask: vec![0xff, 0xff, 0xff, 0, 0, 0],
        };
    }
    assert_eq!(registry.decode_table_entry(&wire).unwrap(), expected);
}

#[test]
fn masked_lpm_round_trip() {
    let registry = registry();
    let mut entry = route_entry();
    entry.fields = Some(vec![MatchField::new(
        "hdr.ipv4.dst_addr",
        MatchValue::Lpm {
            value: vec![10, 1, 0, 0],
            prefix_len: 16,
        },
    )]);

    let wire = registry.encode_table_entry(&entry, false).unwrap();
    assert_eq!(registry.decode_table_entry(&wire).unwrap(), entry);

    // Once masked, the unmasked entry decodes to the same thing.
    let wire = registry.encode_table_entry(&route_entry(), false).unwrap();
    assert_eq!(registry.decode_table_entry(&wire).unwrap(), entry);
}

#[test]
fn unknown_names() {
    let registry = registry();

    let entry = TableEntry {
        name: "nope".into(),
        ..route_entry()
    };
    assert!(matches!(
        registry.encode_table_entry(&entry, false),
        Err(Error::UnknownTable(name)) if name == "nope"
    ));

    let mut entry = route_entry();
    entry.fields = Some(vec![MatchField::new("meta.vrf", MatchValue::Exact { value: vec![1] })]);
    assert!(matches!(
        registry.encode_table_entry(&entry, false),
        Err(Error::UnknownField { table, field }) if table == "ingress.ipv4_lpm" && field == "meta.vrf"
    ));

    let mut entry = route_entry();
    entry.action = Some(Action::new("ingress.forward", vec![]));
    assert!(matches!(
        registry.encode_table_entry(&entry, false),
        Err(Error::UnknownAction(name)) if name == "ingress.forward"
    ));

    let mut entry = route_entry();
    entry.action = Some(Action::new("ingress.set_nhop", vec![ActionParam::new("vlan", vec![1])]));
    assert!(matches!(
        registry.encode_table_entry(&entry, false),
        Err(Error::UnknownParam { action, param }) if action == "ingress.set_nhop" && param == "vlan"
    ));
}

#[test]
fn malformed_ternary_fails_whole_entry() {
    let registry = registry();
    let mut entry = acl_entry();
    if let Some(fields) = &mut entry.fields {
        fields[0].value = MatchValue::Ternary {
            value: vec![1, 2, 3, 4, 5, 6],
            mask: vec![0xff],
        };
    }
    assert!(matches!(
        registry.encode_table_entry(&entry, false),
        Err(Error::MalformedTernaryMatch {
            value_len: 6,
            mask_len: 1
        })
    ));
}

#[test]
fn default_action_entries() {
    let registry = registry();

    let set_default = TableEntry {
        name: "ingress.ipv4_lpm".into(),
        fields: None,
        action: Some(Action::new("ingress.drop", vec![])),
        priority: 0,
    };
    let wire = registry.encode_table_entry(&set_default, false).unwrap();
    assert!(wire.get_is_default_action());
    assert!(wire.get_field_match().is_empty());
    assert_eq!(registry.decode_table_entry(&wire).unwrap(), set_default);

    let reset_default = TableEntry {
        action: None,
        ..set_default
    };
    let wire = registry.encode_table_entry(&reset_default, false).unwrap();
    assert!(wire.get_is_default_action());
    assert!(!wire.has_action());
    assert_eq!(registry.decode_table_entry(&wire).unwrap(), reset_default);

    // An empty key is not the same as no key.
    let empty_key = TableEntry {
        fields: Some(vec![]),
        ..reset_default
    };
    assert!(!registry.encode_table_entry(&empty_key, false).unwrap().get_is_default_action());
}

#[test]
fn decode_is_lenient_about_fields() {
    let registry = registry();
    let mut exact = FieldMatch_Exact::new();
    exact.set_value(vec![1]);
    let mut fm = FieldMatch::new();
    fm.set_field_id(7);
    fm.set_exact(exact);
    let mut wire = wire::TableEntry::new();
    wire.set_table_id(IPV4_LPM);
    wire.set_field_match(RepeatedField::from_vec(vec![fm]));

    let entry = registry.decode_table_entry(&wire).unwrap();
    let fields = entry.fields.unwrap();
    assert_eq!(fields[0].name, "");
    assert_eq!(fields[0].value, MatchValue::Other { value: vec![] });
}

#[test]
fn decode_errors() {
    let registry = registry();

    let mut wire = wire::TableEntry::new();
    wire.set_table_id(99);
    assert!(matches!(registry.decode_table_entry(&wire), Err(Error::UnknownTableId(99))));

    let mut param = wire::Action_Param::new();
    param.set_param_id(9);
    param.set_value(vec![1]);
    let mut action = wire::Action::new();
    action.set_action_id(SET_NHOP);
    action.set_params(RepeatedField::from_vec(vec![param]));
    let mut wire = wire::TableEntry::new();
    wire.set_table_id(IPV4_LPM);
    wire.mut_action().set_action(action);
    assert!(matches!(
        registry.decode_table_entry(&wire),
        Err(Error::UnknownParamId { param_id: 9, .. })
    ));

    let mut wire = wire::TableEntry::new();
    wire.set_table_id(ECMP);
    wire.mut_action().set_action_profile_member_id(3);
    assert!(matches!(
        wire.get_action().field_type,
        Some(TableAction_oneof_type::action_profile_member_id(3))
    ));
    assert!(matches!(
        registry.decode_table_entry(&wire),
        Err(Error::UnsupportedTableAction { table }) if table == "ingress.ecmp"
    ));

    // A table action that carries nothing decodes as no action.
    let mut wire = wire::TableEntry::new();
    wire.set_table_id(ECMP);
    wire.set_action(TableAction::new());
    assert_eq!(registry.decode_table_entry(&wire).unwrap().action, None);
}

#[test]
fn json_form() {
    let json = r#"{
        "table_name": "ingress.ipv4_lpm",
        "fields": [
            { "field_name": "hdr.ipv4.dst_addr", "match_type": "lpm", "value": [10, 0, 0, 0], "prefix_len": 8 }
        ],
        "action": {
            "action_name": "ingress.set_nhop",
            "table_params": [
                { "param_name": "dst_mac", "param_value": [0, 0, 0, 0, 0, 2] },
                { "param_name": "port", "param_value": [1] }
            ]
        }
    }"#;
    let entry: TableEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.priority, 0);
    assert_eq!(
        entry.fields.as_ref().unwrap()[0].value,
        MatchValue::Lpm {
            value: vec![10, 0, 0, 0],
            prefix_len: 8
        }
    );
    assert_eq!(
        entry.to_string(),
        "Table ingress.ipv4_lpm: hdr.ipv4.dst_addr(lpm)=[10.0.0.0,8] => ingress.set_nhop(dst_mac=00:00:00:00:00:02,port=1)"
    );

    let reparsed: TableEntry = serde_json::from_str(&serde_json::to_string(&entry).unwrap()).unwrap();
    assert_eq!(reparsed, entry);

    let wire = registry().encode_table_entry(&entry, false).unwrap();
    assert_eq!(wire.get_field_match()[0].get_lpm().get_value(), &[10, 0, 0, 0][..]);
}
