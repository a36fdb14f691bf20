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

//! Name and ID lookups over a P4Info document.
//!
//! A [`Registry`] is built once from a [`P4Info`] and never changes afterward, so it can be shared
//! freely between tasks.  A registry may also be empty, for a client that has no pipeline
//! metadata; then every lookup fails softly.  Lookups never panic and do not return `Result`:
//! a missing name yields [`INVALID_ID`], a missing ID yields [`UNKNOWN_NAME`], and a missing
//! action or match field yields an empty descriptor, so callers must check for these sentinels.

use anyhow::{anyhow, Context};

use itertools::Itertools;

use proto::p4info::{
    Action,
    ActionProfile,
    Counter,
    Digest,
    MatchField,
    Meter,
    P4Info,
    Preamble,
    Table,
};

use protobuf::json::ParseOptions;
use protobuf::Message;

use serde_json::Value;

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;

use crate::codec::MatchKind;

/// P4Runtime reserves ID 0; no object ever has it.
pub const INVALID_ID: u32 = 0;

/// Returned for an ID that doesn't name anything.
pub const UNKNOWN_NAME: &str = "unknownName";

/// Name and ID maps for one category of objects, indexing into the category's list in P4Info.
/// When names or IDs repeat, the earliest object wins, as a front-to-back search would find.
#[derive(Debug, Default)]
struct Index {
    by_name: HashMap<String, usize>,
    by_id: HashMap<u32, usize>,
}

impl Index {
    fn new<'a, I>(preambles: I) -> Self
    where
        I: IntoIterator<Item = &'a Preamble>,
    {
        let mut index = Index::default();
        for (i, p) in preambles.into_iter().enumerate() {
            index.by_name.entry(p.get_name().to_string()).or_insert(i);
            index.by_id.entry(p.get_id()).or_insert(i);
        }
        index
    }

    fn find_by_name<'a, T>(&self, items: &'a [T], name: &str) -> Option<&'a T> {
        self.by_name.get(name).map(|&i| &items[i])
    }

    fn find_by_id<'a, T>(&self, items: &'a [T], id: u32) -> Option<&'a T> {
        self.by_id.get(&id).map(|&i| &items[i])
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    p4info: Option<P4Info>,
    tables: Index,
    actions: Index,
    action_profiles: Index,
    counters: Index,
    meters: Index,
    digests: Index,

    // Handed out in place of a missing action or field, so that lookups can be chained.
    empty_action: Action,
    empty_field: MatchField,
}

impl From<P4Info> for Registry {
    fn from(p4info: P4Info) -> Self {
        Registry {
            tables: Index::new(p4info.tables.iter().map(|x| x.get_preamble())),
            actions: Index::new(p4info.actions.iter().map(|x| x.get_preamble())),
            action_profiles: Index::new(p4info.action_profiles.iter().map(|x| x.get_preamble())),
            counters: Index::new(p4info.counters.iter().map(|x| x.get_preamble())),
            meters: Index::new(p4info.meters.iter().map(|x| x.get_preamble())),
            digests: Index::new(p4info.digests.iter().map(|x| x.get_preamble())),
            p4info: Some(p4info),
            ..Default::default()
        }
    }
}

impl Registry {
    /// A registry with no metadata at all.
    pub fn empty() -> Self {
        Registry::default()
    }

    /// Reads a P4Info document, in its JSON rendering if `path` ends in `.json` and in protobuf
    /// binary form (such as `p4c`'s `.p4info.bin`) otherwise.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.extension().map_or(false, |ext| ext == "json") {
            Self::from_json_file(path)
        } else {
            Self::from_binary_file(path)
        }
    }

    /// Reads a P4Info document in protobuf binary form.
    pub fn from_binary_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut file = fs::File::open(path)
            .with_context(|| format!("{}: could not open P4Info", path.display()))?;
        let p4info: P4Info = Message::parse_from_reader(&mut file)
            .with_context(|| format!("{}: could not read P4Info", path.display()))?;
        Ok(p4info.into())
    }

    /// Reads a P4Info document in its protobuf JSON rendering.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("{}: could not open P4Info", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("{}: could not read P4Info", path.display()))
    }

    /// Parses the protobuf JSON rendering of a P4Info document.  Members that [`P4Info`] does not
    /// model are ignored.  A match field whose `matchType` is not one of the standard kinds is
    /// read as an architecture-specific match type of that name.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let mut value: Value = serde_json::from_str(json)?;
        move_other_match_types(&mut value);

        let options = ParseOptions {
            ignore_unknown_fields: true,
            ..Default::default()
        };
        let p4info: P4Info = protobuf::json::parse_from_str_with_options(&value.to_string(), &options)
            .map_err(|e| anyhow!("malformed P4Info: {:?}", e))?;
        Ok(p4info.into())
    }

    pub fn p4info(&self) -> Option<&P4Info> {
        self.p4info.as_ref()
    }

    fn tables(&self) -> &[Table] {
        self.p4info.as_ref().map_or(&[][..], |p| p.tables.as_slice())
    }

    fn actions(&self) -> &[Action] {
        self.p4info.as_ref().map_or(&[][..], |p| p.actions.as_slice())
    }

    fn action_profiles(&self) -> &[ActionProfile] {
        self.p4info.as_ref().map_or(&[][..], |p| p.action_profiles.as_slice())
    }

    fn counters(&self) -> &[Counter] {
        self.p4info.as_ref().map_or(&[][..], |p| p.counters.as_slice())
    }

    fn meters(&self) -> &[Meter] {
        self.p4info.as_ref().map_or(&[][..], |p| p.meters.as_slice())
    }

    fn digests(&self) -> &[Digest] {
        self.p4info.as_ref().map_or(&[][..], |p| p.digests.as_slice())
    }

    pub fn find_table(&self, name: &str) -> Option<&Table> {
        self.tables.find_by_name(self.tables(), name)
    }

    pub fn find_table_by_id(&self, id: u32) -> Option<&Table> {
        self.tables.find_by_id(self.tables(), id)
    }

    pub fn table_id(&self, name: &str) -> u32 {
        self.find_table(name).map_or(INVALID_ID, |t| t.get_preamble().get_id())
    }

    pub fn table_name(&self, id: u32) -> &str {
        self.find_table_by_id(id).map_or(UNKNOWN_NAME, |t| t.get_preamble().get_name())
    }

    pub fn match_field_id(&self, table_name: &str, field_name: &str) -> u32 {
        self.find_table(table_name)
            .and_then(|t| t.get_match_fields().iter().find(|mf| mf.get_name() == field_name))
            .map_or(INVALID_ID, |mf| mf.get_id())
    }

    /// Returns the match field with `field_id` in `table`, or an empty field (with an empty name
    /// and an unspecified match type) if there is none.
    pub fn find_field_in_table<'a>(&'a self, table: &'a Table, field_id: u32) -> &'a MatchField {
        table
            .get_match_fields()
            .iter()
            .find(|mf| mf.get_id() == field_id)
            .unwrap_or(&self.empty_field)
    }

    pub fn find_action(&self, name: &str) -> Option<&Action> {
        self.actions.find_by_name(self.actions(), name)
    }

    pub fn action_id(&self, name: &str) -> u32 {
        self.find_action(name).map_or(INVALID_ID, |a| a.get_preamble().get_id())
    }

    /// Only the first action named `action_name` is searched for the parameter.
    pub fn action_param_id(&self, action_name: &str, param_name: &str) -> u32 {
        self.find_action(action_name)
            .and_then(|a| a.get_params().iter().find(|p| p.get_name() == param_name))
            .map_or(INVALID_ID, |p| p.get_id())
    }

    /// Returns the action with `action_id`, or an empty action (ID 0, no name, no parameters) if
    /// there is none.
    pub fn action_by_id(&self, action_id: u32) -> &Action {
        self.actions
            .find_by_id(self.actions(), action_id)
            .unwrap_or(&self.empty_action)
    }

    pub fn action_param_name<'a>(&self, action: &'a Action, param_id: u32) -> &'a str {
        action
            .get_params()
            .iter()
            .find(|p| p.get_id() == param_id)
            .map_or(UNKNOWN_NAME, |p| p.get_name())
    }

    pub fn action_profile_id(&self, name: &str) -> u32 {
        self.action_profiles
            .find_by_name(self.action_profiles(), name)
            .map_or(INVALID_ID, |ap| ap.get_preamble().get_id())
    }

    pub fn digest_id(&self, name: &str) -> u32 {
        self.digests
            .find_by_name(self.digests(), name)
            .map_or(INVALID_ID, |d| d.get_preamble().get_id())
    }

    pub fn find_counter(&self, name: &str) -> Option<&Counter> {
        self.counters.find_by_name(self.counters(), name)
    }

    pub fn counter_id(&self, name: &str) -> u32 {
        self.find_counter(name).map_or(INVALID_ID, |c| c.get_preamble().get_id())
    }

    pub fn find_meter(&self, name: &str) -> Option<&Meter> {
        self.meters.find_by_name(self.meters(), name)
    }

    pub fn meter_id(&self, name: &str) -> u32 {
        self.find_meter(name).map_or(INVALID_ID, |m| m.get_preamble().get_id())
    }
}

impl Display for Registry {
    /// Lists each table with its key and its actions, one table per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in self.tables() {
            write!(f, "table {}:", table.get_preamble().get_name())?;
            for mf in table.get_match_fields() {
                let kind = if mf.has_other_match_type() {
                    mf.get_other_match_type().to_string()
                } else {
                    MatchKind::from(mf.get_match_type()).to_string()
                };
                write!(f, "\tfield {}: bit<{}> {}-match", mf.get_name(), mf.get_bitwidth(), kind)?;
            }
            for ar in table.get_action_refs() {
                let action = self.action_by_id(ar.get_id());
                write!(
                    f,
                    "\taction {}({})",
                    action.get_preamble().get_name(),
                    action
                        .get_params()
                        .iter()
                        .map(|p| format!("{}: bit<{}>", p.get_name(), p.get_bitwidth()))
                        .join(", ")
                )?;
            }
            if table.get_size() > 0 {
                write!(f, "\tsize: {}", table.get_size())?;
            }
            if table.get_is_const_table() {
                write!(f, "\tconst table")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

const MATCH_TYPE_NAMES: &[&str] = &["UNSPECIFIED", "EXACT", "LPM", "TERNARY", "RANGE", "OPTIONAL"];
const MATCH_TYPE_NUMBERS: &[u64] = &[0, 2, 3, 4, 5, 6];

/// Rewrites each match field in the JSON form of P4Info whose `matchType` names no standard match
/// kind so that it carries the value as `otherMatchType` instead.
fn move_other_match_types(p4info: &mut Value) {
    let tables = match p4info.get_mut("tables").and_then(Value::as_array_mut) {
        Some(tables) => tables,
        None => return,
    };
    let match_fields = tables
        .iter_mut()
        .filter_map(|t| t.get_mut("matchFields").and_then(Value::as_array_mut))
        .flatten()
        .filter_map(Value::as_object_mut);
    for mf in match_fields {
        let other = match mf.get("matchType") {
            Some(Value::String(s)) => !MATCH_TYPE_NAMES.contains(&s.as_str()),
            Some(Value::Number(n)) => n.as_u64().map_or(true, |n| !MATCH_TYPE_NUMBERS.contains(&n)),
            _ => false,
        };
        if other {
            if let Some(mt) = mf.remove("matchType") {
                let name = match mt {
                    Value::String(s) => s,
                    mt => mt.to_string(),
                };
                mf.insert("otherMatchType".to_string(), Value::String(name));
            }
        }
    }
}
