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

//! Table entries addressed by name, and their translation to and from the wire.
//!
//! [`TableEntry`] mirrors the P4Runtime table entry but names its table, fields, action, and
//! parameters instead of numbering them.  [`Registry::encode_table_entry`] and
//! [`Registry::decode_table_entry`] convert between the two forms.

use itertools::Itertools;

use proto::p4runtime::{self as wire, TableAction, TableAction_oneof_type};

use protobuf::RepeatedField;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display};

use crate::codec::{format_bytes, MatchValue};
use crate::error::{Error, Result};
use crate::registry::{Registry, UNKNOWN_NAME};

/// A table entry in terms of names.
///
/// `fields` is `None` for the entry that holds a table's default action.  Such an entry with an
/// action sets the default action; with no action, it resets the default action to the one the
/// P4 program declares.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    #[serde(rename = "table_name")]
    pub name: String,
    #[serde(default)]
    pub fields: Option<Vec<MatchField>>,
    #[serde(default)]
    pub action: Option<Action>,
    #[serde(default)]
    pub priority: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchField {
    #[serde(rename = "field_name")]
    pub name: String,
    #[serde(flatten)]
    pub value: MatchValue,
}

impl MatchField {
    pub fn new<S: Into<String>>(name: S, value: MatchValue) -> Self {
        MatchField { name: name.into(), value }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "action_name")]
    pub name: String,
    #[serde(rename = "table_params", default)]
    pub params: Vec<ActionParam>,
}

impl Action {
    pub fn new<S: Into<String>>(name: S, params: Vec<ActionParam>) -> Self {
        Action { name: name.into(), params }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionParam {
    #[serde(rename = "param_name")]
    pub name: String,
    #[serde(rename = "param_value")]
    pub value: Vec<u8>,
}

impl ActionParam {
    pub fn new<S: Into<String>>(name: S, value: Vec<u8>) -> Self {
        ActionParam { name: name.into(), value }
    }
}

impl Display for MatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})={}", self.name, self.value.kind(), self.value)
    }
}

impl Display for ActionParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, format_bytes(&self.value))
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.params.is_empty() {
            write!(f, "({})", self.params.iter().join(","))?;
        }
        Ok(())
    }
}

impl Display for TableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Table {}: ", self.name)?;
        match &self.fields {
            Some(fields) => write!(f, "{}", fields.iter().join(","))?,
            None => write!(f, "default")?,
        }
        match &self.action {
            Some(action) => write!(f, " => {}", action),
            None => write!(f, " => (no action)"),
        }
    }
}

impl Registry {
    /// Translates `entry` into a wire table entry, converting byte strings to canonical form if
    /// `canonical` is true.  Fails, without producing any entry, if any name is unknown or any
    /// match value is malformed.
    pub fn encode_table_entry(&self, entry: &TableEntry, canonical: bool) -> Result<wire::TableEntry> {
        let table = self
            .find_table(&entry.name)
            .ok_or_else(|| Error::UnknownTable(entry.name.clone()))?;

        let matches = match &entry.fields {
            None => Vec::new(),
            Some(fields) => fields
                .iter()
                .map(|field| {
                    let mf = table
                        .get_match_fields()
                        .iter()
                        .find(|mf| mf.get_name() == field.name)
                        .ok_or_else(|| Error::UnknownField {
                            table: entry.name.clone(),
                            field: field.name.clone(),
                        })?;
                    field.value.encode(mf.get_id(), canonical)
                })
                .collect::<Result<Vec<_>>>()?,
        };

        let mut table_entry = wire::TableEntry::new();
        table_entry.set_table_id(table.get_preamble().get_id());
        table_entry.set_field_match(RepeatedField::from_vec(matches));
        if let Some(action) = &entry.action {
            let mut table_action = TableAction::new();
            table_action.set_action(self.encode_action(action)?);
            table_entry.set_action(table_action);
        }
        table_entry.set_priority(entry.priority);
        table_entry.set_is_default_action(entry.fields.is_none());
        Ok(table_entry)
    }

    fn encode_action(&self, action: &Action) -> Result<wire::Action> {
        let p4_action = self
            .find_action(&action.name)
            .ok_or_else(|| Error::UnknownAction(action.name.clone()))?;

        let params = action
            .params
            .iter()
            .map(|param| {
                let p = p4_action
                    .get_params()
                    .iter()
                    .find(|p| p.get_name() == param.name)
                    .ok_or_else(|| Error::UnknownParam {
                        action: action.name.clone(),
                        param: param.name.clone(),
                    })?;
                let mut wire_param = wire::Action_Param::new();
                wire_param.set_param_id(p.get_id());
                wire_param.set_value(param.value.clone());
                Ok(wire_param)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut wire_action = wire::Action::new();
        wire_action.set_action_id(p4_action.get_preamble().get_id());
        wire_action.set_params(RepeatedField::from_vec(params));
        Ok(wire_action)
    }

    /// Translates the wire table entry `entry` back into names.
    ///
    /// A field ID that the table doesn't have is not an error: the field comes back with an
    /// empty name and an `Other` value.  An unknown action likewise comes back with an empty
    /// name, but then any parameter it has is an error.
    pub fn decode_table_entry(&self, entry: &wire::TableEntry) -> Result<TableEntry> {
        let table = self
            .find_table_by_id(entry.get_table_id())
            .ok_or_else(|| Error::UnknownTableId(entry.get_table_id()))?;
        let table_name = table.get_preamble().get_name();

        let fields = if entry.get_is_default_action() {
            None
        } else {
            Some(
                entry
                    .get_field_match()
                    .iter()
                    .map(|fm| {
                        let mf = self.find_field_in_table(table, fm.get_field_id());
                        MatchField {
                            name: mf.get_name().to_string(),
                            value: MatchValue::decode(mf, fm),
                        }
                    })
                    .collect(),
            )
        };

        let action = match entry.action.as_ref().and_then(|ta| ta.field_type.as_ref()) {
            None => None,
            Some(TableAction_oneof_type::action(action)) => Some(self.decode_action(action)?),
            Some(_) => {
                return Err(Error::UnsupportedTableAction {
                    table: table_name.to_string(),
                })
            }
        };

        Ok(TableEntry {
            name: table_name.to_string(),
            fields,
            action,
            priority: entry.get_priority(),
        })
    }

    fn decode_action(&self, action: &wire::Action) -> Result<Action> {
        let p4_action = self.action_by_id(action.get_action_id());
        let action_name = p4_action.get_preamble().get_name();
        let params = action
            .get_params()
            .iter()
            .map(|param| {
                let name = self.action_param_name(p4_action, param.get_param_id());
                if name == UNKNOWN_NAME {
                    return Err(Error::UnknownParamId {
                        action: action_name.to_string(),
                        param_id: param.get_param_id(),
                    });
                }
                Ok(ActionParam {
                    name: name.to_string(),
                    value: param.get_value().to_vec(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Action {
            name: action_name.to_string(),
            params,
        })
    }
}
