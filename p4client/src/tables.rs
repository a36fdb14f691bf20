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

//! Table entries and table actions.

use proto::p4runtime::{
    self as wire,
    ActionProfileAction,
    Entity,
    TableAction,
    Update,
    Update_Type,
};

use protobuf::RepeatedField;

use std::convert::TryFrom;
use std::time::Duration;

use crate::codec::{encode_value, to_canonical_if};
use crate::entry::MatchField;
use crate::error::{Error, Result};
use crate::registry::INVALID_ID;
use crate::transport::Transport;
use crate::Client;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableEntryOptions {
    pub idle_timeout: Duration,
    pub priority: i32,
}

impl<T: Transport> Client<T> {
    /// Builds a direct action.  Parameters are positional: `params[0]` gets parameter ID 1, and
    /// so on, which is how P4 compilers number them.
    pub fn new_action(&self, action: &str, params: Vec<Vec<u8>>) -> Result<wire::Action> {
        let action_id = self.registry.action_id(action);
        if action_id == INVALID_ID {
            return Err(Error::UnknownAction(action.into()));
        }

        let params = params
            .into_iter()
            .enumerate()
            .map(|(idx, value)| {
                let mut param = wire::Action_Param::new();
                param.set_param_id(idx as u32 + 1);
                param.set_value(value);
                param
            })
            .collect();

        let mut wire_action = wire::Action::new();
        wire_action.set_action_id(action_id);
        wire_action.set_params(RepeatedField::from_vec(params));
        Ok(wire_action)
    }

    pub fn new_table_action_direct(&self, action: &str, params: Vec<Vec<u8>>) -> Result<TableAction> {
        let mut table_action = TableAction::new();
        table_action.set_action(self.new_action(action, params)?);
        Ok(table_action)
    }

    /// Starts building the weighted set of actions for a one-shot action selector entry.
    pub fn new_action_profile_action_set(&self) -> ActionProfileActionSet<'_, T> {
        ActionProfileActionSet {
            client: self,
            actions: Vec::new(),
            error: None,
        }
    }

    /// Builds a wire table entry for `table`.
    ///
    /// With `matches` as `None`, the entry targets the table's default action: `action` then
    /// sets it, or `None` resets it.
    pub fn new_table_entry(
        &self,
        table: &str,
        matches: Option<&[MatchField]>,
        action: Option<TableAction>,
        options: Option<&TableEntryOptions>,
    ) -> Result<wire::TableEntry> {
        let table_id = self.table_id_checked(table)?;

        let mut entry = wire::TableEntry::new();
        entry.set_table_id(table_id);
        entry.set_is_default_action(matches.is_none());
        if let Some(action) = action {
            entry.set_action(action);
        }

        for mf in matches.unwrap_or_default() {
            let field_id = self.registry.match_field_id(table, &mf.name);
            if field_id == INVALID_ID {
                return Err(Error::UnknownField {
                    table: table.into(),
                    field: mf.name.clone(),
                });
            }
            entry
                .mut_field_match()
                .push(mf.value.encode(field_id, self.config.canonical_bytestrings)?);
        }

        if let Some(options) = options {
            entry.set_idle_timeout_ns(i64::try_from(options.idle_timeout.as_nanos()).unwrap_or(i64::MAX));
            entry.set_priority(options.priority);
        }

        Ok(entry)
    }

    fn table_id_checked(&self, table: &str) -> Result<u32> {
        match self.registry.table_id(table) {
            INVALID_ID => Err(Error::UnknownTable(table.into())),
            table_id => Ok(table_id),
        }
    }

    pub async fn insert_table_entry(&self, entry: wire::TableEntry) -> Result<()> {
        self.write_update(Update::with_entity(Update_Type::INSERT, entry)).await
    }

    pub async fn modify_table_entry(&self, entry: wire::TableEntry) -> Result<()> {
        self.write_update(Update::with_entity(Update_Type::MODIFY, entry)).await
    }

    pub async fn delete_table_entry(&self, entry: wire::TableEntry) -> Result<()> {
        self.write_update(Update::with_entity(Update_Type::DELETE, entry)).await
    }

    /// Reads the single entry in `table` whose key is exactly `matches`.
    pub async fn read_table_entry(&self, table: &str, matches: &[MatchField]) -> Result<wire::TableEntry> {
        let entry = self.new_table_entry(table, Some(matches), None, None)?;
        self.read_entity_single(entry.into())
            .await?
            .into_table_entry()
            .ok_or(Error::NotExpectedEntityKind {
                expected: "table entry",
            })
    }

    /// Reads every entry in `table`.
    pub async fn read_table_entry_wildcard(&self, table: &str) -> Result<Vec<wire::TableEntry>> {
        let table_id = self.table_id_checked(table)?;
        let mut descriptor = wire::TableEntry::new();
        descriptor.set_table_id(table_id);
        self.read_wildcard(descriptor.into(), 0, "table entry", Entity::into_table_entry)
            .await
    }
}

/// Accumulates the members of an action profile action set.
///
/// An unknown action name doesn't stop the chain of [`add_action`](Self::add_action) calls; the
/// first such error comes out of [`table_action`](Self::table_action) instead.
pub struct ActionProfileActionSet<'a, T> {
    client: &'a Client<T>,
    actions: Vec<ActionProfileAction>,
    error: Option<Error>,
}

impl<'a, T: Transport> ActionProfileActionSet<'a, T> {
    /// Adds `action` with `params` and `weight`, to be used only while `watch_port` is up.
    pub fn add_action(mut self, action: &str, params: Vec<Vec<u8>>, weight: i32, watch_port: u32) -> Self {
        match self.client.new_action(action, params) {
            Ok(action) => {
                let watch_port = to_canonical_if(
                    encode_value(u128::from(watch_port), 32),
                    self.client.config.canonical_bytestrings,
                );
                let mut member = ActionProfileAction::new();
                member.set_action(action);
                member.set_weight(weight);
                member.set_watch_port(watch_port);
                self.actions.push(member);
            }
            Err(error) => {
                if self.error.is_none() {
                    self.error = Some(error);
                }
            }
        }
        self
    }

    pub fn table_action(self) -> Result<TableAction> {
        match self.error {
            Some(error) => Err(error),
            None => {
                let mut action_set = wire::ActionProfileActionSet::new();
                action_set.set_action_profile_actions(RepeatedField::from_vec(self.actions));
                let mut table_action = TableAction::new();
                table_action.set_action_profile_action_set(action_set);
                Ok(table_action)
            }
        }
    }
}
