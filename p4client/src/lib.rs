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

//! A P4Runtime client that speaks in names.
//!
//! A P4Runtime server addresses every table, field, action, and extern by a numeric ID that the
//! P4 compiler assigns and publishes in the P4Info document.  This crate lets a controller work
//! with the names from the P4 program instead:
//!
//!   - [`Registry`] resolves names to IDs and back, given a P4Info document.
//!
//!   - [`MatchValue`] encodes the value for one table key field into its wire form, applying the
//!     rules that P4Runtime imposes on LPM and ternary values.
//!
//!   - [`TableEntry`] is a table entry in terms of names, which [`Registry::encode_table_entry`]
//!     and [`Registry::decode_table_entry`] translate to and from the wire.
//!
//!   - [`Client`] ties a registry to a [`Transport`] and offers operations on table entries,
//!     counters, meters, multicast groups, clone sessions, and digests.  Reading every entity of
//!     some kind goes through [`wildcard::read_wildcard`], which streams results through a
//!     bounded queue.
//!
//! The transport itself, that is, the gRPC session to the switch, is up to the caller.

pub mod codec;
pub mod config;
pub mod counters;
pub mod digests;
pub mod entry;
mod error;
pub mod pre;
pub mod registry;
pub mod tables;
pub mod transport;
pub mod wildcard;

pub use codec::{MatchKind, MatchValue};
pub use config::ClientConfig;
pub use entry::{Action, ActionParam, MatchField, TableEntry};
pub use error::{Error, Result};
pub use registry::{Registry, INVALID_ID, UNKNOWN_NAME};
pub use tables::{ActionProfileActionSet, TableEntryOptions};
pub use transport::Transport;

use proto::p4runtime::{self as wire, Entity, Update};

use tracing::{event, Level};

pub struct Client<T> {
    transport: T,
    registry: Registry,
    config: ClientConfig,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, registry: Registry, config: ClientConfig) -> Self {
        Client {
            transport,
            registry,
            config,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Translates `entry` to its wire form, using this client's byte string convention.
    pub fn table_entry_encode(&self, entry: &TableEntry) -> Result<wire::TableEntry> {
        self.registry
            .encode_table_entry(entry, self.config.canonical_bytestrings)
    }

    pub fn table_entry_decode(&self, entry: &wire::TableEntry) -> Result<TableEntry> {
        self.registry.decode_table_entry(entry)
    }

    pub async fn write_update(&self, update: Update) -> Result<()> {
        event!(Level::TRACE, "write {:?}", update);
        self.transport
            .write_update(update)
            .await
            .map_err(Error::Transport)
    }

    pub async fn write_many_updates(&self, updates: Vec<Update>) -> Result<()> {
        event!(Level::TRACE, count = updates.len(), "write batch");
        self.transport
            .write_many_updates(updates)
            .await
            .map_err(Error::Transport)
    }

    pub async fn read_entity_single(&self, entity: Entity) -> Result<Entity> {
        event!(Level::TRACE, "read {:?}", entity);
        self.transport
            .read_entity_single(entity)
            .await
            .map_err(Error::Transport)
    }

    pub(crate) async fn read_wildcard<P, F>(
        &self,
        descriptor: Entity,
        capacity: usize,
        expected: &'static str,
        project: F,
    ) -> Result<Vec<P>>
    where
        P: Send + 'static,
        F: FnMut(Entity) -> Option<P> + Send + 'static,
    {
        wildcard::read_wildcard(
            &self.transport,
            descriptor,
            self.config.wildcard_read_queue_size,
            capacity,
            expected,
            project,
        )
        .await
    }
}
