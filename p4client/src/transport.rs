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

//! The connection to a P4Runtime server, as the client sees it.
//!
//! Connecting, arbitration, and the RPCs themselves belong to whoever implements [`Transport`],
//! typically a wrapper around a gRPC `P4RuntimeClient` bound to one device and role.

use futures::future::BoxFuture;

use proto::p4runtime::{Entity, Update};

use tokio::sync::mpsc;

pub trait Transport: Send + Sync {
    /// Applies a single update.
    fn write_update(&self, update: Update) -> BoxFuture<'_, anyhow::Result<()>>;

    /// Applies `updates` in one write request.
    fn write_many_updates(&self, updates: Vec<Update>) -> BoxFuture<'_, anyhow::Result<()>>;

    /// Reads the entities that match `entity`, which must be exactly one.
    fn read_entity_single(&self, entity: Entity) -> BoxFuture<'_, anyhow::Result<Entity>>;

    /// Reads every entity that matches the wildcard `entity` and sends each one, in the order the
    /// server returns them, to `sender`.  The implementation must not keep `sender` (or a clone
    /// of it) past its return, because the receiving side only finishes once every sender is
    /// gone.
    ///
    /// The result reports only whether the request as a whole succeeded.
    fn read_entity_wildcard(
        &self,
        entity: Entity,
        sender: mpsc::Sender<Entity>,
    ) -> BoxFuture<'_, anyhow::Result<()>>;
}
