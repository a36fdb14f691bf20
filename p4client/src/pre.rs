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

//! Packet replication engine: multicast groups and clone sessions.

use proto::p4runtime::{CloneSessionEntry, Entity, MulticastGroupEntry, Replica, Update, Update_Type};

use protobuf::RepeatedField;

use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::Client;

/// Returns one replica per element of `ports`, numbering instances from zero in order.  A port
/// that appears more than once gets a distinct instance each time.
pub fn build_replicas(ports: &[u32]) -> Vec<Replica> {
    ports
        .iter()
        .enumerate()
        .map(|(instance, &egress_port)| {
            let mut replica = Replica::new();
            replica.set_egress_port(egress_port);
            replica.set_instance(instance as u32);
            replica
        })
        .collect()
}

pub fn build_multicast_group_update(update_type: Update_Type, group_id: u32, ports: &[u32]) -> Update {
    let mut multicast_entry = MulticastGroupEntry::new();
    multicast_entry.set_multicast_group_id(group_id);
    multicast_entry.set_replicas(RepeatedField::from_vec(build_replicas(ports)));
    Update::with_entity(update_type, multicast_entry)
}

pub fn build_clone_session_update(
    update_type: Update_Type,
    session_id: u32,
    packet_length_bytes: i32,
    ports: &[u32],
) -> Update {
    let mut clone_entry = CloneSessionEntry::new();
    clone_entry.set_session_id(session_id);
    clone_entry.set_replicas(RepeatedField::from_vec(build_replicas(ports)));
    clone_entry.set_packet_length_bytes(packet_length_bytes);
    Update::with_entity(update_type, clone_entry)
}

impl<T: Transport> Client<T> {
    pub async fn insert_multicast_group(&self, group_id: u32, ports: &[u32]) -> Result<()> {
        self.write_update(build_multicast_group_update(Update_Type::INSERT, group_id, ports))
            .await
    }

    pub async fn modify_multicast_group(&self, group_id: u32, ports: &[u32]) -> Result<()> {
        self.write_update(build_multicast_group_update(Update_Type::MODIFY, group_id, ports))
            .await
    }

    pub async fn delete_multicast_group(&self, group_id: u32) -> Result<()> {
        self.write_update(build_multicast_group_update(Update_Type::DELETE, group_id, &[]))
            .await
    }

    pub async fn read_multicast_group(&self, group_id: u32) -> Result<MulticastGroupEntry> {
        let mut entry = MulticastGroupEntry::new();
        entry.set_multicast_group_id(group_id);
        self.read_entity_single(entry.into())
            .await?
            .into_multicast_group_entry()
            .ok_or(Error::NotExpectedEntityKind {
                expected: "multicast group entry",
            })
    }

    pub async fn read_multicast_group_wildcard(&self) -> Result<Vec<MulticastGroupEntry>> {
        self.read_wildcard(
            MulticastGroupEntry::new().into(),
            0,
            "multicast group entry",
            Entity::into_multicast_group_entry,
        )
        .await
    }

    /// Creates clone session `session_id` mirroring to `ports`, truncating each copy to
    /// `packet_length_bytes` unless that is zero.
    pub async fn insert_clone_session(&self, session_id: u32, packet_length_bytes: i32, ports: &[u32]) -> Result<()> {
        self.write_update(build_clone_session_update(
            Update_Type::INSERT,
            session_id,
            packet_length_bytes,
            ports,
        ))
        .await
    }

    pub async fn modify_clone_session(&self, session_id: u32, packet_length_bytes: i32, ports: &[u32]) -> Result<()> {
        self.write_update(build_clone_session_update(
            Update_Type::MODIFY,
            session_id,
            packet_length_bytes,
            ports,
        ))
        .await
    }

    pub async fn delete_clone_session(&self, session_id: u32) -> Result<()> {
        self.write_update(build_clone_session_update(Update_Type::DELETE, session_id, 0, &[]))
            .await
    }

    pub async fn read_clone_session(&self, session_id: u32) -> Result<CloneSessionEntry> {
        let mut entry = CloneSessionEntry::new();
        entry.set_session_id(session_id);
        self.read_entity_single(entry.into())
            .await?
            .into_clone_session_entry()
            .ok_or(Error::NotExpectedEntityKind {
                expected: "clone session entry",
            })
    }

    pub async fn read_clone_session_wildcard(&self) -> Result<Vec<CloneSessionEntry>> {
        self.read_wildcard(
            CloneSessionEntry::new().into(),
            0,
            "clone session entry",
            Entity::into_clone_session_entry,
        )
        .await
    }
}
