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

//! Conversions between [`Entity`] and the entries it can carry.

use crate::p4runtime::{
    CloneSessionEntry,
    CounterEntry,
    DigestEntry,
    Entity,
    Entity_oneof_entity,
    MeterEntry,
    MulticastGroupEntry,
    PacketReplicationEngineEntry,
    PacketReplicationEngineEntry_oneof_type,
    TableEntry,
    Update,
    Update_Type,
};

impl Entity {
    pub fn table_entry(&self) -> Option<&TableEntry> {
        match &self.entity {
            Some(Entity_oneof_entity::table_entry(te)) => Some(te),
            _ => None,
        }
    }

    pub fn into_table_entry(self) -> Option<TableEntry> {
        match self.entity {
            Some(Entity_oneof_entity::table_entry(te)) => Some(te),
            _ => None,
        }
    }

    pub fn into_counter_entry(self) -> Option<CounterEntry> {
        match self.entity {
            Some(Entity_oneof_entity::counter_entry(ce)) => Some(ce),
            _ => None,
        }
    }

    pub fn into_meter_entry(self) -> Option<MeterEntry> {
        match self.entity {
            Some(Entity_oneof_entity::meter_entry(me)) => Some(me),
            _ => None,
        }
    }

    pub fn into_packet_replication_engine_entry(self) -> Option<PacketReplicationEngineEntry> {
        match self.entity {
            Some(Entity_oneof_entity::packet_replication_engine_entry(pre)) => Some(pre),
            _ => None,
        }
    }

    pub fn into_multicast_group_entry(self) -> Option<MulticastGroupEntry> {
        match self.into_packet_replication_engine_entry()?.field_type {
            Some(PacketReplicationEngineEntry_oneof_type::multicast_group_entry(mge)) => Some(mge),
            _ => None,
        }
    }

    pub fn into_clone_session_entry(self) -> Option<CloneSessionEntry> {
        match self.into_packet_replication_engine_entry()?.field_type {
            Some(PacketReplicationEngineEntry_oneof_type::clone_session_entry(cse)) => Some(cse),
            _ => None,
        }
    }
}

impl From<TableEntry> for Entity {
    fn from(te: TableEntry) -> Self {
        let mut entity = Entity::new();
        entity.set_table_entry(te);
        entity
    }
}

impl From<CounterEntry> for Entity {
    fn from(ce: CounterEntry) -> Self {
        let mut entity = Entity::new();
        entity.set_counter_entry(ce);
        entity
    }
}

impl From<MeterEntry> for Entity {
    fn from(me: MeterEntry) -> Self {
        let mut entity = Entity::new();
        entity.set_meter_entry(me);
        entity
    }
}

impl From<PacketReplicationEngineEntry> for Entity {
    fn from(pre: PacketReplicationEngineEntry) -> Self {
        let mut entity = Entity::new();
        entity.set_packet_replication_engine_entry(pre);
        entity
    }
}

impl From<MulticastGroupEntry> for Entity {
    fn from(mge: MulticastGroupEntry) -> Self {
        let mut pre = PacketReplicationEngineEntry::new();
        pre.set_multicast_group_entry(mge);
        pre.into()
    }
}

impl From<CloneSessionEntry> for Entity {
    fn from(cse: CloneSessionEntry) -> Self {
        let mut pre = PacketReplicationEngineEntry::new();
        pre.set_clone_session_entry(cse);
        pre.into()
    }
}

impl From<DigestEntry> for Entity {
    fn from(de: DigestEntry) -> Self {
        let mut entity = Entity::new();
        entity.set_digest_entry(de);
        entity
    }
}

impl Update {
    /// An update of type `update_type` that carries `entity`.
    pub fn with_entity<E: Into<Entity>>(update_type: Update_Type, entity: E) -> Self {
        let mut update = Update::new();
        update.set_field_type(update_type);
        update.set_entity(entity.into());
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::p4runtime::Replica;
    use protobuf::{Message, RepeatedField};

    #[test]
    fn entity_conversions() {
        let mut te = TableEntry::new();
        te.set_table_id(7);
        let entity = Entity::from(te.clone());
        assert_eq!(entity.table_entry(), Some(&te));
        assert_eq!(entity.clone().into_counter_entry(), None);
        assert_eq!(entity.into_table_entry(), Some(te));

        let mut replica = Replica::new();
        replica.set_egress_port(3);
        let mut mge = MulticastGroupEntry::new();
        mge.set_multicast_group_id(1);
        mge.set_replicas(RepeatedField::from_vec(vec![replica]));
        let entity = Entity::from(mge.clone());
        assert!(entity.has_packet_replication_engine_entry());
        assert_eq!(entity.clone().into_clone_session_entry(), None);
        assert_eq!(entity.into_multicast_group_entry(), Some(mge));
    }

    #[test]
    fn update_survives_the_wire() {
        let mut cse = CloneSessionEntry::new();
        cse.set_session_id(5);
        cse.set_packet_length_bytes(128);
        let update = Update::with_entity(Update_Type::MODIFY, cse.clone());
        let bytes = update.write_to_bytes().unwrap();
        let parsed = Update::parse_from_bytes(&bytes).unwrap();
        assert_eq!(parsed.get_field_type(), Update_Type::MODIFY);
        assert_eq!(parsed.get_entity().clone().into_clone_session_entry(), Some(cse));
    }
}
