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

//! Indirect counters and meters.

use proto::p4runtime::{
    CounterData,
    CounterEntry,
    Index,
    MeterConfig,
    MeterEntry,
    Update,
    Update_Type,
};

use std::convert::TryFrom;

use crate::error::{Error, Result};
use crate::registry::INVALID_ID;
use crate::transport::Transport;
use crate::Client;

impl<T: Transport> Client<T> {
    fn counter_id_checked(&self, counter: &str) -> Result<u32> {
        match self.registry.counter_id(counter) {
            INVALID_ID => Err(Error::UnknownCounter(counter.into())),
            counter_id => Ok(counter_id),
        }
    }

    fn meter_id_checked(&self, meter: &str) -> Result<u32> {
        match self.registry.meter_id(meter) {
            INVALID_ID => Err(Error::UnknownMeter(meter.into())),
            meter_id => Ok(meter_id),
        }
    }

    fn counter_entry(counter_id: u32, index: i64, data: Option<CounterData>) -> CounterEntry {
        let mut entry = CounterEntry::new();
        entry.set_counter_id(counter_id);
        entry.set_index(new_index(index));
        if let Some(data) = data {
            entry.set_data(data);
        }
        entry
    }

    fn meter_entry(meter_id: u32, index: i64, config: Option<MeterConfig>) -> MeterEntry {
        let mut entry = MeterEntry::new();
        entry.set_meter_id(meter_id);
        entry.set_index(new_index(index));
        if let Some(config) = config {
            entry.set_config(config);
        }
        entry
    }

    pub async fn modify_counter_entry(&self, counter: &str, index: i64, data: CounterData) -> Result<()> {
        let counter_id = self.counter_id_checked(counter)?;
        let entry = Self::counter_entry(counter_id, index, Some(data));
        self.write_update(Update::with_entity(Update_Type::MODIFY, entry)).await
    }

    /// Sets every cell in `indices` of `counter` to `data` in a single write.  Mostly useful for
    /// zeroing counters.
    pub async fn modify_many_counter_entries(
        &self,
        counter: &str,
        indices: &[i64],
        data: CounterData,
    ) -> Result<()> {
        let counter_id = self.counter_id_checked(counter)?;
        let updates = indices
            .iter()
            .map(|&index| {
                Update::with_entity(
                    Update_Type::MODIFY,
                    Self::counter_entry(counter_id, index, Some(data.clone())),
                )
            })
            .collect();
        self.write_many_updates(updates).await
    }

    pub async fn read_counter_entry(&self, counter: &str, index: i64) -> Result<CounterData> {
        let counter_id = self.counter_id_checked(counter)?;
        let entry = Self::counter_entry(counter_id, index, None);
        self.read_entity_single(entry.into())
            .await?
            .into_counter_entry()
            .map(|mut entry| entry.take_data())
            .ok_or(Error::NotExpectedEntityKind {
                expected: "counter entry",
            })
    }

    /// Reads every cell of `counter`, in the order the target returns them.
    pub async fn read_counter_entry_wildcard(&self, counter: &str) -> Result<Vec<CounterData>> {
        let p4counter = self
            .registry
            .find_counter(counter)
            .ok_or_else(|| Error::UnknownCounter(counter.into()))?;
        let capacity = usize::try_from(p4counter.get_size()).unwrap_or(0);
        let mut descriptor = CounterEntry::new();
        descriptor.set_counter_id(p4counter.get_preamble().get_id());
        self.read_wildcard(descriptor.into(), capacity, "counter entry", |entity| {
            entity.into_counter_entry().map(|mut entry| entry.take_data())
        })
        .await
    }

    pub async fn modify_meter_entry(&self, meter: &str, index: i64, config: MeterConfig) -> Result<()> {
        let meter_id = self.meter_id_checked(meter)?;
        let entry = Self::meter_entry(meter_id, index, Some(config));
        self.write_update(Update::with_entity(Update_Type::MODIFY, entry)).await
    }

    /// Returns the configuration of one meter cell, or `None` if the cell is unconfigured.
    pub async fn read_meter_entry(&self, meter: &str, index: i64) -> Result<Option<MeterConfig>> {
        let meter_id = self.meter_id_checked(meter)?;
        let entry = Self::meter_entry(meter_id, index, None);
        self.read_entity_single(entry.into())
            .await?
            .into_meter_entry()
            .map(|entry| entry.config.into_option())
            .ok_or(Error::NotExpectedEntityKind {
                expected: "meter entry",
            })
    }
}

fn new_index(index: i64) -> Index {
    let mut idx = Index::new();
    idx.set_index(index);
    idx
}
