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

//! Bulk ("wildcard") reads.
//!
//! A wildcard read can return thousands of entities, which the transport streams into a bounded
//! queue as they arrive.  [`read_wildcard`] runs a [`Collector`] task on the other end of that
//! queue.  The collector owns everything it produces until the transport call has returned and
//! the collector has finished, and only then hands its results back.
//!
//! The collector keeps draining even after it sees an entity of the wrong kind.  If it stopped,
//! a transport blocked on a full queue would never finish.

use proto::p4runtime::Entity;

use tokio::sync::mpsc;

use tracing::{event, Level};

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Default number of entities that may be queued between the transport and the collector.
pub const WILDCARD_READ_QUEUE_SIZE: usize = 100;

/// Most results that a wildcard read reserves room for up front.  A P4Info size can be as large
/// as an `int64` allows, so the capacity hint is only trusted up to here.
const MAX_RESERVED_RESULTS: usize = 4096;

/// The receiving end of one wildcard read.
struct Collector<P, F> {
    receiver: mpsc::Receiver<Entity>,
    project: F,
    expected: &'static str,
    items: Vec<P>,
}

/// What a [`Collector`] hands back when its queue closes.
struct Collected<P> {
    items: Vec<P>,
    error: Option<Error>,
    drained: usize,
}

impl<P, F> Collector<P, F>
where
    F: FnMut(Entity) -> Option<P>,
{
    async fn run(mut self) -> Collected<P> {
        let mut error = None;
        let mut drained = 0;
        while let Some(entity) = self.receiver.recv().await {
            drained += 1;
            match (self.project)(entity) {
                Some(item) => self.items.push(item),
                None if error.is_none() => {
                    error = Some(Error::NotExpectedEntityKind {
                        expected: self.expected,
                    })
                }
                None => (),
            }
        }
        Collected {
            items: self.items,
            error,
            drained,
        }
    }
}

/// Reads every entity that matches `descriptor` through `transport`, and returns the result of
/// applying `project` to each one, in arrival order.
///
/// `project` returns `None` for an entity that isn't of the kind wanted, which `expected` names
/// for the error message.  Up to `queue_size` entities may be in flight at once.  `capacity` is
/// a hint for how many results to expect; it may be arbitrarily large.
///
/// If the transport reports failure, that is the error returned.  Otherwise, if any entity was
/// of the wrong kind, the result is [`Error::NotExpectedEntityKind`].  Either way, every entity
/// the transport produced has been consumed by the time this returns.
pub async fn read_wildcard<T, P, F>(
    transport: &T,
    descriptor: Entity,
    queue_size: usize,
    capacity: usize,
    expected: &'static str,
    project: F,
) -> Result<Vec<P>>
where
    T: Transport + ?Sized,
    P: Send + 'static,
    F: FnMut(Entity) -> Option<P> + Send + 'static,
{
    event!(Level::DEBUG, expected, queue_size, "starting wildcard read");

    let (sender, receiver) = mpsc::channel(queue_size.max(1));
    let collector = Collector {
        receiver,
        project,
        expected,
        items: Vec::with_capacity(capacity.min(MAX_RESERVED_RESULTS)),
    };
    let handle = tokio::spawn(collector.run());

    // The transport drops `sender` when it returns, which lets the collector finish.
    let status = transport.read_entity_wildcard(descriptor, sender).await;
    let collected = handle.await;

    status.map_err(Error::Transport)?;
    let Collected {
        items,
        error,
        drained,
    } = collected?;
    event!(
        Level::DEBUG,
        expected,
        drained,
        kept = items.len(),
        "finished wildcard read"
    );

    match error {
        Some(error) => Err(error),
        None => Ok(items),
    }
}
