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

//! Digest configuration.

use proto::p4runtime::{DigestEntry, DigestEntry_Config as DigestConfig, Update, Update_Type};

use tracing::{event, Level};

use crate::error::{Error, Result};
use crate::registry::INVALID_ID;
use crate::transport::Transport;
use crate::Client;

impl<T: Transport> Client<T> {
    /// Asks the target to start streaming `digest` with the given batching parameters.
    pub async fn configure_digest(&self, digest: &str, config: DigestConfig) -> Result<()> {
        let digest_id = match self.registry.digest_id(digest) {
            INVALID_ID => return Err(Error::UnknownDigest(digest.into())),
            digest_id => digest_id,
        };
        self.write_update(Update::with_entity(Update_Type::INSERT, digest_entry(digest_id, config)))
            .await
    }

    /// Configures every digest declared in the P4Info with the same `config`, in one write.
    pub async fn configure_all_digests(&self, config: DigestConfig) -> Result<()> {
        let updates: Vec<Update> = self
            .registry
            .p4info()
            .map(|p4info| p4info.get_digests())
            .unwrap_or_default()
            .iter()
            .map(|digest| {
                Update::with_entity(
                    Update_Type::INSERT,
                    digest_entry(digest.get_preamble().get_id(), config.clone()),
                )
            })
            .collect();
        if updates.is_empty() {
            event!(Level::DEBUG, "no digests to configure");
            return Ok(());
        }
        self.write_many_updates(updates).await
    }
}

fn digest_entry(digest_id: u32, config: DigestConfig) -> DigestEntry {
    let mut entry = DigestEntry::new();
    entry.set_digest_id(digest_id);
    entry.set_config(config);
    entry
}
