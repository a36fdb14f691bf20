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

use anyhow::Context;

use serde::Deserialize;

use std::fs;
use std::path::Path;

use crate::wildcard::WILDCARD_READ_QUEUE_SIZE;

/// Client settings.  Every member is optional in JSON and takes its default when missing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Send match values in canonical form, without leading zero bytes.
    pub canonical_bytestrings: bool,

    /// Entities allowed in flight between the transport and the reader during a wildcard read.
    pub wildcard_read_queue_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            canonical_bytestrings: false,
            wildcard_read_queue_size: WILDCARD_READ_QUEUE_SIZE,
        }
    }
}

impl ClientConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("{}: could not open client configuration", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("{}: could not parse client configuration", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in() {
        let config: ClientConfig = serde_json::from_str(r#"{"canonical_bytestrings": true}"#).unwrap();
        assert!(config.canonical_bytestrings);
        assert_eq!(config.wildcard_read_queue_size, WILDCARD_READ_QUEUE_SIZE);

        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn rejects_unknown_settings() {
        assert!(serde_json::from_str::<ClientConfig>(r#"{"queue": 5}"#).is_err());
    }
}
