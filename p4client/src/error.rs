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

use thiserror::Error;

/// Errors reported by the client.
///
/// Apart from [`Error::Transport`] and [`Error::Collector`], these are detected before anything
/// is sent to the server.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown table name {0}")]
    UnknownTable(String),

    #[error("can not find table (id={0}) in p4info")]
    UnknownTableId(u32),

    #[error("unknown field name {field} in table {table}")]
    UnknownField { table: String, field: String },

    #[error("unknown action name {0}")]
    UnknownAction(String),

    #[error("unknown param name {param} in action {action}")]
    UnknownParam { action: String, param: String },

    #[error("can not find param (id={param_id}) in action {action}")]
    UnknownParamId { action: String, param_id: u32 },

    #[error("unknown counter name {0}")]
    UnknownCounter(String),

    #[error("unknown meter name {0}")]
    UnknownMeter(String),

    #[error("unknown digest name {0}")]
    UnknownDigest(String),

    /// The server answered with an entity, but not the kind that was asked for.
    #[error("server returned an entity which is not a {expected}")]
    NotExpectedEntityKind { expected: &'static str },

    #[error("ternary mask ({mask_len} bytes) is shorter than its value ({value_len} bytes)")]
    MalformedTernaryMatch { value_len: usize, mask_len: usize },

    #[error("negative LPM prefix length {0}")]
    MalformedLpmMatch(i32),

    /// Only direct actions translate to names; action profile members, groups, and action sets
    /// do not.
    #[error("table entry for {table} uses an action profile, not a direct action")]
    UnsupportedTableAction { table: String },

    /// Failure reported by the transport, passed through as-is so that callers can
    /// `downcast_ref` to the transport's own status type.
    #[error(transparent)]
    Transport(anyhow::Error),

    #[error("wildcard read collector failed ({0})")]
    Collector(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;
