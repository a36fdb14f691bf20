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

//! P4Runtime message types.
//!
//! `build.rs` generates [`p4info`] and [`p4runtime`] from the `.proto` sources under
//! `p4runtime/proto` with rust-protobuf.  [`p4info`] describes a compiled P4 program: its
//! tables, match fields, actions, and externs.  [`p4runtime`] holds the entities that travel
//! between a controller and a switch, all addressed by the numeric IDs that P4Info assigns.
//!
//! [`entity`] adds conversions into and out of [`p4runtime::Entity`], whose `oneof` is otherwise
//! awkward to build and take apart.

pub mod entity;
pub mod p4info;
pub mod p4runtime;
