/*
 *
 *    Copyright (c) 2020-2022 Project CHIP Authors
 *
 *    Licensed under the Apache License, Version 2.0 (the "License");
 *    you may not use this file except in compliance with the License.
 *    You may obtain a copy of the License at
 *
 *        http://www.apache.org/licenses/LICENSE-2.0
 *
 *    Unless required by applicable law or agreed to in writing, software
 *    distributed under the License is distributed on an "AS IS" BASIS,
 *    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *    See the License for the specific language governing permissions and
 *    limitations under the License.
 */

pub use attribute::*;
pub use cluster::*;
pub use command::*;
pub use enums::*;
pub use octets::*;
pub use privilege::*;

mod attribute;
mod bitmaps;
mod cluster;
mod command;
mod enums;
mod octets;
mod privilege;

/// A type for modeling cluster IDs
pub type ClusterId = u32;
/// A type for modeling attribute IDs
pub type AttrId = u32;
/// A type for modeling command IDs
pub type CmdId = u32;
/// A type for modeling event IDs
pub type EventId = u32;
/// A type for modeling endpoint IDs
pub type EndptId = u16;
/// A type for modeling node IDs
pub type NodeId = u64;
