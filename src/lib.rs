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

//! Definitions of the Matter cluster data model: cluster metadata tables,
//! value enums, wire bitmaps, attribute/event payload structs and command
//! builders.
//!
//! Each cluster module under [`dm::clusters`] is a transcription of the
//! corresponding Matter specification chapter. The modules carry no protocol
//! logic; commands are built as [`dm::ClusterCommand`] values (name plus an
//! insertion-ordered parameter mapping) for a transport layer to serialize.

pub mod dm;
pub mod error;
