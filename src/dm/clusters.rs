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

//! The cluster definitions, one module per specification chapter.

use log::error;

use super::{Cluster, ClusterId};

pub mod acl;
pub mod color_control;
pub mod device_energy_mgmt;
pub mod door_lock;
pub mod energy_evse;
pub mod eth_diag;
pub mod joint_fabric_datastore;
pub mod net_comm;
pub mod thermostat;
pub mod thread_diag;

/// All cluster definitions in this crate.
pub const ALL: &[&Cluster<'static>] = &[
    &acl::CLUSTER,
    &color_control::CLUSTER,
    &device_energy_mgmt::CLUSTER,
    &door_lock::CLUSTER,
    &energy_evse::CLUSTER,
    &eth_diag::CLUSTER,
    &joint_fabric_datastore::CLUSTER,
    &net_comm::CLUSTER,
    &thermostat::CLUSTER,
    &thread_diag::CLUSTER,
];

/// Look up a cluster definition by its Matter cluster ID.
pub fn cluster(id: ClusterId) -> Option<&'static Cluster<'static>> {
    let found = ALL.iter().copied().find(|cluster| cluster.id == id);
    if found.is_none() {
        error!("Cluster not found: 0x{id:04X}");
    }

    found
}
