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

//! The Ethernet Network Diagnostics cluster (0x0037).

use bitflags::bitflags;

use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

use crate::dm::{Access, Attribute, Cluster, ClusterCommand, Command, Quality};
use crate::{attribute_enum, attributes, bitflags_serde, cluster_enum, command_enum, commands};

pub const ID: u32 = 0x0037;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum AttributeId {
    PhyRate = 0x00,
    FullDuplex = 0x01,
    PacketRxCount = 0x02,
    PacketTxCount = 0x03,
    TxErrCount = 0x04,
    CollisionCount = 0x05,
    OverrunCount = 0x06,
    CarrierDetect = 0x07,
    TimeSinceReset = 0x08,
}

attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum CommandId {
    ResetCounts = 0x00,
}

command_enum!(CommandId);

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Feature: u32 {
        const PACKET_COUNTS = 0x01;
        const ERROR_COUNTS = 0x02;
    }
}

bitflags_serde!(Feature, u32);

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    "EthernetNetworkDiagnostics",
    1,
    0,
    attributes!(
        Attribute::new(AttributeId::PhyRate as _, "phyRate", Access::RV, Quality::X),
        Attribute::new(
            AttributeId::FullDuplex as _,
            "fullDuplex",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::PacketRxCount as _,
            "packetRxCount",
            Access::RV,
            Quality::NONE,
        ),
        Attribute::new(
            AttributeId::PacketTxCount as _,
            "packetTxCount",
            Access::RV,
            Quality::NONE,
        ),
        Attribute::new(
            AttributeId::TxErrCount as _,
            "txErrCount",
            Access::RV,
            Quality::NONE,
        ),
        Attribute::new(
            AttributeId::CollisionCount as _,
            "collisionCount",
            Access::RV,
            Quality::NONE,
        ),
        Attribute::new(
            AttributeId::OverrunCount as _,
            "overrunCount",
            Access::RV,
            Quality::NONE,
        ),
        Attribute::new(
            AttributeId::CarrierDetect as _,
            "carrierDetect",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::TimeSinceReset as _,
            "timeSinceReset",
            Access::RV,
            Quality::NONE,
        ),
    ),
    commands!(Command::new(
        CommandId::ResetCounts as _,
        "resetCounts",
        None,
        Access::WM,
    )),
);

// Enums

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
pub enum PHYRateEnum {
    #[strum(serialize = "Rate 10 M")]
    Rate10M = 0,
    #[strum(serialize = "Rate 100 M")]
    Rate100M = 1,
    #[strum(serialize = "Rate 1 G")]
    Rate1G = 2,
    #[strum(serialize = "Rate 2 G 5")]
    Rate2G5 = 3,
    #[strum(serialize = "Rate 5 G")]
    Rate5G = 4,
    #[strum(serialize = "Rate 10 G")]
    Rate10G = 5,
    #[strum(serialize = "Rate 40 G")]
    Rate40G = 6,
    #[strum(serialize = "Rate 100 G")]
    Rate100G = 7,
    #[strum(serialize = "Rate 200 G")]
    Rate200G = 8,
    #[strum(serialize = "Rate 400 G")]
    Rate400G = 9,
}

cluster_enum!(PHYRateEnum);

/// The decoded attribute state of an Ethernet Network Diagnostics cluster
/// instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EthernetNetworkDiagnostics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_revision: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_map: Option<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phy_rate: Option<PHYRateEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_duplex: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_rx_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_tx_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_err_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collision_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrun_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_detect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_since_reset: Option<u64>,
}

// Commands

/// Reset the packet and error counts.
pub fn reset_counts() -> ClusterCommand {
    ClusterCommand::new("resetCounts")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dm::ClusterEnum;

    #[test]
    fn cluster_id() {
        assert_eq!(CLUSTER.id, 0x0037);
        assert_eq!(CLUSTER.attribute_named("packetRxCount").unwrap().id, 0x02);
    }

    #[test]
    fn phy_rate_codes() {
        assert_eq!(PHYRateEnum::Rate10M.value(), 0);
        assert_eq!(PHYRateEnum::Rate2G5.label(), "Rate 2 G 5");
        assert_eq!(PHYRateEnum::from_value(9).unwrap(), PHYRateEnum::Rate400G);
        assert!(PHYRateEnum::from_value(10).is_err());
    }

    #[test]
    fn reset_counts_has_no_args() {
        let cmd = reset_counts();
        assert_eq!(cmd.name, "resetCounts");
        assert!(cmd.args.is_empty());
    }
}
