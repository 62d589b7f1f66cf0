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

//! The Thread Network Diagnostics cluster (0x0035): the mesh topology
//! tables plus the MLE/MAC counter set.

use bitflags::bitflags;

use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

use crate::dm::{Access, Attribute, Cluster, ClusterCommand, Command, OctetString, Quality};
use crate::{attribute_enum, attributes, bitflags_serde, cluster_enum, command_enum, commands};

pub const ID: u32 = 0x0035;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum AttributeId {
    Channel = 0,
    RoutingRole = 1,
    NetworkName = 2,
    PanId = 3,
    ExtendedPanId = 4,
    MeshLocalPrefix = 5,
    OverrunCount = 6,
    NeighborTable = 7,
    RouteTable = 8,
    PartitionId = 9,
    Weighting = 10,
    DataVersion = 11,
    StableDataVersion = 12,
    LeaderRouterId = 13,
    DetachedRoleCount = 14,
    ChildRoleCount = 15,
    RouterRoleCount = 16,
    LeaderRoleCount = 17,
    AttachAttemptCount = 18,
    PartitionIdChangeCount = 19,
    BetterPartitionAttachAttemptCount = 20,
    ParentChangeCount = 21,
    TxTotalCount = 22,
    TxUnicastCount = 23,
    TxBroadcastCount = 24,
    TxAckRequestedCount = 25,
    TxAckedCount = 26,
    TxNoAckRequestedCount = 27,
    TxDataCount = 28,
    TxDataPollCount = 29,
    TxBeaconCount = 30,
    TxBeaconRequestCount = 31,
    TxOtherCount = 32,
    TxRetryCount = 33,
    TxDirectMaxRetryExpiryCount = 34,
    TxIndirectMaxRetryExpiryCount = 35,
    TxErrCcaCount = 36,
    TxErrAbortCount = 37,
    TxErrBusyChannelCount = 38,
    RxTotalCount = 39,
    RxUnicastCount = 40,
    RxBroadcastCount = 41,
    RxDataCount = 42,
    RxDataPollCount = 43,
    RxBeaconCount = 44,
    RxBeaconRequestCount = 45,
    RxOtherCount = 46,
    RxAddressFilteredCount = 47,
    RxDestAddrFilteredCount = 48,
    RxDuplicatedCount = 49,
    RxErrNoFrameCount = 50,
    RxErrUnknownNeighborCount = 51,
    RxErrInvalidSrcAddrCount = 52,
    RxErrSecCount = 53,
    RxErrFcsCount = 54,
    RxErrOtherCount = 55,
    ActiveTimestamp = 56,
    PendingTimestamp = 57,
    Delay = 58,
    SecurityPolicy = 59,
    ChannelPage0Mask = 60,
    OperationalDatasetComponents = 61,
    ActiveNetworkFaultsList = 62,
    ExtAddress = 63,
    Rloc16 = 64,
}

attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum CommandId {
    ResetCounts = 0x00,
}

command_enum!(CommandId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum EventId {
    ConnectionStatus = 0x00,
    NetworkFaultChange = 0x01,
}

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Feature: u32 {
        const PACKET_COUNTS = 0x01;
        const ERROR_COUNTS = 0x02;
        const MLE_COUNTS = 0x04;
        const MAC_COUNTS = 0x08;
    }
}

bitflags_serde!(Feature, u32);

// The counter attributes share the same qualifiers, so the table is built
// from one helper.
const fn counter(id: AttributeId, name: &'static str) -> Attribute {
    Attribute::new(id as _, name, Access::RV, Quality::NONE)
}

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    "ThreadNetworkDiagnostics",
    3,
    0,
    attributes!(
        Attribute::new(AttributeId::Channel as _, "channel", Access::RV, Quality::X),
        Attribute::new(
            AttributeId::RoutingRole as _,
            "routingRole",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::NetworkName as _,
            "networkName",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(AttributeId::PanId as _, "panId", Access::RV, Quality::X),
        Attribute::new(
            AttributeId::ExtendedPanId as _,
            "extendedPanId",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::MeshLocalPrefix as _,
            "meshLocalPrefix",
            Access::RV,
            Quality::X,
        ),
        counter(AttributeId::OverrunCount, "overrunCount"),
        Attribute::new(
            AttributeId::NeighborTable as _,
            "neighborTable",
            Access::RV,
            Quality::NONE,
        ),
        Attribute::new(
            AttributeId::RouteTable as _,
            "routeTable",
            Access::RV,
            Quality::NONE,
        ),
        Attribute::new(
            AttributeId::PartitionId as _,
            "partitionId",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::Weighting as _,
            "weighting",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::DataVersion as _,
            "dataVersion",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::StableDataVersion as _,
            "stableDataVersion",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::LeaderRouterId as _,
            "leaderRouterId",
            Access::RV,
            Quality::X,
        ),
        counter(AttributeId::DetachedRoleCount, "detachedRoleCount"),
        counter(AttributeId::ChildRoleCount, "childRoleCount"),
        counter(AttributeId::RouterRoleCount, "routerRoleCount"),
        counter(AttributeId::LeaderRoleCount, "leaderRoleCount"),
        counter(AttributeId::AttachAttemptCount, "attachAttemptCount"),
        counter(AttributeId::PartitionIdChangeCount, "partitionIdChangeCount"),
        counter(
            AttributeId::BetterPartitionAttachAttemptCount,
            "betterPartitionAttachAttemptCount"
        ),
        counter(AttributeId::ParentChangeCount, "parentChangeCount"),
        counter(AttributeId::TxTotalCount, "txTotalCount"),
        counter(AttributeId::TxUnicastCount, "txUnicastCount"),
        counter(AttributeId::TxBroadcastCount, "txBroadcastCount"),
        counter(AttributeId::TxAckRequestedCount, "txAckRequestedCount"),
        counter(AttributeId::TxAckedCount, "txAckedCount"),
        counter(AttributeId::TxNoAckRequestedCount, "txNoAckRequestedCount"),
        counter(AttributeId::TxDataCount, "txDataCount"),
        counter(AttributeId::TxDataPollCount, "txDataPollCount"),
        counter(AttributeId::TxBeaconCount, "txBeaconCount"),
        counter(AttributeId::TxBeaconRequestCount, "txBeaconRequestCount"),
        counter(AttributeId::TxOtherCount, "txOtherCount"),
        counter(AttributeId::TxRetryCount, "txRetryCount"),
        counter(
            AttributeId::TxDirectMaxRetryExpiryCount,
            "txDirectMaxRetryExpiryCount"
        ),
        counter(
            AttributeId::TxIndirectMaxRetryExpiryCount,
            "txIndirectMaxRetryExpiryCount"
        ),
        counter(AttributeId::TxErrCcaCount, "txErrCcaCount"),
        counter(AttributeId::TxErrAbortCount, "txErrAbortCount"),
        counter(AttributeId::TxErrBusyChannelCount, "txErrBusyChannelCount"),
        counter(AttributeId::RxTotalCount, "rxTotalCount"),
        counter(AttributeId::RxUnicastCount, "rxUnicastCount"),
        counter(AttributeId::RxBroadcastCount, "rxBroadcastCount"),
        counter(AttributeId::RxDataCount, "rxDataCount"),
        counter(AttributeId::RxDataPollCount, "rxDataPollCount"),
        counter(AttributeId::RxBeaconCount, "rxBeaconCount"),
        counter(AttributeId::RxBeaconRequestCount, "rxBeaconRequestCount"),
        counter(AttributeId::RxOtherCount, "rxOtherCount"),
        counter(AttributeId::RxAddressFilteredCount, "rxAddressFilteredCount"),
        counter(AttributeId::RxDestAddrFilteredCount, "rxDestAddrFilteredCount"),
        counter(AttributeId::RxDuplicatedCount, "rxDuplicatedCount"),
        counter(AttributeId::RxErrNoFrameCount, "rxErrNoFrameCount"),
        counter(
            AttributeId::RxErrUnknownNeighborCount,
            "rxErrUnknownNeighborCount"
        ),
        counter(
            AttributeId::RxErrInvalidSrcAddrCount,
            "rxErrInvalidSrcAddrCount"
        ),
        counter(AttributeId::RxErrSecCount, "rxErrSecCount"),
        counter(AttributeId::RxErrFcsCount, "rxErrFcsCount"),
        counter(AttributeId::RxErrOtherCount, "rxErrOtherCount"),
        Attribute::new(
            AttributeId::ActiveTimestamp as _,
            "activeTimestamp",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::PendingTimestamp as _,
            "pendingTimestamp",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(AttributeId::Delay as _, "delay", Access::RV, Quality::X),
        Attribute::new(
            AttributeId::SecurityPolicy as _,
            "securityPolicy",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::ChannelPage0Mask as _,
            "channelPage0Mask",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::OperationalDatasetComponents as _,
            "operationalDatasetComponents",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::ActiveNetworkFaultsList as _,
            "activeNetworkFaultsList",
            Access::RV,
            Quality::NONE,
        ),
        Attribute::new(
            AttributeId::ExtAddress as _,
            "extAddress",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(AttributeId::Rloc16 as _, "rloc16", Access::RV, Quality::X),
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
#[strum(serialize_all = "title_case")]
pub enum NetworkFaultEnum {
    Unspecified = 0,
    LinkDown = 1,
    HardwareFailure = 2,
    NetworkJammed = 3,
}

cluster_enum!(NetworkFaultEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum ConnectionStatusEnum {
    Connected = 0,
    NotConnected = 1,
}

cluster_enum!(ConnectionStatusEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum RoutingRoleEnum {
    Unspecified = 0,
    Unassigned = 1,
    SleepyEndDevice = 2,
    EndDevice = 3,
    Reed = 4,
    Router = 5,
    Leader = 6,
}

cluster_enum!(RoutingRoleEnum);

// Structs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborTableStruct {
    pub ext_address: u64,
    pub age: u32,
    pub rloc16: u16,
    pub link_frame_counter: u32,
    pub mle_frame_counter: u32,
    pub lqi: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rssi: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_rssi: Option<i8>,
    pub frame_error_rate: u8,
    pub message_error_rate: u8,
    pub rx_on_when_idle: bool,
    pub full_thread_device: bool,
    pub full_network_data: bool,
    pub is_child: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTableStruct {
    pub ext_address: u64,
    pub rloc16: u16,
    pub router_id: u8,
    pub next_hop: u8,
    pub path_cost: u8,
    pub lqi_in: u8,
    pub lqi_out: u8,
    pub age: u8,
    pub allocated: bool,
    pub link_established: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPolicy {
    pub rotation_time: u16,
    pub flags: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalDatasetComponents {
    pub active_timestamp_present: bool,
    pub pending_timestamp_present: bool,
    pub master_key_present: bool,
    pub network_name_present: bool,
    pub extended_pan_id_present: bool,
    pub mesh_local_prefix_present: bool,
    pub delay_present: bool,
    pub pan_id_present: bool,
    pub channel_present: bool,
    pub pskc_present: bool,
    pub security_policy_present: bool,
    pub channel_mask_present: bool,
}

// Events

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatus {
    pub connection_status: ConnectionStatusEnum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkFaultChange {
    pub current: Vec<NetworkFaultEnum>,
    pub previous: Vec<NetworkFaultEnum>,
}

/// The decoded attribute state of a Thread Network Diagnostics cluster
/// instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreadNetworkDiagnostics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_revision: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_map: Option<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_role: Option<RoutingRoleEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_id: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_pan_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_local_prefix: Option<OctetString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrun_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighbor_table: Option<Vec<NeighborTableStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table: Option<Vec<RouteTableStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighting: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_version: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stable_data_version: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_router_id: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detached_role_count: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_role_count: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_role_count: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_role_count: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_attempt_count: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_id_change_count: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub better_partition_attach_attempt_count: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_change_count: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_total_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_unicast_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_broadcast_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_ack_requested_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_acked_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_no_ack_requested_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_data_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_data_poll_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_beacon_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_beacon_request_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_other_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_retry_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_direct_max_retry_expiry_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_indirect_max_retry_expiry_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_err_cca_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_err_abort_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_err_busy_channel_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_total_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_unicast_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_broadcast_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_data_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_data_poll_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_beacon_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_beacon_request_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_other_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_address_filtered_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_dest_addr_filtered_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_duplicated_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_err_no_frame_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_err_unknown_neighbor_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_err_invalid_src_addr_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_err_sec_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_err_fcs_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_err_other_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_policy: Option<SecurityPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_page0_mask: Option<OctetString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_dataset_components: Option<OperationalDatasetComponents>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_network_faults_list: Option<Vec<NetworkFaultEnum>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext_address: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rloc16: Option<u16>,
}

// Commands

/// Reset the MLE and MAC counter attributes.
pub fn reset_counts() -> ClusterCommand {
    ClusterCommand::new("resetCounts")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dm::ClusterEnum;

    #[test]
    fn cluster_id() {
        assert_eq!(CLUSTER.id, 0x0035);
        assert_eq!(CLUSTER.attribute_named("rloc16").unwrap().id, 64);
    }

    #[test]
    fn counter_table_is_complete() {
        // 65 cluster attributes plus the 6 globals
        assert_eq!(CLUSTER.attributes.len(), 71);
    }

    #[test]
    fn routing_role_labels() {
        assert_eq!(RoutingRoleEnum::SleepyEndDevice.label(), "Sleepy End Device");
        assert_eq!(RoutingRoleEnum::Reed.value(), 4);
        assert!(RoutingRoleEnum::from_value(7).is_err());
    }

    #[test]
    fn neighbor_round_trip() {
        let neighbor = NeighborTableStruct {
            ext_address: 0x1122334455667788,
            age: 12,
            rloc16: 0x4400,
            link_frame_counter: 100,
            mle_frame_counter: 101,
            lqi: 200,
            average_rssi: Some(-60),
            last_rssi: None,
            frame_error_rate: 0,
            message_error_rate: 0,
            rx_on_when_idle: true,
            full_thread_device: true,
            full_network_data: false,
            is_child: false,
        };

        let json = serde_json::to_value(&neighbor).unwrap();
        assert!(json.get("lastRssi").is_none());
        assert_eq!(json["averageRssi"], -60);

        let back: NeighborTableStruct = serde_json::from_value(json).unwrap();
        assert_eq!(back, neighbor);
    }
}
