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

//! The Network Commissioning cluster (0x0031): the per-interface network
//! list and the commands for provisioning Wi-Fi/Thread credentials.

use bitflags::bitflags;

use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

use crate::dm::{Access, Attribute, Cluster, ClusterCommand, Command, OctetString, Quality};
use crate::{attribute_enum, attributes, bitflags_serde, cluster_enum, command_enum, commands};

pub const ID: u32 = 0x0031;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum AttributeId {
    MaxNetworks = 0x00,
    Networks = 0x01,
    ScanMaxTimeSeconds = 0x02,
    ConnectMaxTimeSeconds = 0x03,
    InterfaceEnabled = 0x04,
    LastNetworkingStatus = 0x05,
    LastNetworkId = 0x06,
    LastConnectErrorValue = 0x07,
    SupportedWiFiBands = 0x08,
    SupportedThreadFeatures = 0x09,
    ThreadVersion = 0x0A,
}

attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum CommandId {
    ScanNetworks = 0x00,
    AddOrUpdateWiFiNetwork = 0x02,
    AddOrUpdateThreadNetwork = 0x03,
    RemoveNetwork = 0x04,
    ConnectNetwork = 0x06,
    ReorderNetwork = 0x08,
}

command_enum!(CommandId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum RespCommandId {
    ScanNetworksResponse = 0x01,
    NetworkConfigResponse = 0x05,
    ConnectNetworkResponse = 0x07,
}

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Feature: u32 {
        const WI_FI_NETWORK_INTERFACE = 0x01;
        const THREAD_NETWORK_INTERFACE = 0x02;
        const ETHERNET_NETWORK_INTERFACE = 0x04;
    }
}

bitflags_serde!(Feature, u32);

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    "NetworkCommissioning",
    2,
    0,
    attributes!(
        Attribute::new(
            AttributeId::MaxNetworks as _,
            "maxNetworks",
            Access::RA,
            Quality::F,
        ),
        Attribute::new(
            AttributeId::Networks as _,
            "networks",
            Access::RA,
            Quality::NONE,
        ),
        Attribute::new(
            AttributeId::ScanMaxTimeSeconds as _,
            "scanMaxTimeSeconds",
            Access::RV,
            Quality::F,
        ),
        Attribute::new(
            AttributeId::ConnectMaxTimeSeconds as _,
            "connectMaxTimeSeconds",
            Access::RV,
            Quality::F,
        ),
        Attribute::new(
            AttributeId::InterfaceEnabled as _,
            "interfaceEnabled",
            Access::RWVA,
            Quality::N,
        ),
        Attribute::new(
            AttributeId::LastNetworkingStatus as _,
            "lastNetworkingStatus",
            Access::RA,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::LastNetworkId as _,
            "lastNetworkId",
            Access::RA,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::LastConnectErrorValue as _,
            "lastConnectErrorValue",
            Access::RA,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::SupportedWiFiBands as _,
            "supportedWiFiBands",
            Access::RV,
            Quality::F,
        ),
        Attribute::new(
            AttributeId::SupportedThreadFeatures as _,
            "supportedThreadFeatures",
            Access::RV,
            Quality::F,
        ),
        Attribute::new(
            AttributeId::ThreadVersion as _,
            "threadVersion",
            Access::RV,
            Quality::F,
        ),
    ),
    commands!(
        Command::new(
            CommandId::ScanNetworks as _,
            "scanNetworks",
            Some(RespCommandId::ScanNetworksResponse as _),
            Access::WA,
        ),
        Command::new(
            CommandId::AddOrUpdateWiFiNetwork as _,
            "addOrUpdateWiFiNetwork",
            Some(RespCommandId::NetworkConfigResponse as _),
            Access::WA,
        ),
        Command::new(
            CommandId::AddOrUpdateThreadNetwork as _,
            "addOrUpdateThreadNetwork",
            Some(RespCommandId::NetworkConfigResponse as _),
            Access::WA,
        ),
        Command::new(
            CommandId::RemoveNetwork as _,
            "removeNetwork",
            Some(RespCommandId::NetworkConfigResponse as _),
            Access::WA,
        ),
        Command::new(
            CommandId::ConnectNetwork as _,
            "connectNetwork",
            Some(RespCommandId::ConnectNetworkResponse as _),
            Access::WA,
        ),
        Command::new(
            CommandId::ReorderNetwork as _,
            "reorderNetwork",
            Some(RespCommandId::NetworkConfigResponse as _),
            Access::WA,
        ),
    ),
);

// Enums

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
pub enum WiFiBandEnum {
    #[strum(serialize = "2 G 4")]
    V2G4 = 0,
    #[strum(serialize = "3 G 65")]
    V3G65 = 1,
    #[strum(serialize = "5 G")]
    V5G = 2,
    #[strum(serialize = "6 G")]
    V6G = 3,
    #[strum(serialize = "60 G")]
    V60G = 4,
    #[strum(serialize = "1 G")]
    V1G = 5,
}

cluster_enum!(WiFiBandEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum NetworkCommissioningStatusEnum {
    Success = 0,
    OutOfRange = 1,
    BoundsExceeded = 2,
    NetworkIdNotFound = 3,
    DuplicateNetworkId = 4,
    NetworkNotFound = 5,
    RegulatoryError = 6,
    AuthFailure = 7,
    UnsupportedSecurity = 8,
    OtherConnectionFailure = 9,
    #[strum(serialize = "Ipv 6 Failed")]
    Ipv6Failed = 10,
    IpBindFailed = 11,
    UnknownError = 12,
}

cluster_enum!(NetworkCommissioningStatusEnum);

// Bitmaps

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WiFiSecurityBitmap: u8 {
        const UNENCRYPTED = 0x01;
        const WEP = 0x02;
        const WPA_PERSONAL = 0x04;
        const WPA2_PERSONAL = 0x08;
        const WPA3_PERSONAL = 0x10;
    }
}

bitflags_serde!(WiFiSecurityBitmap, u8);

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ThreadCapabilitiesBitmap: u16 {
        const IS_BORDER_ROUTER_CAPABLE = 0x01;
        const IS_ROUTER_CAPABLE = 0x02;
        const IS_SLEEPY_END_DEVICE_CAPABLE = 0x04;
        const IS_FULL_THREAD_DEVICE = 0x08;
        const IS_SYNCHRONIZED_SLEEPY_END_DEVICE_CAPABLE = 0x10;
    }
}

bitflags_serde!(ThreadCapabilitiesBitmap, u16);

// Structs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfoStruct {
    pub network_id: OctetString,
    pub connected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiFiInterfaceScanResultStruct {
    pub security: WiFiSecurityBitmap,
    pub ssid: OctetString,
    pub bssid: OctetString,
    pub channel: u16,
    pub wi_fi_band: WiFiBandEnum,
    pub rssi: i8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadInterfaceScanResultStruct {
    pub pan_id: u16,
    pub extended_pan_id: u64,
    pub network_name: String,
    pub channel: u16,
    pub version: u8,
    pub extended_address: OctetString,
    pub rssi: i8,
    pub lqi: u8,
}

/// The decoded attribute state of a Network Commissioning cluster instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkCommissioning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_revision: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_map: Option<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_networks: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<NetworkInfoStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_max_time_seconds: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_max_time_seconds: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_networking_status: Option<NetworkCommissioningStatusEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_network_id: Option<OctetString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_connect_error_value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_wi_fi_bands: Option<Vec<WiFiBandEnum>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_thread_features: Option<ThreadCapabilitiesBitmap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_version: Option<u16>,
}

// Commands

/// Scan for networks; a missing `ssid` asks for all reachable networks.
pub fn scan_networks(ssid: Option<OctetString>, breadcrumb: Option<u64>) -> ClusterCommand {
    ClusterCommand::new("scanNetworks")
        .opt_arg("ssid", ssid.as_ref())
        .opt_arg("breadcrumb", breadcrumb.as_ref())
}

pub fn add_or_update_wi_fi_network(
    ssid: Option<OctetString>,
    credentials: Option<OctetString>,
    breadcrumb: Option<u64>,
) -> ClusterCommand {
    ClusterCommand::new("addOrUpdateWiFiNetwork")
        .opt_arg("ssid", ssid.as_ref())
        .opt_arg("credentials", credentials.as_ref())
        .opt_arg("breadcrumb", breadcrumb.as_ref())
}

pub fn add_or_update_thread_network(
    operational_dataset: Option<OctetString>,
    breadcrumb: Option<u64>,
) -> ClusterCommand {
    ClusterCommand::new("addOrUpdateThreadNetwork")
        .opt_arg("operationalDataset", operational_dataset.as_ref())
        .opt_arg("breadcrumb", breadcrumb.as_ref())
}

pub fn remove_network(network_id: Option<OctetString>, breadcrumb: Option<u64>) -> ClusterCommand {
    ClusterCommand::new("removeNetwork")
        .opt_arg("networkId", network_id.as_ref())
        .opt_arg("breadcrumb", breadcrumb.as_ref())
}

pub fn connect_network(network_id: Option<OctetString>, breadcrumb: Option<u64>) -> ClusterCommand {
    ClusterCommand::new("connectNetwork")
        .opt_arg("networkId", network_id.as_ref())
        .opt_arg("breadcrumb", breadcrumb.as_ref())
}

pub fn reorder_network(
    network_id: Option<OctetString>,
    network_index: Option<u8>,
    breadcrumb: Option<u64>,
) -> ClusterCommand {
    ClusterCommand::new("reorderNetwork")
        .opt_arg("networkId", network_id.as_ref())
        .opt_arg("networkIndex", network_index.as_ref())
        .opt_arg("breadcrumb", breadcrumb.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dm::ClusterEnum;

    #[test]
    fn cluster_id() {
        assert_eq!(CLUSTER.id, 0x0031);
        assert_eq!(
            CLUSTER
                .command(CommandId::ConnectNetwork as _)
                .unwrap()
                .resp_id,
            Some(RespCommandId::ConnectNetworkResponse as _)
        );
    }

    #[test]
    fn status_labels() {
        assert_eq!(NetworkCommissioningStatusEnum::Success.value(), 0);
        assert_eq!(
            NetworkCommissioningStatusEnum::Ipv6Failed.label(),
            "Ipv 6 Failed"
        );
        assert_eq!(
            NetworkCommissioningStatusEnum::OtherConnectionFailure.label(),
            "Other Connection Failure"
        );
    }

    #[test]
    fn reorder_network_keeps_parameter_order() {
        let cmd = reorder_network(Some(OctetString::from(&[1, 2][..])), Some(0), Some(7));
        let keys = cmd.args.keys().collect::<Vec<_>>();
        assert_eq!(keys, ["networkId", "networkIndex", "breadcrumb"]);
    }

    #[test]
    fn scan_networks_without_ssid() {
        let cmd = scan_networks(None, None);
        assert!(cmd.args.is_empty());
    }
}
