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

//! The Access Control cluster (0x001F): the per-fabric list of access
//! control entries plus the managed-device access restriction lists.

use bitflags::bitflags;

use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

use crate::dm::{Access, Attribute, Cluster, ClusterCommand, Command, OctetString, Quality};
use crate::{attribute_enum, attributes, bitflags_serde, cluster_enum, command_enum, commands};

pub const ID: u32 = 0x001F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum AttributeId {
    Acl = 0x00,
    Extension = 0x01,
    SubjectsPerAccessControlEntry = 0x02,
    TargetsPerAccessControlEntry = 0x03,
    AccessControlEntriesPerFabric = 0x04,
    CommissioningArl = 0x05,
    Arl = 0x06,
}

attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum CommandId {
    ReviewFabricRestrictions = 0x00,
}

command_enum!(CommandId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum RespCommandId {
    ReviewFabricRestrictionsResponse = 0x01,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum EventId {
    AccessControlEntryChanged = 0x00,
    AccessControlExtensionChanged = 0x01,
    FabricRestrictionReviewUpdate = 0x02,
}

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Feature: u32 {
        const EXTENSION = 0x01;
        const MANAGED_DEVICE = 0x02;
    }
}

bitflags_serde!(Feature, u32);

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    "AccessControl",
    2,
    0,
    attributes!(
        Attribute::new(AttributeId::Acl as _, "acl", Access::RWFA, Quality::NONE),
        Attribute::new(
            AttributeId::Extension as _,
            "extension",
            Access::RWFA,
            Quality::NONE,
        ),
        Attribute::new(
            AttributeId::SubjectsPerAccessControlEntry as _,
            "subjectsPerAccessControlEntry",
            Access::RV,
            Quality::F,
        ),
        Attribute::new(
            AttributeId::TargetsPerAccessControlEntry as _,
            "targetsPerAccessControlEntry",
            Access::RV,
            Quality::F,
        ),
        Attribute::new(
            AttributeId::AccessControlEntriesPerFabric as _,
            "accessControlEntriesPerFabric",
            Access::RV,
            Quality::F,
        ),
        Attribute::new(
            AttributeId::CommissioningArl as _,
            "commissioningArl",
            Access::RV,
            Quality::NONE,
        ),
        Attribute::new(AttributeId::Arl as _, "arl", Access::RFV, Quality::NONE),
    ),
    commands!(Command::new(
        CommandId::ReviewFabricRestrictions as _,
        "reviewFabricRestrictions",
        Some(RespCommandId::ReviewFabricRestrictionsResponse as _),
        Access::WA,
    )),
);

// Enums

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum ChangeTypeEnum {
    Changed = 0,
    Added = 1,
    Removed = 2,
}

cluster_enum!(ChangeTypeEnum);

/// Each privilege implicitly grants the logically lower ones; Administer is
/// special in that it also covers the administration of privileges itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum AccessControlEntryPrivilegeEnum {
    View = 1,
    ProxyView = 2,
    Operate = 3,
    Manage = 4,
    Administer = 5,
}

cluster_enum!(AccessControlEntryPrivilegeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum AccessRestrictionTypeEnum {
    AttributeAccessForbidden = 0,
    AttributeWriteForbidden = 1,
    CommandForbidden = 2,
    EventForbidden = 3,
}

cluster_enum!(AccessRestrictionTypeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum AccessControlEntryAuthModeEnum {
    Pase = 1,
    Case = 2,
    Group = 3,
}

cluster_enum!(AccessControlEntryAuthModeEnum);

// Structs

/// A single grant target: at least one of the fields is present, and an
/// endpoint and a device type are never present together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessControlTargetStruct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<u32>,
}

/// A single grant of privilege on this node, used by the access control
/// privilege granting algorithm to determine if a subject has privilege to
/// interact with targets on the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessControlEntryStruct {
    pub privilege: AccessControlEntryPrivilegeEnum,
    pub auth_mode: AccessControlEntryAuthModeEnum,
    /// An empty subjects list is a wildcard; null means the same for
    /// fabric-filtered reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<AccessControlTargetStruct>>,
    pub fabric_index: u8,
}

/// Arbitrary manufacturer data attached to a fabric's access control
/// entries; one extension entry per supported fabric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessControlExtensionStruct {
    pub data: OctetString,
    pub fabric_index: u8,
}

/// An access restriction applied to one data model element of an
/// endpoint/cluster pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRestrictionStruct {
    pub r#type: AccessRestrictionTypeEnum,
    /// The restricted element ID; null is the wildcard for the given type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
}

/// A current access restriction on the fabric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRestrictionEntryStruct {
    pub endpoint: u16,
    pub cluster: u32,
    /// Never empty.
    pub restrictions: Vec<AccessRestrictionStruct>,
    pub fabric_index: u8,
}

/// A current access restriction when there is no accessing fabric, i.e.
/// during commissioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissioningAccessRestrictionEntryStruct {
    pub endpoint: u16,
    pub cluster: u32,
    pub restrictions: Vec<AccessRestrictionStruct>,
}

// Events

/// Generated whenever the ACL attribute data is changed by an administrator.
///
/// Exactly one of `admin_node_id` and `admin_passcode_id` is set, depending
/// on whether the change occurred via a CASE or a PASE session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessControlEntryChanged {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_node_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_passcode_id: Option<u16>,
    pub change_type: ChangeTypeEnum,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_value: Option<AccessControlEntryStruct>,
    pub fabric_index: u8,
}

/// Generated whenever the extension attribute data is changed by an
/// administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessControlExtensionChanged {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_node_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_passcode_id: Option<u16>,
    pub change_type: ChangeTypeEnum,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_value: Option<AccessControlExtensionStruct>,
    pub fabric_index: u8,
}

/// Indicates completion of a fabric restriction review; correlated with a
/// `reviewFabricRestrictions` invocation through the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricRestrictionReviewUpdate {
    pub token: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arl_request_flow_url: Option<String>,
    pub fabric_index: u8,
}

/// The decoded attribute state of an Access Control cluster instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessControl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_revision: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_map: Option<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl: Option<Vec<AccessControlEntryStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<Vec<AccessControlExtensionStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects_per_access_control_entry: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets_per_access_control_entry: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_control_entries_per_fabric: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commissioning_arl: Option<Vec<CommissioningAccessRestrictionEntryStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arl: Option<Vec<AccessRestrictionEntryStruct>>,
}

// Commands

/// Ask the service associated with the device vendor to review the current
/// restrictions on the accessing fabric, optionally naming the entries the
/// administrator would like removed.
pub fn review_fabric_restrictions(
    arl: Option<Vec<CommissioningAccessRestrictionEntryStruct>>,
) -> ClusterCommand {
    ClusterCommand::new("reviewFabricRestrictions").opt_arg("arl", arl.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dm::ClusterEnum;

    #[test]
    fn cluster_id() {
        assert_eq!(CLUSTER.id, 0x001F);
        assert_eq!(CLUSTER.name, "AccessControl");
    }

    #[test]
    fn privilege_labels() {
        assert_eq!(AccessControlEntryPrivilegeEnum::View.value(), 1);
        assert_eq!(AccessControlEntryPrivilegeEnum::ProxyView.label(), "Proxy View");
        assert_eq!(AccessControlEntryPrivilegeEnum::Administer.value(), 5);
        assert!(AccessControlEntryPrivilegeEnum::from_value(0).is_err());
    }

    #[test]
    fn entry_round_trip() {
        let entry = AccessControlEntryStruct {
            privilege: AccessControlEntryPrivilegeEnum::Administer,
            auth_mode: AccessControlEntryAuthModeEnum::Case,
            subjects: Some(vec![112233]),
            targets: None,
            fabric_index: 1,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["privilege"], 5);
        assert_eq!(json["authMode"], 2);
        assert!(json.get("targets").is_none());

        let back: AccessControlEntryStruct = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn review_restrictions_omits_missing_arl() {
        let cmd = review_fabric_restrictions(None);
        assert_eq!(cmd.name, "reviewFabricRestrictions");
        assert!(cmd.args.is_empty());

        let cmd = review_fabric_restrictions(Some(vec![]));
        assert!(cmd.args.contains_key("arl"));
    }
}
