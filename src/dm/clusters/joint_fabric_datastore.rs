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

//! The Joint Fabric Datastore cluster (0x0752): the anchor administrator's
//! replicated directory of nodes, groups, key sets, bindings and ACLs for
//! the joint fabric.

use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

use crate::dm::{Access, Attribute, Cluster, ClusterCommand, Command, OctetString, Quality};
use crate::{attribute_enum, attributes, cluster_enum, command_enum, commands};

use super::acl::AccessControlEntryStruct;

pub const ID: u32 = 0x0752;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum AttributeId {
    AnchorRootCa = 0x00,
    AnchorNodeId = 0x01,
    AnchorVendorId = 0x02,
    FriendlyName = 0x03,
    GroupKeySetList = 0x04,
    GroupList = 0x05,
    NodeList = 0x06,
    AdminList = 0x07,
    Status = 0x08,
    EndpointGroupIdList = 0x09,
    EndpointBindingList = 0x0A,
    NodeKeySetList = 0x0B,
    NodeAclList = 0x0C,
    NodeEndpointList = 0x0D,
}

attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum CommandId {
    AddKeySet = 0x00,
    UpdateKeySet = 0x01,
    RemoveKeySet = 0x02,
    AddGroup = 0x03,
    UpdateGroup = 0x04,
    RemoveGroup = 0x05,
    AddAdmin = 0x06,
    UpdateAdmin = 0x07,
    RemoveAdmin = 0x08,
    AddPendingNode = 0x09,
    RefreshNode = 0x0A,
    UpdateNode = 0x0B,
    RemoveNode = 0x0C,
    UpdateEndpointForNode = 0x0D,
    AddGroupIdToEndpointForNode = 0x0E,
    RemoveGroupIdFromEndpointForNode = 0x0F,
    AddBindingToEndpointForNode = 0x10,
    RemoveBindingFromEndpointForNode = 0x11,
    AddAclToNode = 0x12,
    RemoveAclFromNode = 0x13,
}

command_enum!(CommandId);

const fn attr(id: AttributeId, name: &'static str, quality: Quality) -> Attribute {
    // The whole datastore is administrator-only.
    Attribute::new(id as _, name, Access::RFA, quality)
}

const fn cmd(id: CommandId, name: &'static str) -> Command {
    Command::new(id as _, name, None, Access::WA)
}

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    "JointFabricDatastore",
    1,
    0,
    attributes!(
        attr(AttributeId::AnchorRootCa, "anchorRootCa", Quality::NONE),
        attr(AttributeId::AnchorNodeId, "anchorNodeId", Quality::NONE),
        attr(AttributeId::AnchorVendorId, "anchorVendorId", Quality::NONE),
        attr(AttributeId::FriendlyName, "friendlyName", Quality::NONE),
        attr(AttributeId::GroupKeySetList, "groupKeySetList", Quality::NONE),
        attr(AttributeId::GroupList, "groupList", Quality::NONE),
        attr(AttributeId::NodeList, "nodeList", Quality::NONE),
        attr(AttributeId::AdminList, "adminList", Quality::NONE),
        attr(AttributeId::Status, "status", Quality::NONE),
        attr(
            AttributeId::EndpointGroupIdList,
            "endpointGroupIdList",
            Quality::NONE,
        ),
        attr(
            AttributeId::EndpointBindingList,
            "endpointBindingList",
            Quality::NONE,
        ),
        attr(AttributeId::NodeKeySetList, "nodeKeySetList", Quality::NONE),
        attr(AttributeId::NodeAclList, "nodeAclList", Quality::NONE),
        attr(
            AttributeId::NodeEndpointList,
            "nodeEndpointList",
            Quality::NONE,
        ),
    ),
    commands!(
        cmd(CommandId::AddKeySet, "addKeySet"),
        cmd(CommandId::UpdateKeySet, "updateKeySet"),
        cmd(CommandId::RemoveKeySet, "removeKeySet"),
        cmd(CommandId::AddGroup, "addGroup"),
        cmd(CommandId::UpdateGroup, "updateGroup"),
        cmd(CommandId::RemoveGroup, "removeGroup"),
        cmd(CommandId::AddAdmin, "addAdmin"),
        cmd(CommandId::UpdateAdmin, "updateAdmin"),
        cmd(CommandId::RemoveAdmin, "removeAdmin"),
        cmd(CommandId::AddPendingNode, "addPendingNode"),
        cmd(CommandId::RefreshNode, "refreshNode"),
        cmd(CommandId::UpdateNode, "updateNode"),
        cmd(CommandId::RemoveNode, "removeNode"),
        cmd(CommandId::UpdateEndpointForNode, "updateEndpointForNode"),
        cmd(
            CommandId::AddGroupIdToEndpointForNode,
            "addGroupIdToEndpointForNode"
        ),
        cmd(
            CommandId::RemoveGroupIdFromEndpointForNode,
            "removeGroupIdFromEndpointForNode"
        ),
        cmd(
            CommandId::AddBindingToEndpointForNode,
            "addBindingToEndpointForNode"
        ),
        cmd(
            CommandId::RemoveBindingFromEndpointForNode,
            "removeBindingFromEndpointForNode"
        ),
        cmd(CommandId::AddAclToNode, "addAclToNode"),
        cmd(CommandId::RemoveAclFromNode, "removeAclFromNode"),
    ),
);

// Enums

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum DatastoreStateEnum {
    Pending = 0,
    Committed = 1,
    DeletePending = 2,
}

cluster_enum!(DatastoreStateEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum GroupKeySecurityPolicyEnum {
    TrustFirst = 0,
    CacheAndSync = 1,
}

cluster_enum!(GroupKeySecurityPolicyEnum);

// Structs

/// The replication state of one datastore entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreStatusEntryStruct {
    pub state: DatastoreStateEnum,
    pub update_timestamp: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreNodeInformationEntryStruct {
    pub node_id: u64,
    pub friendly_name: String,
    pub commissioning_status_entry: DatastoreStatusEntryStruct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreGroupInformationEntryStruct {
    pub group_id: u16,
    pub friendly_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key_set_id: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_cat: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_cat_version: Option<u16>,
    pub group_permission: super::acl::AccessControlEntryPrivilegeEnum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreAdministratorInformationEntryStruct {
    pub node_id: u64,
    pub friendly_name: String,
    pub vendor_id: u16,
    pub icac: OctetString,
}

/// A group key set as replicated to the nodes of the joint fabric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreGroupKeySetStruct {
    pub group_key_set_id: u16,
    pub group_key_security_policy: GroupKeySecurityPolicyEnum,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch_key0: Option<OctetString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch_start_time0: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch_key1: Option<OctetString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch_start_time1: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch_key2: Option<OctetString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch_start_time2: Option<u64>,
}

/// A binding target; the fields mirror the Binding cluster's target struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatastoreBindingTargetStruct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreEndpointGroupIdEntryStruct {
    pub node_id: u64,
    pub endpoint_id: u16,
    pub group_id: u16,
    pub status_entry: DatastoreStatusEntryStruct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreEndpointBindingEntryStruct {
    pub node_id: u64,
    pub endpoint_id: u16,
    pub list_id: u16,
    pub binding: DatastoreBindingTargetStruct,
    pub status_entry: DatastoreStatusEntryStruct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreNodeKeySetEntryStruct {
    pub node_id: u64,
    pub group_key_set_id: u16,
    pub status_entry: DatastoreStatusEntryStruct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreAclEntryStruct {
    pub node_id: u64,
    pub list_id: u16,
    pub acl_entry: AccessControlEntryStruct,
    pub status_entry: DatastoreStatusEntryStruct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreEndpointEntryStruct {
    pub endpoint_id: u16,
    pub node_id: u64,
    pub friendly_name: String,
    pub status_entry: DatastoreStatusEntryStruct,
}

/// The decoded attribute state of a Joint Fabric Datastore cluster instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JointFabricDatastore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_revision: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_map: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_root_ca: Option<OctetString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_node_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_vendor_id: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key_set_list: Option<Vec<DatastoreGroupKeySetStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_list: Option<Vec<DatastoreGroupInformationEntryStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_list: Option<Vec<DatastoreNodeInformationEntryStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_list: Option<Vec<DatastoreAdministratorInformationEntryStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DatastoreStatusEntryStruct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_group_id_list: Option<Vec<DatastoreEndpointGroupIdEntryStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_binding_list: Option<Vec<DatastoreEndpointBindingEntryStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_key_set_list: Option<Vec<DatastoreNodeKeySetEntryStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_acl_list: Option<Vec<DatastoreAclEntryStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_endpoint_list: Option<Vec<DatastoreEndpointEntryStruct>>,
}

// Commands

pub fn add_key_set(group_key_set: Option<DatastoreGroupKeySetStruct>) -> ClusterCommand {
    ClusterCommand::new("addKeySet").opt_arg("groupKeySet", group_key_set.as_ref())
}

pub fn update_key_set(group_key_set: Option<DatastoreGroupKeySetStruct>) -> ClusterCommand {
    ClusterCommand::new("updateKeySet").opt_arg("groupKeySet", group_key_set.as_ref())
}

pub fn remove_key_set(group_key_set_id: Option<u16>) -> ClusterCommand {
    ClusterCommand::new("removeKeySet").opt_arg("groupKeySetId", group_key_set_id.as_ref())
}

pub fn add_group(
    group_id: Option<u16>,
    friendly_name: Option<String>,
    group_key_set_id: Option<u16>,
    group_cat: Option<u16>,
    group_cat_version: Option<u16>,
    group_permission: Option<super::acl::AccessControlEntryPrivilegeEnum>,
) -> ClusterCommand {
    ClusterCommand::new("addGroup")
        .opt_arg("groupId", group_id.as_ref())
        .opt_arg("friendlyName", friendly_name.as_ref())
        .opt_arg("groupKeySetId", group_key_set_id.as_ref())
        .opt_arg("groupCat", group_cat.as_ref())
        .opt_arg("groupCatVersion", group_cat_version.as_ref())
        .opt_arg("groupPermission", group_permission.as_ref())
}

pub fn update_group(
    group_id: Option<u16>,
    friendly_name: Option<String>,
    group_key_set_id: Option<u16>,
) -> ClusterCommand {
    ClusterCommand::new("updateGroup")
        .opt_arg("groupId", group_id.as_ref())
        .opt_arg("friendlyName", friendly_name.as_ref())
        .opt_arg("groupKeySetId", group_key_set_id.as_ref())
}

pub fn remove_group(group_id: Option<u16>) -> ClusterCommand {
    ClusterCommand::new("removeGroup").opt_arg("groupId", group_id.as_ref())
}

pub fn add_admin(
    node_id: Option<u64>,
    friendly_name: Option<String>,
    vendor_id: Option<u16>,
    icac: Option<OctetString>,
) -> ClusterCommand {
    ClusterCommand::new("addAdmin")
        .opt_arg("nodeId", node_id.as_ref())
        .opt_arg("friendlyName", friendly_name.as_ref())
        .opt_arg("vendorId", vendor_id.as_ref())
        .opt_arg("icac", icac.as_ref())
}

pub fn update_admin(
    node_id: Option<u64>,
    friendly_name: Option<String>,
    icac: Option<OctetString>,
) -> ClusterCommand {
    ClusterCommand::new("updateAdmin")
        .opt_arg("nodeId", node_id.as_ref())
        .opt_arg("friendlyName", friendly_name.as_ref())
        .opt_arg("icac", icac.as_ref())
}

pub fn remove_admin(node_id: Option<u64>) -> ClusterCommand {
    ClusterCommand::new("removeAdmin").opt_arg("nodeId", node_id.as_ref())
}

pub fn add_pending_node(node_id: Option<u64>, friendly_name: Option<String>) -> ClusterCommand {
    ClusterCommand::new("addPendingNode")
        .opt_arg("nodeId", node_id.as_ref())
        .opt_arg("friendlyName", friendly_name.as_ref())
}

pub fn refresh_node(node_id: Option<u64>) -> ClusterCommand {
    ClusterCommand::new("refreshNode").opt_arg("nodeId", node_id.as_ref())
}

pub fn update_node(node_id: Option<u64>, friendly_name: Option<String>) -> ClusterCommand {
    ClusterCommand::new("updateNode")
        .opt_arg("nodeId", node_id.as_ref())
        .opt_arg("friendlyName", friendly_name.as_ref())
}

pub fn remove_node(node_id: Option<u64>) -> ClusterCommand {
    ClusterCommand::new("removeNode").opt_arg("nodeId", node_id.as_ref())
}

pub fn update_endpoint_for_node(
    endpoint_id: Option<u16>,
    node_id: Option<u64>,
    friendly_name: Option<String>,
) -> ClusterCommand {
    ClusterCommand::new("updateEndpointForNode")
        .opt_arg("endpointId", endpoint_id.as_ref())
        .opt_arg("nodeId", node_id.as_ref())
        .opt_arg("friendlyName", friendly_name.as_ref())
}

pub fn add_group_id_to_endpoint_for_node(
    node_id: Option<u64>,
    endpoint_id: Option<u16>,
    group_id: Option<u16>,
) -> ClusterCommand {
    ClusterCommand::new("addGroupIdToEndpointForNode")
        .opt_arg("nodeId", node_id.as_ref())
        .opt_arg("endpointId", endpoint_id.as_ref())
        .opt_arg("groupId", group_id.as_ref())
}

pub fn remove_group_id_from_endpoint_for_node(
    node_id: Option<u64>,
    endpoint_id: Option<u16>,
    group_id: Option<u16>,
) -> ClusterCommand {
    ClusterCommand::new("removeGroupIdFromEndpointForNode")
        .opt_arg("nodeId", node_id.as_ref())
        .opt_arg("endpointId", endpoint_id.as_ref())
        .opt_arg("groupId", group_id.as_ref())
}

pub fn add_binding_to_endpoint_for_node(
    node_id: Option<u64>,
    endpoint_id: Option<u16>,
    binding: Option<DatastoreBindingTargetStruct>,
) -> ClusterCommand {
    ClusterCommand::new("addBindingToEndpointForNode")
        .opt_arg("nodeId", node_id.as_ref())
        .opt_arg("endpointId", endpoint_id.as_ref())
        .opt_arg("binding", binding.as_ref())
}

pub fn remove_binding_from_endpoint_for_node(
    list_id: Option<u16>,
    endpoint_id: Option<u16>,
    node_id: Option<u64>,
) -> ClusterCommand {
    ClusterCommand::new("removeBindingFromEndpointForNode")
        .opt_arg("listId", list_id.as_ref())
        .opt_arg("endpointId", endpoint_id.as_ref())
        .opt_arg("nodeId", node_id.as_ref())
}

pub fn add_acl_to_node(
    node_id: Option<u64>,
    acl_entry: Option<AccessControlEntryStruct>,
) -> ClusterCommand {
    ClusterCommand::new("addAclToNode")
        .opt_arg("nodeId", node_id.as_ref())
        .opt_arg("aclEntry", acl_entry.as_ref())
}

pub fn remove_acl_from_node(list_id: Option<u16>, node_id: Option<u64>) -> ClusterCommand {
    ClusterCommand::new("removeAclFromNode")
        .opt_arg("listId", list_id.as_ref())
        .opt_arg("nodeId", node_id.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dm::ClusterEnum;

    #[test]
    fn cluster_id() {
        assert_eq!(CLUSTER.id, 0x0752);
        assert_eq!(CLUSTER.commands.len(), 20);
    }

    #[test]
    fn datastore_state_labels() {
        assert_eq!(DatastoreStateEnum::DeletePending.label(), "Delete Pending");
        assert_eq!(DatastoreStateEnum::Committed.value(), 1);
        assert!(DatastoreStateEnum::from_value(3).is_err());
    }

    #[test]
    fn add_group_arg_order() {
        let cmd = add_group(
            Some(7),
            Some("Kitchen".into()),
            Some(1),
            None,
            None,
            Some(super::super::acl::AccessControlEntryPrivilegeEnum::Operate),
        );

        let keys = cmd.args.keys().collect::<Vec<_>>();
        assert_eq!(keys, ["groupId", "friendlyName", "groupKeySetId", "groupPermission"]);
        assert_eq!(cmd.args["groupPermission"], 3);
    }

    #[test]
    fn status_entry_round_trip() {
        let entry = DatastoreStatusEntryStruct {
            state: DatastoreStateEnum::Pending,
            update_timestamp: 1234,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["state"], 0);

        let back: DatastoreStatusEntryStruct = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
