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

//! Structural checks over all cluster definitions.

use std::collections::HashSet;

use matter_clusters::dm::clusters::{self, door_lock, thermostat};
use matter_clusters::dm::{Access, GlobalElements, Privilege};

#[test]
fn cluster_ids_match_the_specification() {
    let expected = [
        (0x001F, "AccessControl"),
        (0x0300, "ColorControl"),
        (0x0098, "DeviceEnergyManagement"),
        (0x0101, "DoorLock"),
        (0x0099, "EnergyEvse"),
        (0x0037, "EthernetNetworkDiagnostics"),
        (0x0752, "JointFabricDatastore"),
        (0x0031, "NetworkCommissioning"),
        (0x0201, "Thermostat"),
        (0x0035, "ThreadNetworkDiagnostics"),
    ];

    assert_eq!(clusters::ALL.len(), expected.len());

    for (id, name) in expected {
        let cluster = clusters::cluster(id).unwrap();
        assert_eq!(cluster.id, id);
        assert_eq!(cluster.name, name);
    }

    assert!(clusters::cluster(0xFFFF).is_none());
}

#[test]
fn attribute_tables_have_unique_ids_and_names() {
    for cluster in clusters::ALL {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for attr in cluster.attributes {
            assert!(
                ids.insert(attr.id),
                "{}: duplicate attribute id {}",
                cluster.name,
                attr.id
            );
            assert!(
                names.insert(attr.name),
                "{}: duplicate attribute name {}",
                cluster.name,
                attr.name
            );
        }
    }
}

#[test]
fn command_tables_have_unique_ids_and_names() {
    for cluster in clusters::ALL {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();

        for cmd in cluster.commands {
            assert!(
                ids.insert(cmd.id),
                "{}: duplicate command id {}",
                cluster.name,
                cmd.id
            );
            assert!(
                names.insert(cmd.name),
                "{}: duplicate command name {}",
                cluster.name,
                cmd.name
            );
        }
    }
}

#[test]
fn every_cluster_carries_the_global_attributes() {
    for cluster in clusters::ALL {
        for global in [
            GlobalElements::GeneratedCmdList,
            GlobalElements::AcceptedCmdList,
            GlobalElements::EventList,
            GlobalElements::AttributeList,
            GlobalElements::FeatureMap,
            GlobalElements::ClusterRevision,
        ] {
            assert!(
                cluster.attribute(global as _).is_some(),
                "{}: missing global attribute {global:?}",
                cluster.name
            );
        }

        assert_eq!(
            cluster.attribute_named("clusterRevision").unwrap().id,
            GlobalElements::ClusterRevision as u32
        );
    }
}

#[test]
fn lookups_by_id_and_name_agree() {
    for cluster in clusters::ALL {
        for attr in cluster.attributes {
            let by_name = cluster.attribute_named(attr.name).unwrap();
            assert_eq!(by_name.id, attr.id, "{}: {}", cluster.name, attr.name);
        }

        for cmd in cluster.commands {
            let by_name = cluster.command_named(cmd.name).unwrap();
            assert_eq!(by_name.id, cmd.id, "{}: {}", cluster.name, cmd.name);
        }
    }
}

#[test]
fn attr_access_checks_follow_the_table() {
    let cluster = &thermostat::CLUSTER;

    // occupiedCoolingSetpoint is RW VO
    let attr = thermostat::AttributeId::OccupiedCoolingSetpoint as u32;
    assert!(cluster
        .check_attr_access(attr, Access::READ, Privilege::VIEW)
        .is_ok());
    assert!(cluster
        .check_attr_access(attr, Access::WRITE, Privilege::VIEW)
        .is_err());
    assert!(cluster
        .check_attr_access(attr, Access::WRITE, Privilege::OPERATE)
        .is_ok());

    // localTemperature is read-only
    let attr = thermostat::AttributeId::LocalTemperature as u32;
    assert!(cluster
        .check_attr_access(attr, Access::WRITE, Privilege::ADMIN)
        .is_err());

    // unknown attribute
    assert!(cluster
        .check_attr_access(0x7777, Access::READ, Privilege::ADMIN)
        .is_err());
}

#[test]
fn command_invocations_serialize_in_insertion_order() {
    let cmd = door_lock::set_credential(
        Some(door_lock::DataOperationTypeEnum::Add),
        Some(door_lock::CredentialStruct {
            credential_type: door_lock::CredentialTypeEnum::Pin,
            credential_index: 1,
        }),
        Some([0x31, 0x32, 0x33, 0x34].as_slice().into()),
        Some(1),
        None,
        None,
    );

    let json = serde_json::to_string(&cmd).unwrap();
    let credential_data_at = json.find("credentialData").unwrap();
    let operation_type_at = json.find("operationType").unwrap();
    let user_index_at = json.find("userIndex").unwrap();

    assert!(operation_type_at < credential_data_at);
    assert!(credential_data_at < user_index_at);
    assert!(!json.contains("userStatus"));
    assert_eq!(cmd.args["credentialData"], "31323334");
}
