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

use core::fmt;

use log::error;

use crate::error::{Error, ErrorCode};

use super::{Access, AttrId, Attribute, ClusterId, CmdId, Command, Privilege};

/// A struct modeling the cluster meta-data
/// (i.e. what is the cluster ID, name, revision, features, attributes and
/// their access, commands and their access) in the Matter data model.
#[derive(Debug, Clone)]
pub struct Cluster<'a> {
    /// The ID of the cluster
    pub id: ClusterId,
    /// The name of the cluster
    pub name: &'static str,
    /// The revision of the cluster
    pub revision: u16,
    /// The feature map of the cluster
    pub feature_map: u32,
    /// The attributes of the cluster, including the global ones
    pub attributes: &'a [Attribute],
    /// The commands of the cluster
    pub commands: &'a [Command],
}

impl<'a> Cluster<'a> {
    /// Create a new cluster.
    pub const fn new(
        id: ClusterId,
        name: &'static str,
        revision: u16,
        feature_map: u32,
        attributes: &'a [Attribute],
        commands: &'a [Command],
    ) -> Self {
        Self {
            id,
            name,
            revision,
            feature_map,
            attributes,
            commands,
        }
    }

    /// Return a new cluster with a modified feature map
    pub const fn with_features(self, feature_map: u32) -> Self {
        Self {
            feature_map,
            ..self
        }
    }

    /// Look up an attribute by ID.
    pub fn attribute(&self, id: AttrId) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.id == id)
    }

    /// Look up an attribute by its wire name.
    pub fn attribute_named(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Look up a command by ID.
    pub fn command(&self, id: CmdId) -> Option<&Command> {
        self.commands.iter().find(|cmd| cmd.id == id)
    }

    /// Look up a command by its wire name.
    pub fn command_named(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|cmd| cmd.name == name)
    }

    /// Check whether the given operation on the designated attribute is
    /// permitted at the given privilege level, per the cluster table.
    ///
    /// `operation` is `Access::READ` or `Access::WRITE`.
    pub fn check_attr_access(
        &self,
        attr_id: AttrId,
        operation: Access,
        privilege: Privilege,
    ) -> Result<(), Error> {
        let Some(attr) = self.attribute(attr_id) else {
            error!("{}: attribute {attr_id} not found", self.name);
            return Err(ErrorCode::AttributeNotFound.into());
        };

        if attr.access.is_ok(operation, privilege) {
            Ok(())
        } else {
            Err(ErrorCode::UnsupportedAccess.into())
        }
    }
}

impl fmt::Display for Cluster<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04X})", self.name, self.id)
    }
}
