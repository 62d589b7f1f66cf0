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

use serde::Serialize;
use serde_json::{Map, Value};

use super::{Access, CmdId};

/// A type modeling the command meta-data in the Matter data model.
#[derive(Debug, Clone)]
pub struct Command {
    /// The ID of the command
    pub id: CmdId,
    /// The command name, as addressed by the serialization boundary
    pub name: &'static str,
    /// The ID of the response command, if any
    pub resp_id: Option<CmdId>,
    /// The access control for the command
    pub access: Access,
}

impl Command {
    /// Creates a new command with the given ID, name, response command ID,
    /// and access control.
    pub const fn new(
        id: CmdId,
        name: &'static str,
        resp_id: Option<CmdId>,
        access: Access,
    ) -> Self {
        Self {
            id,
            name,
            resp_id,
            access,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A macro to generate the commands for a cluster.
#[allow(unused_macros)]
#[macro_export]
macro_rules! commands {
    ($($cmd:expr $(,)?)*) => {
        &[
            $($cmd,)*
        ]
    }
}

/// A macro implementing `TryFrom<CmdId>` for a command-ID enum.
#[allow(unused_macros)]
#[macro_export]
macro_rules! command_enum {
    ($en:ty) => {
        impl core::convert::TryFrom<$crate::dm::CmdId> for $en {
            type Error = $crate::error::Error;

            fn try_from(id: $crate::dm::CmdId) -> Result<Self, Self::Error> {
                <$en>::from_repr(id).ok_or_else(|| $crate::error::ErrorCode::CommandNotFound.into())
            }
        }
    };
}

/// A command invocation: the command name plus its parameter mapping.
///
/// Parameters keep their insertion order and omitted (`None`) parameters are
/// never present in the mapping, so a transport layer can serialize the
/// value as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterCommand {
    pub name: &'static str,
    pub args: Map<String, Value>,
}

impl ClusterCommand {
    /// Create a command invocation with no parameters.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            args: Map::new(),
        }
    }

    /// Append a parameter.
    ///
    /// A value that cannot be represented is dropped from the mapping, the
    /// invocation itself is kept usable.
    pub fn arg<T: Serialize + ?Sized>(mut self, name: &'static str, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.args.insert(name.into(), value);
            }
            Err(err) => error!("{}: dropping argument {name}: {err}", self.name),
        }

        self
    }

    /// Append a parameter unless it is `None`.
    pub fn opt_arg<T: Serialize>(self, name: &'static str, value: Option<&T>) -> Self {
        match value {
            Some(value) => self.arg(name, value),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClusterCommand;

    #[test]
    fn arg_order_is_insertion_order() {
        let cmd = ClusterCommand::new("example")
            .arg("first", &1_u8)
            .arg("second", &2_u8)
            .arg("third", &3_u8);

        let keys = cmd.args.keys().collect::<Vec<_>>();
        assert_eq!(keys, ["first", "second", "third"]);
    }

    #[test]
    fn none_args_are_omitted() {
        let cmd = ClusterCommand::new("example")
            .opt_arg("present", Some(&42_u8))
            .opt_arg::<u8>("absent", None);

        assert_eq!(cmd.args.len(), 1);
        assert!(cmd.args.contains_key("present"));
        assert!(!cmd.args.contains_key("absent"));
    }
}
