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

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An octet string attribute or field value.
///
/// Serializes as a lowercase hex string, which is how the serialization
/// boundary represents binary data.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct OctetString(pub Vec<u8>);

impl OctetString {
    pub const fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for OctetString {
    fn from(data: Vec<u8>) -> Self {
        Self(data)
    }
}

impl From<&[u8]> for OctetString {
    fn from(data: &[u8]) -> Self {
        Self(data.to_vec())
    }
}

impl fmt::Debug for OctetString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OctetString({})", hex::encode(&self.0))
    }
}

impl Serialize for OctetString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for OctetString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        hex::decode(&text)
            .map(Self)
            .map_err(|err| D::Error::custom(format_args!("invalid octet string: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::OctetString;

    #[test]
    fn hex_round_trip() {
        let octets = OctetString::from(&[0xDE, 0xAD, 0xBE, 0xEF][..]);
        let json = serde_json::to_string(&octets).unwrap();
        assert_eq!(json, "\"deadbeef\"");

        let back: OctetString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, octets);
    }

    #[test]
    fn rejects_non_hex() {
        let result: Result<OctetString, _> = serde_json::from_str("\"zz\"");
        assert!(result.is_err());
    }
}
