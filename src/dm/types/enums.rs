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

use crate::error::Error;

/// The contract of every cluster value enum: a closed set of named codes,
/// each carrying a stable numeric value and a human-readable label.
pub trait ClusterEnum: Copy + Sized {
    /// The numeric code as it appears on the wire.
    fn value(self) -> u8;

    /// The human-readable label from the specification table.
    fn label(self) -> &'static str;

    /// Look a variant up by its numeric code.
    ///
    /// Unknown codes are a `ConstraintError`.
    fn from_value(value: u8) -> Result<Self, Error>;
}

/// A macro wiring a `#[repr(u8)]` enum deriving `strum::FromRepr` and
/// `strum::IntoStaticStr` into the [`ClusterEnum`] contract, `Display`, and
/// numeric serde.
#[allow(unused_macros)]
#[macro_export]
macro_rules! cluster_enum {
    ($en:ty) => {
        impl $crate::dm::ClusterEnum for $en {
            fn value(self) -> u8 {
                self as u8
            }

            fn label(self) -> &'static str {
                self.into()
            }

            fn from_value(value: u8) -> Result<Self, $crate::error::Error> {
                <$en>::from_repr(value)
                    .ok_or_else(|| $crate::error::ErrorCode::ConstraintError.into())
            }
        }

        impl core::fmt::Display for $en {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str($crate::dm::ClusterEnum::label(*self))
            }
        }

        impl serde::Serialize for $en {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_u8(*self as u8)
            }
        }

        impl<'de> serde::Deserialize<'de> for $en {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = u8::deserialize(deserializer)?;
                <$en>::from_repr(value).ok_or_else(|| {
                    serde::de::Error::custom(format_args!(
                        "value {value} is not a known {}",
                        stringify!($en)
                    ))
                })
            }
        }
    };
}
