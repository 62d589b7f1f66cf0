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

/// A macro bridging a `bitflags!` type to serde as its raw bits.
///
/// Deserialization rejects values carrying bits outside the defined set.
#[allow(unused_macros)]
#[macro_export]
macro_rules! bitflags_serde {
    ($en:ty, $repr:ty) => {
        impl serde::Serialize for $en {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.bits().serialize(serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $en {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bits = <$repr>::deserialize(deserializer)?;
                <$en>::from_bits(bits).ok_or_else(|| {
                    serde::de::Error::custom(format_args!(
                        "bits {bits:#x} are outside of {}",
                        stringify!($en)
                    ))
                })
            }
        }
    };
}
