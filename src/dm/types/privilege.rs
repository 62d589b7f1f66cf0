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

use bitflags::bitflags;

bitflags! {
    /// The privilege levels of the Matter data model.
    ///
    /// Each level implies the levels below it, which is why the
    /// composite constants carry the bits of their predecessors.
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Privilege: u8 {
        const V = 0x01;
        const O = 0x02;
        const M = 0x04;
        const A = 0x08;

        const VIEW = Self::V.bits();
        const OPERATE = Self::V.bits() | Self::O.bits();
        const MANAGE = Self::V.bits() | Self::O.bits() | Self::M.bits();
        const ADMIN = Self::V.bits() | Self::O.bits() | Self::M.bits() | Self::A.bits();
    }
}

impl Privilege {
    /// The numeric privilege code as it appears on the wire
    /// (1 = View, 3 = Operate, 4 = Manage, 5 = Administer).
    pub fn raw_value(&self) -> u8 {
        if self.contains(Privilege::ADMIN) {
            5
        } else if self.contains(Privilege::MANAGE) {
            4
        } else if self.contains(Privilege::OPERATE) {
            3
        } else if self.contains(Privilege::VIEW) {
            1
        } else {
            0
        }
    }
}
