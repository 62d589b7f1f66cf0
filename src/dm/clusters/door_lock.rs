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

//! The Door Lock cluster (0x0101): lock/unlock operation, user and
//! credential management, schedules and the Aliro reader configuration.

use bitflags::bitflags;

use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

use crate::dm::{Access, Attribute, Cluster, ClusterCommand, Command, OctetString, Quality};
use crate::{attribute_enum, attributes, bitflags_serde, cluster_enum, command_enum, commands};

pub const ID: u32 = 0x0101;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum AttributeId {
    LockState = 0x00,
    LockType = 0x01,
    ActuatorEnabled = 0x02,
    DoorState = 0x03,
    DoorOpenEvents = 0x04,
    DoorClosedEvents = 0x05,
    OpenPeriod = 0x06,
    NumberOfTotalUsersSupported = 0x11,
    NumberOfPinUsersSupported = 0x12,
    NumberOfRfidUsersSupported = 0x13,
    NumberOfWeekDaySchedulesSupportedPerUser = 0x14,
    NumberOfYearDaySchedulesSupportedPerUser = 0x15,
    NumberOfHolidaySchedulesSupported = 0x16,
    MaxPinCodeLength = 0x17,
    MinPinCodeLength = 0x18,
    MaxRfidCodeLength = 0x19,
    MinRfidCodeLength = 0x1A,
    CredentialRulesSupport = 0x1B,
    NumberOfCredentialsSupportedPerUser = 0x1C,
    Language = 0x21,
    LedSettings = 0x22,
    AutoRelockTime = 0x23,
    SoundVolume = 0x24,
    OperatingMode = 0x25,
    SupportedOperatingModes = 0x26,
    DefaultConfigurationRegister = 0x27,
    EnableLocalProgramming = 0x28,
    EnableOneTouchLocking = 0x29,
    EnableInsideStatusLed = 0x2A,
    EnablePrivacyModeButton = 0x2B,
    LocalProgrammingFeatures = 0x2C,
    WrongCodeEntryLimit = 0x30,
    UserCodeTemporaryDisableTime = 0x31,
    SendPinOverTheAir = 0x32,
    RequirePinForRemoteOperation = 0x33,
    ExpiringUserTimeout = 0x35,
    AlarmMask = 0x40,
    AliroReaderVerificationKey = 0x80,
    AliroReaderGroupIdentifier = 0x81,
    AliroReaderGroupSubIdentifier = 0x82,
    AliroExpeditedTransactionSupportedProtocolVersions = 0x83,
    AliroGroupResolvingKey = 0x84,
    AliroSupportedBleuwbProtocolVersions = 0x85,
    AliroBleAdvertisingVersion = 0x86,
    NumberOfAliroCredentialIssuerKeysSupported = 0x87,
    NumberOfAliroEndpointKeysSupported = 0x88,
}

attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum CommandId {
    LockDoor = 0x00,
    UnlockDoor = 0x01,
    Toggle = 0x02,
    UnlockWithTimeout = 0x03,
    SetPinCode = 0x05,
    GetPinCode = 0x06,
    ClearPinCode = 0x07,
    ClearAllPinCodes = 0x08,
    SetUserStatus = 0x09,
    GetUserStatus = 0x0A,
    SetWeekDaySchedule = 0x0B,
    GetWeekDaySchedule = 0x0C,
    ClearWeekDaySchedule = 0x0D,
    SetYearDaySchedule = 0x0E,
    GetYearDaySchedule = 0x0F,
    ClearYearDaySchedule = 0x10,
    SetHolidaySchedule = 0x11,
    GetHolidaySchedule = 0x12,
    ClearHolidaySchedule = 0x13,
    SetUserType = 0x14,
    GetUserType = 0x15,
    SetRfidCode = 0x16,
    GetRfidCode = 0x17,
    ClearRfidCode = 0x18,
    ClearAllRfidCodes = 0x19,
    SetUser = 0x1A,
    GetUser = 0x1B,
    ClearUser = 0x1D,
    SetCredential = 0x22,
    GetCredentialStatus = 0x24,
    ClearCredential = 0x26,
    UnboltDoor = 0x27,
    SetAliroReaderConfig = 0x28,
    ClearAliroReaderConfig = 0x29,
}

command_enum!(CommandId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum RespCommandId {
    GetPinCodeResponse = 0x06,
    GetUserStatusResponse = 0x0A,
    GetWeekDayScheduleResponse = 0x0C,
    GetYearDayScheduleResponse = 0x0F,
    GetHolidayScheduleResponse = 0x12,
    GetUserTypeResponse = 0x15,
    GetRfidCodeResponse = 0x17,
    GetUserResponse = 0x1C,
    SetCredentialResponse = 0x23,
    GetCredentialStatusResponse = 0x25,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum EventId {
    DoorLockAlarm = 0x00,
    DoorStateChange = 0x01,
    LockOperation = 0x02,
    LockOperationError = 0x03,
    LockUserChange = 0x04,
}

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Feature: u32 {
        const PIN_CREDENTIAL = 0x0001;
        const RFID_CREDENTIAL = 0x0002;
        const FINGER_CREDENTIALS = 0x0004;
        const WEEK_DAY_ACCESS_SCHEDULES = 0x0010;
        const DOOR_POSITION_SENSOR = 0x0020;
        const FACE_CREDENTIALS = 0x0040;
        const CREDENTIAL_OVER_THE_AIR_ACCESS = 0x0080;
        const USER = 0x0100;
        const YEAR_DAY_ACCESS_SCHEDULES = 0x0400;
        const HOLIDAY_SCHEDULES = 0x0800;
        const UNBOLTING = 0x1000;
        const ALIRO_PROVISIONING = 0x2000;
        const ALIRO_BLEUWB = 0x4000;
    }
}

bitflags_serde!(Feature, u32);

const fn attr(id: AttributeId, name: &'static str, access: Access, quality: Quality) -> Attribute {
    Attribute::new(id as _, name, access, quality)
}

const fn cmd(id: CommandId, name: &'static str, resp_id: Option<u32>, access: Access) -> Command {
    Command::new(id as _, name, resp_id, access)
}

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    "DoorLock",
    8,
    0,
    attributes!(
        attr(AttributeId::LockState, "lockState", Access::RV, Quality::X),
        attr(AttributeId::LockType, "lockType", Access::RV, Quality::NONE),
        attr(
            AttributeId::ActuatorEnabled,
            "actuatorEnabled",
            Access::RV,
            Quality::NONE,
        ),
        attr(AttributeId::DoorState, "doorState", Access::RV, Quality::X),
        attr(
            AttributeId::DoorOpenEvents,
            "doorOpenEvents",
            Access::RWVM,
            Quality::NONE,
        ),
        attr(
            AttributeId::DoorClosedEvents,
            "doorClosedEvents",
            Access::RWVM,
            Quality::NONE,
        ),
        attr(
            AttributeId::OpenPeriod,
            "openPeriod",
            Access::RWVM,
            Quality::NONE,
        ),
        attr(
            AttributeId::NumberOfTotalUsersSupported,
            "numberOfTotalUsersSupported",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::NumberOfPinUsersSupported,
            "numberOfPinUsersSupported",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::NumberOfRfidUsersSupported,
            "numberOfRfidUsersSupported",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::NumberOfWeekDaySchedulesSupportedPerUser,
            "numberOfWeekDaySchedulesSupportedPerUser",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::NumberOfYearDaySchedulesSupportedPerUser,
            "numberOfYearDaySchedulesSupportedPerUser",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::NumberOfHolidaySchedulesSupported,
            "numberOfHolidaySchedulesSupported",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::MaxPinCodeLength,
            "maxPinCodeLength",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::MinPinCodeLength,
            "minPinCodeLength",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::MaxRfidCodeLength,
            "maxRfidCodeLength",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::MinRfidCodeLength,
            "minRfidCodeLength",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::CredentialRulesSupport,
            "credentialRulesSupport",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::NumberOfCredentialsSupportedPerUser,
            "numberOfCredentialsSupportedPerUser",
            Access::RV,
            Quality::F,
        ),
        attr(AttributeId::Language, "language", Access::RWVM, Quality::N),
        attr(
            AttributeId::LedSettings,
            "ledSettings",
            Access::RWVM,
            Quality::N,
        ),
        attr(
            AttributeId::AutoRelockTime,
            "autoRelockTime",
            Access::RWVM,
            Quality::N,
        ),
        attr(
            AttributeId::SoundVolume,
            "soundVolume",
            Access::RWVM,
            Quality::N,
        ),
        attr(
            AttributeId::OperatingMode,
            "operatingMode",
            Access::RWVM,
            Quality::N,
        ),
        attr(
            AttributeId::SupportedOperatingModes,
            "supportedOperatingModes",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::DefaultConfigurationRegister,
            "defaultConfigurationRegister",
            Access::RV,
            Quality::NONE,
        ),
        attr(
            AttributeId::EnableLocalProgramming,
            "enableLocalProgramming",
            Access::RWVA,
            Quality::N,
        ),
        attr(
            AttributeId::EnableOneTouchLocking,
            "enableOneTouchLocking",
            Access::RWVM,
            Quality::N,
        ),
        attr(
            AttributeId::EnableInsideStatusLed,
            "enableInsideStatusLed",
            Access::RWVM,
            Quality::N,
        ),
        attr(
            AttributeId::EnablePrivacyModeButton,
            "enablePrivacyModeButton",
            Access::RWVM,
            Quality::N,
        ),
        attr(
            AttributeId::LocalProgrammingFeatures,
            "localProgrammingFeatures",
            Access::RWVA,
            Quality::N,
        ),
        attr(
            AttributeId::WrongCodeEntryLimit,
            "wrongCodeEntryLimit",
            Access::RWVA,
            Quality::N,
        ),
        attr(
            AttributeId::UserCodeTemporaryDisableTime,
            "userCodeTemporaryDisableTime",
            Access::RWVA,
            Quality::N,
        ),
        attr(
            AttributeId::SendPinOverTheAir,
            "sendPinOverTheAir",
            Access::RWVA,
            Quality::N,
        ),
        attr(
            AttributeId::RequirePinForRemoteOperation,
            "requirePinForRemoteOperation",
            Access::RWVA,
            Quality::N,
        ),
        attr(
            AttributeId::ExpiringUserTimeout,
            "expiringUserTimeout",
            Access::RWVA,
            Quality::N,
        ),
        attr(
            AttributeId::AlarmMask,
            "alarmMask",
            Access::RWVA,
            Quality::N,
        ),
        attr(
            AttributeId::AliroReaderVerificationKey,
            "aliroReaderVerificationKey",
            Access::RA,
            Quality::X,
        ),
        attr(
            AttributeId::AliroReaderGroupIdentifier,
            "aliroReaderGroupIdentifier",
            Access::RA,
            Quality::X,
        ),
        attr(
            AttributeId::AliroReaderGroupSubIdentifier,
            "aliroReaderGroupSubIdentifier",
            Access::RA,
            Quality::NONE,
        ),
        attr(
            AttributeId::AliroExpeditedTransactionSupportedProtocolVersions,
            "aliroExpeditedTransactionSupportedProtocolVersions",
            Access::RA,
            Quality::F,
        ),
        attr(
            AttributeId::AliroGroupResolvingKey,
            "aliroGroupResolvingKey",
            Access::RA,
            Quality::X,
        ),
        attr(
            AttributeId::AliroSupportedBleuwbProtocolVersions,
            "aliroSupportedBleuwbProtocolVersions",
            Access::RA,
            Quality::F,
        ),
        attr(
            AttributeId::AliroBleAdvertisingVersion,
            "aliroBleAdvertisingVersion",
            Access::RA,
            Quality::F,
        ),
        attr(
            AttributeId::NumberOfAliroCredentialIssuerKeysSupported,
            "numberOfAliroCredentialIssuerKeysSupported",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::NumberOfAliroEndpointKeysSupported,
            "numberOfAliroEndpointKeysSupported",
            Access::RV,
            Quality::F,
        ),
    ),
    commands!(
        cmd(
            CommandId::LockDoor,
            "lockDoor",
            None,
            Access::WO.union(Access::TIMED_ONLY),
        ),
        cmd(
            CommandId::UnlockDoor,
            "unlockDoor",
            None,
            Access::WO.union(Access::TIMED_ONLY),
        ),
        cmd(
            CommandId::Toggle,
            "toggle",
            None,
            Access::WO.union(Access::TIMED_ONLY),
        ),
        cmd(
            CommandId::UnlockWithTimeout,
            "unlockWithTimeout",
            None,
            Access::WO.union(Access::TIMED_ONLY),
        ),
        cmd(
            CommandId::SetPinCode,
            "setPinCode",
            None,
            Access::WA.union(Access::TIMED_ONLY),
        ),
        cmd(
            CommandId::GetPinCode,
            "getPinCode",
            Some(RespCommandId::GetPinCodeResponse as _),
            Access::WA,
        ),
        cmd(
            CommandId::ClearPinCode,
            "clearPinCode",
            None,
            Access::WA.union(Access::TIMED_ONLY),
        ),
        cmd(
            CommandId::ClearAllPinCodes,
            "clearAllPinCodes",
            None,
            Access::WA.union(Access::TIMED_ONLY),
        ),
        cmd(CommandId::SetUserStatus, "setUserStatus", None, Access::WA),
        cmd(
            CommandId::GetUserStatus,
            "getUserStatus",
            Some(RespCommandId::GetUserStatusResponse as _),
            Access::WA,
        ),
        cmd(
            CommandId::SetWeekDaySchedule,
            "setWeekDaySchedule",
            None,
            Access::WA,
        ),
        cmd(
            CommandId::GetWeekDaySchedule,
            "getWeekDaySchedule",
            Some(RespCommandId::GetWeekDayScheduleResponse as _),
            Access::WA,
        ),
        cmd(
            CommandId::ClearWeekDaySchedule,
            "clearWeekDaySchedule",
            None,
            Access::WA,
        ),
        cmd(
            CommandId::SetYearDaySchedule,
            "setYearDaySchedule",
            None,
            Access::WA,
        ),
        cmd(
            CommandId::GetYearDaySchedule,
            "getYearDaySchedule",
            Some(RespCommandId::GetYearDayScheduleResponse as _),
            Access::WA,
        ),
        cmd(
            CommandId::ClearYearDaySchedule,
            "clearYearDaySchedule",
            None,
            Access::WA,
        ),
        cmd(
            CommandId::SetHolidaySchedule,
            "setHolidaySchedule",
            None,
            Access::WA,
        ),
        cmd(
            CommandId::GetHolidaySchedule,
            "getHolidaySchedule",
            Some(RespCommandId::GetHolidayScheduleResponse as _),
            Access::WA,
        ),
        cmd(
            CommandId::ClearHolidaySchedule,
            "clearHolidaySchedule",
            None,
            Access::WA,
        ),
        cmd(CommandId::SetUserType, "setUserType", None, Access::WA),
        cmd(
            CommandId::GetUserType,
            "getUserType",
            Some(RespCommandId::GetUserTypeResponse as _),
            Access::WA,
        ),
        cmd(CommandId::SetRfidCode, "setRfidCode", None, Access::WA.union(Access::TIMED_ONLY)),
        cmd(
            CommandId::GetRfidCode,
            "getRfidCode",
            Some(RespCommandId::GetRfidCodeResponse as _),
            Access::WA,
        ),
        cmd(
            CommandId::ClearRfidCode,
            "clearRfidCode",
            None,
            Access::WA.union(Access::TIMED_ONLY),
        ),
        cmd(
            CommandId::ClearAllRfidCodes,
            "clearAllRfidCodes",
            None,
            Access::WA.union(Access::TIMED_ONLY),
        ),
        cmd(
            CommandId::SetUser,
            "setUser",
            None,
            Access::WA.union(Access::TIMED_ONLY),
        ),
        cmd(
            CommandId::GetUser,
            "getUser",
            Some(RespCommandId::GetUserResponse as _),
            Access::WA,
        ),
        cmd(
            CommandId::ClearUser,
            "clearUser",
            None,
            Access::WA.union(Access::TIMED_ONLY),
        ),
        cmd(
            CommandId::SetCredential,
            "setCredential",
            Some(RespCommandId::SetCredentialResponse as _),
            Access::WA.union(Access::TIMED_ONLY),
        ),
        cmd(
            CommandId::GetCredentialStatus,
            "getCredentialStatus",
            Some(RespCommandId::GetCredentialStatusResponse as _),
            Access::WA,
        ),
        cmd(
            CommandId::ClearCredential,
            "clearCredential",
            None,
            Access::WA.union(Access::TIMED_ONLY),
        ),
        cmd(
            CommandId::UnboltDoor,
            "unboltDoor",
            None,
            Access::WO.union(Access::TIMED_ONLY),
        ),
        cmd(
            CommandId::SetAliroReaderConfig,
            "setAliroReaderConfig",
            None,
            Access::WA.union(Access::TIMED_ONLY),
        ),
        cmd(
            CommandId::ClearAliroReaderConfig,
            "clearAliroReaderConfig",
            None,
            Access::WA.union(Access::TIMED_ONLY),
        ),
    ),
);

// Enums

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum AlarmCodeEnum {
    LockJammed = 0,
    LockFactoryReset = 1,
    LockRadioPowerCycled = 3,
    WrongCodeEntryLimit = 4,
    FrontEsceutcheonRemoved = 5,
    DoorForcedOpen = 6,
    DoorAjar = 7,
    ForcedUser = 8,
}

cluster_enum!(AlarmCodeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum CredentialRuleEnum {
    Single = 0,
    Dual = 1,
    Tri = 2,
}

cluster_enum!(CredentialRuleEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum CredentialTypeEnum {
    ProgrammingPin = 0,
    Pin = 1,
    Rfid = 2,
    Fingerprint = 3,
    FingerVein = 4,
    Face = 5,
    AliroCredentialIssuerKey = 6,
    AliroEvictableEndpointKey = 7,
    AliroNonEvictableEndpointKey = 8,
}

cluster_enum!(CredentialTypeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum DataOperationTypeEnum {
    Add = 0,
    Clear = 1,
    Modify = 2,
}

cluster_enum!(DataOperationTypeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum DoorStateEnum {
    DoorOpen = 0,
    DoorClosed = 1,
    DoorJammed = 2,
    DoorForcedOpen = 3,
    DoorUnspecifiedError = 4,
    DoorAjar = 5,
}

cluster_enum!(DoorStateEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum LockDataTypeEnum {
    Unspecified = 0,
    ProgrammingCode = 1,
    UserIndex = 2,
    WeekDaySchedule = 3,
    YearDaySchedule = 4,
    HolidaySchedule = 5,
    Pin = 6,
    Rfid = 7,
    Fingerprint = 8,
    FingerVein = 9,
    Face = 10,
    AliroCredentialIssuerKey = 11,
    AliroEvictableEndpointKey = 12,
    AliroNonEvictableEndpointKey = 13,
}

cluster_enum!(LockDataTypeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum LockOperationTypeEnum {
    Lock = 0,
    Unlock = 1,
    NonAccessUserEvent = 2,
    ForcedUserEvent = 3,
    Unlatch = 4,
}

cluster_enum!(LockOperationTypeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum OperationErrorEnum {
    Unspecified = 0,
    InvalidCredential = 1,
    DisabledUserDenied = 2,
    Restricted = 3,
    InsufficientBattery = 4,
}

cluster_enum!(OperationErrorEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum OperatingModeEnum {
    Normal = 0,
    Vacation = 1,
    Privacy = 2,
    NoRemoteLockUnlock = 3,
    Passage = 4,
}

cluster_enum!(OperatingModeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum OperationSourceEnum {
    Unspecified = 0,
    Manual = 1,
    ProprietaryRemote = 2,
    Keypad = 3,
    Auto = 4,
    Button = 5,
    Schedule = 6,
    Remote = 7,
    Rfid = 8,
    Biometric = 9,
    Aliro = 10,
}

cluster_enum!(OperationSourceEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum UserStatusEnum {
    Available = 0,
    OccupiedEnabled = 1,
    OccupiedDisabled = 3,
}

cluster_enum!(UserStatusEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum UserTypeEnum {
    UnrestrictedUser = 0,
    YearDayScheduleUser = 1,
    WeekDayScheduleUser = 2,
    ProgrammingUser = 3,
    NonAccessUser = 4,
    ForcedUser = 5,
    DisposableUser = 6,
    ExpiringUser = 7,
    ScheduleRestrictedUser = 8,
    RemoteOnlyUser = 9,
}

cluster_enum!(UserTypeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum LockStateEnum {
    NotFullyLocked = 0,
    Locked = 1,
    Unlocked = 2,
    Unlatched = 3,
}

cluster_enum!(LockStateEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum LockTypeEnum {
    DeadBolt = 0,
    Magnetic = 1,
    Other = 2,
    Mortise = 3,
    Rim = 4,
    LatchBolt = 5,
    CylindricalLock = 6,
    TubularLock = 7,
    InterconnectedLock = 8,
    DeadLatch = 9,
    DoorFurniture = 10,
    Eurocylinder = 11,
}

cluster_enum!(LockTypeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum LEDSettingEnum {
    NoLedSignal = 0,
    NoLedSignalAccessAllowed = 1,
    LedSignalAll = 2,
}

cluster_enum!(LEDSettingEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum SoundVolumeEnum {
    Silent = 0,
    Low = 1,
    High = 2,
    Medium = 3,
}

cluster_enum!(SoundVolumeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum EventTypeEnum {
    Operation = 0,
    Programming = 1,
    Alarm = 2,
}

cluster_enum!(EventTypeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum StatusCodeEnum {
    Duplicate = 2,
    Occupied = 3,
}

cluster_enum!(StatusCodeEnum);

// Bitmaps

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DaysMaskBitmap: u8 {
        const SUNDAY = 0x01;
        const MONDAY = 0x02;
        const TUESDAY = 0x04;
        const WEDNESDAY = 0x08;
        const THURSDAY = 0x10;
        const FRIDAY = 0x20;
        const SATURDAY = 0x40;
    }
}

bitflags_serde!(DaysMaskBitmap, u8);

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CredentialRulesBitmap: u8 {
        const SINGLE = 0x01;
        const DUAL = 0x02;
        const TRI = 0x04;
    }
}

bitflags_serde!(CredentialRulesBitmap, u8);

bitflags! {
    /// Bits 5..15 are reserved and always set by the server.
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OperatingModesBitmap: u16 {
        const NORMAL = 0x0001;
        const VACATION = 0x0002;
        const PRIVACY = 0x0004;
        const NO_REMOTE_LOCK_UNLOCK = 0x0008;
        const PASSAGE = 0x0010;
        const ALWAYS_SET = 0xFFE0;
    }
}

bitflags_serde!(OperatingModesBitmap, u16);

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConfigurationRegisterBitmap: u8 {
        const LOCAL_PROGRAMMING = 0x01;
        const KEYPAD_INTERFACE = 0x02;
        const REMOTE_INTERFACE = 0x04;
        const SOUND_VOLUME = 0x20;
        const AUTO_RELOCK_TIME = 0x40;
        const LED_SETTINGS = 0x80;
    }
}

bitflags_serde!(ConfigurationRegisterBitmap, u8);

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LocalProgrammingFeaturesBitmap: u8 {
        const ADD_USERS_CREDENTIALS_SCHEDULES = 0x01;
        const MODIFY_USERS_CREDENTIALS_SCHEDULES = 0x02;
        const CLEAR_USERS_CREDENTIALS_SCHEDULES = 0x04;
        const ADJUST_SETTINGS = 0x08;
    }
}

bitflags_serde!(LocalProgrammingFeaturesBitmap, u8);

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AlarmMaskBitmap: u16 {
        const LOCK_JAMMED = 0x01;
        const LOCK_FACTORY_RESET = 0x02;
        const LOCK_RADIO_POWER_CYCLED = 0x08;
        const WRONG_CODE_ENTRY_LIMIT = 0x10;
        const FRONT_ESCUTCHEON_REMOVED = 0x20;
        const DOOR_FORCED_OPEN = 0x40;
    }
}

bitflags_serde!(AlarmMaskBitmap, u16);

// Structs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialStruct {
    pub credential_type: CredentialTypeEnum,
    pub credential_index: u16,
}

// Events

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoorLockAlarm {
    pub alarm_code: AlarmCodeEnum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoorStateChange {
    pub door_state: DoorStateEnum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockOperation {
    pub lock_operation_type: LockOperationTypeEnum,
    pub operation_source: OperationSourceEnum,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_index: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fabric_index: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_node: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Vec<CredentialStruct>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockOperationError {
    pub lock_operation_type: LockOperationTypeEnum,
    pub operation_source: OperationSourceEnum,
    pub operation_error: OperationErrorEnum,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_index: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fabric_index: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_node: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Vec<CredentialStruct>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockUserChange {
    pub lock_data_type: LockDataTypeEnum,
    pub data_operation_type: DataOperationTypeEnum,
    pub operation_source: OperationSourceEnum,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_index: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fabric_index: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_node: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_index: Option<u16>,
}

/// The decoded attribute state of a Door Lock cluster instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DoorLock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_revision: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_map: Option<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_state: Option<LockStateEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_type: Option<LockTypeEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actuator_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub door_state: Option<DoorStateEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub door_open_events: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub door_closed_events: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_period: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_total_users_supported: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_pin_users_supported: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_rfid_users_supported: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_week_day_schedules_supported_per_user: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_year_day_schedules_supported_per_user: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_holiday_schedules_supported: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pin_code_length: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_pin_code_length: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rfid_code_length: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rfid_code_length: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_rules_support: Option<CredentialRulesBitmap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_credentials_supported_per_user: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub led_settings: Option<LEDSettingEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_relock_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_volume: Option<SoundVolumeEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_mode: Option<OperatingModeEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_operating_modes: Option<OperatingModesBitmap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_configuration_register: Option<ConfigurationRegisterBitmap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_local_programming: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_one_touch_locking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_inside_status_led: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_privacy_mode_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_programming_features: Option<LocalProgrammingFeaturesBitmap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrong_code_entry_limit: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_code_temporary_disable_time: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_pin_over_the_air: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_pin_for_remote_operation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiring_user_timeout: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_mask: Option<AlarmMaskBitmap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliro_reader_verification_key: Option<OctetString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliro_reader_group_identifier: Option<OctetString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliro_reader_group_sub_identifier: Option<OctetString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliro_expedited_transaction_supported_protocol_versions: Option<Vec<OctetString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliro_group_resolving_key: Option<OctetString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliro_supported_bleuwb_protocol_versions: Option<Vec<OctetString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliro_ble_advertising_version: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_aliro_credential_issuer_keys_supported: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_aliro_endpoint_keys_supported: Option<u16>,
}

// Commands

pub fn lock_door(pin_code: Option<OctetString>) -> ClusterCommand {
    ClusterCommand::new("lockDoor").opt_arg("pinCode", pin_code.as_ref())
}

pub fn unlock_door(pin_code: Option<OctetString>) -> ClusterCommand {
    ClusterCommand::new("unlockDoor").opt_arg("pinCode", pin_code.as_ref())
}

pub fn toggle() -> ClusterCommand {
    ClusterCommand::new("toggle")
}

pub fn unlock_with_timeout(timeout: Option<u16>, pin_code: Option<OctetString>) -> ClusterCommand {
    ClusterCommand::new("unlockWithTimeout")
        .opt_arg("timeout", timeout.as_ref())
        .opt_arg("pinCode", pin_code.as_ref())
}

pub fn set_pin_code(
    user_id: Option<u16>,
    user_status: Option<UserStatusEnum>,
    user_type: Option<UserTypeEnum>,
    pin: Option<OctetString>,
) -> ClusterCommand {
    ClusterCommand::new("setPinCode")
        .opt_arg("userId", user_id.as_ref())
        .opt_arg("userStatus", user_status.as_ref())
        .opt_arg("userType", user_type.as_ref())
        .opt_arg("pin", pin.as_ref())
}

pub fn get_pin_code(user_id: Option<u16>) -> ClusterCommand {
    ClusterCommand::new("getPinCode").opt_arg("userId", user_id.as_ref())
}

pub fn clear_pin_code(pin_slot_index: Option<u16>) -> ClusterCommand {
    ClusterCommand::new("clearPinCode").opt_arg("pinSlotIndex", pin_slot_index.as_ref())
}

pub fn clear_all_pin_codes() -> ClusterCommand {
    ClusterCommand::new("clearAllPinCodes")
}

pub fn set_user_status(
    user_id: Option<u16>,
    user_status: Option<UserStatusEnum>,
) -> ClusterCommand {
    ClusterCommand::new("setUserStatus")
        .opt_arg("userId", user_id.as_ref())
        .opt_arg("userStatus", user_status.as_ref())
}

pub fn get_user_status(user_id: Option<u16>) -> ClusterCommand {
    ClusterCommand::new("getUserStatus").opt_arg("userId", user_id.as_ref())
}

pub fn set_week_day_schedule(
    week_day_index: Option<u8>,
    user_index: Option<u16>,
    days_mask: Option<DaysMaskBitmap>,
    start_hour: Option<u8>,
    start_minute: Option<u8>,
    end_hour: Option<u8>,
    end_minute: Option<u8>,
) -> ClusterCommand {
    ClusterCommand::new("setWeekDaySchedule")
        .opt_arg("weekDayIndex", week_day_index.as_ref())
        .opt_arg("userIndex", user_index.as_ref())
        .opt_arg("daysMask", days_mask.as_ref())
        .opt_arg("startHour", start_hour.as_ref())
        .opt_arg("startMinute", start_minute.as_ref())
        .opt_arg("endHour", end_hour.as_ref())
        .opt_arg("endMinute", end_minute.as_ref())
}

pub fn get_week_day_schedule(
    week_day_index: Option<u8>,
    user_index: Option<u16>,
) -> ClusterCommand {
    ClusterCommand::new("getWeekDaySchedule")
        .opt_arg("weekDayIndex", week_day_index.as_ref())
        .opt_arg("userIndex", user_index.as_ref())
}

pub fn clear_week_day_schedule(
    week_day_index: Option<u8>,
    user_index: Option<u16>,
) -> ClusterCommand {
    ClusterCommand::new("clearWeekDaySchedule")
        .opt_arg("weekDayIndex", week_day_index.as_ref())
        .opt_arg("userIndex", user_index.as_ref())
}

pub fn set_year_day_schedule(
    year_day_index: Option<u8>,
    user_index: Option<u16>,
    local_start_time: Option<u32>,
    local_end_time: Option<u32>,
) -> ClusterCommand {
    ClusterCommand::new("setYearDaySchedule")
        .opt_arg("yearDayIndex", year_day_index.as_ref())
        .opt_arg("userIndex", user_index.as_ref())
        .opt_arg("localStartTime", local_start_time.as_ref())
        .opt_arg("localEndTime", local_end_time.as_ref())
}

pub fn get_year_day_schedule(
    year_day_index: Option<u8>,
    user_index: Option<u16>,
) -> ClusterCommand {
    ClusterCommand::new("getYearDaySchedule")
        .opt_arg("yearDayIndex", year_day_index.as_ref())
        .opt_arg("userIndex", user_index.as_ref())
}

pub fn clear_year_day_schedule(
    year_day_index: Option<u8>,
    user_index: Option<u16>,
) -> ClusterCommand {
    ClusterCommand::new("clearYearDaySchedule")
        .opt_arg("yearDayIndex", year_day_index.as_ref())
        .opt_arg("userIndex", user_index.as_ref())
}

pub fn set_holiday_schedule(
    holiday_index: Option<u8>,
    local_start_time: Option<u32>,
    local_end_time: Option<u32>,
    operating_mode: Option<OperatingModeEnum>,
) -> ClusterCommand {
    ClusterCommand::new("setHolidaySchedule")
        .opt_arg("holidayIndex", holiday_index.as_ref())
        .opt_arg("localStartTime", local_start_time.as_ref())
        .opt_arg("localEndTime", local_end_time.as_ref())
        .opt_arg("operatingMode", operating_mode.as_ref())
}

pub fn get_holiday_schedule(holiday_index: Option<u8>) -> ClusterCommand {
    ClusterCommand::new("getHolidaySchedule").opt_arg("holidayIndex", holiday_index.as_ref())
}

pub fn clear_holiday_schedule(holiday_index: Option<u8>) -> ClusterCommand {
    ClusterCommand::new("clearHolidaySchedule").opt_arg("holidayIndex", holiday_index.as_ref())
}

pub fn set_user_type(user_id: Option<u16>, user_type: Option<UserTypeEnum>) -> ClusterCommand {
    ClusterCommand::new("setUserType")
        .opt_arg("userId", user_id.as_ref())
        .opt_arg("userType", user_type.as_ref())
}

pub fn get_user_type(user_id: Option<u16>) -> ClusterCommand {
    ClusterCommand::new("getUserType").opt_arg("userId", user_id.as_ref())
}

pub fn set_rfid_code(
    user_id: Option<u16>,
    user_status: Option<UserStatusEnum>,
    user_type: Option<UserTypeEnum>,
    rfid_code: Option<OctetString>,
) -> ClusterCommand {
    ClusterCommand::new("setRfidCode")
        .opt_arg("userId", user_id.as_ref())
        .opt_arg("userStatus", user_status.as_ref())
        .opt_arg("userType", user_type.as_ref())
        .opt_arg("rfidCode", rfid_code.as_ref())
}

pub fn get_rfid_code(user_id: Option<u16>) -> ClusterCommand {
    ClusterCommand::new("getRfidCode").opt_arg("userId", user_id.as_ref())
}

pub fn clear_rfid_code(rfid_slot_index: Option<u16>) -> ClusterCommand {
    ClusterCommand::new("clearRfidCode").opt_arg("rfidSlotIndex", rfid_slot_index.as_ref())
}

pub fn clear_all_rfid_codes() -> ClusterCommand {
    ClusterCommand::new("clearAllRfidCodes")
}

#[allow(clippy::too_many_arguments)]
pub fn set_user(
    operation_type: Option<DataOperationTypeEnum>,
    user_index: Option<u16>,
    user_name: Option<String>,
    user_unique_id: Option<u32>,
    user_status: Option<UserStatusEnum>,
    user_type: Option<UserTypeEnum>,
    credential_rule: Option<CredentialRuleEnum>,
) -> ClusterCommand {
    ClusterCommand::new("setUser")
        .opt_arg("operationType", operation_type.as_ref())
        .opt_arg("userIndex", user_index.as_ref())
        .opt_arg("userName", user_name.as_ref())
        .opt_arg("userUniqueId", user_unique_id.as_ref())
        .opt_arg("userStatus", user_status.as_ref())
        .opt_arg("userType", user_type.as_ref())
        .opt_arg("credentialRule", credential_rule.as_ref())
}

pub fn get_user(user_index: Option<u16>) -> ClusterCommand {
    ClusterCommand::new("getUser").opt_arg("userIndex", user_index.as_ref())
}

pub fn clear_user(user_index: Option<u16>) -> ClusterCommand {
    ClusterCommand::new("clearUser").opt_arg("userIndex", user_index.as_ref())
}

pub fn set_credential(
    operation_type: Option<DataOperationTypeEnum>,
    credential: Option<CredentialStruct>,
    credential_data: Option<OctetString>,
    user_index: Option<u16>,
    user_status: Option<UserStatusEnum>,
    user_type: Option<UserTypeEnum>,
) -> ClusterCommand {
    ClusterCommand::new("setCredential")
        .opt_arg("operationType", operation_type.as_ref())
        .opt_arg("credential", credential.as_ref())
        .opt_arg("credentialData", credential_data.as_ref())
        .opt_arg("userIndex", user_index.as_ref())
        .opt_arg("userStatus", user_status.as_ref())
        .opt_arg("userType", user_type.as_ref())
}

pub fn get_credential_status(credential: Option<CredentialStruct>) -> ClusterCommand {
    ClusterCommand::new("getCredentialStatus").opt_arg("credential", credential.as_ref())
}

pub fn clear_credential(credential: Option<CredentialStruct>) -> ClusterCommand {
    ClusterCommand::new("clearCredential").opt_arg("credential", credential.as_ref())
}

pub fn unbolt_door(pin_code: Option<OctetString>) -> ClusterCommand {
    ClusterCommand::new("unboltDoor").opt_arg("pinCode", pin_code.as_ref())
}

pub fn set_aliro_reader_config(
    signing_key: Option<OctetString>,
    verification_key: Option<OctetString>,
    group_identifier: Option<OctetString>,
    group_resolving_key: Option<OctetString>,
) -> ClusterCommand {
    ClusterCommand::new("setAliroReaderConfig")
        .opt_arg("signingKey", signing_key.as_ref())
        .opt_arg("verificationKey", verification_key.as_ref())
        .opt_arg("groupIdentifier", group_identifier.as_ref())
        .opt_arg("groupResolvingKey", group_resolving_key.as_ref())
}

pub fn clear_aliro_reader_config() -> ClusterCommand {
    ClusterCommand::new("clearAliroReaderConfig")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dm::ClusterEnum;

    #[test]
    fn cluster_id() {
        assert_eq!(CLUSTER.id, 0x0101);
        assert_eq!(CLUSTER.commands.len(), 34);
        assert_eq!(
            CLUSTER.command_named("setCredential").unwrap().resp_id,
            Some(RespCommandId::SetCredentialResponse as _)
        );
    }

    #[test]
    fn lock_state_labels() {
        assert_eq!(LockStateEnum::NotFullyLocked.label(), "Not Fully Locked");
        assert_eq!(UserStatusEnum::OccupiedDisabled.value(), 3);
        // 2 is a hole in the user status table
        assert!(UserStatusEnum::from_value(2).is_err());
        // 2 is reserved in the alarm code table
        assert!(AlarmCodeEnum::from_value(2).is_err());
    }

    #[test]
    fn set_user_arg_order() {
        let cmd = set_user(
            Some(DataOperationTypeEnum::Add),
            Some(1),
            Some("Alice".into()),
            Some(42),
            Some(UserStatusEnum::OccupiedEnabled),
            Some(UserTypeEnum::UnrestrictedUser),
            Some(CredentialRuleEnum::Single),
        );

        let keys = cmd.args.keys().collect::<Vec<_>>();
        assert_eq!(
            keys,
            [
                "operationType",
                "userIndex",
                "userName",
                "userUniqueId",
                "userStatus",
                "userType",
                "credentialRule"
            ]
        );
    }

    #[test]
    fn unlock_with_timeout_omits_missing_pin() {
        let cmd = unlock_with_timeout(Some(30), None);
        let keys = cmd.args.keys().collect::<Vec<_>>();
        assert_eq!(keys, ["timeout"]);
    }

    #[test]
    fn credential_round_trip() {
        let credential = CredentialStruct {
            credential_type: CredentialTypeEnum::Pin,
            credential_index: 2,
        };

        let json = serde_json::to_value(&credential).unwrap();
        assert_eq!(json["credentialType"], 1);

        let back: CredentialStruct = serde_json::from_value(json).unwrap();
        assert_eq!(back, credential);
    }
}
