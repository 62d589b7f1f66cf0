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

//! The Color Control cluster (0x0300): hue/saturation, XY, color
//! temperature and color loop control of a lamp.

use bitflags::bitflags;

use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

use crate::dm::{Access, Attribute, Cluster, ClusterCommand, Command, Quality};
use crate::{attribute_enum, attributes, bitflags_serde, cluster_enum, command_enum, commands};

pub const ID: u32 = 0x0300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum AttributeId {
    CurrentHue = 0x0000,
    CurrentSaturation = 0x0001,
    RemainingTime = 0x0002,
    CurrentX = 0x0003,
    CurrentY = 0x0004,
    DriftCompensation = 0x0005,
    CompensationText = 0x0006,
    ColorTemperatureMireds = 0x0007,
    ColorMode = 0x0008,
    Options = 0x000F,
    NumberOfPrimaries = 0x0010,
    Primary1X = 0x0011,
    Primary1Y = 0x0012,
    Primary1Intensity = 0x0013,
    Primary2X = 0x0015,
    Primary2Y = 0x0016,
    Primary2Intensity = 0x0017,
    Primary3X = 0x0019,
    Primary3Y = 0x001A,
    Primary3Intensity = 0x001B,
    Primary4X = 0x0020,
    Primary4Y = 0x0021,
    Primary4Intensity = 0x0022,
    Primary5X = 0x0024,
    Primary5Y = 0x0025,
    Primary5Intensity = 0x0026,
    Primary6X = 0x0028,
    Primary6Y = 0x0029,
    Primary6Intensity = 0x002A,
    WhitePointX = 0x0030,
    WhitePointY = 0x0031,
    ColorPointRx = 0x0032,
    ColorPointRy = 0x0033,
    ColorPointRIntensity = 0x0034,
    ColorPointGx = 0x0036,
    ColorPointGy = 0x0037,
    ColorPointGIntensity = 0x0038,
    ColorPointBx = 0x003A,
    ColorPointBy = 0x003B,
    ColorPointBIntensity = 0x003C,
    EnhancedCurrentHue = 0x4000,
    EnhancedColorMode = 0x4001,
    ColorLoopActive = 0x4002,
    ColorLoopDirection = 0x4003,
    ColorLoopTime = 0x4004,
    ColorLoopStartEnhancedHue = 0x4005,
    ColorLoopStoredEnhancedHue = 0x4006,
    ColorCapabilities = 0x400A,
    ColorTempPhysicalMinMireds = 0x400B,
    ColorTempPhysicalMaxMireds = 0x400C,
    CoupleColorTempToLevelMinMireds = 0x400D,
    StartUpColorTemperatureMireds = 0x4010,
}

attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum CommandId {
    MoveToHue = 0x00,
    MoveHue = 0x01,
    StepHue = 0x02,
    MoveToSaturation = 0x03,
    MoveSaturation = 0x04,
    StepSaturation = 0x05,
    MoveToHueAndSaturation = 0x06,
    MoveToColor = 0x07,
    MoveColor = 0x08,
    StepColor = 0x09,
    MoveToColorTemperature = 0x0A,
    EnhancedMoveToHue = 0x40,
    EnhancedMoveHue = 0x41,
    EnhancedStepHue = 0x42,
    EnhancedMoveToHueAndSaturation = 0x43,
    ColorLoopSet = 0x44,
    StopMoveStep = 0x47,
    MoveColorTemperature = 0x4B,
    StepColorTemperature = 0x4C,
}

command_enum!(CommandId);

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Feature: u32 {
        const HUE_SATURATION = 0x01;
        const ENHANCED_HUE = 0x02;
        const COLOR_LOOP = 0x04;
        const XY = 0x08;
        const COLOR_TEMPERATURE = 0x10;
    }
}

bitflags_serde!(Feature, u32);

const fn attr(id: AttributeId, name: &'static str, access: Access, quality: Quality) -> Attribute {
    Attribute::new(id as _, name, access, quality)
}

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    "ColorControl",
    7,
    0,
    attributes!(
        attr(AttributeId::CurrentHue, "currentHue", Access::RV, Quality::N),
        attr(
            AttributeId::CurrentSaturation,
            "currentSaturation",
            Access::RV,
            Quality::SN,
        ),
        attr(
            AttributeId::RemainingTime,
            "remainingTime",
            Access::RV,
            Quality::NONE,
        ),
        attr(AttributeId::CurrentX, "currentX", Access::RV, Quality::SN),
        attr(AttributeId::CurrentY, "currentY", Access::RV, Quality::SN),
        attr(
            AttributeId::DriftCompensation,
            "driftCompensation",
            Access::RV,
            Quality::NONE,
        ),
        attr(
            AttributeId::CompensationText,
            "compensationText",
            Access::RV,
            Quality::NONE,
        ),
        attr(
            AttributeId::ColorTemperatureMireds,
            "colorTemperatureMireds",
            Access::RV,
            Quality::SN,
        ),
        attr(AttributeId::ColorMode, "colorMode", Access::RV, Quality::N),
        attr(AttributeId::Options, "options", Access::RWVO, Quality::NONE),
        attr(
            AttributeId::NumberOfPrimaries,
            "numberOfPrimaries",
            Access::RV,
            Quality::XF,
        ),
        attr(AttributeId::Primary1X, "primary1X", Access::RV, Quality::F),
        attr(AttributeId::Primary1Y, "primary1Y", Access::RV, Quality::F),
        attr(
            AttributeId::Primary1Intensity,
            "primary1Intensity",
            Access::RV,
            Quality::XF,
        ),
        attr(AttributeId::Primary2X, "primary2X", Access::RV, Quality::F),
        attr(AttributeId::Primary2Y, "primary2Y", Access::RV, Quality::F),
        attr(
            AttributeId::Primary2Intensity,
            "primary2Intensity",
            Access::RV,
            Quality::XF,
        ),
        attr(AttributeId::Primary3X, "primary3X", Access::RV, Quality::F),
        attr(AttributeId::Primary3Y, "primary3Y", Access::RV, Quality::F),
        attr(
            AttributeId::Primary3Intensity,
            "primary3Intensity",
            Access::RV,
            Quality::XF,
        ),
        attr(AttributeId::Primary4X, "primary4X", Access::RV, Quality::F),
        attr(AttributeId::Primary4Y, "primary4Y", Access::RV, Quality::F),
        attr(
            AttributeId::Primary4Intensity,
            "primary4Intensity",
            Access::RV,
            Quality::XF,
        ),
        attr(AttributeId::Primary5X, "primary5X", Access::RV, Quality::F),
        attr(AttributeId::Primary5Y, "primary5Y", Access::RV, Quality::F),
        attr(
            AttributeId::Primary5Intensity,
            "primary5Intensity",
            Access::RV,
            Quality::XF,
        ),
        attr(AttributeId::Primary6X, "primary6X", Access::RV, Quality::F),
        attr(AttributeId::Primary6Y, "primary6Y", Access::RV, Quality::F),
        attr(
            AttributeId::Primary6Intensity,
            "primary6Intensity",
            Access::RV,
            Quality::XF,
        ),
        attr(
            AttributeId::WhitePointX,
            "whitePointX",
            Access::RWVM,
            Quality::NONE,
        ),
        attr(
            AttributeId::WhitePointY,
            "whitePointY",
            Access::RWVM,
            Quality::NONE,
        ),
        attr(
            AttributeId::ColorPointRx,
            "colorPointRx",
            Access::RWVM,
            Quality::NONE,
        ),
        attr(
            AttributeId::ColorPointRy,
            "colorPointRy",
            Access::RWVM,
            Quality::NONE,
        ),
        attr(
            AttributeId::ColorPointRIntensity,
            "colorPointRIntensity",
            Access::RWVM,
            Quality::X,
        ),
        attr(
            AttributeId::ColorPointGx,
            "colorPointGx",
            Access::RWVM,
            Quality::NONE,
        ),
        attr(
            AttributeId::ColorPointGy,
            "colorPointGy",
            Access::RWVM,
            Quality::NONE,
        ),
        attr(
            AttributeId::ColorPointGIntensity,
            "colorPointGIntensity",
            Access::RWVM,
            Quality::X,
        ),
        attr(
            AttributeId::ColorPointBx,
            "colorPointBx",
            Access::RWVM,
            Quality::NONE,
        ),
        attr(
            AttributeId::ColorPointBy,
            "colorPointBy",
            Access::RWVM,
            Quality::NONE,
        ),
        attr(
            AttributeId::ColorPointBIntensity,
            "colorPointBIntensity",
            Access::RWVM,
            Quality::X,
        ),
        attr(
            AttributeId::EnhancedCurrentHue,
            "enhancedCurrentHue",
            Access::RV,
            Quality::SN,
        ),
        attr(
            AttributeId::EnhancedColorMode,
            "enhancedColorMode",
            Access::RV,
            Quality::N,
        ),
        attr(
            AttributeId::ColorLoopActive,
            "colorLoopActive",
            Access::RV,
            Quality::SN,
        ),
        attr(
            AttributeId::ColorLoopDirection,
            "colorLoopDirection",
            Access::RV,
            Quality::SN,
        ),
        attr(
            AttributeId::ColorLoopTime,
            "colorLoopTime",
            Access::RV,
            Quality::SN,
        ),
        attr(
            AttributeId::ColorLoopStartEnhancedHue,
            "colorLoopStartEnhancedHue",
            Access::RV,
            Quality::NONE,
        ),
        attr(
            AttributeId::ColorLoopStoredEnhancedHue,
            "colorLoopStoredEnhancedHue",
            Access::RV,
            Quality::NONE,
        ),
        attr(
            AttributeId::ColorCapabilities,
            "colorCapabilities",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::ColorTempPhysicalMinMireds,
            "colorTempPhysicalMinMireds",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::ColorTempPhysicalMaxMireds,
            "colorTempPhysicalMaxMireds",
            Access::RV,
            Quality::F,
        ),
        attr(
            AttributeId::CoupleColorTempToLevelMinMireds,
            "coupleColorTempToLevelMinMireds",
            Access::RV,
            Quality::NONE,
        ),
        attr(
            AttributeId::StartUpColorTemperatureMireds,
            "startUpColorTemperatureMireds",
            Access::RWVM,
            Quality::XN,
        ),
    ),
    commands!(
        Command::new(CommandId::MoveToHue as _, "moveToHue", None, Access::WO),
        Command::new(CommandId::MoveHue as _, "moveHue", None, Access::WO),
        Command::new(CommandId::StepHue as _, "stepHue", None, Access::WO),
        Command::new(
            CommandId::MoveToSaturation as _,
            "moveToSaturation",
            None,
            Access::WO,
        ),
        Command::new(
            CommandId::MoveSaturation as _,
            "moveSaturation",
            None,
            Access::WO,
        ),
        Command::new(
            CommandId::StepSaturation as _,
            "stepSaturation",
            None,
            Access::WO,
        ),
        Command::new(
            CommandId::MoveToHueAndSaturation as _,
            "moveToHueAndSaturation",
            None,
            Access::WO,
        ),
        Command::new(CommandId::MoveToColor as _, "moveToColor", None, Access::WO),
        Command::new(CommandId::MoveColor as _, "moveColor", None, Access::WO),
        Command::new(CommandId::StepColor as _, "stepColor", None, Access::WO),
        Command::new(
            CommandId::MoveToColorTemperature as _,
            "moveToColorTemperature",
            None,
            Access::WO,
        ),
        Command::new(
            CommandId::EnhancedMoveToHue as _,
            "enhancedMoveToHue",
            None,
            Access::WO,
        ),
        Command::new(
            CommandId::EnhancedMoveHue as _,
            "enhancedMoveHue",
            None,
            Access::WO,
        ),
        Command::new(
            CommandId::EnhancedStepHue as _,
            "enhancedStepHue",
            None,
            Access::WO,
        ),
        Command::new(
            CommandId::EnhancedMoveToHueAndSaturation as _,
            "enhancedMoveToHueAndSaturation",
            None,
            Access::WO,
        ),
        Command::new(CommandId::ColorLoopSet as _, "colorLoopSet", None, Access::WO),
        Command::new(CommandId::StopMoveStep as _, "stopMoveStep", None, Access::WO),
        Command::new(
            CommandId::MoveColorTemperature as _,
            "moveColorTemperature",
            None,
            Access::WO,
        ),
        Command::new(
            CommandId::StepColorTemperature as _,
            "stepColorTemperature",
            None,
            Access::WO,
        ),
    ),
);

// Enums

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum ColorLoopActive {
    Inactive = 0,
    Active = 1,
}

cluster_enum!(ColorLoopActive);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum DriftCompensationEnum {
    None = 0,
    OtherOrUnknown = 1,
    TemperatureMonitoring = 2,
    OpticalLuminanceMonitoringAndFeedback = 3,
    OpticalColorMonitoringAndFeedback = 4,
}

cluster_enum!(DriftCompensationEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum ColorModeEnum {
    CurrentHueAndCurrentSaturation = 0,
    CurrentXAndCurrentY = 1,
    ColorTemperatureMireds = 2,
}

cluster_enum!(ColorModeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum EnhancedColorModeEnum {
    CurrentHueAndCurrentSaturation = 0,
    CurrentXAndCurrentY = 1,
    ColorTemperatureMireds = 2,
    EnhancedCurrentHueAndCurrentSaturation = 3,
}

cluster_enum!(EnhancedColorModeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum DirectionEnum {
    Shortest = 0,
    Longest = 1,
    Up = 2,
    Down = 3,
}

cluster_enum!(DirectionEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum MoveModeEnum {
    Stop = 0,
    Up = 1,
    Down = 3,
}

cluster_enum!(MoveModeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum StepModeEnum {
    Up = 1,
    Down = 3,
}

cluster_enum!(StepModeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum ColorLoopActionEnum {
    Deactivate = 0,
    ActivateFromColorLoopStartEnhancedHue = 1,
    ActivateFromEnhancedCurrentHue = 2,
}

cluster_enum!(ColorLoopActionEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum ColorLoopDirectionEnum {
    Decrement = 0,
    Increment = 1,
}

cluster_enum!(ColorLoopDirectionEnum);

// Bitmaps

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColorCapabilities: u16 {
        const HUE_SATURATION = 0x01;
        const ENHANCED_HUE = 0x02;
        const COLOR_LOOP = 0x04;
        const XY = 0x08;
        const COLOR_TEMPERATURE = 0x10;
    }
}

bitflags_serde!(ColorCapabilities, u16);

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OptionsBitmap: u8 {
        const EXECUTE_IF_OFF = 0x01;
    }
}

bitflags_serde!(OptionsBitmap, u8);

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UpdateFlagsBitmap: u8 {
        const UPDATE_ACTION = 0x01;
        const UPDATE_DIRECTION = 0x02;
        const UPDATE_TIME = 0x04;
        const UPDATE_START_HUE = 0x08;
    }
}

bitflags_serde!(UpdateFlagsBitmap, u8);

/// The decoded attribute state of a Color Control cluster instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorControl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_revision: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_map: Option<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_hue: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_saturation: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_time: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_x: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_y: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_compensation: Option<DriftCompensationEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compensation_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_temperature_mireds: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorModeEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionsBitmap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_primaries: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary1_x: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary1_y: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary1_intensity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary2_x: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary2_y: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary2_intensity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary3_x: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary3_y: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary3_intensity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary4_x: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary4_y: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary4_intensity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary5_x: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary5_y: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary5_intensity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary6_x: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary6_y: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary6_intensity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_point_x: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_point_y: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_point_rx: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_point_ry: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_point_r_intensity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_point_gx: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_point_gy: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_point_g_intensity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_point_bx: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_point_by: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_point_b_intensity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_current_hue: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_color_mode: Option<EnhancedColorModeEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_loop_active: Option<ColorLoopActive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_loop_direction: Option<ColorLoopDirectionEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_loop_time: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_loop_start_enhanced_hue: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_loop_stored_enhanced_hue: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_capabilities: Option<ColorCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_temp_physical_min_mireds: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_temp_physical_max_mireds: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub couple_color_temp_to_level_min_mireds: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_up_color_temperature_mireds: Option<u16>,
}

// Commands

pub fn move_to_hue(
    hue: Option<u8>,
    direction: Option<DirectionEnum>,
    transition_time: Option<u16>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("moveToHue")
        .opt_arg("hue", hue.as_ref())
        .opt_arg("direction", direction.as_ref())
        .opt_arg("transitionTime", transition_time.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn move_hue(
    move_mode: Option<MoveModeEnum>,
    rate: Option<u8>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("moveHue")
        .opt_arg("moveMode", move_mode.as_ref())
        .opt_arg("rate", rate.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn step_hue(
    step_mode: Option<StepModeEnum>,
    step_size: Option<u8>,
    transition_time: Option<u8>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("stepHue")
        .opt_arg("stepMode", step_mode.as_ref())
        .opt_arg("stepSize", step_size.as_ref())
        .opt_arg("transitionTime", transition_time.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn move_to_saturation(
    saturation: Option<u8>,
    transition_time: Option<u16>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("moveToSaturation")
        .opt_arg("saturation", saturation.as_ref())
        .opt_arg("transitionTime", transition_time.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn move_saturation(
    move_mode: Option<MoveModeEnum>,
    rate: Option<u8>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("moveSaturation")
        .opt_arg("moveMode", move_mode.as_ref())
        .opt_arg("rate", rate.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn step_saturation(
    step_mode: Option<StepModeEnum>,
    step_size: Option<u8>,
    transition_time: Option<u8>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("stepSaturation")
        .opt_arg("stepMode", step_mode.as_ref())
        .opt_arg("stepSize", step_size.as_ref())
        .opt_arg("transitionTime", transition_time.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn move_to_hue_and_saturation(
    hue: Option<u8>,
    saturation: Option<u8>,
    transition_time: Option<u16>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("moveToHueAndSaturation")
        .opt_arg("hue", hue.as_ref())
        .opt_arg("saturation", saturation.as_ref())
        .opt_arg("transitionTime", transition_time.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn move_to_color(
    color_x: Option<u16>,
    color_y: Option<u16>,
    transition_time: Option<u16>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("moveToColor")
        .opt_arg("colorX", color_x.as_ref())
        .opt_arg("colorY", color_y.as_ref())
        .opt_arg("transitionTime", transition_time.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn move_color(
    rate_x: Option<i16>,
    rate_y: Option<i16>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("moveColor")
        .opt_arg("rateX", rate_x.as_ref())
        .opt_arg("rateY", rate_y.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn step_color(
    step_x: Option<i16>,
    step_y: Option<i16>,
    transition_time: Option<u16>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("stepColor")
        .opt_arg("stepX", step_x.as_ref())
        .opt_arg("stepY", step_y.as_ref())
        .opt_arg("transitionTime", transition_time.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn move_to_color_temperature(
    color_temperature_mireds: Option<u16>,
    transition_time: Option<u16>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("moveToColorTemperature")
        .opt_arg("colorTemperatureMireds", color_temperature_mireds.as_ref())
        .opt_arg("transitionTime", transition_time.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn enhanced_move_to_hue(
    enhanced_hue: Option<u16>,
    direction: Option<DirectionEnum>,
    transition_time: Option<u16>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("enhancedMoveToHue")
        .opt_arg("enhancedHue", enhanced_hue.as_ref())
        .opt_arg("direction", direction.as_ref())
        .opt_arg("transitionTime", transition_time.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn enhanced_move_hue(
    move_mode: Option<MoveModeEnum>,
    rate: Option<u16>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("enhancedMoveHue")
        .opt_arg("moveMode", move_mode.as_ref())
        .opt_arg("rate", rate.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn enhanced_step_hue(
    step_mode: Option<StepModeEnum>,
    step_size: Option<u16>,
    transition_time: Option<u16>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("enhancedStepHue")
        .opt_arg("stepMode", step_mode.as_ref())
        .opt_arg("stepSize", step_size.as_ref())
        .opt_arg("transitionTime", transition_time.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn enhanced_move_to_hue_and_saturation(
    enhanced_hue: Option<u16>,
    saturation: Option<u8>,
    transition_time: Option<u16>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("enhancedMoveToHueAndSaturation")
        .opt_arg("enhancedHue", enhanced_hue.as_ref())
        .opt_arg("saturation", saturation.as_ref())
        .opt_arg("transitionTime", transition_time.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn color_loop_set(
    update_flags: Option<UpdateFlagsBitmap>,
    action: Option<ColorLoopActionEnum>,
    direction: Option<ColorLoopDirectionEnum>,
    time: Option<u16>,
    start_hue: Option<u16>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("colorLoopSet")
        .opt_arg("updateFlags", update_flags.as_ref())
        .opt_arg("action", action.as_ref())
        .opt_arg("direction", direction.as_ref())
        .opt_arg("time", time.as_ref())
        .opt_arg("startHue", start_hue.as_ref())
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn stop_move_step(
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("stopMoveStep")
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn move_color_temperature(
    move_mode: Option<MoveModeEnum>,
    rate: Option<u16>,
    color_temperature_minimum_mireds: Option<u16>,
    color_temperature_maximum_mireds: Option<u16>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("moveColorTemperature")
        .opt_arg("moveMode", move_mode.as_ref())
        .opt_arg("rate", rate.as_ref())
        .opt_arg(
            "colorTemperatureMinimumMireds",
            color_temperature_minimum_mireds.as_ref(),
        )
        .opt_arg(
            "colorTemperatureMaximumMireds",
            color_temperature_maximum_mireds.as_ref(),
        )
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

pub fn step_color_temperature(
    step_mode: Option<StepModeEnum>,
    step_size: Option<u16>,
    transition_time: Option<u16>,
    color_temperature_minimum_mireds: Option<u16>,
    color_temperature_maximum_mireds: Option<u16>,
    options_mask: Option<OptionsBitmap>,
    options_override: Option<OptionsBitmap>,
) -> ClusterCommand {
    ClusterCommand::new("stepColorTemperature")
        .opt_arg("stepMode", step_mode.as_ref())
        .opt_arg("stepSize", step_size.as_ref())
        .opt_arg("transitionTime", transition_time.as_ref())
        .opt_arg(
            "colorTemperatureMinimumMireds",
            color_temperature_minimum_mireds.as_ref(),
        )
        .opt_arg(
            "colorTemperatureMaximumMireds",
            color_temperature_maximum_mireds.as_ref(),
        )
        .opt_arg("optionsMask", options_mask.as_ref())
        .opt_arg("optionsOverride", options_override.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dm::ClusterEnum;

    #[test]
    fn cluster_id() {
        assert_eq!(CLUSTER.id, 0x0300);
        assert_eq!(CLUSTER.commands.len(), 19);
        assert_eq!(
            CLUSTER.attribute_named("startUpColorTemperatureMireds").unwrap().id,
            0x4010
        );
    }

    #[test]
    fn mode_labels() {
        assert_eq!(
            ColorModeEnum::CurrentHueAndCurrentSaturation.label(),
            "Current Hue And Current Saturation"
        );
        assert_eq!(MoveModeEnum::Down.value(), 3);
        // 2 is a hole in the move mode table
        assert!(MoveModeEnum::from_value(2).is_err());
    }

    #[test]
    fn move_to_hue_arg_order() {
        let cmd = move_to_hue(
            Some(120),
            Some(DirectionEnum::Shortest),
            Some(10),
            Some(OptionsBitmap::EXECUTE_IF_OFF),
            Some(OptionsBitmap::empty()),
        );

        let keys = cmd.args.keys().collect::<Vec<_>>();
        assert_eq!(
            keys,
            ["hue", "direction", "transitionTime", "optionsMask", "optionsOverride"]
        );
        assert_eq!(cmd.args["optionsMask"], 1);
        assert_eq!(cmd.args["optionsOverride"], 0);
    }

    #[test]
    fn color_loop_set_omits_missing_fields() {
        let cmd = color_loop_set(
            Some(UpdateFlagsBitmap::UPDATE_ACTION),
            Some(ColorLoopActionEnum::Deactivate),
            None,
            None,
            None,
            None,
            None,
        );

        let keys = cmd.args.keys().collect::<Vec<_>>();
        assert_eq!(keys, ["updateFlags", "action"]);
    }
}
