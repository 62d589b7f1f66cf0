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

//! The Device Energy Management cluster (0x0098): the energy appliance's
//! power forecast and the grid/local optimization adjustment requests.

use bitflags::bitflags;

use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

use crate::dm::{Access, Attribute, Cluster, ClusterCommand, Command, Quality};
use crate::{attribute_enum, attributes, bitflags_serde, cluster_enum, command_enum, commands};

pub const ID: u32 = 0x0098;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum AttributeId {
    EsaType = 0x00,
    EsaCanGenerate = 0x01,
    EsaState = 0x02,
    AbsMinPower = 0x03,
    AbsMaxPower = 0x04,
    PowerAdjustmentCapability = 0x05,
    Forecast = 0x06,
    OptOutState = 0x07,
}

attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum CommandId {
    PowerAdjustRequest = 0x00,
    CancelPowerAdjustRequest = 0x01,
    StartTimeAdjustRequest = 0x02,
    PauseRequest = 0x03,
    ResumeRequest = 0x04,
    ModifyForecastRequest = 0x05,
    RequestConstraintBasedForecast = 0x06,
    CancelRequest = 0x07,
}

command_enum!(CommandId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u32)]
pub enum EventId {
    PowerAdjustStart = 0x00,
    PowerAdjustEnd = 0x01,
    Paused = 0x02,
    Resumed = 0x03,
}

bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Feature: u32 {
        const POWER_ADJUSTMENT = 0x01;
        const POWER_FORECAST_REPORTING = 0x02;
        const STATE_FORECAST_REPORTING = 0x04;
        const START_TIME_ADJUSTMENT = 0x08;
        const PAUSABLE = 0x10;
        const FORECAST_ADJUSTMENT = 0x20;
        const CONSTRAINT_BASED_ADJUSTMENT = 0x40;
    }
}

bitflags_serde!(Feature, u32);

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    "DeviceEnergyManagement",
    4,
    0,
    attributes!(
        Attribute::new(AttributeId::EsaType as _, "esaType", Access::RV, Quality::F),
        Attribute::new(
            AttributeId::EsaCanGenerate as _,
            "esaCanGenerate",
            Access::RV,
            Quality::F,
        ),
        Attribute::new(
            AttributeId::EsaState as _,
            "esaState",
            Access::RV,
            Quality::NONE,
        ),
        Attribute::new(
            AttributeId::AbsMinPower as _,
            "absMinPower",
            Access::RV,
            Quality::NONE,
        ),
        Attribute::new(
            AttributeId::AbsMaxPower as _,
            "absMaxPower",
            Access::RV,
            Quality::NONE,
        ),
        Attribute::new(
            AttributeId::PowerAdjustmentCapability as _,
            "powerAdjustmentCapability",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::Forecast as _,
            "forecast",
            Access::RV,
            Quality::X,
        ),
        Attribute::new(
            AttributeId::OptOutState as _,
            "optOutState",
            Access::RV,
            Quality::NONE,
        ),
    ),
    commands!(
        Command::new(
            CommandId::PowerAdjustRequest as _,
            "powerAdjustRequest",
            None,
            Access::WO,
        ),
        Command::new(
            CommandId::CancelPowerAdjustRequest as _,
            "cancelPowerAdjustRequest",
            None,
            Access::WO,
        ),
        Command::new(
            CommandId::StartTimeAdjustRequest as _,
            "startTimeAdjustRequest",
            None,
            Access::WO,
        ),
        Command::new(CommandId::PauseRequest as _, "pauseRequest", None, Access::WO),
        Command::new(
            CommandId::ResumeRequest as _,
            "resumeRequest",
            None,
            Access::WO,
        ),
        Command::new(
            CommandId::ModifyForecastRequest as _,
            "modifyForecastRequest",
            None,
            Access::WO,
        ),
        Command::new(
            CommandId::RequestConstraintBasedForecast as _,
            "requestConstraintBasedForecast",
            None,
            Access::WO,
        ),
        Command::new(CommandId::CancelRequest as _, "cancelRequest", None, Access::WO),
    ),
);

// Enums

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum CostTypeEnum {
    Financial = 0,
    GhgEmissions = 1,
    Comfort = 2,
    Temperature = 3,
}

cluster_enum!(CostTypeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum ESATypeEnum {
    Evse = 0,
    SpaceHeating = 1,
    WaterHeating = 2,
    SpaceCooling = 3,
    SpaceHeatingCooling = 4,
    BatteryStorage = 5,
    SolarPv = 6,
    FridgeFreezer = 7,
    WashingMachine = 8,
    Dishwasher = 9,
    Cooking = 10,
    HomeWaterPump = 11,
    IrrigationWaterPump = 12,
    PoolPump = 13,
    Other = 255,
}

cluster_enum!(ESATypeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum ESAStateEnum {
    Offline = 0,
    Online = 1,
    Fault = 2,
    PowerAdjustActive = 3,
    Paused = 4,
}

cluster_enum!(ESAStateEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum OptOutStateEnum {
    NoOptOut = 0,
    LocalOptOut = 1,
    GridOptOut = 2,
    OptOut = 3,
}

cluster_enum!(OptOutStateEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum CauseEnum {
    NormalCompletion = 0,
    Offline = 1,
    Fault = 2,
    UserOptOut = 3,
    Cancelled = 4,
}

cluster_enum!(CauseEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum AdjustmentCauseEnum {
    LocalOptimization = 0,
    GridOptimization = 1,
}

cluster_enum!(AdjustmentCauseEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum ForecastUpdateReasonEnum {
    InternalOptimization = 0,
    LocalOptimization = 1,
    GridOptimization = 2,
}

cluster_enum!(ForecastUpdateReasonEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, IntoStaticStr)]
#[repr(u8)]
#[strum(serialize_all = "title_case")]
pub enum PowerAdjustReasonEnum {
    NoAdjustment = 0,
    LocalOptimizationAdjustment = 1,
    GridOptimizationAdjustment = 2,
}

cluster_enum!(PowerAdjustReasonEnum);

// Structs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostStruct {
    pub cost_type: CostTypeEnum,
    pub value: i32,
    pub decimal_points: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerAdjustStruct {
    pub min_power: i64,
    pub max_power: i64,
    pub min_duration: u32,
    pub max_duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerAdjustCapabilityStruct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_adjust_capability: Option<Vec<PowerAdjustStruct>>,
    pub cause: PowerAdjustReasonEnum,
}

/// One slot of the power forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotStruct {
    pub min_duration: u32,
    pub max_duration: u32,
    pub default_duration: u32,
    pub elapsed_slot_time: u32,
    pub remaining_slot_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_is_pausable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_pause_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pause_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_esa_state: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nominal_power: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_power: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_power: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nominal_energy: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costs: Option<Vec<CostStruct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_power_adjustment: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_power_adjustment: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_duration_adjustment: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration_adjustment: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastStruct {
    pub forecast_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_slot_number: Option<u16>,
    pub start_time: u32,
    pub end_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_start_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_end_time: Option<u32>,
    pub is_pausable: bool,
    pub slots: Vec<SlotStruct>,
    pub forecast_update_reason: ForecastUpdateReasonEnum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAdjustmentStruct {
    pub slot_index: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nominal_power: Option<i64>,
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintsStruct {
    pub start_time: u32,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nominal_power: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_energy: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_control: Option<i8>,
}

// Events

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerAdjustStart {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paused {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerAdjustEnd {
    pub cause: CauseEnum,
    pub duration: u32,
    pub energy_use: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resumed {
    pub cause: CauseEnum,
}

/// The decoded attribute state of a Device Energy Management cluster
/// instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceEnergyManagement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_revision: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_map: Option<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esa_type: Option<ESATypeEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esa_can_generate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esa_state: Option<ESAStateEnum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abs_min_power: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abs_max_power: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_adjustment_capability: Option<PowerAdjustCapabilityStruct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<ForecastStruct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_out_state: Option<OptOutStateEnum>,
}

// Commands

pub fn power_adjust_request(
    power: Option<i64>,
    duration: Option<u32>,
    cause: Option<AdjustmentCauseEnum>,
) -> ClusterCommand {
    ClusterCommand::new("powerAdjustRequest")
        .opt_arg("power", power.as_ref())
        .opt_arg("duration", duration.as_ref())
        .opt_arg("cause", cause.as_ref())
}

pub fn cancel_power_adjust_request() -> ClusterCommand {
    ClusterCommand::new("cancelPowerAdjustRequest")
}

pub fn start_time_adjust_request(
    requested_start_time: Option<u32>,
    cause: Option<AdjustmentCauseEnum>,
) -> ClusterCommand {
    ClusterCommand::new("startTimeAdjustRequest")
        .opt_arg("requestedStartTime", requested_start_time.as_ref())
        .opt_arg("cause", cause.as_ref())
}

pub fn pause_request(duration: Option<u32>, cause: Option<AdjustmentCauseEnum>) -> ClusterCommand {
    ClusterCommand::new("pauseRequest")
        .opt_arg("duration", duration.as_ref())
        .opt_arg("cause", cause.as_ref())
}

pub fn resume_request() -> ClusterCommand {
    ClusterCommand::new("resumeRequest")
}

pub fn modify_forecast_request(
    forecast_id: Option<u32>,
    slot_adjustments: Option<Vec<SlotAdjustmentStruct>>,
    cause: Option<AdjustmentCauseEnum>,
) -> ClusterCommand {
    ClusterCommand::new("modifyForecastRequest")
        .opt_arg("forecastId", forecast_id.as_ref())
        .opt_arg("slotAdjustments", slot_adjustments.as_ref())
        .opt_arg("cause", cause.as_ref())
}

pub fn request_constraint_based_forecast(
    constraints: Option<Vec<ConstraintsStruct>>,
    cause: Option<AdjustmentCauseEnum>,
) -> ClusterCommand {
    ClusterCommand::new("requestConstraintBasedForecast")
        .opt_arg("constraints", constraints.as_ref())
        .opt_arg("cause", cause.as_ref())
}

pub fn cancel_request() -> ClusterCommand {
    ClusterCommand::new("cancelRequest")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dm::ClusterEnum;

    #[test]
    fn cluster_id() {
        assert_eq!(CLUSTER.id, 0x0098);
        assert_eq!(CLUSTER.commands.len(), 8);
    }

    #[test]
    fn esa_type_codes() {
        assert_eq!(ESATypeEnum::Evse.value(), 0);
        assert_eq!(ESATypeEnum::SolarPv.label(), "Solar Pv");
        assert_eq!(ESATypeEnum::Other.value(), 255);
        assert_eq!(ESATypeEnum::from_value(255).unwrap(), ESATypeEnum::Other);
        assert!(ESATypeEnum::from_value(14).is_err());
    }

    #[test]
    fn power_adjust_request_args() {
        let cmd = power_adjust_request(Some(1_500_000), Some(600), Some(AdjustmentCauseEnum::GridOptimization));
        let keys = cmd.args.keys().collect::<Vec<_>>();
        assert_eq!(keys, ["power", "duration", "cause"]);
        assert_eq!(cmd.args["cause"], 1);
    }

    #[test]
    fn forecast_round_trip() {
        let forecast = ForecastStruct {
            forecast_id: 1,
            active_slot_number: Some(0),
            start_time: 1000,
            end_time: 2000,
            earliest_start_time: None,
            latest_end_time: None,
            is_pausable: true,
            slots: vec![],
            forecast_update_reason: ForecastUpdateReasonEnum::InternalOptimization,
        };

        let json = serde_json::to_value(&forecast).unwrap();
        assert!(json.get("earliestStartTime").is_none());
        assert_eq!(json["forecastUpdateReason"], 0);

        let back: ForecastStruct = serde_json::from_value(json).unwrap();
        assert_eq!(back, forecast);
    }
}
