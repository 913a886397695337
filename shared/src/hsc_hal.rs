use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumDiscriminants, EnumIter};

use crate::AlertBitmaskType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum HybridMode {
    Idle,
    LightCruise,
    NormalDrive,
    HighLoad,
    Regen,
    SocRecovery,
    // Reserved for external fault handling, never assigned by the classifier
    Fault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Hash)]
pub enum HybridInput {
    Pedal,
    Brake,
    VehicleSpeed,
    EngineRpm,
    Mg1Rpm,
    Mg2Rpm,
    BatterySoc,
}

/// One snapshot of driver and vehicle readings, taken once per control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HybridInputs {
    pub pedal: f32,             // 0.0 - 1.0
    pub brake: f32,             // 0.0 - 1.0, reserved
    pub vehicle_speed_kmh: f32, // km/h
    pub engine_rpm: f32,
    pub mg1_rpm: f32,
    pub mg2_rpm: f32,
    pub battery_soc: f32, // 0.0 - 1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HybridOutputs {
    pub engine_rpm_target: f32,
    pub mg1_torque_cmd_nm: f32,
    pub mg2_torque_cmd_nm: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HscError {
    NonFiniteInput(HybridInput),
    PedalOutOfRange,
    BrakeOutOfRange,
    NegativeVehicleSpeed,
    SocOutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerGuardAction {
    None,
    DischargeDerate,
    ChargeDerate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro, EnumIter)]
pub enum HybridAlertCondition {
    SocRecoveryActive,
    DischargeLimitDerate,
    ChargeLimitDerate,
    InvalidInputs,
}

impl From<HybridAlertCondition> for AlertBitmaskType {
    fn from(condition: HybridAlertCondition) -> Self {
        condition as AlertBitmaskType
    }
}

const _: () = assert!(HybridAlertCondition::COUNT <= AlertBitmaskType::BITS as usize);

/// Tooth counts of the power-split planetary gearset. The engine drives the
/// carrier, MG1 sits on the sun and MG2 on the ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryGearset {
    pub sun_teeth: f32,
    pub ring_teeth: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridConfig {
    pub engine_max_torque_nm: f32,
    pub mg2_max_torque_nm: f32,
    pub mg2_max_regen_nm: f32,
    pub battery_discharge_limit_kw: f32,
    pub battery_charge_limit_kw: f32,
    pub discharge_derate: f32,
    pub charge_derate: f32,
    pub soc_recovery_threshold: f32,
    pub idle_deadband_nm: f32,
    pub light_cruise_load_fraction: f32,
    pub normal_drive_load_fraction: f32,
    pub regen_engine_rpm: f32,
    pub soc_recovery_engine_rpm: f32,
    pub gearset: PlanetaryGearset,
    pub telemetry_rate_s: f32,
}

impl HybridConfig {
    pub const fn default() -> Self {
        Self {
            engine_max_torque_nm: 339.0, // ~250 lb-ft
            mg2_max_torque_nm: 270.0,
            mg2_max_regen_nm: -200.0,
            battery_discharge_limit_kw: 60.0,
            battery_charge_limit_kw: -40.0,
            discharge_derate: 0.8,
            charge_derate: 0.7,
            soc_recovery_threshold: 0.25,
            idle_deadband_nm: 5.0,
            light_cruise_load_fraction: 0.3,
            normal_drive_load_fraction: 0.75,
            regen_engine_rpm: 900.0,
            soc_recovery_engine_rpm: 2500.0,
            gearset: PlanetaryGearset {
                sun_teeth: 30.0,
                ring_teeth: 78.0,
            },
            telemetry_rate_s: 0.02,
        }
    }
}

impl HybridInputs {
    pub fn value(&self, input: HybridInput) -> f32 {
        match input {
            HybridInput::Pedal => self.pedal,
            HybridInput::Brake => self.brake,
            HybridInput::VehicleSpeed => self.vehicle_speed_kmh,
            HybridInput::EngineRpm => self.engine_rpm,
            HybridInput::Mg1Rpm => self.mg1_rpm,
            HybridInput::Mg2Rpm => self.mg2_rpm,
            HybridInput::BatterySoc => self.battery_soc,
        }
    }

    /// Rejects readings outside their physical domain. The control law itself
    /// never calls this, it is meant for the boundary with sensor acquisition.
    pub fn validate(&self) -> Result<(), HscError> {
        if let Some(input) = HybridInput::iter().find(|input| !self.value(*input).is_finite()) {
            return Err(HscError::NonFiniteInput(input));
        }

        if !(0.0..=1.0).contains(&self.pedal) {
            return Err(HscError::PedalOutOfRange);
        }

        if !(0.0..=1.0).contains(&self.brake) {
            return Err(HscError::BrakeOutOfRange);
        }

        if self.vehicle_speed_kmh < 0.0 {
            return Err(HscError::NegativeVehicleSpeed);
        }

        if !(0.0..=1.0).contains(&self.battery_soc) {
            return Err(HscError::SocOutOfRange);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridTelemetryFrame {
    pub cycle: u64,
    pub mode: HybridMode,
    pub outputs: HybridOutputs,
    pub battery_soc: f32,
    pub alert_bitmask: AlertBitmaskType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, EnumDiscriminants)]
#[strum_discriminants(name(HybridDebugInfoVariant))]
#[strum_discriminants(derive(EnumIter))]
pub enum HybridDebugInfo {
    TorqueRequest {
        cycle: u64,
        pedal: f32,
        pedal_equilibrium: f32,
        torque_request_nm: f32,
    },
    Blend {
        cycle: u64,
        mode: HybridMode,
        electric_assist_fraction: f32,
        engine_torque_nm: f32,
        mg2_torque_nm: f32,
        engine_rpm_target: f32,
    },
    PowerGuard {
        cycle: u64,
        mg2_power_kw: f32,
        action: PowerGuardAction,
        mg2_torque_cmd_nm: f32,
    },
    Kinematics {
        cycle: u64,
        engine_rpm: f32,
        mg1_rpm: f32,
        mg1_rpm_implied: f32,
        mg2_rpm: f32,
    },
}
