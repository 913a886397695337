use serde::Serialize;
use shared::hsc_hal::{HybridConfig, HybridMode};

use crate::saturate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TorqueSplit {
    pub electric_assist_fraction: f32,
    pub engine_torque_nm: f32,
    pub mg2_torque_nm: f32,
    pub engine_rpm_target: f32,
}

/// Share of the request routed to MG2 before battery scaling. Electric assist
/// is favored at low speed, the engine at cruising speeds.
pub fn base_electric_assist(vehicle_speed_kmh: f32) -> f32 {
    if vehicle_speed_kmh < 10.0 {
        0.5
    } else if vehicle_speed_kmh < 25.0 {
        0.4
    } else if vehicle_speed_kmh < 40.0 {
        0.3
    } else {
        0.2
    }
}

pub fn soc_assist_scale(battery_soc: f32) -> f32 {
    if battery_soc > 0.70 {
        1.2
    } else if battery_soc > 0.55 {
        1.0
    } else if battery_soc > 0.45 {
        0.7
    } else if battery_soc > 0.35 {
        0.4
    } else if battery_soc > 0.25 {
        0.1
    } else {
        0.0
    }
}

/// Discrete set-points along the engine's efficient operating line, indexed
/// by engine torque as a fraction of its maximum.
pub fn select_engine_rpm(torque_ratio: f32) -> f32 {
    if torque_ratio < 0.05 {
        800.0
    } else if torque_ratio < 0.15 {
        1800.0
    } else if torque_ratio < 0.35 {
        2200.0
    } else if torque_ratio < 0.65 {
        2800.0
    } else if torque_ratio < 0.85 {
        3600.0
    } else {
        5200.0
    }
}

pub fn blend_torque(
    config: &HybridConfig,
    mode: HybridMode,
    torque_request_nm: f32,
    battery_soc: f32,
    vehicle_speed_kmh: f32,
) -> TorqueSplit {
    let electric_assist_fraction =
        base_electric_assist(vehicle_speed_kmh) * soc_assist_scale(battery_soc);

    match mode {
        HybridMode::Regen => TorqueSplit {
            electric_assist_fraction,
            engine_torque_nm: 0.0,
            mg2_torque_nm: if torque_request_nm < config.mg2_max_regen_nm {
                config.mg2_max_regen_nm
            } else {
                torque_request_nm
            },
            engine_rpm_target: config.regen_engine_rpm,
        },
        HybridMode::SocRecovery => TorqueSplit {
            electric_assist_fraction: 0.0,
            // Engine is the only propulsion source and never runs reverse torque
            engine_torque_nm: if torque_request_nm < 0.0 {
                0.0
            } else {
                torque_request_nm
            },
            mg2_torque_nm: 0.0,
            engine_rpm_target: config.soc_recovery_engine_rpm,
        },
        HybridMode::Idle
        | HybridMode::LightCruise
        | HybridMode::NormalDrive
        | HybridMode::HighLoad
        | HybridMode::Fault => {
            let mg2_torque_nm = saturate(
                torque_request_nm * electric_assist_fraction,
                config.mg2_max_regen_nm,
                config.mg2_max_torque_nm,
            );
            // Not clamped to the engine maximum, only the rpm lookup saturates
            let engine_torque_nm = torque_request_nm - mg2_torque_nm;
            let torque_ratio = saturate(engine_torque_nm / config.engine_max_torque_nm, 0.0, 1.0);

            TorqueSplit {
                electric_assist_fraction,
                engine_torque_nm,
                mg2_torque_nm,
                engine_rpm_target: select_engine_rpm(torque_ratio),
            }
        }
    }
}
