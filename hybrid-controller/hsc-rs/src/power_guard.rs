use core::f32::consts::PI;

use serde::Serialize;
use shared::hsc_hal::{HybridConfig, PowerGuardAction};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuardedTorque {
    pub mg2_power_kw: f32,
    pub action: PowerGuardAction,
    pub mg2_torque_nm: f32,
}

/// Mechanical shaft power of MG2 in kW, used as the electrical power estimate.
/// Positive draws from the battery, negative charges it.
pub fn estimate_mg2_power_kw(mg2_torque_nm: f32, mg2_rpm: f32) -> f32 {
    (mg2_torque_nm * mg2_rpm * 2.0 * PI) / 60000.0
}

/// Single multiplicative derate when the estimated power crosses a battery
/// limit. The derated command is not re-checked and may still exceed it.
pub fn guard_mg2_torque(config: &HybridConfig, mg2_torque_nm: f32, mg2_rpm: f32) -> GuardedTorque {
    let mg2_power_kw = estimate_mg2_power_kw(mg2_torque_nm, mg2_rpm);

    let (action, mg2_torque_nm) = if mg2_power_kw > config.battery_discharge_limit_kw {
        (PowerGuardAction::DischargeDerate, mg2_torque_nm * config.discharge_derate)
    } else if mg2_power_kw < config.battery_charge_limit_kw {
        (PowerGuardAction::ChargeDerate, mg2_torque_nm * config.charge_derate)
    } else {
        (PowerGuardAction::None, mg2_torque_nm)
    };

    GuardedTorque {
        mg2_power_kw,
        action,
        mg2_torque_nm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: HybridConfig = HybridConfig::default();

    #[test]
    fn test_power_estimate() {
        // 100 Nm at 60000 / (2 pi) rpm is exactly 100 kW
        let rpm = 60000.0 / (2.0 * PI);
        assert!((estimate_mg2_power_kw(100.0, rpm) - 100.0).abs() < 1e-3);
        assert_eq!(estimate_mg2_power_kw(100.0, 0.0), 0.0);
        assert!(estimate_mg2_power_kw(-100.0, 3000.0) < 0.0);
    }

    #[test]
    fn test_within_limits_passes_through() {
        let guarded = guard_mg2_torque(&CONFIG, 162.72, 1000.0);

        assert_eq!(guarded.action, PowerGuardAction::None);
        assert_eq!(guarded.mg2_torque_nm, 162.72);
    }

    #[test]
    fn test_discharge_derate() {
        // 250 Nm at 4000 rpm is ~104.7 kW
        let guarded = guard_mg2_torque(&CONFIG, 250.0, 4000.0);

        assert_eq!(guarded.action, PowerGuardAction::DischargeDerate);
        assert_eq!(guarded.mg2_torque_nm, 250.0 * 0.8);
    }

    #[test]
    fn test_single_step_derate_can_remain_over_limit() {
        let guarded = guard_mg2_torque(&CONFIG, 270.0, 6000.0);
        let derated_power = estimate_mg2_power_kw(guarded.mg2_torque_nm, 6000.0);

        assert_eq!(guarded.action, PowerGuardAction::DischargeDerate);
        assert!(derated_power > CONFIG.battery_discharge_limit_kw);
    }

    #[test]
    fn test_charge_derate() {
        // -200 Nm at 3000 rpm is ~-62.8 kW
        let guarded = guard_mg2_torque(&CONFIG, -200.0, 3000.0);

        assert_eq!(guarded.action, PowerGuardAction::ChargeDerate);
        assert_eq!(guarded.mg2_torque_nm, -200.0 * 0.7);
    }

    #[test]
    fn test_reverse_rotation_regen_counts_as_discharge() {
        let guarded = guard_mg2_torque(&CONFIG, -200.0, -3000.0);

        assert_eq!(guarded.action, PowerGuardAction::DischargeDerate);
        assert_eq!(guarded.mg2_torque_nm, -200.0 * 0.8);
    }
}
