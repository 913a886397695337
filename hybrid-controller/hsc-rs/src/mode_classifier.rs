use libm::fabsf;
use shared::hsc_hal::{HybridConfig, HybridMode};

/// Full re-evaluation every cycle, any mode can follow any other. Rules are
/// checked in priority order and the first match wins, battery protection
/// first. `HybridMode::Fault` is never produced here.
pub fn classify_mode(config: &HybridConfig, battery_soc: f32, torque_request_nm: f32) -> HybridMode {
    if battery_soc < config.soc_recovery_threshold {
        HybridMode::SocRecovery
    } else if torque_request_nm < config.mg2_max_regen_nm {
        HybridMode::Regen
    } else if fabsf(torque_request_nm) < config.idle_deadband_nm {
        HybridMode::Idle
    } else if torque_request_nm < config.engine_max_torque_nm * config.light_cruise_load_fraction {
        HybridMode::LightCruise
    } else if torque_request_nm < config.engine_max_torque_nm * config.normal_drive_load_fraction {
        HybridMode::NormalDrive
    } else {
        HybridMode::HighLoad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: HybridConfig = HybridConfig::default();

    #[test]
    fn test_soc_recovery_has_priority() {
        for torque_request in [-500.0, -250.0, 0.0, 50.0, 200.0, 400.0] {
            assert_eq!(
                classify_mode(&CONFIG, 0.2, torque_request),
                HybridMode::SocRecovery,
            );
        }

        assert_eq!(classify_mode(&CONFIG, 0.249, 300.0), HybridMode::SocRecovery);
        assert_ne!(classify_mode(&CONFIG, 0.25, 300.0), HybridMode::SocRecovery);
    }

    #[test]
    fn test_regen_threshold() {
        assert_eq!(classify_mode(&CONFIG, 0.6, -200.1), HybridMode::Regen);
        assert_eq!(classify_mode(&CONFIG, 0.6, -200.0), HybridMode::LightCruise);
    }

    #[test]
    fn test_idle_deadband() {
        assert_eq!(classify_mode(&CONFIG, 0.6, 0.0), HybridMode::Idle);
        assert_eq!(classify_mode(&CONFIG, 0.6, 4.9), HybridMode::Idle);
        assert_eq!(classify_mode(&CONFIG, 0.6, -4.9), HybridMode::Idle);
        assert_eq!(classify_mode(&CONFIG, 0.6, 5.0), HybridMode::LightCruise);
        assert_eq!(classify_mode(&CONFIG, 0.6, -5.0), HybridMode::LightCruise);
    }

    #[test]
    fn test_load_bands() {
        // 0.3 * 339 = 101.7, 0.75 * 339 = 254.25
        assert_eq!(classify_mode(&CONFIG, 0.6, 100.0), HybridMode::LightCruise);
        assert_eq!(classify_mode(&CONFIG, 0.6, 102.0), HybridMode::NormalDrive);
        assert_eq!(classify_mode(&CONFIG, 0.6, 254.0), HybridMode::NormalDrive);
        assert_eq!(classify_mode(&CONFIG, 0.6, 254.5), HybridMode::HighLoad);
        assert_eq!(classify_mode(&CONFIG, 0.6, 1000.0), HybridMode::HighLoad);
    }

    #[test]
    fn test_nan_inputs_fall_to_high_load() {
        assert_eq!(classify_mode(&CONFIG, 0.6, f32::NAN), HybridMode::HighLoad);
        assert_eq!(classify_mode(&CONFIG, f32::NAN, 0.0), HybridMode::Idle);
    }
}
