use shared::hsc_hal::PlanetaryGearset;

/// MG1 (sun) speed implied by the engine (carrier) and MG2 (ring) speeds.
///
/// From the Willis relation of a simple planetary set:
/// `sun * Ns + ring * Nr = carrier * (Ns + Nr)`
pub fn implied_mg1_rpm(gearset: &PlanetaryGearset, engine_rpm: f32, mg2_rpm: f32) -> f32 {
    ((gearset.sun_teeth + gearset.ring_teeth) * engine_rpm - gearset.ring_teeth * mg2_rpm)
        / gearset.sun_teeth
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEARSET: PlanetaryGearset = PlanetaryGearset {
        sun_teeth: 30.0,
        ring_teeth: 78.0,
    };

    #[test]
    fn test_locked_gearset_spins_together() {
        assert_eq!(implied_mg1_rpm(&GEARSET, 1500.0, 1500.0), 1500.0);
    }

    #[test]
    fn test_vehicle_stopped_engine_running() {
        // Ring held, sun runs (Ns + Nr) / Ns times the carrier
        assert_eq!(implied_mg1_rpm(&GEARSET, 1000.0, 0.0), 3600.0);
    }

    #[test]
    fn test_engine_off_electric_drive() {
        // Carrier held, sun counter-rotates at Nr / Ns of the ring
        assert_eq!(implied_mg1_rpm(&GEARSET, 0.0, 3000.0), -7800.0);
    }
}
