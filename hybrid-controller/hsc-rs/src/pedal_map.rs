/// Pedal position that yields zero net torque demand at the given speed.
/// Low speeds reach the balance point with less pedal (creep).
pub fn pedal_equilibrium(vehicle_speed_kmh: f32) -> f32 {
    if vehicle_speed_kmh < 5.0 {
        0.15
    } else if vehicle_speed_kmh < 20.0 {
        0.20
    } else {
        0.25
    }
}

/// Signed torque demand in Nm. Positive propels, negative asks for regen.
/// Unclamped here, each mode saturates it downstream.
pub fn torque_request(pedal: f32, vehicle_speed_kmh: f32, engine_max_torque_nm: f32) -> f32 {
    (pedal - pedal_equilibrium(vehicle_speed_kmh)) * engine_max_torque_nm
}
