// Define no_std except for testing and sil feature
#![cfg_attr(not(any(test, feature = "sil")), no_std)]
#![deny(unsafe_code)]

mod alert_watchdog;
pub mod blender;
pub mod cycle_trace;
pub mod debug_info;
pub mod hsc;
pub mod kinematics;
pub mod mode_classifier;
pub mod pedal_map;
pub mod power_guard;

pub use cycle_trace::HybridCycleTrace;
pub use hsc::HybridSupervisor;

#[cfg(any(test, feature = "sil"))]
macro_rules! silprintln {
    () => { println!() };
    ($($arg:tt)*) => { println!($($arg)*) };
}

#[cfg(not(any(test, feature = "sil")))]
macro_rules! silprintln {
    () => {};
    ($($arg:tt)*) => {};
}

pub(crate) use silprintln;

// Unlike f32::clamp this passes NaN through and never panics on inverted bounds
pub(crate) fn saturate(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if max < value {
        max
    } else {
        value
    }
}
