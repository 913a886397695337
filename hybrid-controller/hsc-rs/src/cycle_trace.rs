use serde::Serialize;
use shared::hsc_hal::{HybridInputs, HybridMode, HybridOutputs};

use crate::{blender::TorqueSplit, power_guard::GuardedTorque};

/// Every intermediate value of one control cycle, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HybridCycleTrace {
    pub cycle: u64,
    pub inputs: HybridInputs,
    pub pedal_equilibrium: f32,
    pub torque_request_nm: f32,
    pub mode: HybridMode,
    pub split: TorqueSplit,
    pub guard: GuardedTorque,
    pub outputs: HybridOutputs,
}
