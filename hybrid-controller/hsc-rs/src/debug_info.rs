use shared::hsc_hal::{HybridDebugInfo, HybridDebugInfoVariant};
use strum::IntoEnumIterator;

use crate::{kinematics::implied_mg1_rpm, HybridCycleTrace, HybridSupervisor};

impl HybridSupervisor {
    pub fn generate_debug_info(
        &self,
        trace: &HybridCycleTrace,
        variant: HybridDebugInfoVariant,
    ) -> HybridDebugInfo {
        let cycle = trace.cycle;

        match variant {
            HybridDebugInfoVariant::TorqueRequest => HybridDebugInfo::TorqueRequest {
                cycle,
                pedal: trace.inputs.pedal,
                pedal_equilibrium: trace.pedal_equilibrium,
                torque_request_nm: trace.torque_request_nm,
            },
            HybridDebugInfoVariant::Blend => HybridDebugInfo::Blend {
                cycle,
                mode: trace.mode,
                electric_assist_fraction: trace.split.electric_assist_fraction,
                engine_torque_nm: trace.split.engine_torque_nm,
                mg2_torque_nm: trace.split.mg2_torque_nm,
                engine_rpm_target: trace.split.engine_rpm_target,
            },
            HybridDebugInfoVariant::PowerGuard => HybridDebugInfo::PowerGuard {
                cycle,
                mg2_power_kw: trace.guard.mg2_power_kw,
                action: trace.guard.action,
                mg2_torque_cmd_nm: trace.outputs.mg2_torque_cmd_nm,
            },
            HybridDebugInfoVariant::Kinematics => HybridDebugInfo::Kinematics {
                cycle,
                engine_rpm: trace.inputs.engine_rpm,
                mg1_rpm: trace.inputs.mg1_rpm,
                mg1_rpm_implied: implied_mg1_rpm(
                    &self.config().gearset,
                    trace.inputs.engine_rpm,
                    trace.inputs.mg2_rpm,
                ),
                mg2_rpm: trace.inputs.mg2_rpm,
            },
        }
    }

    pub fn generate_debug_info_all_variants(
        &self,
        trace: &HybridCycleTrace,
        mut callback: impl FnMut(HybridDebugInfo),
    ) {
        for variant in HybridDebugInfoVariant::iter() {
            callback(self.generate_debug_info(trace, variant));
        }
    }
}
