use shared::{
    alerts::AlertManager,
    hsc_hal::{
        HscError, HybridAlertCondition, HybridConfig, HybridInputs, HybridMode, HybridOutputs,
        HybridTelemetryFrame, PowerGuardAction,
    },
    AlertBitmaskType,
};

use crate::{
    blender::blend_torque,
    cycle_trace::HybridCycleTrace,
    mode_classifier::classify_mode,
    pedal_map::{pedal_equilibrium, torque_request},
    power_guard::guard_mg2_torque,
    silprintln,
};

/// Hybrid powertrain supervisor. The operating mode is the only state that
/// carries into the control law. Each instance owns its own mode, so several
/// supervisors can run side by side in a simulation.
pub struct HybridSupervisor {
    config: HybridConfig,
    mode: HybridMode,
    pub(crate) alert_manager: AlertManager<HybridAlertCondition>,
    cycle_count: u64,
    time_since_last_telemetry: f32,
}

impl HybridSupervisor {
    pub fn new() -> Self {
        Self::new_with_config(HybridConfig::default())
    }

    pub fn new_with_config(config: HybridConfig) -> Self {
        Self {
            config,
            mode: HybridMode::Idle,
            alert_manager: AlertManager::new(),
            cycle_count: 0,
            time_since_last_telemetry: 0.0,
        }
    }

    /// Runs one control cycle and returns the actuator commands.
    pub fn update(&mut self, inputs: &HybridInputs) -> HybridOutputs {
        self.step(inputs).outputs
    }

    /// Same as `update`, but rejects inputs outside their physical domain
    /// first. A rejected cycle leaves the mode untouched.
    pub fn update_checked(&mut self, inputs: &HybridInputs) -> Result<HybridOutputs, HscError> {
        if let Err(err) = inputs.validate() {
            silprintln!("HSC: Rejected inputs ({:?}): {:?}", err, inputs);
            self.alert_manager
                .set_condition(HybridAlertCondition::InvalidInputs);

            return Err(err);
        }

        self.alert_manager
            .clear_condition(HybridAlertCondition::InvalidInputs);

        Ok(self.update(inputs))
    }

    /// Runs one control cycle and returns every intermediate value along with
    /// the commands.
    pub fn step(&mut self, inputs: &HybridInputs) -> HybridCycleTrace {
        let pedal_equilibrium = pedal_equilibrium(inputs.vehicle_speed_kmh);
        let torque_request_nm = torque_request(
            inputs.pedal,
            inputs.vehicle_speed_kmh,
            self.config.engine_max_torque_nm,
        );

        let mode = classify_mode(&self.config, inputs.battery_soc, torque_request_nm);
        if mode != self.mode {
            silprintln!("HSC: Mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;

        let split = blend_torque(
            &self.config,
            mode,
            torque_request_nm,
            inputs.battery_soc,
            inputs.vehicle_speed_kmh,
        );

        let guard = guard_mg2_torque(&self.config, split.mg2_torque_nm, inputs.mg2_rpm);
        if guard.action != PowerGuardAction::None {
            silprintln!(
                "HSC: {:?} at {:.1} kW, MG2 {:.1} -> {:.1} Nm",
                guard.action,
                guard.mg2_power_kw,
                split.mg2_torque_nm,
                guard.mg2_torque_nm,
            );
        }

        let trace = HybridCycleTrace {
            cycle: self.cycle_count,
            inputs: *inputs,
            pedal_equilibrium,
            torque_request_nm,
            mode,
            split,
            guard,
            outputs: HybridOutputs {
                engine_rpm_target: split.engine_rpm_target,
                mg1_torque_cmd_nm: 0.0, // MG1 is not actuated
                mg2_torque_cmd_nm: guard.mg2_torque_nm,
            },
        };

        self.update_alert_watchdog(&trace);
        self.cycle_count = self.cycle_count.wrapping_add(1);

        trace
    }

    /// Advances the telemetry timer and returns a frame for `trace` once the
    /// configured telemetry period has elapsed.
    pub fn tick_telemetry(&mut self, dt: f32, trace: &HybridCycleTrace) -> Option<HybridTelemetryFrame> {
        self.time_since_last_telemetry += dt;

        if self.time_since_last_telemetry >= self.config.telemetry_rate_s {
            self.time_since_last_telemetry = 0.0;

            return Some(self.generate_telemetry_frame(trace));
        }

        None
    }

    pub fn generate_telemetry_frame(&self, trace: &HybridCycleTrace) -> HybridTelemetryFrame {
        HybridTelemetryFrame {
            cycle: trace.cycle,
            mode: trace.mode,
            outputs: trace.outputs,
            battery_soc: trace.inputs.battery_soc,
            alert_bitmask: self.alert_bitmask(),
        }
    }

    pub fn configure(&mut self, config: HybridConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &HybridConfig {
        &self.config
    }

    pub fn mode(&self) -> HybridMode {
        self.mode
    }

    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn alert_bitmask(&self) -> AlertBitmaskType {
        self.alert_manager.condition_bitmask()
    }

    pub fn alert_active(&self, condition: HybridAlertCondition) -> bool {
        self.alert_manager.is_active(condition)
    }
}
