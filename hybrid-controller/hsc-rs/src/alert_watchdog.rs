use shared::hsc_hal::{HybridAlertCondition, HybridMode, PowerGuardAction};

use crate::{HybridCycleTrace, HybridSupervisor};

impl HybridSupervisor {
    pub(crate) fn update_alert_watchdog(&mut self, trace: &HybridCycleTrace) {
        self.alert_manager.assign_condition(
            HybridAlertCondition::SocRecoveryActive,
            trace.mode == HybridMode::SocRecovery,
        );

        self.alert_manager.assign_condition(
            HybridAlertCondition::DischargeLimitDerate,
            trace.guard.action == PowerGuardAction::DischargeDerate,
        );

        self.alert_manager.assign_condition(
            HybridAlertCondition::ChargeLimitDerate,
            trace.guard.action == PowerGuardAction::ChargeDerate,
        );
    }
}
