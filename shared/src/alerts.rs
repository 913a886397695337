use core::marker::PhantomData;

pub type AlertBitmaskType = u32;

pub struct AlertManager<C> {
    _marker_c: PhantomData<C>,
    condition_bitmask: AlertBitmaskType,
}

impl<C> AlertManager<C>
where
    C: Into<AlertBitmaskType>,
{
    pub const fn new() -> Self {
        Self {
            _marker_c: PhantomData,
            condition_bitmask: 0,
        }
    }

    pub fn set_condition(&mut self, condition: C) {
        self.condition_bitmask |= 1 << condition.into();
    }

    pub fn clear_condition(&mut self, condition: C) {
        self.condition_bitmask &= !(1 << condition.into());
    }

    pub fn assign_condition(&mut self, condition: C, active: bool) {
        if active {
            self.set_condition(condition);
        } else {
            self.clear_condition(condition);
        }
    }

    pub fn is_active(&self, condition: C) -> bool {
        self.condition_bitmask & (1 << condition.into()) != 0
    }

    pub fn condition_bitmask(&self) -> AlertBitmaskType {
        self.condition_bitmask
    }
}
