#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod alerts;
pub mod hsc_hal;

pub use alerts::{AlertBitmaskType, AlertManager};
