//! Pure control logic: the temperature → duty-cycle decision table and
//! the threshold predicates for the slave's LED and heater outputs.

pub mod duty;

pub use duty::{
    duty_cycle_for, heater_should_run, led_should_blink, pwm_register_for, DutyBand, DUTY_BANDS,
};
