//! Slave loop: duty decode, change-detected cooler writes, and the
//! independent LED/heater actuator states.

use thermolink::app::events::AppEvent;
use thermolink::app::slave::SlaveController;

use crate::mock_hw::{ActuatorCall, MockSlaveHw, RecordingSink};

#[test]
fn frame_42_drives_cooler_at_80_percent() {
    let mut hw = MockSlaveHw::new();
    let mut sink = RecordingSink::new();
    let mut slave = SlaveController::new();

    slave.process_frame(42, &mut hw, &mut sink);

    assert_eq!(
        hw.calls,
        vec![
            ActuatorCall::Cooler(204), // 80% of 255, truncated
            ActuatorCall::Led(false),
            ActuatorCall::Heater(false),
        ]
    );
    assert_eq!(slave.current_duty(), 80);
}

#[test]
fn unchanged_duty_suppresses_cooler_write_only() {
    let mut hw = MockSlaveHw::new();
    let mut sink = RecordingSink::new();
    let mut slave = SlaveController::new();

    slave.process_frame(42, &mut hw, &mut sink);
    slave.process_frame(43, &mut hw, &mut sink); // same 80% band

    // One register write, but LED and heater are refreshed both cycles.
    assert_eq!(hw.cooler_writes(), vec![204]);
    assert_eq!(hw.led_writes(), vec![false, false]);
    assert_eq!(hw.heater_writes(), vec![false, false]);
}

#[test]
fn duty_change_rewrites_register_and_emits_event() {
    let mut hw = MockSlaveHw::new();
    let mut sink = RecordingSink::new();
    let mut slave = SlaveController::new();

    slave.process_frame(27, &mut hw, &mut sink); // 50%
    slave.process_frame(36, &mut hw, &mut sink); // 70%

    assert_eq!(hw.cooler_writes(), vec![127, 178]);
    assert!(sink
        .events
        .contains(&AppEvent::DutyChanged { from: 50, to: 70 }));
}

#[test]
fn led_toggles_each_cycle_while_over_range() {
    let mut hw = MockSlaveHw::new();
    let mut sink = RecordingSink::new();
    let mut slave = SlaveController::new();

    slave.process_frame(60, &mut hw, &mut sink);
    slave.process_frame(60, &mut hw, &mut sink);
    slave.process_frame(60, &mut hw, &mut sink);

    // Blink at the master's cadence: on, off, on.
    assert_eq!(hw.led_writes(), vec![true, false, true]);
}

#[test]
fn led_forced_off_when_leaving_blink_range() {
    let mut hw = MockSlaveHw::new();
    let mut sink = RecordingSink::new();
    let mut slave = SlaveController::new();

    slave.process_frame(60, &mut hw, &mut sink);
    assert!(slave.led_on());

    slave.process_frame(42, &mut hw, &mut sink);
    assert!(!slave.led_on());
    assert_eq!(hw.led_writes(), vec![true, false]);
}

#[test]
fn cold_frame_runs_heater_without_cooler_write() {
    let mut hw = MockSlaveHw::new();
    let mut sink = RecordingSink::new();
    let mut slave = SlaveController::new();

    slave.process_frame(10, &mut hw, &mut sink);

    // Duty is 0 and the detector started at 0, so no register write —
    // the power-on quirk on the slave side.
    assert_eq!(hw.cooler_writes(), Vec::<u8>::new());
    assert_eq!(hw.heater_writes(), vec![true]);
    assert_eq!(hw.led_writes(), vec![false]);
}

#[test]
fn heater_boundary_is_exactly_20() {
    let mut hw = MockSlaveHw::new();
    let mut sink = RecordingSink::new();
    let mut slave = SlaveController::new();

    slave.process_frame(19, &mut hw, &mut sink);
    slave.process_frame(20, &mut hw, &mut sink);

    assert_eq!(hw.heater_writes(), vec![true, false]);
}

#[test]
fn sentinel_frame_turns_everything_off() {
    let mut hw = MockSlaveHw::new();
    let mut sink = RecordingSink::new();
    let mut slave = SlaveController::new();

    // Warm the system up first so the cooler is actually running.
    slave.process_frame(48, &mut hw, &mut sink); // 90%
    slave.process_frame(255, &mut hw, &mut sink);

    assert_eq!(hw.cooler_writes(), vec![229, 0]);
    assert_eq!(hw.led_writes(), vec![false, false]);
    assert_eq!(hw.heater_writes(), vec![false, false]);
    assert_eq!(slave.current_duty(), 0);
}
