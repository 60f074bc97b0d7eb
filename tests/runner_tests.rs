// Host-side tests for the frame loop state machine and clocks.

#![allow(dead_code)]
mod runner {
    include!("../src/core/runner.rs");
}

use runner::*;

#[test]
fn runs_requested_ticks() {
    let mut fl = FrameLoop::new();
    let mut seen = Vec::new();
    let ran = fl.run_ticks(5, |i| seen.push(i));
    assert_eq!(ran, 5);
    assert_eq!(fl.ticks(), 5);
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    assert_eq!(fl.state(), LoopState::Running);
}

#[test]
fn stop_during_tick_ends_the_run() {
    let mut fl = FrameLoop::new();
    let handle = fl.handle();
    let ran = fl.run_ticks(10, |i| {
        if i == 2 {
            handle.stop();
        }
    });
    assert_eq!(ran, 3);
    assert_eq!(fl.state(), LoopState::Stopped);
}

#[test]
fn stopped_loop_never_ticks_again() {
    let mut fl = FrameLoop::new();
    fl.handle().stop();
    let mut called = false;
    assert_eq!(fl.step(|| called = true), LoopState::Stopped);
    assert!(!called);
    assert_eq!(fl.run_ticks(3, |_| panic!("ticked after stop")), 0);
    assert_eq!(fl.ticks(), 0);
}

#[test]
fn step_reports_running_until_stopped() {
    let mut fl = FrameLoop::new();
    assert_eq!(fl.step(|| {}), LoopState::Running);
    let handle = fl.handle();
    assert!(!handle.is_stopped());
    assert_eq!(fl.step(|| handle.stop()), LoopState::Stopped);
    assert!(handle.is_stopped());
    assert_eq!(fl.ticks(), 2);
}

#[test]
fn manual_clock_only_moves_forward() {
    let clock = ManualClock::default();
    assert_eq!(clock.elapsed_secs(), 0.0);
    clock.advance(0.5);
    clock.advance(0.5);
    assert_eq!(clock.elapsed_secs(), 1.0);
    clock.advance(-2.0);
    assert_eq!(clock.elapsed_secs(), 1.0);
}

#[test]
fn instant_clock_is_monotonic() {
    let clock = InstantClock::start();
    let a = clock.elapsed_secs();
    let b = clock.elapsed_secs();
    assert!(a >= 0.0 && b >= a);
}

#[test]
fn cached_page_keeps_running() {
    let mut fl = FrameLoop::new();
    let handle = fl.handle();
    fl.step(|| {});
    assert!(!handle.stop_on_pagehide(true));
    assert_eq!(fl.state(), LoopState::Running);
    // Restored from the back/forward cache: frames continue
    assert_eq!(fl.run_ticks(3, |_| {}), 3);
    assert_eq!(fl.ticks(), 4);
}

#[test]
fn unloading_page_stops_for_good() {
    let mut fl = FrameLoop::new();
    let handle = fl.handle();
    assert!(handle.stop_on_pagehide(false));
    assert_eq!(fl.state(), LoopState::Stopped);
    assert!(!handle.stop_on_pagehide(true));
    assert_eq!(fl.step(|| {}), LoopState::Stopped);
    assert_eq!(fl.ticks(), 0);
}
