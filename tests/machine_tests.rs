//! Scenario tests driving the public API end to end.

use std::sync::{Arc, Mutex};
use std::thread;
use stepwise::{machine_config, FsmError, StateMachine, StateMachineBuilder};

const PLAYER: &str = r#"{
    "initial": "idle",
    "states": {
        "idle": { "transitions": { "start": "running" } },
        "running": { "transitions": { "stop": "idle", "pause": "paused" } },
        "paused": { "transitions": { "resume": "running", "stop": "idle" } }
    }
}"#;

#[test]
fn start_stop_undo_redo_scenario() {
    let mut machine = StateMachine::from_json(PLAYER).unwrap();

    machine.trigger("start").unwrap();
    assert_eq!(machine.state(), "running");

    machine.trigger("stop").unwrap();
    assert_eq!(machine.state(), "idle");

    assert!(machine.undo());
    assert_eq!(machine.state(), "running");

    assert!(machine.redo());
    assert_eq!(machine.state(), "idle");
}

#[test]
fn reset_after_many_transitions() {
    let mut machine = StateMachine::from_json(PLAYER).unwrap();
    for event in ["start", "pause", "resume", "pause"] {
        machine.trigger(event).unwrap();
    }
    assert_eq!(machine.state(), "paused");

    machine.reset();

    assert_eq!(machine.state(), "idle");
    assert!(machine.undo());
    assert_eq!(machine.state(), "paused");
    assert!(!machine.undo());
}

#[test]
fn unknown_event_reports_unknown_state() {
    let mut machine = StateMachine::from_json(PLAYER).unwrap();

    let err = machine.trigger("pause").unwrap_err();

    assert!(matches!(err, FsmError::UnknownState(_)));
    assert_eq!(machine.state(), "idle");
}

#[test]
fn states_query_by_event() {
    let machine = StateMachine::from_json(PLAYER).unwrap();

    assert_eq!(machine.states(None), vec!["idle", "running", "paused"]);
    assert_eq!(machine.states(Some("stop")), vec!["running", "paused"]);
    assert_eq!(machine.states(Some("resume")), vec!["paused"]);
}

#[test]
fn clear_history_blocks_undo_and_redo() {
    let mut machine = StateMachine::from_json(PLAYER).unwrap();
    machine.trigger("start").unwrap();
    machine.trigger("pause").unwrap();
    assert!(machine.undo());

    machine.clear_history();

    assert!(!machine.undo());
    assert!(!machine.redo());
    assert_eq!(machine.state(), "running");
}

#[test]
fn builder_macro_and_json_agree() {
    let from_json = StateMachine::from_json(PLAYER).unwrap();
    let from_macro = StateMachine::new(machine_config! {
        initial: "idle",
        states: {
            "idle" => { "start" => "running" },
            "running" => { "stop" => "idle", "pause" => "paused" },
            "paused" => { "resume" => "running", "stop" => "idle" },
        }
    });
    let from_builder = StateMachineBuilder::new()
        .initial("idle")
        .transition("idle", "start", "running")
        .transition("running", "stop", "idle")
        .transition("running", "pause", "paused")
        .transition("paused", "resume", "running")
        .transition("paused", "stop", "idle")
        .build()
        .unwrap();

    assert_eq!(from_json.config(), from_macro.config());
    assert_eq!(from_json.config(), from_builder.config());
}

#[test]
fn shared_machine_behind_mutex() {
    let machine = Arc::new(Mutex::new(StateMachine::from_json(PLAYER).unwrap()));
    machine.lock().unwrap().trigger("start").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let machine = Arc::clone(&machine);
            thread::spawn(move || {
                for _ in 0..50 {
                    let mut machine = machine.lock().unwrap();
                    let event = if machine.state() == "running" {
                        "pause"
                    } else {
                        "resume"
                    };
                    machine.trigger(event).unwrap();
                    assert!(machine.history().previous().is_some());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // 200 toggles starting from running lands back on running
    assert_eq!(machine.lock().unwrap().state(), "running");
}
