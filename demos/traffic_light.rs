//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic machine with a maintenance mode.
//!
//! Key concepts:
//! - Declaring a configuration with `machine_config!`
//! - Event-driven transitions with `trigger`
//! - One-step undo/redo
//! - Transition logging through `tracing`
//!
//! Run with: RUST_LOG=stepwise=debug cargo run --example traffic_light

use stepwise::{machine_config, FsmError, StateMachine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut light = StateMachine::new(machine_config! {
        initial: "red",
        states: {
            "red" => { "timer" => "green", "fault" => "flashing" },
            "green" => { "timer" => "yellow", "fault" => "flashing" },
            "yellow" => { "timer" => "red", "fault" => "flashing" },
            "flashing" => { "repair" => "red" },
        }
    });

    println!("Initial state: {}", light.state());
    for _ in 0..4 {
        light.trigger("timer")?;
        println!("  timer  -> {}", light.state());
    }

    light.trigger("fault")?;
    println!("  fault  -> {}", light.state());

    if let Err(err) = light.trigger("timer") {
        println!("  timer  -> rejected ({err})");
    }

    println!("\nStates that can fault: {:?}", light.states(Some("fault")));

    println!("\nUndo fault: {}", light.undo());
    println!("  now    -> {}", light.state());
    println!("Redo fault: {}", light.redo());
    println!("  now    -> {}", light.state());

    light.trigger("repair")?;
    println!("  repair -> {}", light.state());

    light.clear_history();
    println!("Undo after clearing history: {}", light.undo());

    println!("\n=== Example Complete ===");
    Ok(())
}
