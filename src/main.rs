// Remote control demo
// Run with: cargo run -- [path/to/invoker.ron]

use remote_invoker::logging;
use remote_invoker::{
    CommandInvoker, InvokerConfig, Light, LightChangeColorCommand, LightOnCommand, Rollback,
};
use std::path::Path;
use std::sync::{Arc, Mutex};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(logging::DEFAULT_FILTER);

    let config = match std::env::args().nth(1) {
        Some(path) => InvokerConfig::load(Path::new(&path))?,
        None => InvokerConfig::load_default()?,
    };

    println!("=== Remote Control ===\n");

    let bedroom_light = Arc::new(Mutex::new(Light::new("Light", "Bedroom")));
    let bathroom_light = Arc::new(Mutex::new(Light::new("Light", "Bathroom")));

    let mut remote = CommandInvoker::with_config(&config);
    remote.register("first_button", LightOnCommand::new(bedroom_light.clone()));
    remote.register(
        "second_button",
        LightChangeColorCommand::new(bedroom_light, "Blue")?,
    );
    remote.register("third_button", LightOnCommand::new(bathroom_light));

    remote.invoke("first_button")?;
    remote.invoke_inverse("first_button")?;

    remote.invoke("second_button")?;
    remote.invoke_inverse("second_button")?;

    remote.invoke("third_button")?;

    println!("\n--- Rolling back {} actions ---\n", remote.history_len());

    loop {
        if let Some(description) = remote.rollback_description() {
            println!("> {}", description);
        }
        if remote.rollback_last()? == Rollback::EmptyHistory {
            break;
        }
    }

    println!("\nHistory empty, further rollbacks are no-ops.");
    Ok(())
}
