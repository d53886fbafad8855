//! Command-line front end: a flat command registry over the services.

pub mod commands;
pub mod forms;
pub mod output;

use commands::{CliContext, CommandError, REGISTRY};

/// Dispatches one invocation and returns the process exit code.
pub fn run(args: &[String]) -> i32 {
    let command = match args.first().map(String::as_str) {
        None | Some("help") | Some("--help") | Some("-h") => {
            print_help();
            return 0;
        }
        Some(name) => name,
    };

    let definition = match REGISTRY.get(command) {
        Some(definition) => definition,
        None => {
            output::error(format!("Unknown command `{}`", command));
            print_help();
            return 1;
        }
    };

    let mut context = match CliContext::new() {
        Ok(context) => context,
        Err(err) => {
            output::error(err);
            return 1;
        }
    };

    match (definition.handler)(&mut context, &args[1..]) {
        Ok(()) => 0,
        Err(CommandError::Usage(message)) => {
            output::error(message);
            output::info(format!("Usage: {}", definition.usage));
            1
        }
        Err(err) => {
            output::error(err);
            1
        }
    }
}

fn print_help() {
    output::section("subtrack");
    output::info("Track recurring subscriptions and what they cost per month.");
    println!();
    for definition in REGISTRY.iter() {
        output::info(format!(
            "  {:<12} {}",
            definition.name, definition.description
        ));
    }
    println!();
    output::info("Run a command with bad arguments to see its usage line.");
}
