//! Ruspy CLI

use ruspyc::commands::{execute, parse_args, CliError, Command};
use ruspyc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = parse_args(&args).and_then(|invocation| match invocation.command {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Version => {
            println!("Ruspy {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => execute(&invocation),
    });

    if let Err(err) = result {
        match err {
            CliError::Reported => {}
            err if err.wants_usage() => {
                eprintln!("error: {err}");
                eprintln!();
                eprintln!("Run `ruspy help` for usage.");
            }
            err => eprintln!("error: {err}"),
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Ruspy interpreter");
    println!();
    println!("Usage: ruspy <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.rpy>         Load a module and call main()");
    println!("  eval <file.rpy>        Evaluate a file as a script and print its value");
    println!("  <file.rpy> [--script]  Shorthand for run (or eval with --script)");
    println!("  -e <source>            Evaluate source given on the command line");
    println!("  lex <file.rpy>         Tokenize and display tokens");
    println!("  parse <file.rpy>       Parse and display functions and node counts");
    println!("  explain <code>         Explain an error code (e.g., E6001)");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>         Diagnostic color: auto, always, never");
    println!("  --max-depth=<n>        Maximum call depth (default: 1024)");
    println!("  --script               Treat the file as a script, not a module");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>      Enable tracing (e.g., ruspy_eval=debug)");
    println!("  RUSPY_LOG_TREE=1       Render traces as an indented tree");
    println!();
    println!("Examples:");
    println!("  ruspy run main.rpy");
    println!("  ruspy demo.rpy --script");
    println!("  ruspy -e \"42 >> 1 + 1\"");
    println!("  ruspy explain E6004");
}
