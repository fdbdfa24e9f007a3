//! Replays a gesture script and prints the resulting shapes as JSON.
//!
//! Usage: `drawkit [SCRIPT|-] [CONFIG]`. The script is read from stdin when
//! no path (or `-`) is given.

use std::io::Read;
use std::process::ExitCode;

use drawkit_app::script::{shapes_to_json, Script, ScriptResult};
use drawkit_core::InteractionConfig;

fn run(args: &[String]) -> ScriptResult<String> {
    let script = match args.get(1).map(String::as_str) {
        None | Some("-") => {
            let mut json = String::new();
            std::io::stdin().read_to_string(&mut json)?;
            Script::from_json(&json)?
        }
        Some(path) => Script::load(path)?,
    };
    let config = match args.get(2) {
        Some(path) => InteractionConfig::load(path)?,
        None => InteractionConfig::default(),
    };
    let handler = script.run(config)?;
    shapes_to_json(&handler)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting drawkit");

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Replay failed: {e}");
            eprintln!("drawkit: {e}");
            ExitCode::FAILURE
        }
    }
}
