use std::process;

use log::{debug, warn};

use truthtab::command::{demo_cmd, help_cmd, CommandContext, SelectedArgs};
use truthtab::helper::error::TruthError;

fn main() {
    env_logger::init();

    let mut context = CommandContext::default();
    let mut args = SelectedArgs::new();

    if args.is_empty() {
        debug!("No command given, running the demonstration");
        if let Err(e) = demo_cmd(&mut context) {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
        return;
    }

    while args.has_next() {
        if let Err(e) = args.parse_next(&mut context) {
            eprintln!("ERROR: {}", e);
            if let TruthError::UnknownCommand(_) = e {
                if let Err(e) = help_cmd(&mut context) {
                    warn!("Could not list the available commands: {}", e);
                }
            }
            process::exit(1);
        }
    }
}
