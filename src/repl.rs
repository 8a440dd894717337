// File: ./src/repl.rs
//! The interaction loop: greet, read a line, parse, dispatch, print,
//! repeat until `bye`. Every parse/dispatch failure is recovered here by
//! printing its message and reading the next line; the only way out is the
//! terminate command or end of input.
use crate::command::{Command, parse_command};
use crate::config::Config;
use crate::context::SharedContext;
use crate::controller::{Controller, Outcome};
use anyhow::Result;
use std::io::{BufRead, Write};

pub fn run(ctx: SharedContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with_io(ctx, &mut stdin.lock(), &mut stdout.lock())
}

/// Generic over reader/writer so tests can script a whole session.
pub fn run_with_io<R: BufRead, W: Write>(
    ctx: SharedContext,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let config = Config::load(ctx.as_ref()).unwrap_or_default();

    match &config.user_name {
        Some(name) => writeln!(output, "Hello, {}! What needs doing?", name)?,
        None => writeln!(output, "Hello! What needs doing?")?,
    }

    let mut controller = Controller::new(ctx, config);

    // A failed startup load is reported but never fatal: the session
    // continues with an empty list.
    match controller.load() {
        Ok(count) if count > 0 => {
            writeln!(output, "(picked up {} task(s) from your saved list)", count)?;
        }
        Ok(_) => {}
        Err(e) => {
            log::warn!("could not load saved task list: {:#}", e);
            writeln!(
                output,
                "Could not load your saved list ({}); starting fresh.",
                e
            )?;
        }
    }

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input counts as a goodbye.
            if let Ok(Outcome::Exit(msg)) = controller.execute(Command::Bye) {
                writeln!(output, "{}", msg)?;
            }
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_command(trimmed) {
            Ok(command) => match controller.execute(command) {
                Ok(Outcome::Message(msg)) => writeln!(output, "{}", msg)?,
                Ok(Outcome::Exit(msg)) => {
                    writeln!(output, "{}", msg)?;
                    break;
                }
                Err(e) => writeln!(output, "{}", e)?,
            },
            Err(e) => writeln!(output, "{}", e)?,
        }
    }

    Ok(())
}
