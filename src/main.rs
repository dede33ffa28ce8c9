use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;

use bookcsv::cli::CliArgs;
use bookcsv::input::{parse_command, ShellCommand, HELP};
use bookcsv::render::render_page;
use bookcsv::{AppConfig, AppModel, Runtime};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    bookcsv::tracing::init(args.verbose);

    let startup = args.into_config().map_err(anyhow::Error::msg)?;

    let mut config = AppConfig::load();
    if let Some(page_size) = startup.page_size {
        config.page_size = page_size;
    }
    if let Some(output) = &startup.output {
        config.export_file_name = output.display().to_string();
    }
    if startup.delimiter.is_some() {
        config.delimiter = startup.delimiter;
    }

    let mut runtime = Runtime::new(AppModel::new(config));
    if let Some(msg) = startup.initial_msg() {
        runtime.dispatch(msg);
        runtime.settle();
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    write!(out, "{}", render_page(runtime.model()))?;

    let mut line = String::new();
    loop {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            break;
        }

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Show)) => write!(out, "{}", render_page(runtime.model()))?,
            Ok(Some(ShellCommand::Help)) => writeln!(out, "{}", HELP)?,
            Ok(Some(ShellCommand::Dispatch(msg))) => {
                if runtime.dispatch(msg) {
                    write!(out, "{}", render_page(runtime.model()))?;
                }
                if runtime.quit_requested() {
                    break;
                }
                if runtime.settle() {
                    write!(out, "{}", render_page(runtime.model()))?;
                }
            }
            Err(e) => eprintln!("error: {}", e),
        }
    }

    runtime.settle();
    Ok(())
}
