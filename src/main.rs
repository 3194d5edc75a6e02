use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use ls8::cli::{Options, USAGE};
use ls8::{Config, Cpu, CpuError, EXIT_EXECUTION_FAILURE, EXIT_LOAD_FAILURE, load_program_file};

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let opts = match Options::parse(std::env::args().skip(1)) {
        Ok(o) => o,
        Err(msg) => {
            eprintln!("ls8: {msg}");
            eprintln!("{USAGE}");
            return ExitCode::from(EXIT_LOAD_FAILURE);
        }
    };

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ls8: {err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}

/// Execution faults and load failures exit with different statuses.
fn exit_status(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<CpuError>().is_some() {
        EXIT_EXECUTION_FAILURE
    } else {
        EXIT_LOAD_FAILURE
    }
}

fn run(opts: &Options) -> anyhow::Result<()> {
    let mut config = Config::load();
    opts.apply_to(&mut config);

    let program = load_program_file(&opts.program)?;
    let mut cpu = Cpu::new();
    cpu.load(&program)
        .with_context(|| format!("loading {}", opts.program.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.trace() {
        cpu.run_traced(&mut out, config.step_limit())?;
    } else {
        match config.step_limit() {
            Some(limit) => cpu.run_with_limit(&mut out, limit)?,
            None => cpu.run(&mut out)?,
        };
    }

    out.flush().map_err(CpuError::from)?;
    Ok(())
}
