//! Command-line argument handling for the `ls8` binary.
//!
//! ```text
//! ls8 [--trace] [--step-limit N] <program.ls8>
//! ```

use std::path::PathBuf;

use crate::config::Config;

pub const USAGE: &str = "usage: ls8 [--trace] [--step-limit N] <program.ls8>";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub program: PathBuf,
    pub trace: bool,
    pub step_limit: Option<u64>,
}

impl Options {
    /// Parse arguments (without the program name).
    pub fn parse<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut program = None;
        let mut trace = false;
        let mut step_limit = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--trace" | "-t" => trace = true,
                "--step-limit" => {
                    let value = args
                        .next()
                        .ok_or_else(|| "--step-limit needs a value".to_string())?;
                    let value = value.as_ref();
                    step_limit = Some(
                        value
                            .parse::<u64>()
                            .map_err(|e| format!("invalid --step-limit {value:?}: {e}"))?,
                    );
                }
                flag if flag.starts_with('-') => return Err(format!("unknown option {flag}")),
                path => {
                    if program.is_some() {
                        return Err(format!("unexpected argument {path}"));
                    }
                    program = Some(PathBuf::from(path));
                }
            }
        }

        Ok(Self {
            program: program.ok_or_else(|| "missing program file".to_string())?,
            trace,
            step_limit,
        })
    }

    /// Fold flags over a loaded `Config`; flags win where given.
    pub fn apply_to(&self, config: &mut Config) {
        if self.trace {
            config.trace = Some(true);
        }
        if self.step_limit.is_some() {
            config.step_limit = self.step_limit;
        }
    }
}
