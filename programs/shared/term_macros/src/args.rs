use owo_colors::OwoColorize;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// One declared `--flag`, as generated by `tool!`.
#[derive(Debug, Clone, Copy)]
pub struct Flag {
    pub name: &'static str,
    pub switch: bool,
    pub usage: &'static str,
}

#[derive(Error, Debug, PartialEq)]
pub enum ArgError {
    #[error("help requested")]
    Help,
    #[error("unknown flag --{0}")]
    Unknown(String),
    #[error("unexpected argument {0:?}, every argument is a --flag")]
    Positional(String),
    #[error("--{0} needs a value")]
    NoValue(String),
    #[error("--{0} is a switch and takes no value")]
    SwitchValue(String),
}

#[derive(Debug, Default)]
pub struct Args {
    values: HashMap<&'static str, String>,
    switches: HashSet<&'static str>,
    verbose: bool,
}

static BUILTIN: [Flag; 2] = [
    Flag {
        name: "verbose",
        switch: true,
        usage: "--verbose (debug logging)",
    },
    Flag {
        name: "help",
        switch: true,
        usage: "--help",
    },
];

impl Args {
    /// Parses the process arguments, exiting on `--help` or bad input.
    pub fn from_env(flags: &[Flag]) -> Self {
        match Self::parse(std::env::args().skip(1), flags) {
            Ok(args) => args,
            Err(ArgError::Help) => {
                print_usage(flags);
                std::process::exit(0)
            }
            Err(e) => {
                print_usage(flags);
                fail(e)
            }
        }
    }

    pub fn parse<I>(raw: I, flags: &[Flag]) -> Result<Self, ArgError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = Args::default();
        let mut raw = raw.into_iter();
        while let Some(arg) = raw.next() {
            if !arg.starts_with("--") {
                return Err(ArgError::Positional(arg));
            }
            let stripped = &arg[2..];
            let (name, inline) = match stripped.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (stripped, None),
            };
            let flag = flags
                .iter()
                .chain(BUILTIN.iter())
                .find(|f| f.name == name)
                .ok_or_else(|| ArgError::Unknown(name.to_string()))?;

            if flag.switch {
                if inline.is_some() {
                    return Err(ArgError::SwitchValue(flag.name.to_string()));
                }
                match flag.name {
                    "help" => return Err(ArgError::Help),
                    "verbose" => args.verbose = true,
                    _ => {
                        args.switches.insert(flag.name);
                    }
                }
                continue;
            }

            let value = match inline {
                Some(v) => v,
                None => raw
                    .next()
                    .ok_or_else(|| ArgError::NoValue(flag.name.to_string()))?,
            };
            args.values.insert(flag.name, value);
        }
        Ok(args)
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn switch(&self, name: &str) -> bool {
        self.switches.contains(name)
    }

    /// Parsed value of `--name`, if given. Exits when it doesn't parse.
    pub fn optional<T>(&self, name: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.values.get(name).map(|raw| match raw.parse::<T>() {
            Ok(v) => v,
            Err(e) => fail(format!("--{} {:?}: {}", name, raw, e)),
        })
    }

    pub fn required<T>(&self, name: &str) -> T
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.optional(name) {
            Some(v) => v,
            None => fail(format!("--{} is required", name)),
        }
    }
}

pub fn print_usage(flags: &[Flag]) {
    eprintln!("{}", "flags:".bold());
    for flag in flags.iter().chain(BUILTIN.iter()) {
        eprintln!("    {}", flag.usage);
    }
}

/// Reports a fatal argument problem and exits with status 2.
pub fn fail(msg: impl Display) -> ! {
    eprintln!("{} {}", "error:".red().bold(), msg);
    std::process::exit(2)
}
