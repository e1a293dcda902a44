//! Command-line interface definitions using clap

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// IP to Location Lookup
#[derive(Parser, Debug)]
#[command(name = "ip-locator")]
#[command(version)]
#[command(about = "IP to Location Lookup", long_about = None)]
pub struct Cli {
    /// Find IP location - Example: ip-locator --ip 111.111.1.111
    ///
    /// When omitted, the caller's public IP address is detected and used.
    #[arg(short = 'i', long = "ip", value_name = "IP")]
    pub ip: Option<String>,

    /// Path to a TOML config file (defaults to ./ip-locator.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parses arguments after rewriting the legacy `-ip` flag.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Rewrites `-ip VALUE` and `-ip=VALUE` to `--ip`, which clap would otherwise read as `-i p`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-ip") => OsString::from("--ip"),
            Some(s) if s.starts_with("-ip=") => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}
