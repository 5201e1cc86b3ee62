use common_utils::{dump_eprintln, log, safe_println};
use std::{env, ffi::OsString, path::PathBuf, process::ExitCode};
use sysconf_dump::{dump, sysconf::HostSysconf};

struct Config {
    destination_dir: PathBuf,
}

/// Exactly one argument after the program name, taken verbatim as the
/// destination. Anything else is a usage error.
fn load_config(args: &[OsString]) -> Option<Config> {
    match args {
        [_, destination_dir] => Some(Config {
            destination_dir: PathBuf::from(destination_dir),
        }),
        _ => None,
    }
}

fn print_usage(program: &str) {
    let res = safe_println!("Usage: {} <destination-dir>", program).and_then(|_| {
        safe_println!("sysconf values are written to <destination-dir>/sysconf/<id>")
    });
    if let Err(e) = res {
        if !e.broken_pipe() {
            eprintln!("Error: {}", e);
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<OsString> = env::args_os().collect();
    let Some(config) = load_config(&args) else {
        let program = args
            .first()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned());
        print_usage(&program);
        return ExitCode::from(1);
    };

    if let Err(e) = run(&config) {
        log::enable_console_log();
        dump_eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(config: &Config) -> anyhow::Result<()> {
    dump_eprintln!(
        "dumping sysconf values to '{}'",
        dump::sysconf_dir(&config.destination_dir).display()
    );
    dump::dump_all(&HostSysconf, &config.destination_dir)?;
    Ok(())
}
