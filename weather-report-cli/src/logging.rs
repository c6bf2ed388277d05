//! Logging setup. Logs go to stderr so `show` output can be piped.

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences to a default filter. `RUST_LOG` wins when set.
pub fn filter_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace,hyper=debug,reqwest=debug",
    }
}

pub fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_for(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    debug!("weather-report started with verbosity level: {verbose}");
    trace!("Full CLI args: {:?}", redact_args(std::env::args()));
}

const SECRET_FLAG: &str = "--api-key";

/// Argument list with the value of `--api-key` masked, in both split and `=` forms.
pub fn redact_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut mask_next = false;
    args.into_iter()
        .map(|arg| {
            if std::mem::take(&mut mask_next) {
                return "***".to_string();
            }
            if arg == SECRET_FLAG {
                mask_next = true;
                return arg;
            }
            if arg.strip_prefix(SECRET_FLAG).is_some_and(|rest| rest.starts_with('=')) {
                format!("{SECRET_FLAG}=***")
            } else {
                arg
            }
        })
        .collect()
}
