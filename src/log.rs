use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// `RUST_LOG` aware builder printing `LEVEL target: message` lines to stderr,
/// keeping stdout free for the deletion reports.
fn decay_builder() -> Builder {
    let mut builder = Builder::from_default_env();
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{:<5} {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder
}

/// Installs the logger, letting `level` override `RUST_LOG` when given.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = decay_builder();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

/// Maps the number of `-v` flags to a level, `None` defers to `RUST_LOG`.
pub fn verbosity_level(occurrences: u8) -> Option<LevelFilter> {
    match occurrences {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}
