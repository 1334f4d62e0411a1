//! Logging setup for programs built on the `vectors` crate.
use log::LevelFilter;

/// Log to stderr at `warn` and above, unless `RUST_LOG` says otherwise.
///
/// If called multiple times in the same process, only applies once.
pub fn log_to_stderr() {
    log_to_stderr_at(LevelFilter::Warn);
}

/// Log to stderr, using `default_level` when `RUST_LOG` is unset.
///
/// Only the first call in a process has any effect.
pub fn log_to_stderr_at(default_level: LevelFilter) {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let env = env_logger::Env::default().default_filter_or(default_level.to_string());

        env_logger::Builder::from_env(env)
            .format(|buf, record| {
                use std::io::Write;

                let now = time::OffsetDateTime::now_utc();

                writeln!(
                    buf,
                    "{} {} time={} target={}",
                    record.level(),
                    record.args(),
                    now,
                    record.target()
                )
            })
            .init();
    });
}
