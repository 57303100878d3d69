//! Responsible for behaviour related to logging statistics with a specific pre-fix and closing
//! lines.

use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::RwLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// The options for statistic logging containing the statistic prefix, the (optional) line which is
/// printed after the statistics, and the (optional) casing of the statistics.
struct StatisticOptions<'a> {
    // What is printed before a statistic is printed, the statistics will be printed in the
    // form `{PREFIX} {NAME}={VALUE}`
    statistic_prefix: &'a str,
    // A closing line which is printed after all of the statistics have been printed
    after_statistics: Option<&'a str>,
    // The casing of the name of the statistic
    statistics_casing: Option<Case>,
    // Where the statistics end up; defaults to stdout
    statistics_writer: Box<dyn Write + Send + Sync>,
}

impl std::fmt::Debug for StatisticOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("statistic_prefix", &self.statistic_prefix)
            .field("after_statistics", &self.after_statistics)
            .field("statistics_casing", &self.statistics_casing)
            .finish_non_exhaustive()
    }
}

static STATISTIC_OPTIONS: OnceLock<RwLock<StatisticOptions>> = OnceLock::new();

/// Configures the logging of the statistics.
///
/// It specifies the (optional) prefix and a closing line (postfix) which
/// can be printed after all of the statistics have been logged. Statistics will only be printed
/// once this function has been called; the first configuration wins.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        RwLock::from(StatisticOptions {
            statistic_prefix: prefix,
            after_statistics: after,
            statistics_casing: casing,
            statistics_writer: writer.unwrap_or(Box::new(stdout())),
        })
    });
}

/// Logs the provided statistic with name `name` and value `value`. At the moment it will log in
/// the format `STATISTIC_PREFIX NAME=VALUE`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(statistic_options_lock) = STATISTIC_OPTIONS.get() {
        if let Ok(mut statistic_options) = statistic_options_lock.write() {
            let name = if let Some(casing) = &statistic_options.statistics_casing {
                name.to_string().to_case(*casing)
            } else {
                name.to_string()
            };
            let prefix = statistic_options.statistic_prefix;
            if let Err(e) = writeln!(
                statistic_options.statistics_writer,
                "{prefix} {name}={value}"
            ) {
                debug!("Could not write statistic: {e}")
            };
        }
    }
}

/// Logs the postfix of the statistics (if it has been set).
pub fn log_statistic_postfix() {
    if let Some(statistic_options_lock) = STATISTIC_OPTIONS.get() {
        if let Ok(mut statistic_options) = statistic_options_lock.write() {
            if let Some(post_fix) = statistic_options.after_statistics {
                if let Err(e) = writeln!(statistic_options.statistics_writer, "{post_fix}") {
                    debug!("Could not write statistic: {e}");
                }
            }
        }
    }
}

/// Returns whether or not statistics should be logged, i.e. whether
/// [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;
    use std::sync::Mutex;

    use convert_case::Case;

    use super::configure_statistic_logging;
    use super::log_statistic;
    use super::log_statistic_postfix;
    use super::should_log_statistics;

    #[derive(Clone, Debug, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("not poisoned").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn statistics_are_written_to_the_configured_writer() {
        let buffer = SharedBuffer::default();
        configure_statistic_logging(
            "%% stat:",
            Some("%% end"),
            Some(Case::Camel),
            Some(Box::new(buffer.clone())),
        );
        assert!(should_log_statistics());

        log_statistic("local_search_num_restorations", 3);
        log_statistic_postfix();

        let output =
            String::from_utf8(buffer.0.lock().expect("not poisoned").clone()).expect("utf-8");
        assert!(output.contains("%% stat: localSearchNumRestorations=3\n"));
        assert!(output.ends_with("%% end\n"));
    }
}
