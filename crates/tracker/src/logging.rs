use anyhow::{Context, Result};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::LogSettings;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {h({l})} {t} - {m}{n}";
const LOG_FILE_SIZE_LIMIT: u64 = 5 * 1024 * 1024;
const LOG_FILE_ROLL_COUNT: u32 = 3;

const STDERR_APPENDER: &str = "stderr";
const FILE_APPENDER: &str = "file";

/// Installs the global logger. Logs go to stderr so that stdout only carries
/// the order list.
pub fn init_logging(settings: &LogSettings) -> Result<()> {
    if let Some(config_file) = &settings.config_file {
        log4rs::init_file(config_file, Default::default()).context(format!(
            "an error occurred on loading the log config {:?}",
            config_file
        ))?;

        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let mut config =
        Config::builder().appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)));
    let mut root = Root::builder().appender(STDERR_APPENDER);

    if let Some(file) = &settings.file {
        let roller = FixedWindowRoller::builder()
            .build(
                &format!("{}.{{}}.gz", file.display()),
                LOG_FILE_ROLL_COUNT,
            )
            .context("an error occurred on creating a log roller")?;

        let policy = CompoundPolicy::new(
            Box::new(SizeTrigger::new(LOG_FILE_SIZE_LIMIT)),
            Box::new(roller),
        );

        let file_appender = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(file, Box::new(policy))
            .context(format!("an error occurred on opening the log file {:?}", file))?;

        config = config.appender(Appender::builder().build(FILE_APPENDER, Box::new(file_appender)));
        root = root.appender(FILE_APPENDER);
    }

    let config = config
        .build(root.build(settings.level))
        .context("an error occurred on building the log config")?;

    log4rs::init_config(config).context("the logger is already initialized")?;

    Ok(())
}
