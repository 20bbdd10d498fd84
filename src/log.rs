// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Log module provides the log initialisation, reference
//! https://docs.rs/log4rs
//!
//! Widgets log through the `log` facade; without `init_log` (or with the
//! `log4rs` feature off) records go to whatever logger the host installed.

use crate::ui::UIResult;
use log::LevelFilter;

#[cfg(feature = "log4rs")]
use crate::{ui::UIError, util::get_abs_path};
#[cfg(feature = "log4rs")]
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// init logs system, writing records at `level` and above to `file_path`
#[allow(unused)]
pub fn init_log(level: LevelFilter, file_path: &str) -> UIResult<()> {
    #[cfg(feature = "log4rs")]
    {
        let fpstr = get_abs_path(file_path);
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(
                "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
            )))
            .build(fpstr)?;
        let config = Config::builder()
            .appender(
                Appender::builder()
                    .filter(Box::new(ThresholdFilter::new(level)))
                    .build("logfile", Box::new(logfile)),
            )
            .build(Root::builder().appender("logfile").build(level))
            .map_err(|e| UIError::Config(e.to_string()))?;
        log4rs::init_config(config).map_err(|e| UIError::Config(e.to_string()))?;
    }
    Ok(())
}
