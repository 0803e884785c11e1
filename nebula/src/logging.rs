// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Minimal stderr logger for the `log` facade.
use std::env;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level.
const LOG_ENV: &str = "NEBULA_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {} - {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the logger with the level named by `NEBULA_LOG`. Defaults to `warn` when the
/// variable is unset or not a level name, so log lines stay out of the game screen.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
