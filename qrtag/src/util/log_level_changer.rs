// This file is part of the product QR Tracker.
// SPDX-FileCopyrightText: 2026 QR Tracker contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use env_logger::Logger;
use log::{Level, Log, Metadata, Record, SetLoggerError};

/// Re-levels records from targets starting with `target_prefix`.
#[derive(Debug, Clone)]
pub struct TargetLevelRule {
    pub target_prefix: String,
    pub from: Level,
    pub to: Level,
}

impl TargetLevelRule {
    pub fn new(target_prefix: &str, from: Level, to: Level) -> Self {
        Self {
            target_prefix: target_prefix.to_string(),
            from,
            to,
        }
    }
}

struct LevelModifierLogger {
    inner: Logger,
    rules: Vec<TargetLevelRule>,
}

impl LevelModifierLogger {
    fn adjusted_level(&self, target: &str, level: Level) -> Level {
        adjusted_level(&self.rules, target, level)
    }
}

fn adjusted_level(rules: &[TargetLevelRule], target: &str, level: Level) -> Level {
    rules
        .iter()
        .find(|rule| target.starts_with(&rule.target_prefix) && rule.from == level)
        .map(|rule| rule.to)
        .unwrap_or(level)
}

impl Log for LevelModifierLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let metadata = Metadata::builder()
            .level(self.adjusted_level(metadata.target(), metadata.level()))
            .target(metadata.target())
            .build();
        self.inner.enabled(&metadata)
    }

    fn log(&self, record: &Record) {
        let level = self.adjusted_level(record.target(), record.level());
        self.inner.log(
            &Record::builder()
                .level(level)
                .target(record.target())
                .args(*record.args())
                .module_path(record.module_path())
                .file(record.file())
                .line(record.line())
                .build(),
        );
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

pub fn init_logger(rules: Vec<TargetLevelRule>, logger: Logger) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(LevelModifierLogger {
        inner: logger,
        rules,
    }))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_rule_changes_level() {
        let rules = vec![TargetLevelRule::new("actix_server", Level::Info, Level::Debug)];
        assert_eq!(
            adjusted_level(&rules, "actix_server::builder", Level::Info),
            Level::Debug
        );
    }

    #[test]
    fn rule_only_applies_to_its_source_level() {
        let rules = vec![TargetLevelRule::new("actix_server", Level::Info, Level::Debug)];
        assert_eq!(
            adjusted_level(&rules, "actix_server::builder", Level::Warn),
            Level::Warn
        );
        assert_eq!(adjusted_level(&rules, "qrtag::tags", Level::Info), Level::Info);
    }
}
