//! # Integration Tests
//!
//! Cross-crate scenarios.
//!
//! Covers:
//! - configuration file to running dispatcher
//! - threshold scenarios across mixed targets
//! - escalation ordering with a recording target
//! - concurrent emits into one file

#[cfg(test)]
mod support {
    use std::sync::{Arc, Mutex};

    use contracts::{ContractError, LogTarget, Severity, TargetState};

    /// Records every accepted line, shared across targets to observe order
    pub struct Recorder {
        name: String,
        state: TargetState,
        journal: Arc<Mutex<Vec<(String, Severity, String)>>>,
    }

    impl Recorder {
        pub fn new(
            name: &str,
            threshold: Severity,
            journal: Arc<Mutex<Vec<(String, Severity, String)>>>,
        ) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                state: TargetState::new(threshold),
                journal,
            })
        }
    }

    impl LogTarget for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn state(&self) -> &TargetState {
            &self.state
        }

        fn write(&self, level: Severity, message: &str) -> Result<(), ContractError> {
            self.journal
                .lock()
                .unwrap()
                .push((self.name.clone(), level, message.to_string()));
            Ok(())
        }
    }

    pub fn journal() -> Arc<Mutex<Vec<(String, Severity, String)>>> {
        Arc::new(Mutex::new(Vec::new()))
    }
}

#[cfg(test)]
mod config_tests {
    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{LogTarget, Severity};
    use dispatcher::{call_site, create_dispatcher};

    #[test]
    fn test_config_file_to_dispatcher() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("app.log");
        let config_path = dir.path().join("fanlog.json");
        let config = json_config(&log_path);
        std::fs::write(&config_path, config).unwrap();

        let blueprint = ConfigLoader::load_from_path(&config_path).unwrap();
        let dispatcher = create_dispatcher(blueprint).unwrap();
        assert_eq!(dispatcher.len(), 2);

        dispatcher
            .emit(Severity::Warning, "cache cold", call_site!())
            .unwrap();
        dispatcher
            .emit(Severity::Info, "below file threshold", call_site!())
            .unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(" [WARNING] - cache cold\t"));

        let targets = dispatcher.targets();
        assert_eq!(targets[1].name(), "muted");
        assert!(!targets[1].is_enabled());
    }

    fn json_config(log_path: &std::path::Path) -> String {
        let path = log_path.display().to_string().replace('\\', "\\\\");
        format!(
            r#"{{
                "default_console": false,
                "targets": [
                    {{ "name": "file", "kind": "file", "threshold": "warning", "path": "{path}" }},
                    {{ "name": "muted", "kind": "console", "enabled": false }}
                ]
            }}"#
        )
    }

    #[test]
    fn test_invalid_config_never_reaches_dispatcher() {
        let content = r#"
[[targets]]
name = "file"
kind = "file"
"#;
        let err = ConfigLoader::load_from_str(content, ConfigFormat::Toml).unwrap_err();
        assert!(err.to_string().contains("requires a path"));
    }
}

#[cfg(test)]
mod scenario_tests {
    use std::sync::Arc;

    use contracts::Severity;
    use dispatcher::{call_site, ConsoleTarget, Dispatcher, FileTarget};

    /// file(Info) + console(Error)
    #[test]
    fn test_mixed_thresholds() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("mixed.log");

        let dispatcher = Dispatcher::new();
        dispatcher.register_target(Arc::new(
            FileTarget::open("file", &log_path, Severity::Info).unwrap(),
        ));
        dispatcher.register_target(Arc::new(
            ConsoleTarget::new("console", Severity::Error).with_color(false),
        ));

        dispatcher.emit(Severity::Debug, "hello", call_site!()).unwrap();
        assert_eq!(std::fs::read_to_string(&log_path).unwrap(), "");

        dispatcher.emit(Severity::Info, "hello", call_site!()).unwrap();
        dispatcher.emit(Severity::Error, "broken", call_site!()).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" [INFO] - hello\t"));
        assert!(lines[0].contains(file!()));
        assert!(lines[1].contains(" [ERROR] - broken\t"));

        let metrics = dispatcher.metrics();
        assert_eq!(metrics[0].1.written, 2);
        assert_eq!(metrics[0].1.filtered, 1);
        assert_eq!(metrics[1].1.written, 1);
        assert_eq!(metrics[1].1.filtered, 2);
    }

    #[test]
    fn test_disable_then_enable_all() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("toggle.log");

        let dispatcher = Dispatcher::new();
        dispatcher.register_target(Arc::new(
            FileTarget::open("file", &log_path, Severity::Warning).unwrap(),
        ));

        dispatcher.disable_all();
        for level in [Severity::Debug, Severity::Warning, Severity::Error] {
            dispatcher.emit(level, "silenced", call_site!()).unwrap();
        }
        assert!(dispatcher.emit(Severity::Critical, "silenced", call_site!()).is_err());
        assert_eq!(std::fs::read_to_string(&log_path).unwrap(), "");

        dispatcher.enable_all();
        dispatcher.emit(Severity::Info, "filtered", call_site!()).unwrap();
        dispatcher.emit(Severity::Warning, "back", call_site!()).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains(" [WARNING] - back\t"));
    }
}

#[cfg(test)]
mod escalation_tests {
    use contracts::{CallSite, LogRecord, Severity};
    use dispatcher::{call_site, Dispatcher, Escalation};

    use crate::support::{journal, Recorder};

    #[test]
    fn test_critical_returned_after_every_write() {
        let journal = journal();
        let dispatcher = Dispatcher::new();
        dispatcher.register_target(Recorder::new("a", Severity::Error, journal.clone()));
        dispatcher.register_target(Recorder::new("b", Severity::Fatal, journal.clone()));
        dispatcher.register_target(Recorder::new("c", Severity::Debug, journal.clone()));

        let err = dispatcher
            .emit(Severity::Critical, "disk failure", call_site!())
            .unwrap_err();

        assert_eq!(err.message, "disk failure");
        let entries = journal.lock().unwrap();
        let names: Vec<&str> = entries.iter().map(|(n, _, _)| n.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
        assert!(entries.iter().all(|(_, l, _)| *l == Severity::Critical));
        assert!(entries[0].2.contains(" [CRITICAL] - disk failure\t"));
    }

    #[test]
    fn test_lower_levels_never_error() {
        let dispatcher = Dispatcher::new();
        dispatcher.register_target(Recorder::new("r", Severity::Debug, journal()));

        for level in [
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ] {
            assert!(dispatcher.emit(level, "fine", call_site!()).is_ok());
        }
    }

    #[test]
    fn test_fatal_dispatch_reports_after_writes() {
        let journal = journal();
        let dispatcher = Dispatcher::new();
        dispatcher.register_target(Recorder::new("r", Severity::Warning, journal.clone()));

        let record = LogRecord::new(Severity::Fatal, "corrupt state", CallSite::unknown());
        let outcome = dispatcher.dispatch(&record);

        assert_eq!(
            outcome,
            Err(Escalation::Fatal {
                message: "corrupt state".into()
            })
        );
        assert_eq!(journal.lock().unwrap().len(), 1);
    }
}

#[cfg(test)]
mod concurrency_tests {
    use std::sync::Arc;
    use std::thread;

    use contracts::Severity;
    use dispatcher::{call_site, Dispatcher, FileTarget};
    use observability::EmitMetricsAggregator;

    const PER_THREAD: usize = 1000;

    #[test]
    fn test_two_threads_produce_whole_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("concurrent.log");

        let dispatcher = Dispatcher::new();
        dispatcher.register_target(Arc::new(
            FileTarget::open("file", &log_path, Severity::Info).unwrap(),
        ));

        thread::scope(|s| {
            for worker in 0..2 {
                let dispatcher = &dispatcher;
                s.spawn(move || {
                    for i in 0..PER_THREAD {
                        dispatcher
                            .emit(Severity::Info, &format!("worker {worker} msg {i}"), call_site!())
                            .unwrap();
                    }
                });
            }
        });

        let content = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2 * PER_THREAD);
        assert!(content.ends_with('\n'));
        for line in &lines {
            assert!(line.contains(" [INFO] - worker "), "malformed: {line}");
            assert_eq!(line.matches('\t').count(), 1, "interleaved: {line}");
        }

        // per-worker order is preserved
        for worker in 0..2 {
            let prefix = format!("worker {worker} msg ");
            let seq: Vec<usize> = lines
                .iter()
                .filter_map(|l| l.split(&prefix).nth(1))
                .filter_map(|rest| rest.split('\t').next())
                .map(|n| n.parse().unwrap())
                .collect();
            assert_eq!(seq, (0..PER_THREAD).collect::<Vec<_>>());
        }

        let mut aggregator = EmitMetricsAggregator::new();
        for (name, snapshot) in dispatcher.metrics() {
            aggregator.observe_target(&name, snapshot);
        }
        assert_eq!(aggregator.targets["file"].written, (2 * PER_THREAD) as u64);
    }
}
