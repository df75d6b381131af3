use std::{fs::OpenOptions, io::Write, path::Path, sync::Mutex};

use tracing::warn;

use crate::trace::trace::RenderEvent;

/// Appends render events to a JSONL file. Failures never interrupt a render.
pub struct TraceLogger {
    file: Option<Mutex<std::fs::File>>,
}

impl TraceLogger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path);

        match file {
            Ok(f) => Self {
                file: Some(Mutex::new(f)),
            },
            Err(e) => {
                warn!("could not open trace file '{}': {}", path.display(), e);
                Self { file: None }
            }
        }
    }

    /// A logger that drops every event.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn log(&self, event: &RenderEvent) {
        let file_mutex = match &self.file {
            Some(f) => f,
            None => return, // tracing disabled
        };

        let json = match serde_json::to_string(event) {
            Ok(j) => j,
            Err(e) => {
                warn!("failed to serialize render event: {}", e);
                return;
            }
        };

        let mut file = match file_mutex.lock() {
            Ok(f) => f,
            Err(e) => {
                warn!("trace logger lock poisoned: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(file, "{}", json) {
            warn!("failed to write render event: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::trace::RenderStage;

    #[test]
    fn appends_one_json_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.jsonl");

        let logger = TraceLogger::new(&path);
        assert!(logger.is_enabled());
        logger.log(&RenderEvent::now(RenderStage::Table, "8 rows"));
        logger.log(&RenderEvent::now(RenderStage::Mount, "mounted"));

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["stage"], "table");
        assert_eq!(first["outcome"], "8 rows");
    }

    #[test]
    fn unopenable_path_disables_logging() {
        let logger = TraceLogger::new("/nonexistent-dir/trace.jsonl");
        assert!(!logger.is_enabled());
        logger.log(&RenderEvent::now(RenderStage::Table, "0 rows"));
    }
}
