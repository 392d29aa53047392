//! Process identity encoded in monitor log file names.
//!
//! Example: log_pid_1234_name_myproc.txt  =>  pid "1234", process name "myproc"
//!
//! Only used for labelling; nothing here is validated.

use std::path::Path;

const PID_MARKER: &str = "log_pid_";
const NAME_MARKER: &str = "_name_";
const EXT_MARKER: &str = ".txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessLabel {
    pub file_name: String,
    pub pid: Option<String>,
    pub process_name: Option<String>,
}

impl ProcessLabel {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let name_at = file_name.find(NAME_MARKER);

        let process_name = name_at.and_then(|at| {
            let rest = &file_name[at + NAME_MARKER.len()..];
            rest.find(EXT_MARKER).map(|end| rest[..end].to_string())
        });

        let pid = match (file_name.find(PID_MARKER), name_at) {
            (Some(start), Some(end)) if start + PID_MARKER.len() <= end => {
                Some(file_name[start + PID_MARKER.len()..end].to_string())
            }
            _ => None,
        };

        Self {
            file_name,
            pid,
            process_name,
        }
    }

    /// "myproc (pid 1234)", degrading to whatever parts were found.
    pub fn display(&self) -> String {
        match (&self.process_name, &self.pid) {
            (Some(name), Some(pid)) => format!("{} (pid {})", name, pid),
            (Some(name), None) => name.clone(),
            (None, Some(pid)) => format!("pid {}", pid),
            (None, None) => self.file_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_pid_and_name() {
        let label = ProcessLabel::from_path(Path::new("log_pid_1234_name_myproc.txt"));
        assert_eq!(
            label,
            ProcessLabel {
                file_name: "log_pid_1234_name_myproc.txt".to_string(),
                pid: Some("1234".to_string()),
                process_name: Some("myproc".to_string()),
            }
        );
        assert_eq!(label.display(), "myproc (pid 1234)");
    }

    #[test]
    fn ignores_directory_part() {
        let label = ProcessLabel::from_path(Path::new("../runs_name_x/log_pid_77_name_worker.txt"));
        assert_eq!(label.pid.as_deref(), Some("77"));
        assert_eq!(label.process_name.as_deref(), Some("worker"));
    }

    #[test]
    fn process_name_may_contain_underscores() {
        let label = ProcessLabel::from_path(Path::new("log_pid_9_name_my_long_proc.txt"));
        assert_eq!(label.process_name.as_deref(), Some("my_long_proc"));
        assert_eq!(label.pid.as_deref(), Some("9"));
    }

    #[test]
    fn unconventional_name_falls_back_to_file_name() {
        let label = ProcessLabel::from_path(Path::new("monitor.log.txt"));
        assert_eq!(label.pid, None);
        assert_eq!(label.process_name, None);
        assert_eq!(label.display(), "monitor.log.txt");
    }

    #[test]
    fn name_without_pid() {
        let label = ProcessLabel::from_path(Path::new("mylog_name_db.txt"));
        assert_eq!(label.pid, None);
        assert_eq!(label.display(), "db");
    }
}
