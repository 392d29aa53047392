use clap::Parser;
use std::path::{Path, PathBuf};

mod log;
mod model;
mod render;
mod source;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "procmon-charts")]
#[command(about = "Chart CPU, memory and disk usage from process monitor logs", long_about = None)]
struct Cli {
    /// Log files to analyze. Without any, the scan directory is searched for
    /// files whose name contains "log" and ".txt".
    #[arg(long, num_args = 0..)]
    ifile: Vec<PathBuf>,

    /// Directory scanned when no --ifile is given.
    #[arg(long, env = "PROCMON_LOG_DIR", default_value = "..")]
    dir: PathBuf,

    /// Where to write the HTML report.
    #[arg(short = 'o', long, default_value = "procmon-report.html")]
    out: PathBuf,
}

fn main() -> Result<()> {
    // RUST_LOG takes precedence, fallback to info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // 1) Resolve inputs.
    let files = source::resolve_inputs(&cli.ifile, &cli.dir)?;
    tracing::info!(
        count = files.len(),
        files = ?files.iter().map(|f| f.display().to_string()).collect::<Vec<_>>(),
        "input log files"
    );

    // 2) Parse every file, stopping at the first failure.
    let logs = load_logs(&files)?;

    // 3) Build chart views.
    let data = model::build_report_data(&logs)?;

    // 4) Render HTML.
    let html = render::render_html_report(&data)?;
    std::fs::write(&cli.out, html)?;
    println!("Wrote {}", cli.out.display());

    Ok(())
}

/// Parse files in order. The first unreadable or malformed file aborts the
/// run; files after it are never opened.
fn load_logs(files: &[PathBuf]) -> Result<Vec<model::LoadedLog>> {
    let mut logs = Vec::with_capacity(files.len());
    for path in files {
        logs.push(load_log(path)?);
    }
    Ok(logs)
}

fn load_log(path: &Path) -> Result<model::LoadedLog> {
    let series = log::parse_log_file(path)?;
    let label = source::ProcessLabel::from_path(path);
    tracing::info!(
        path = %path.display(),
        process = %label.display(),
        samples = series.len(),
        "parsed log file"
    );
    Ok(model::LoadedLog {
        path: path.to_path_buf(),
        label,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    const LINE: &str =
        "Time: 2240, Cpu usage: 0, memory usage: 119.546875 MB, disk util (0, 26071040, 0, 323584)";

    #[test]
    fn cli_ifile_accepts_zero_or_more_paths() {
        let cli = Cli::try_parse_from(["procmon-charts", "--ifile", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.ifile, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);

        let cli = Cli::try_parse_from(["procmon-charts", "--ifile"]).unwrap();
        assert!(cli.ifile.is_empty());

        let cli = Cli::try_parse_from(["procmon-charts", "--dir", "/tmp/x"]).unwrap();
        assert!(cli.ifile.is_empty());
        assert_eq!(cli.dir, PathBuf::from("/tmp/x"));
        assert_eq!(cli.out, PathBuf::from("procmon-report.html"));
    }

    #[test]
    fn loads_files_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("log_pid_1_name_a.txt");
        let b = tmp.path().join("log_pid_2_name_b.txt");
        fs::write(&a, format!("{}\n{}\n", LINE, LINE)).unwrap();
        fs::write(&b, format!("{}\n", LINE)).unwrap();

        let logs = load_logs(&[b.clone(), a.clone()]).unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].path, b);
        assert_eq!(logs[0].label.process_name.as_deref(), Some("b"));
        assert_eq!(logs[1].series.len(), 2);
    }

    #[test]
    fn missing_file_stops_the_run() {
        let tmp = tempfile::tempdir().unwrap();
        let good = tmp.path().join("log_pid_1_name_a.txt");
        let missing = tmp.path().join("log_pid_2_name_gone.txt");
        let broken = tmp.path().join("log_pid_3_name_c.txt");
        fs::write(&good, format!("{}\n", LINE)).unwrap();
        fs::write(&broken, "Time: 1\n").unwrap();

        let err = load_logs(&[good, missing.clone(), broken]).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("read log file {}", missing.display())
        );
    }
}
