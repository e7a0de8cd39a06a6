mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use predicates::str::contains;

    use std::fs;
    use std::path::Path;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "perfviz";

    const VALID_HEADER: &str =
        "timestamp,rps,avg_latency_ms,p99_latency_ms,memory_mb,cpu_percent,connections,success_rate";

    fn write_three_row_csv(path: &Path) -> TestResult {
        fs::write(
            path,
            format!(
                "{VALID_HEADER}\n\
                 2024-01-15 14:30:00,100,10,20,500,30,10,99\n\
                 2024-01-15 14:30:05,120,12,24,520,35,12,98\n\
                 2024-01-15 14:30:10,80,9,18,480,28,9,100\n"
            ),
        )?;
        Ok(())
    }

    fn assert_outputs_exist(dir: &Path) {
        let charts = dir.join("performance_charts");
        assert!(charts.join("performance_dashboard.png").exists());
        assert!(charts.join("performance_analysis.png").exists());
        assert!(charts.join("performance_report.html").exists());
    }

    #[test]
    fn test_run__no_input_resolvable() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(dir.path());

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("No metrics CSV files found!"))
            .stderr(contains("Usage: perfviz <csv_file>"));
        Ok(())
    }

    #[test]
    fn test_run__file_not_found() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(dir.path()).arg("missing_metrics.csv");

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("File not found: missing_metrics.csv"));
        Ok(())
    }

    #[test]
    fn test_run__missing_required_column() -> TestResult {
        let dir = tempfile::tempdir()?;
        let csv = dir.path().join("metrics_bad.csv");
        fs::write(
            &csv,
            "timestamp,rps,avg_latency_ms,p99_latency_ms,memory_mb,cpu_percent,connections\n\
             2024-01-15 14:30:00,100,10,20,500,30,10\n",
        )?;
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(dir.path()).arg(&csv);

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("Missing required column(s): success_rate"));
        // A load error must not leave partial outputs behind
        assert!(!dir.path().join("performance_charts").exists());
        Ok(())
    }

    #[test]
    fn test_run__header_only_csv() -> TestResult {
        let dir = tempfile::tempdir()?;
        let csv = dir.path().join("metrics_empty.csv");
        fs::write(&csv, format!("{VALID_HEADER}\n"))?;
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(dir.path()).arg(&csv);

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("No data rows in input"));
        assert!(!dir.path().join("performance_charts").exists());
        Ok(())
    }

    #[test]
    fn test_run__full_report_from_explicit_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let csv = dir.path().join("metrics_run.csv");
        write_three_row_csv(&csv)?;
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(dir.path()).arg(&csv);

        cmd.assert()
            .success()
            .stdout(contains("Loaded 3 data points"))
            .stdout(contains("PERFORMANCE STATISTICS SUMMARY"))
            .stdout(contains("Average: 100.00"))
            .stdout(contains("Maximum: 120.00"))
            .stdout(contains("Minimum: 80.00"))
            .stdout(contains("Analysis completed successfully!"));

        assert_outputs_exist(dir.path());
        Ok(())
    }

    #[test]
    fn test_run__rerun_overwrites_outputs() -> TestResult {
        let dir = tempfile::tempdir()?;
        let csv = dir.path().join("metrics_run.csv");
        write_three_row_csv(&csv)?;

        for _ in 0..2 {
            let mut cmd = Command::cargo_bin(NAME)?;
            cmd.current_dir(dir.path()).arg(&csv);
            cmd.assert().success();
        }

        assert_outputs_exist(dir.path());
        Ok(())
    }

    #[test]
    fn test_run__auto_detects_newest_metrics_csv() -> TestResult {
        let dir = tempfile::tempdir()?;
        let old = dir.path().join("metrics_20240114_120000.csv");
        let new = dir.path().join("metrics_20240115_143022.csv");
        write_three_row_csv(&old)?;
        std::thread::sleep(std::time::Duration::from_millis(20));
        write_three_row_csv(&new)?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(dir.path());

        cmd.assert()
            .success()
            .stdout(contains("Auto-detected latest CSV file:"))
            .stdout(contains("metrics_20240115_143022.csv"));
        Ok(())
    }

    #[test]
    fn test_run__json_summary_format() -> TestResult {
        let dir = tempfile::tempdir()?;
        let csv = dir.path().join("metrics_run.csv");
        write_three_row_csv(&csv)?;
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(dir.path())
            .arg(&csv)
            .arg("--quiet")
            .arg("--format")
            .arg("json");

        cmd.assert()
            .success()
            .stdout(contains("\"sample_count\": 3"))
            .stdout(contains("\"duration_minutes\": 0.25"));
        Ok(())
    }

    #[test]
    fn test_run__quiet_suppresses_progress() -> TestResult {
        let dir = tempfile::tempdir()?;
        let csv = dir.path().join("metrics_run.csv");
        write_three_row_csv(&csv)?;
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(dir.path()).arg(&csv).arg("-q");

        let assert = cmd.assert().success();
        let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
        assert!(!stdout.contains("Generating performance dashboard"));
        // The statistics summary is still the product of the run
        assert!(stdout.contains("PERFORMANCE STATISTICS SUMMARY"));
        Ok(())
    }
}
