use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Analyzing log files of molecular dynamics simulation packages
#[derive(Parser, Debug, Clone)]
#[command(
    name = "mdlog",
    about = "Analyzing log files of molecular dynamics simulation packages",
    version
)]
pub struct Settings {
    /// Input MD log file location(s)
    #[arg(short = 'i', long = "input", required = true, num_args = 1..)]
    pub input: Vec<PathBuf>,

    /// Input MD log file type
    #[arg(short = 't', long = "type", default_value = "amber", value_parser = ["amber", "namd"])]
    pub input_type: String,

    /// X-axis data set (defaults to TIME for amber, TS for namd)
    #[arg(short, long)]
    pub xaxis: Option<String>,

    /// Y-axis data set(s) (defaults to all data sets except the x-axis)
    #[arg(short, long, num_args = 1..)]
    pub yaxis: Vec<String>,

    /// Output result file location; the file type is extension-detected
    #[arg(short, long, default_value = "output.dat")]
    pub output: PathBuf,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::try_parse_from(["mdlog", "-i", "prod.out"]).unwrap();
        assert_eq!(settings.input, vec![PathBuf::from("prod.out")]);
        assert_eq!(settings.input_type, "amber");
        assert_eq!(settings.xaxis, None);
        assert!(settings.yaxis.is_empty());
        assert_eq!(settings.output, PathBuf::from("output.dat"));
        assert_eq!(settings.log_level, "INFO");
    }

    #[test]
    fn test_settings_multiple_inputs_keep_order() {
        let settings =
            Settings::try_parse_from(["mdlog", "-i", "seg1.out", "seg2.out", "seg3.out"]).unwrap();
        let names: Vec<_> = settings.input.iter().map(|p| p.to_str().unwrap()).collect();
        assert_eq!(names, vec!["seg1.out", "seg2.out", "seg3.out"]);
    }

    #[test]
    fn test_settings_namd_type_and_axes() {
        let settings = Settings::try_parse_from([
            "mdlog", "-i", "run.log", "-t", "namd", "-x", "TS", "-y", "BOND", "ANGLE", "-o",
            "out.csv",
        ])
        .unwrap();
        assert_eq!(settings.input_type, "namd");
        assert_eq!(settings.xaxis.as_deref(), Some("TS"));
        assert_eq!(settings.yaxis, vec!["BOND", "ANGLE"]);
        assert_eq!(settings.output, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_settings_requires_input() {
        assert!(Settings::try_parse_from(["mdlog"]).is_err());
    }

    #[test]
    fn test_settings_rejects_unknown_type() {
        assert!(Settings::try_parse_from(["mdlog", "-i", "a.log", "-t", "gromacs"]).is_err());
    }
}
