use clap::Parser;
use std::path::PathBuf;

/// 命令行参数
///
/// 所有参数都是可选的，未指定时使用配置文件、环境变量或默认值。
#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "timed_quiz",
    version,
    about = "Timed quiz runner: answer every question before the clock runs out."
)]
pub struct Cli {
    /// a csv file in the format of 'question,delimiter,answer'
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// the time limit for the whole quiz in seconds
    #[arg(long, value_name = "SECONDS")]
    pub limit: Option<u64>,

    /// optional TOML config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "timed_quiz",
            "--csv",
            "problems.csv",
            "--limit",
            "10",
            "-v",
        ]);

        assert_eq!(cli.csv, Some(PathBuf::from("problems.csv")));
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::parse_from(["timed_quiz"]);
        assert!(cli.csv.is_none());
        assert!(cli.limit.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_rejects_non_numeric_limit() {
        assert!(Cli::try_parse_from(["timed_quiz", "--limit", "soon"]).is_err());
    }
}
