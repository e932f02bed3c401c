use clap::Parser;
use std::path::PathBuf;

/// Search the tool registry and launch a tool.
#[derive(Parser, Debug)]
#[command(name = "muxlaunch", version)]
pub struct SearchCli {
    /// Tool registry (JSON object of name -> { command, foreground })
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Number of matches to show (1-9)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub limit: Option<u8>,

    /// Write logs to this file
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Pick a program from an inline menu and open it in a pane or window.
#[derive(Parser, Debug)]
#[command(name = "muxpanel", version)]
pub struct PanelCli {
    /// Menu items (JSON array of { name })
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub menu: Option<PathBuf>,

    /// Helper script invoked as `<script> --pane|--window <name>`
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub script: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definitions() {
        SearchCli::command().debug_assert();
        PanelCli::command().debug_assert();
    }

    #[test]
    fn test_limit_range() {
        let cli = SearchCli::try_parse_from(["muxlaunch", "--limit", "5"]).unwrap();
        assert_eq!(cli.limit, Some(5));
        assert!(SearchCli::try_parse_from(["muxlaunch", "--limit", "12"]).is_err());
    }

    #[test]
    fn test_panel_flags() {
        let cli =
            PanelCli::try_parse_from(["muxpanel", "-m", "/tmp/panel.json", "-s", "/tmp/s.sh", "-v"])
                .unwrap();
        assert_eq!(cli.menu, Some(PathBuf::from("/tmp/panel.json")));
        assert_eq!(cli.script, Some(PathBuf::from("/tmp/s.sh")));
        assert!(cli.verbose);
    }
}
