use clap::Parser;
use std::path::PathBuf;

/// Startup options for the `board` binary.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Standings board for a live poker table", long_about = None)]
pub struct Config {
    /// Seat names in order, repeatable (at most nine are used)
    #[arg(long = "name", value_name = "NAME")]
    pub names: Vec<String>,
    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
    /// Directory for the debug log file
    #[arg(long, value_name = "DIR", default_value = "logs")]
    pub logs: PathBuf,
    /// Print the final standings as JSON on exit
    #[arg(long)]
    pub json: bool,
    /// Read line commands from stdin instead of showing menus
    #[arg(long)]
    pub script: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["board"]).expect("no args");
        assert!(config.names.is_empty());
        assert!(!config.plain);
        assert!(!config.json);
        assert!(!config.script);
        assert_eq!(config.logs, PathBuf::from("logs"));
    }

    #[test]
    fn repeated_names_keep_order() {
        let config = Config::try_parse_from([
            "board", "--name", "Mai", "--name", "Tuan", "--json", "--logs", "/tmp/x",
        ])
        .expect("valid args");
        assert_eq!(config.names, vec!["Mai", "Tuan"]);
        assert!(config.json);
        assert_eq!(config.logs, PathBuf::from("/tmp/x"));
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Config::try_parse_from(["board", "--seats", "10"]).is_err());
    }
}
