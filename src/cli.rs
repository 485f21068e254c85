//! Command-line argument parsing for the editor

use clap::Parser;
use std::path::PathBuf;

/// A minimal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "A minimal terminal text editor")]
pub struct CliArgs {
    /// File to open (created on first save if it does not exist)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_opens_empty_buffer() {
        let args = CliArgs::parse_from(["quill"]);
        assert!(args.file.is_none());
    }

    #[test]
    fn test_single_file_argument() {
        let args = CliArgs::parse_from(["quill", "notes.txt"]);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
    }
}
