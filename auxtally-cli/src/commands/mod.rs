//! CLI command implementations

use clap::Subcommand;

pub mod extract;
pub mod tag;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract and tally auxiliary constructions for one speaker
    Extract(extract::ExtractArgs),

    /// Tokenize and tag a sentence with the built-in tagger (debug aid)
    Tag(tag::TagArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let extract_cmd = Commands::Extract(extract::ExtractArgs {
            input: PathBuf::from("speaker.txt"),
            speaker: "DCB_se1_ag2_m_02".to_string(),
            output: None,
            format: extract::OutputFormat::Csv,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", extract_cmd);
        assert!(debug_str.contains("Extract"));
        assert!(debug_str.contains("speaker.txt"));

        let tag_cmd = Commands::Tag(tag::TagArgs {
            sentence: "she's gone".to_string(),
        });
        let debug_str = format!("{:?}", tag_cmd);
        assert!(debug_str.contains("Tag"));
        assert!(debug_str.contains("she's gone"));
    }
}
