//! Tag command implementation

use anyhow::Result;
use clap::Args;

use auxtally_core::Tagger;

use crate::tagger::RuleTagger;

/// Arguments for the tag command
#[derive(Debug, Args)]
pub struct TagArgs {
    /// Sentence to tokenize and tag
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,
}

impl TagArgs {
    /// Execute the tag command
    pub fn execute(&self) -> Result<()> {
        let tokens = RuleTagger::new().tag(&self.sentence)?;
        for token in tokens {
            match token.tense {
                Some(tense) => println!("{}\t{:?}\t{:?}", token.text, token.pos, tense),
                None => println!("{}\t{:?}\t-", token.text, token.pos),
            }
        }
        Ok(())
    }
}
