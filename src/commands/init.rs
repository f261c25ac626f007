//! `skillrank init` - create a store

use std::path::Path;

use crate::cli::Cli;
use crate::output_by_format_result;
use skillrank_core::config::StoreConfig;
use skillrank_core::error::Result;
use skillrank_core::format::escape_quotes;
use skillrank_core::store::Store;

/// Execute the init command
pub fn execute(cli: &Cli, store_path: &Path, corpus: Option<&Path>) -> Result<()> {
    let mut config = StoreConfig::default();
    if let Some(corpus) = corpus {
        config.corpus = corpus.to_path_buf();
    }

    let store = Store::init(store_path, config)?;
    let corpus_path = store.corpus_path();

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "store": store.root().display().to_string(),
                "corpus": corpus_path.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if !cli.quiet {
                println!("Initialized skillrank store at {}", store.root().display());
                if !corpus_path.exists() {
                    println!(
                        "Corpus {} does not exist yet; pass --corpus to `recommend` or edit config.toml",
                        corpus_path.display()
                    );
                }
            }
        },
        records => {
            println!(
                "H skillrank=1 records=1 mode=init store=\"{}\" corpus=\"{}\"",
                escape_quotes(&store.root().display().to_string()),
                escape_quotes(&corpus_path.display().to_string())
            );
        }
    )
}
