use std::path::PathBuf;
use std::process::exit;

use calc_bleu::{
    format_score, parse_order, score_files, BleuError, Tokenizer, TreebankTokenizer,
    WhitespaceTokenizer, DEFAULT_MAX_ORDER,
};
use clap::{Parser, ValueEnum};
use log::debug;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TokenizerKind {
    /// Penn Treebank style English word tokenisation.
    Treebank,
    /// Split on whitespace only.
    Whitespace,
}

impl TokenizerKind {
    fn build(self) -> Box<dyn Tokenizer> {
        match self {
            TokenizerKind::Treebank => Box::new(TreebankTokenizer),
            TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "calc-bleu", version, about = "Sentence BLEU of a hypothesis against one reference")]
struct Cli {
    /// Text file with the hypothesis translation.
    hypothesis: PathBuf,

    /// Text file with the reference translation.
    reference: PathBuf,

    /// Highest n-gram order (1 for unigrams, 2 for unigrams and bigrams, ...).
    #[arg(default_value_t = DEFAULT_MAX_ORDER, value_parser = parse_order)]
    max_order: usize,

    #[arg(long, value_enum, default_value_t = TokenizerKind::Treebank)]
    tokenizer: TokenizerKind,
}

/// Scores the two files and renders the single output line.
fn run(cli: &Cli) -> Result<String, BleuError> {
    let tokenizer = cli.tokenizer.build();
    let bleu = score_files(&cli.hypothesis, &cli.reference, cli.max_order, tokenizer.as_ref())?;
    Ok(format!("BLEU-score: {}", format_score(bleu.score)))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("error: {}", e);
            exit(1);
        }
    }
}
