//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: build new words out of a root word.
//! Set `RUST_LOG=debug` to trace loading and validation on stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use word_scramble::{
    commands::{CheckConfig, check_word, find_solutions, run_simple, run_survey},
    config::{GameConfig, WordSource},
    output::{print_check_result, print_solutions, print_survey_statistics},
    session::Session,
    validation::{Validator, WordListLexicon},
    wordlists::{DictionarySource, LoadPolicy},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can out of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    start_words: String,

    /// Dictionary for the real-word check: 'embedded' (default) or path to file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Exit with an error instead of falling back when a word list can't be read
    #[arg(long, global = true)]
    strict: bool,

    /// Seed for picking root words (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Check a single word
    Check {
        /// The word to check
        word: String,

        /// Root word to check against (random if omitted)
        #[arg(short, long)]
        root: Option<String>,

        /// Words already used, comma separated
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<String>,
    },

    /// List every word that can be made from a root
    Solutions {
        /// The root word
        root: String,
    },

    /// Count the solutions of every root word
    Survey {
        /// Limit number of roots to survey
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            start_words: WordSource::from_arg(&self.start_words),
            dictionary: WordSource::from_arg(&self.dictionary),
            load_policy: if self.strict {
                LoadPolicy::FailFast
            } else {
                LoadPolicy::Fallback
            },
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config();

    // Load word lists based on -w / -d flags
    let source = config.load_start_words()?;
    let lexicon = config.load_lexicon()?;
    info!(
        "{} root words, {} dictionary words",
        source.len(),
        lexicon.len()
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, &source, &lexicon),
        Commands::Simple => run_simple_command(&config, &source, &lexicon),
        Commands::Check { word, root, used } => {
            run_check_command(&config, &source, &lexicon, word, root, used)
        }
        Commands::Solutions { root } => {
            print_solutions(&find_solutions(&root, &lexicon));
            Ok(())
        }
        Commands::Survey { limit } => {
            println!("🎯 Surveying root words...");
            let stats = run_survey(&source, &lexicon, limit, true);
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

fn run_check_command(
    config: &GameConfig,
    source: &DictionarySource,
    lexicon: &WordListLexicon,
    word: String,
    root: Option<String>,
    used: Vec<String>,
) -> Result<()> {
    let mut check = CheckConfig::new(word).with_used(used);
    if let Some(root) = root {
        check = check.with_root(root);
    }

    let validator = Validator::new(lexicon);
    let result =
        check_word(check, &validator, source, &mut config.rng()).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_simple_command(
    config: &GameConfig,
    source: &DictionarySource,
    lexicon: &WordListLexicon,
) -> Result<()> {
    let mut rng = config.rng();
    let mut session = Session::start(Validator::new(lexicon), source, &mut rng);
    run_simple(&mut session, source, &mut rng)
}

fn run_play_command(
    config: &GameConfig,
    source: &DictionarySource,
    lexicon: &WordListLexicon,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let mut rng = config.rng();
    let session = Session::start(Validator::new(lexicon), source, &mut rng);
    run_tui(App::new(session, source, rng))
}
