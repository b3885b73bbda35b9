//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI

use crate::output::formatters::length_badge;
use crate::session::{Outcome, Session};
use crate::validation::Lexicon;
use crate::wordlists::DictionarySource;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<L: Lexicon, R: Rng + ?Sized>(
    session: &mut Session<L>,
    source: &DictionarySource,
    rng: &mut R,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, source, rng, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the game loop over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<L, R, I, O>(
    session: &mut Session<L>,
    source: &DictionarySource,
    rng: &mut R,
    input: &mut I,
    output: &mut O,
) -> Result<()>
where
    L: Lexicon,
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Create new words out of the root word.")?;
    writeln!(output, "Commands: ':new' for a new word, ':words' to list your words, ':quit' to exit\n")?;

    print_root(session, output)?;

    let mut line = String::new();
    loop {
        write!(output, "Your word: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                session.new_game(source, rng);
                writeln!(output, "\n🔄 New word!")?;
                print_root(session, output)?;
            }
            ":words" | ":w" => print_words(session, output)?,
            raw => match session.play(raw) {
                Outcome::Ignored => {}
                Outcome::Accepted(word) => {
                    writeln!(
                        output,
                        "  {} {} {}",
                        "✓".green().bold(),
                        length_badge(word.chars().count()),
                        word.bright_white().bold()
                    )?;
                }
                Outcome::Rejected(rejection) => {
                    writeln!(
                        output,
                        "  {} {}: {}",
                        "✗".red().bold(),
                        rejection.title().red().bold(),
                        rejection.message()
                    )?;
                }
            },
        }
    }

    writeln!(
        output,
        "👋 Thanks for playing! You found {} word{}.",
        session.accepted().len(),
        if session.accepted().len() == 1 { "" } else { "s" }
    )?;
    Ok(())
}

fn print_root<L: Lexicon, O: Write>(session: &Session<L>, output: &mut O) -> io::Result<()> {
    writeln!(output, "{}", "─".repeat(60).cyan())?;
    writeln!(
        output,
        "Root word: {}",
        session.root().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(output, "{}", "─".repeat(60).cyan())
}

fn print_words<L: Lexicon, O: Write>(session: &Session<L>, output: &mut O) -> io::Result<()> {
    if session.accepted().is_empty() {
        return writeln!(output, "  No words yet.");
    }
    for word in session.accepted() {
        writeln!(output, "  {} {word}", length_badge(word.chars().count()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Language, Validator, WordListLexicon};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn play(script: &str) -> (Session<WordListLexicon>, String) {
        let lexicon =
            WordListLexicon::from_words(Language::English, ["silk", "worm", "board"]);
        let mut session = Session::new(Validator::new(lexicon), "silkworm");
        let source = DictionarySource::new(vec!["keyboard".to_string()]);
        let mut rng = StdRng::seed_from_u64(5);
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();

        run_simple_with(&mut session, &source, &mut rng, &mut input, &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_and_rejects_words() {
        let (session, output) = play("silk\nsilk\nsilkk\n:quit\n");
        assert_eq!(session.accepted(), ["silk"]);
        assert!(output.contains("Word used already"));
        assert!(output.contains("Word not possible"));
        assert!(output.contains("You found 1 word."));
    }

    #[test]
    fn new_word_resets_the_game() {
        let (session, output) = play("worm\n:new\nboard\n");
        assert_eq!(session.root(), "keyboard");
        assert_eq!(session.accepted(), ["board"]);
        assert!(output.contains("New word!"));
    }

    #[test]
    fn commands_need_a_colon() {
        let (session, output) = play("new\n:quit\n");
        assert_eq!(session.root(), "silkworm");
        assert!(output.contains("Word not possible"));
        assert!(!output.contains("New word!"));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (session, output) = play("\n   \n:q\n");
        assert!(session.accepted().is_empty());
        assert!(!output.contains('✗'));
    }

    #[test]
    fn words_command_lists_recent_first() {
        let (_, output) = play("silk\nworm\n:words\n:quit\n");
        let worm = output.rfind("worm").unwrap();
        let silk = output.rfind("silk").unwrap();
        assert!(worm < silk);
    }

    #[test]
    fn end_of_input_ends_the_game() {
        let (session, output) = play("worm");
        assert_eq!(session.accepted(), ["worm"]);
        assert!(output.contains("Thanks for playing"));
    }
}
