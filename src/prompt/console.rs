//! Console prompts.

use std::fmt;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};

use dialoguer::Input;

use super::Prompt;
use crate::core::{GameError, Result};
use crate::players::Player;

/// Answer that means "roll again".
const ROLL_TOKEN: &str = "r";

/// Answer that means "play another round".
const REPLAY_TOKEN: &str = "yes";

/// `r`, any case, surrounding whitespace ignored. Anything else holds.
#[must_use]
pub fn parse_roll_answer(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(ROLL_TOKEN)
}

/// `yes`, any case, surrounding whitespace ignored. Anything else stops.
#[must_use]
pub fn parse_replay_answer(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(REPLAY_TOKEN)
}

/// Where console answers come from.
enum Source {
    /// Interactive terminal, edited through dialoguer.
    Terminal,
    /// Plain lines from piped or redirected input.
    Lines(Box<dyn BufRead>),
}

/// Prompt that reads answers from the console.
///
/// On a terminal the question is asked through dialoguer. Otherwise each
/// answer is one line of input, and end of input is `InputClosed`.
pub struct ConsolePrompt {
    source: Source,
}

impl ConsolePrompt {
    /// Prompt on stdin, interactive only when stdin and stderr are terminals.
    pub fn new() -> Self {
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            Self {
                source: Source::Terminal,
            }
        } else {
            Self::from_reader(BufReader::new(io::stdin()))
        }
    }

    /// Prompt that reads one answer per line from `reader`.
    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        Self {
            source: Source::Lines(Box::new(reader)),
        }
    }

    fn ask(&mut self, question: &str, waiting_for: &'static str) -> Result<String> {
        match &mut self.source {
            Source::Terminal => {
                let answer = Input::<String>::new()
                    .with_prompt(question)
                    .allow_empty(true)
                    .report(false)
                    .interact_text()?;
                Ok(answer)
            }
            Source::Lines(reader) => {
                let mut stdout = io::stdout();
                write!(stdout, "{question} ")?;
                stdout.flush()?;
                let mut line = String::new();
                if reader.read_line(&mut line)? == 0 {
                    return Err(GameError::InputClosed(waiting_for));
                }
                Ok(line)
            }
        }
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsolePrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            Source::Terminal => "terminal",
            Source::Lines(_) => "lines",
        };
        f.debug_struct("ConsolePrompt").field("source", &source).finish()
    }
}

impl Prompt for ConsolePrompt {
    fn keep_rolling(&mut self, player: &Player, turn_score: u32) -> Result<bool> {
        let answer = self.ask("Roll again or hold? (r/h)", "roll decision")?;
        let again = parse_roll_answer(&answer);
        log::debug!("{} answered {:?} at turn score {}", player.name(), answer.trim(), turn_score);
        Ok(again)
    }

    fn play_again(&mut self) -> Result<bool> {
        println!();
        let answer = self.ask("Play another game? (yes/no)", "replay answer")?;
        Ok(parse_replay_answer(&answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_answer() {
        assert!(parse_roll_answer("r"));
        assert!(parse_roll_answer("R"));
        assert!(parse_roll_answer("  r \n"));

        assert!(!parse_roll_answer("h"));
        assert!(!parse_roll_answer(""));
        assert!(!parse_roll_answer("roll"));
    }

    #[test]
    fn test_replay_answer() {
        assert!(parse_replay_answer("yes"));
        assert!(parse_replay_answer("YES"));
        assert!(parse_replay_answer("\tYes "));

        assert!(!parse_replay_answer("y"));
        assert!(!parse_replay_answer("no"));
        assert!(!parse_replay_answer("yes please"));
        assert!(!parse_replay_answer(""));
    }

    #[test]
    fn test_lines_roll_decisions() {
        let ann = Player::human("Ann");
        let mut prompt = ConsolePrompt::from_reader(io::Cursor::new("R\n  h \n\n"));

        assert!(prompt.keep_rolling(&ann, 3).unwrap());
        assert!(!prompt.keep_rolling(&ann, 7).unwrap());
        // Empty line holds
        assert!(!prompt.keep_rolling(&ann, 7).unwrap());
    }

    #[test]
    fn test_lines_replay_answers() {
        let mut prompt = ConsolePrompt::from_reader(io::Cursor::new("yes \nno\n"));

        assert!(prompt.play_again().unwrap());
        assert!(!prompt.play_again().unwrap());
    }

    #[test]
    fn test_lines_end_of_input_is_closed() {
        let ann = Player::human("Ann");
        let mut prompt = ConsolePrompt::from_reader(io::Cursor::new("r"));

        // Last line without a newline still counts
        assert!(prompt.keep_rolling(&ann, 2).unwrap());
        assert!(matches!(
            prompt.keep_rolling(&ann, 4),
            Err(GameError::InputClosed("roll decision"))
        ));
        assert!(matches!(
            prompt.play_again(),
            Err(GameError::InputClosed("replay answer"))
        ));
    }
}
