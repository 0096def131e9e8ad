use std::{
    borrow::Cow,
    io::{self, BufRead},
};

use colored::Colorize;
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::errors::CliError;
use crate::cli::output;
use crate::cli::shell_context::{CliMode, LoopControl, ShellContext};

/// Setting this variable switches the shell to reading commands from stdin.
pub const SCRIPT_ENV_VAR: &str = "TALLY_CLI_SCRIPT";

const PROMPT: &str = "tally> ";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV_VAR).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandWords, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandWords::new(context.registry.vocabulary())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
                continue;
            }
            Err(ReadlineError::Eof) => {
                output::info("Goodbye.");
                break;
            }
            Err(err) => return Err(err.into()),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line);
        if execute(context, line)? == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

/// Runs stdin line by line. Blank lines and `#` comments are skipped.
fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if execute(context, line)? == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

/// A failing command is reported and the loop carries on.
fn execute(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    match context.run_line(line) {
        Ok(control) => Ok(control),
        Err(err) => {
            context.report_error(err)?;
            Ok(LoopControl::Continue)
        }
    }
}

/// Line-editor helper that knows the command words: it completes and hints
/// the first word, and keeps reading while a quote is left open.
struct CommandWords {
    words: Vec<&'static str>,
}

impl CommandWords {
    fn new(words: impl IntoIterator<Item = &'static str>) -> Self {
        let mut words: Vec<_> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Command words starting with `prefix`, or nothing once the cursor has
    /// moved past the first word.
    fn matching<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        let typed = prefix.trim_start();
        let in_first_word = !typed.contains(char::is_whitespace);
        let needle = typed.to_ascii_lowercase();
        self.words
            .iter()
            .copied()
            .filter(move |word| in_first_word && word.starts_with(needle.as_str()))
    }
}

impl Helper for CommandWords {}

impl Completer for CommandWords {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix.len() - prefix.trim_start().len();
        let candidates = self
            .matching(prefix)
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandWords {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &ReadlineContext<'_>) -> Option<String> {
        if line.trim().is_empty() || pos < line.len() {
            return None;
        }
        let typed = line.trim_start().len();
        self.matching(line)
            .find(|word| word.len() > typed)
            .map(|word| word[typed..].to_string())
    }
}

impl Highlighter for CommandWords {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dimmed().to_string())
    }
}

impl Validator for CommandWords {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        match shell_words::split(ctx.input()) {
            Err(_) => Ok(ValidationResult::Incomplete),
            Ok(_) => Ok(ValidationResult::Valid(None)),
        }
    }
}
