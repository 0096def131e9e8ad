use crate::cli::errors::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// One shell command: its canonical name, alternative spellings, help text,
/// and the function that runs it.
pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            aliases: &[],
            description,
            usage,
            handler,
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn answers_to(&self, word: &str) -> bool {
        self.name == word || self.aliases.contains(&word)
    }
}

/// The command table. Entries keep registration order, which is the order
/// `help` prints them in.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry`, replacing an earlier entry with the same name.
    pub fn register(&mut self, entry: CommandEntry) {
        match self.entries.iter_mut().find(|known| known.name == entry.name) {
            Some(known) => *known = entry,
            None => self.entries.push(entry),
        }
    }

    /// Finds the entry for a name or alias.
    pub fn get(&self, word: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.answers_to(word))
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Every word the shell accepts as a command, aliases included.
    pub fn vocabulary(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .flat_map(|entry| std::iter::once(entry.name).chain(entry.aliases.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn aliases_resolve_to_their_entry() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("exit", "Leave", "exit", noop).with_aliases(&["quit"]));
        assert_eq!(registry.get("quit").map(|entry| entry.name), Some("exit"));
        assert!(registry.get("q").is_none());
        assert_eq!(registry.vocabulary().collect::<Vec<_>>(), vec!["exit", "quit"]);
    }

    #[test]
    fn re_registering_a_name_replaces_it_in_place() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("budget", "old", "budget", noop));
        registry.register(CommandEntry::new("help", "Help", "help", noop));
        registry.register(CommandEntry::new("budget", "new", "budget", noop));
        let described: Vec<_> = registry
            .entries()
            .iter()
            .map(|entry| (entry.name, entry.description))
            .collect();
        assert_eq!(described, vec![("budget", "new"), ("help", "Help")]);
    }
}
