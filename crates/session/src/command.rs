//! Line command parsing.

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Hand out the next question for the weakest descriptor
    Get,
    /// Record a question as done, by id or as last fetched
    Done(Option<String>),
    /// Set a question aside, by id or as last fetched
    Mark(Option<String>),
    /// Show completion statistics
    Stats,
    /// Show the command reference
    Help,
    /// Save progress and end the session
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// The command word is matched case-insensitively; anything after it is
    /// the literal id argument for `done`/`mark`. Unrecognized lines,
    /// including empty ones and known words with unexpected arguments,
    /// yield `None` and are ignored by the session.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = match line.find(char::is_whitespace) {
            Some(idx) => (&line[..idx], line[idx..].trim_start()),
            None => (line, ""),
        };
        let id = || {
            if rest.is_empty() {
                None
            } else {
                Some(rest.to_string())
            }
        };

        match word.to_lowercase().as_str() {
            "get" if rest.is_empty() => Some(Command::Get),
            "done" => Some(Command::Done(id())),
            "mark" => Some(Command::Mark(id())),
            "stats" if rest.is_empty() => Some(Command::Stats),
            "help" if rest.is_empty() => Some(Command::Help),
            "quit" if rest.is_empty() => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_commands() {
        assert_eq!(Command::parse("get"), Some(Command::Get));
        assert_eq!(Command::parse("stats"), Some(Command::Stats));
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("GET"), Some(Command::Get));
        assert_eq!(Command::parse("QuIt"), Some(Command::Quit));
        assert_eq!(Command::parse("DONE"), Some(Command::Done(None)));
    }

    #[test]
    fn test_parse_done_and_mark_take_literal_ids() {
        assert_eq!(
            Command::parse("done q17"),
            Some(Command::Done(Some("q17".to_string())))
        );
        assert_eq!(
            Command::parse("mark q17 part b"),
            Some(Command::Mark(Some("q17 part b".to_string())))
        );
        // Id case is preserved even though the command word is not.
        assert_eq!(
            Command::parse("DONE Q17"),
            Some(Command::Done(Some("Q17".to_string())))
        );
    }

    #[test]
    fn test_parse_bare_done_and_mark() {
        assert_eq!(Command::parse("done"), Some(Command::Done(None)));
        assert_eq!(Command::parse("mark  "), Some(Command::Mark(None)));
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        assert_eq!(Command::parse("  get  "), Some(Command::Get));
        assert_eq!(
            Command::parse("\tdone  q1 "),
            Some(Command::Done(Some("q1".to_string())))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("fetch"), None);
        assert_eq!(Command::parse("get q1"), None);
        assert_eq!(Command::parse("statistics"), None);
        assert_eq!(Command::parse("quit now"), None);
    }
}
