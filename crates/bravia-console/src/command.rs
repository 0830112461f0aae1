// Operator input classification.
//
// One line of input maps to exactly one variant: exact phrases first,
// then the two prefix forms, then the fallback -- anything else is
// treated as a remote-control command name. Matching is case-sensitive
// and whitespace-exact, matching the console's documented surface.

/// A classified line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Help,
    Configure,
    FindTv,
    UpdateCommands,
    ShowCommands,
    ShowInfo,
    ShowOptions,
    UpdateInfo,
    Quit,
    /// `search <rest>` -- remainder trimmed.
    Search(String),
    /// `set option <rest>` -- remainder trimmed, parsed downstream.
    SetOption(String),
    /// Fallback: the line is a remote-control command name.
    Remote(String),
}

impl ConsoleCommand {
    /// Classify one input line.
    pub fn parse(line: &str) -> Self {
        match line {
            "help" | "?" => Self::Help,
            "configure" => Self::Configure,
            "find tv" => Self::FindTv,
            "update commands" => Self::UpdateCommands,
            "show commands" => Self::ShowCommands,
            "show info" => Self::ShowInfo,
            "show options" => Self::ShowOptions,
            "update info" => Self::UpdateInfo,
            "quit" | "exit" => Self::Quit,
            _ if line.starts_with("search") => Self::Search(line["search".len()..].trim().to_string()),
            _ if line.starts_with("set option") => {
                Self::SetOption(line["set option".len()..].trim().to_string())
            }
            other => Self::Remote(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ConsoleCommand;

    #[test]
    fn exact_phrases() {
        assert_eq!(ConsoleCommand::parse("help"), ConsoleCommand::Help);
        assert_eq!(ConsoleCommand::parse("?"), ConsoleCommand::Help);
        assert_eq!(ConsoleCommand::parse("configure"), ConsoleCommand::Configure);
        assert_eq!(ConsoleCommand::parse("find tv"), ConsoleCommand::FindTv);
        assert_eq!(
            ConsoleCommand::parse("update commands"),
            ConsoleCommand::UpdateCommands
        );
        assert_eq!(
            ConsoleCommand::parse("show commands"),
            ConsoleCommand::ShowCommands
        );
        assert_eq!(ConsoleCommand::parse("show info"), ConsoleCommand::ShowInfo);
        assert_eq!(
            ConsoleCommand::parse("show options"),
            ConsoleCommand::ShowOptions
        );
        assert_eq!(ConsoleCommand::parse("update info"), ConsoleCommand::UpdateInfo);
        assert_eq!(ConsoleCommand::parse("quit"), ConsoleCommand::Quit);
        assert_eq!(ConsoleCommand::parse("exit"), ConsoleCommand::Quit);
    }

    #[test]
    fn prefix_forms_strip_and_trim() {
        assert_eq!(
            ConsoleCommand::parse("search vol"),
            ConsoleCommand::Search("vol".into())
        );
        assert_eq!(ConsoleCommand::parse("search"), ConsoleCommand::Search(String::new()));
        assert_eq!(
            ConsoleCommand::parse("set option psk 1234"),
            ConsoleCommand::SetOption("psk 1234".into())
        );
        assert_eq!(
            ConsoleCommand::parse("set option ip 10.0.0.5 extra text"),
            ConsoleCommand::SetOption("ip 10.0.0.5 extra text".into())
        );
    }

    #[test]
    fn keyword_matching_is_case_sensitive() {
        assert_eq!(
            ConsoleCommand::parse("Help"),
            ConsoleCommand::Remote("Help".into())
        );
        assert_eq!(
            ConsoleCommand::parse("FIND TV"),
            ConsoleCommand::Remote("FIND TV".into())
        );
    }

    #[test]
    fn anything_else_is_a_remote_command() {
        assert_eq!(
            ConsoleCommand::parse("power"),
            ConsoleCommand::Remote("power".into())
        );
        assert_eq!(
            ConsoleCommand::parse("volumeup"),
            ConsoleCommand::Remote("volumeup".into())
        );
        assert_eq!(ConsoleCommand::parse(""), ConsoleCommand::Remote(String::new()));
    }
}
