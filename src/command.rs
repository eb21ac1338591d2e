/// One line of user input, decoded
///
/// Parsing never fails: anything that is not a known command word becomes
/// [`Command::Unknown`], which the dispatcher answers with a generic
/// message. Argument-carrying commands keep their argument verbatim;
/// validation happens at dispatch time so a bad argument is a user error,
/// not a parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `show` - render all annotations
    Show,
    /// `important` - render annotations with at least one `!`
    Important,
    /// `user <name>` - render annotations by the named author
    User(String),
    /// `date <spec>` - render annotations dated on/after the threshold
    Date(String),
    /// `sort <type>` - render in the requested order
    Sort(String),
    /// `exit` - terminate the process
    Exit,
    /// Anything else
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if let Some(name) = line.strip_prefix("user ") {
            return Command::User(name.to_string());
        }
        if let Some(key) = line.strip_prefix("sort ") {
            return Command::Sort(key.to_string());
        }
        if let Some(spec) = line.strip_prefix("date ") {
            return Command::Date(spec.to_string());
        }
        match line {
            "show" => Command::Show,
            "important" => Command::Important,
            "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}
