/// One line of UCI input, split into its command and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    Position(Vec<String>),
    Go(Vec<String>),
    SetOption(Vec<String>),
    Debug(Option<String>),
    Register,
    Stop,
    PonderHit,
    Quit,
    /// Unrecognized command word
    Unknown(String),
}

/// Parse an input line, or `None` for a blank line.
///
/// Arbitrary whitespace between tokens is allowed.
#[must_use]
pub fn parse_uci_command(line: &str) -> Option<UciCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let (&first, _) = parts.split_first()?;

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match first {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => UciCommand::Position(owned_parts()),
        "go" => UciCommand::Go(owned_parts()),
        "setoption" => UciCommand::SetOption(owned_parts()),
        "debug" => UciCommand::Debug(parts.get(1).map(|v| (*v).to_string())),
        "register" => UciCommand::Register,
        "stop" => UciCommand::Stop,
        "ponderhit" => UciCommand::PonderHit,
        "quit" => UciCommand::Quit,
        other => UciCommand::Unknown(other.to_string()),
    };

    Some(cmd)
}

/// Depth requested by `go depth N`, if any.
#[must_use]
pub fn go_depth(parts: &[String]) -> Option<usize> {
    parts
        .iter()
        .position(|p| p == "depth")
        .and_then(|i| parts.get(i + 1))
        .and_then(|v| v.parse::<usize>().ok())
}
