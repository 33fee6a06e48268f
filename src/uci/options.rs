use std::io::{self, Write};

use crate::board::SearchConfig;

/// Largest depth accepted through `setoption`.
pub const MAX_DEPTH: usize = 10;

/// Largest thread count accepted through `setoption`.
pub const MAX_THREADS: usize = 256;

/// Engine options settable over UCI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UciOptions {
    pub search: SearchConfig,
}

impl UciOptions {
    /// Write the `uci` handshake: identity, options and `uciok`.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name {}", env!("CARGO_PKG_NAME"))?;
        writeln!(out, "id author The {} developers", env!("CARGO_PKG_NAME"))?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max {MAX_DEPTH}",
            self.search.depth
        )?;
        writeln!(
            out,
            "option name Threads type spin default {} min 1 max {MAX_THREADS}",
            self.search.concurrency
        )?;
        writeln!(out, "uciok")
    }

    /// Apply one `setoption`; returns `false` if the name or value is not accepted.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> bool {
        let normalized = name.trim().to_ascii_lowercase();
        let number = value.and_then(|v| v.trim().parse::<usize>().ok());
        match (normalized.as_str(), number) {
            ("depth", Some(depth)) => {
                self.search.depth = depth.clamp(1, MAX_DEPTH);
                true
            }
            ("threads", Some(threads)) => {
                self.search.concurrency = threads.clamp(1, MAX_THREADS);
                true
            }
            _ => false,
        }
    }
}

/// Split `setoption name <name...> [value <value...>]` into name and value.
#[must_use]
pub fn parse_setoption<S: AsRef<str>>(parts: &[S]) -> Option<(String, Option<String>)> {
    if parts.first().map(AsRef::as_ref) != Some("setoption") {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in parts.iter().skip(1).map(AsRef::as_ref) {
        match part {
            "name" => mode = "name",
            "value" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}
