//! Line command parser using nom
//!
//! Grammar (keywords are case-insensitive):
//! ```text
//! INSERT <id> <size> <header> <payload> [lru|mru]
//! LOOKUP <id> <header>
//! UPDATE <id> <size> <header> <payload>
//! CLEAR
//! DUMP
//! STATS
//! ```
//!
//! `header` and `payload` are bare words or `"double quoted"` strings.
//! Blank lines and lines starting with `#` carry no command.

use nom::{
    branch::alt,
    bytes::complete::{take_till, take_till1},
    character::complete::{alpha1, char, digit1, space1},
    combinator::{map_res, opt},
    sequence::{delimited, preceded, tuple},
    IResult,
};
use tiercache::{ContentItem, EvictionPolicy};

/// A parsed driver command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert an item, optionally overriding the default policy
    Insert {
        item: ContentItem,
        policy: Option<EvictionPolicy>,
    },
    /// Look up an id in the tier its header routes to
    Lookup { id: u64, header: String },
    /// Replace a stored item
    Update { item: ContentItem },
    /// Clear every tier
    Clear,
    /// Print every tier
    Dump,
    /// Print per-tier statistics
    Stats,
}

/// Parse one input line
///
/// # Returns
/// * `Ok(None)` - Blank or comment line
/// * `Ok(Some(command))` - A complete command
/// * `Err(message)` - Unknown keyword or malformed arguments
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (rest, keyword) = alpha1::<_, nom::error::Error<&str>>(line)
        .map_err(|_| format!("invalid command '{}'", line))?;
    let keyword = keyword.to_ascii_uppercase();

    let parsed = match keyword.as_str() {
        "INSERT" => insert_args(rest),
        "LOOKUP" => lookup_args(rest),
        "UPDATE" => update_args(rest),
        "CLEAR" => Ok((rest, Command::Clear)),
        "DUMP" => Ok((rest, Command::Dump)),
        "STATS" => Ok((rest, Command::Stats)),
        _ => return Err(format!("unknown command '{}'", keyword)),
    };

    match parsed {
        Ok((rest, command)) if rest.trim().is_empty() => Ok(Some(command)),
        Ok((rest, _)) => Err(format!("unexpected input '{}' after {}", rest.trim(), keyword)),
        Err(_) => Err(format!("wrong arguments for '{}' command", keyword.to_lowercase())),
    }
}

fn insert_args(input: &str) -> IResult<&str, Command> {
    let (input, item) = item_args(input)?;
    let (input, policy) = opt(map_res(word, |s: &str| s.parse::<EvictionPolicy>()))(input)?;
    Ok((input, Command::Insert { item, policy }))
}

fn lookup_args(input: &str) -> IResult<&str, Command> {
    let (input, (id, header)) = tuple((id, word))(input)?;
    Ok((
        input,
        Command::Lookup {
            id,
            header: header.to_string(),
        },
    ))
}

fn update_args(input: &str) -> IResult<&str, Command> {
    let (input, item) = item_args(input)?;
    Ok((input, Command::Update { item }))
}

fn item_args(input: &str) -> IResult<&str, ContentItem> {
    let (input, (id, size, header, payload)) = tuple((id, size, word, word))(input)?;
    Ok((input, ContentItem::new(id, size, header, payload)))
}

fn id(input: &str) -> IResult<&str, u64> {
    preceded(space1, map_res(digit1, |s: &str| s.parse::<u64>()))(input)
}

fn size(input: &str) -> IResult<&str, usize> {
    preceded(space1, map_res(digit1, |s: &str| s.parse::<usize>()))(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    preceded(space1, alt((quoted, bare)))(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till(|c| c == '"'), char('"'))(input)
}

fn bare(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace())(input)
}
