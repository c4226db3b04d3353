//! Script tokenizer and command parser.
//!
//! [`Commands`] splits a script into individual command strings, and
//! [`parse_command`] turns one command string into a runnable
//! [`DuckyCommand`]. Parsing never fails: malformed input degrades to a
//! harmless command or to nothing at all.

use crate::command::DuckyCommand;
use crate::commands::{Chord, Delay, PrintPaced, Press, Release, SendKey, TypeString};
use crate::keys;
use std::path::Path;

use anyhow::{Context as _, Result};

/// Lazily splits a script into command strings.
///
/// Commands end at a newline or at a `;`. The one exception is the quoted
/// argument of `STRING`, `ECHO` and `PRINT`: when the argument opens with `"`
/// or `'`, semicolons up to the matching closing quote (one not preceded by a
/// backslash) are part of the text. An unclosed quote runs to the end of the
/// line. Commands that are empty after trimming are skipped.
///
/// ```
/// use duckyscript::parser::Commands;
///
/// let commands: Vec<_> = Commands::new("PRESS A; PRESS B\nSTRING \"a;b\"").collect();
/// assert_eq!(commands, ["PRESS A", " PRESS B", "STRING \"a;b\""]);
/// ```
pub struct Commands<'a> {
    lines: std::str::Lines<'a>,
    buffer: &'a str,
}

impl<'a> Commands<'a> {
    pub fn new(script: &'a str) -> Self {
        Self {
            lines: script.lines(),
            buffer: "",
        }
    }
}

impl<'a> Iterator for Commands<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            if self.buffer.is_empty() {
                self.buffer = self.lines.next()?;
                continue;
            }
            let (command, rest) = match find_separator(self.buffer) {
                Some(idx) => (&self.buffer[..idx], &self.buffer[idx + 1..]),
                None => (self.buffer, ""),
            };
            self.buffer = rest;
            if !command.trim().is_empty() {
                return Some(command);
            }
        }
    }
}

const TEXT_COMMANDS: &[&str] = &[TypeString::NAME, TypeString::ALIAS, PrintPaced::NAME];

/// Byte index of the first `;` that ends the command at the start of `line`.
fn find_separator(line: &str) -> Option<usize> {
    let start = quoted_argument_end(line).unwrap_or(0);
    line[start..].find(';').map(|idx| start + idx)
}

/// Byte index just past the quoted argument of a text command, or `None` if
/// `line` does not start with one.
fn quoted_argument_end(line: &str) -> Option<usize> {
    let (name, args) = next_token(line);
    if !TEXT_COMMANDS.contains(&name) {
        return None;
    }
    let arg = args.trim_start();
    let quote = arg.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let body_start = line.len() - arg.len() + quote.len_utf8();
    let end = match closing_quote(&line[body_start..], quote) {
        Some(idx) => body_start + idx + quote.len_utf8(),
        None => line.len(),
    };
    Some(end)
}

/// Byte index of the first `quote` in `body` not preceded by a backslash.
fn closing_quote(body: &str, quote: char) -> Option<usize> {
    let mut prev = None;
    for (i, ch) in body.char_indices() {
        if ch == quote && prev != Some('\\') {
            return Some(i);
        }
        prev = Some(ch);
    }
    None
}

/// Extract the text argument of `STRING`, `ECHO` and `PRINT`.
///
/// Leading whitespace is skipped. If the argument starts with `"` or `'`, the
/// text runs to the matching unescaped closing quote (or to the end of the
/// command if there is none) and `\` followed by that same quote becomes the
/// bare quote. No other escapes are processed. Unquoted arguments are returned
/// as written.
///
/// ```
/// use duckyscript::parser::extract_string;
///
/// assert_eq!(extract_string(r#"  "say \"hi\"" ignored"#), r#"say "hi""#);
/// assert_eq!(extract_string("  plain text "), "plain text ");
/// ```
pub fn extract_string(args: &str) -> String {
    let args = args.trim_start();
    let Some(quote) = args.chars().next().filter(|c| *c == '"' || *c == '\'') else {
        return args.to_string();
    };

    let body = &args[quote.len_utf8()..];
    let end = closing_quote(body, quote).unwrap_or(body.len());

    let escaped = format!("\\{quote}");
    body[..end].replace(&escaped, &quote.to_string())
}

/// Split off the first whitespace-delimited token of `s`.
///
/// Returns the token and everything after it (not trimmed).
pub(crate) fn next_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], &s[idx..]),
        None => (s, ""),
    }
}

/// Parse the leading integer of `s`, ignoring anything after the digits.
///
/// Leading whitespace and a single sign are accepted, so `" 100ms"` is 100.
/// Returns `None` when no digits are present or the value overflows.
pub(crate) fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

type ParseFn = fn(&str) -> Box<dyn DuckyCommand>;

static REGISTRY: &[(&str, ParseFn)] = &[
    (TypeString::NAME, TypeString::parse_boxed),
    (TypeString::ALIAS, TypeString::parse_boxed),
    (PrintPaced::NAME, PrintPaced::parse_boxed),
    (SendKey::NAME, SendKey::parse_boxed),
    (Delay::NAME, Delay::parse_boxed),
    (Press::NAME, Press::parse_boxed),
    (Release::NAME, Release::parse_boxed),
];

const COMMENTS: &[&str] = &["REM", "#"];

/// Parse a single command string.
///
/// Returns `None` for comments and blank commands. A leading word that is not
/// a keyword is treated as a key: a modifier starts a [`Chord`] over the whole
/// command, anything else becomes a single keystroke.
pub fn parse_command(command: &str) -> Option<Box<dyn DuckyCommand>> {
    let (name, args) = next_token(command);
    if name.is_empty() || COMMENTS.contains(&name) {
        return None;
    }
    let parsed = match REGISTRY.iter().find(|(keyword, _)| *keyword == name) {
        Some((_, parse)) => parse(args),
        None if keys::resolve(name).is_modifier() => Chord::parse_boxed(command),
        None => Chord::keystroke(name),
    };
    Some(parsed)
}

/// Parse a whole script eagerly.
///
/// [`Engine::execute`](crate::Engine::execute) parses lazily and does not need
/// this; it is useful for inspecting a script without running it.
///
/// ```
/// use duckyscript::parse_str;
///
/// let commands = parse_str("REM setup\nGUI r\nDELAY 500\nSTRING cmd\nENTER");
/// let names: Vec<_> = commands.iter().map(|c| c.name()).collect();
/// assert_eq!(names, ["chord", "DELAY", "STRING", "chord"]);
/// ```
pub fn parse_str(script: &str) -> Vec<Box<dyn DuckyCommand>> {
    Commands::new(script).filter_map(parse_command).collect()
}

/// Read a script file into memory.
pub fn read_script(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script file: {}", path.display()))
}
