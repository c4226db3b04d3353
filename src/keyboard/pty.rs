//! [`PtyKeyboard`] — types into a program running in a pseudo-terminal.
//!
//! Key codes are translated to the bytes a terminal emulator would send:
//! printable characters as themselves, navigation and function keys as
//! xterm escape sequences. Held CTRL turns letters into control characters,
//! held ALT prefixes ESC, and held SHIFT upper-cases letters. Keys with no
//! terminal encoding (media keys, lock keys, GUI) are dropped.

use super::Keyboard;
use crate::keys::*;
use crate::pty::PtySession;
use crate::pty_reader::spawn_reader;
use anyhow::Result;
use std::borrow::Cow;
use tracing::trace;

/// A keyboard whose keystrokes become terminal input for a spawned program.
pub struct PtyKeyboard {
    session: PtySession,
    /// Modifier codes currently held down.
    held: Vec<u8>,
}

impl PtyKeyboard {
    /// Spawn `command` in a PTY and pass its output to `handler`.
    pub fn spawn<S, F>(command: &str, args: &[S], handler: F) -> Result<Self>
    where
        S: AsRef<str>,
        F: Fn(&[u8]) + Send + 'static,
    {
        let (session, reader) = PtySession::spawn(command, args)?;
        spawn_reader(reader, handler);
        Ok(Self {
            session,
            held: Vec::new(),
        })
    }
}

/// Terminal input for a key code, given the modifier codes held down.
fn encode(code: u8, held: &[u8]) -> Option<Cow<'static, [u8]>> {
    let holding = |pair: [u8; 2]| held.iter().any(|c| pair.contains(c));
    let ctrl = holding([KEY_LEFT_CTRL, KEY_RIGHT_CTRL]);
    let alt = holding([KEY_LEFT_ALT, KEY_RIGHT_ALT]);
    let shift = holding([KEY_LEFT_SHIFT, KEY_RIGHT_SHIFT]);

    let bytes: Cow<'static, [u8]> = match code {
        b'a'..=b'z' | b'A'..=b'Z' if ctrl => Cow::Owned(vec![code & 0x1f]),
        b'a'..=b'z' if shift => Cow::Owned(vec![code.to_ascii_uppercase()]),
        0x20..=0x7e => Cow::Owned(vec![code]),
        _ => Cow::Borrowed(special_sequence(code)?),
    };

    if alt {
        let mut prefixed = vec![0x1b];
        prefixed.extend_from_slice(&bytes);
        Some(Cow::Owned(prefixed))
    } else {
        Some(bytes)
    }
}

fn special_sequence(code: u8) -> Option<&'static [u8]> {
    let bytes: &'static [u8] = match code {
        KEY_RETURN | KEY_KP_ENTER => b"\r",
        KEY_ESC => b"\x1b",
        KEY_TAB => b"\t",
        KEY_BACKSPACE => b"\x7f",
        KEY_DELETE => b"\x1b[3~",
        KEY_INSERT => b"\x1b[2~",
        KEY_UP_ARROW => b"\x1b[A",
        KEY_DOWN_ARROW => b"\x1b[B",
        KEY_RIGHT_ARROW => b"\x1b[C",
        KEY_LEFT_ARROW => b"\x1b[D",
        KEY_HOME => b"\x1b[H",
        KEY_END => b"\x1b[F",
        KEY_PAGE_UP => b"\x1b[5~",
        KEY_PAGE_DOWN => b"\x1b[6~",
        KEY_KP_SLASH => b"/",
        KEY_KP_ASTERISK => b"*",
        KEY_KP_MINUS => b"-",
        KEY_KP_PLUS => b"+",
        KEY_KP_DOT => b".",
        KEY_KP_0 => b"0",
        KEY_KP_1..=KEY_KP_9 => {
            const DIGITS: [&[u8]; 9] = [b"1", b"2", b"3", b"4", b"5", b"6", b"7", b"8", b"9"];
            DIGITS[(code - KEY_KP_1) as usize]
        }
        KEY_F1..=KEY_F12 => {
            const FKEYS: [&[u8]; 12] = [
                b"\x1bOP", b"\x1bOQ", b"\x1bOR", b"\x1bOS", b"\x1b[15~", b"\x1b[17~",
                b"\x1b[18~", b"\x1b[19~", b"\x1b[20~", b"\x1b[21~", b"\x1b[23~", b"\x1b[24~",
            ];
            FKEYS[(code - KEY_F1) as usize]
        }
        _ => return None,
    };
    Some(bytes)
}

impl Keyboard for PtyKeyboard {
    fn press(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Modifier(code) => self.held.push(code),
            Key::Standard(code) => match encode(code, &self.held) {
                Some(bytes) => {
                    trace!(%key, ?bytes, "pty input");
                    self.session.write(&bytes)?;
                }
                None => trace!(%key, "no terminal encoding"),
            },
            Key::Media(_) => trace!(%key, "media key ignored by terminal"),
        }
        Ok(())
    }

    fn release(&mut self, key: Key) -> Result<()> {
        if let Key::Modifier(code) = key {
            self.held.retain(|c| *c != code);
        }
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        let input = text.replace('\n', "\r");
        self.session.write(input.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_sequences() {
        assert_eq!(special_sequence(KEY_RETURN), Some(&b"\r"[..]));
        assert_eq!(special_sequence(KEY_UP_ARROW), Some(&b"\x1b[A"[..]));
        assert_eq!(special_sequence(KEY_F1 + 4), Some(&b"\x1b[15~"[..]));
        assert_eq!(special_sequence(KEY_KP_1 + 2), Some(&b"3"[..]));
        assert_eq!(special_sequence(KEY_LEFT_GUI), None);
        assert_eq!(special_sequence(KEY_CAPS_LOCK), None);
    }

    #[test]
    fn test_encode_with_modifiers() {
        assert_eq!(encode(b'c', &[]).as_deref(), Some(&b"c"[..]));
        assert_eq!(encode(b'c', &[KEY_LEFT_CTRL]).as_deref(), Some(&[0x03][..]));
        assert_eq!(encode(b'c', &[KEY_RIGHT_SHIFT]).as_deref(), Some(&b"C"[..]));
        assert_eq!(encode(b'x', &[KEY_LEFT_ALT]).as_deref(), Some(&b"\x1bx"[..]));
        assert_eq!(
            encode(KEY_UP_ARROW, &[KEY_LEFT_ALT]).as_deref(),
            Some(&b"\x1b\x1b[A"[..])
        );
        assert_eq!(encode(KEY_MENU, &[]), None);
    }
}
