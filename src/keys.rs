//! Key name resolution.
//!
//! Script tokens such as `ENTER`, `CTRL` or `MEDIA_MUTE` resolve to a [`Key`]
//! through [`resolve`]. Codes follow the BLE keyboard convention used by the
//! reference hardware: printable ASCII characters are their own code, special
//! keys live in `0x80..=0xFB`, and media keys are two-byte consumer-control
//! bitmasks.

use std::fmt;

/// A resolved key, tagged by the report it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// An ordinary key or printable character.
    Standard(u8),
    /// One of the eight modifier keys.
    Modifier(u8),
    /// A consumer-control (media) key.
    Media([u8; 2]),
}

impl Key {
    pub fn is_modifier(&self) -> bool {
        match self {
            Key::Modifier(code) => {
                debug_assert!(is_modifier_key(*code), "modifier tag on 0x{code:02X}");
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Standard(code) => match name_of(*code) {
                Some(name) => write!(f, "{name}"),
                None if code.is_ascii_graphic() => write!(f, "'{}'", *code as char),
                None => write!(f, "0x{code:02X}"),
            },
            Key::Modifier(code) => match name_of(*code) {
                Some(name) => write!(f, "{name}"),
                None => write!(f, "modifier 0x{code:02X}"),
            },
            Key::Media(code) => match MEDIA_KEYS.iter().find(|(_, c)| c == code) {
                Some((name, _)) => write!(f, "{name}"),
                None => write!(f, "media [{}, {}]", code[0], code[1]),
            },
        }
    }
}

pub const KEY_LEFT_CTRL: u8 = 0x80;
pub const KEY_LEFT_SHIFT: u8 = 0x81;
pub const KEY_LEFT_ALT: u8 = 0x82;
pub const KEY_LEFT_GUI: u8 = 0x83;
pub const KEY_RIGHT_CTRL: u8 = 0x84;
pub const KEY_RIGHT_SHIFT: u8 = 0x85;
pub const KEY_RIGHT_ALT: u8 = 0x86;
pub const KEY_RIGHT_GUI: u8 = 0x87;

pub const KEY_UP_ARROW: u8 = 0xDA;
pub const KEY_DOWN_ARROW: u8 = 0xD9;
pub const KEY_LEFT_ARROW: u8 = 0xD8;
pub const KEY_RIGHT_ARROW: u8 = 0xD7;
pub const KEY_BACKSPACE: u8 = 0xB2;
pub const KEY_TAB: u8 = 0xB3;
pub const KEY_RETURN: u8 = 0xB0;
pub const KEY_ESC: u8 = 0xB1;
pub const KEY_INSERT: u8 = 0xD1;
pub const KEY_DELETE: u8 = 0xD4;
pub const KEY_PAGE_UP: u8 = 0xD3;
pub const KEY_PAGE_DOWN: u8 = 0xD6;
pub const KEY_HOME: u8 = 0xD2;
pub const KEY_END: u8 = 0xD5;
pub const KEY_CAPS_LOCK: u8 = 0xC1;
pub const KEY_MENU: u8 = 0xED;
pub const KEY_PRINT_SCREEN: u8 = 0xCE;
pub const KEY_SCROLL_LOCK: u8 = 0xCF;
pub const KEY_PAUSE: u8 = 0xD0;

pub const KEY_F1: u8 = 0xC2;
pub const KEY_F12: u8 = 0xCD;
pub const KEY_F13: u8 = 0xF0;
pub const KEY_F24: u8 = 0xFB;

pub const KEY_NUM_LOCK: u8 = 0xDB;
pub const KEY_KP_SLASH: u8 = 0xDC;
pub const KEY_KP_ASTERISK: u8 = 0xDD;
pub const KEY_KP_MINUS: u8 = 0xDE;
pub const KEY_KP_PLUS: u8 = 0xDF;
pub const KEY_KP_ENTER: u8 = 0xE0;
pub const KEY_KP_1: u8 = 0xE1;
pub const KEY_KP_9: u8 = 0xE9;
pub const KEY_KP_0: u8 = 0xEA;
pub const KEY_KP_DOT: u8 = 0xEB;

/// Standard and modifier keys, tagged where they are defined.
static KEYS: &[(&str, Key)] = &[
    ("ENTER", Key::Standard(KEY_RETURN)),
    ("ESC", Key::Standard(KEY_ESC)),
    ("TAB", Key::Standard(KEY_TAB)),
    ("SPACE", Key::Standard(b' ')),
    ("BACKSPACE", Key::Standard(KEY_BACKSPACE)),
    ("DELETE", Key::Standard(KEY_DELETE)),
    ("CTRL", Key::Modifier(KEY_LEFT_CTRL)),
    ("SHIFT", Key::Modifier(KEY_LEFT_SHIFT)),
    ("ALT", Key::Modifier(KEY_LEFT_ALT)),
    ("GUI", Key::Modifier(KEY_LEFT_GUI)),
    ("LEFT_CTRL", Key::Modifier(KEY_LEFT_CTRL)),
    ("LEFT_SHIFT", Key::Modifier(KEY_LEFT_SHIFT)),
    ("LEFT_ALT", Key::Modifier(KEY_LEFT_ALT)),
    ("LEFT_GUI", Key::Modifier(KEY_LEFT_GUI)),
    ("RIGHT_CTRL", Key::Modifier(KEY_RIGHT_CTRL)),
    ("RIGHT_SHIFT", Key::Modifier(KEY_RIGHT_SHIFT)),
    ("RIGHT_ALT", Key::Modifier(KEY_RIGHT_ALT)),
    ("RIGHT_GUI", Key::Modifier(KEY_RIGHT_GUI)),
    ("UP", Key::Standard(KEY_UP_ARROW)),
    ("DOWN", Key::Standard(KEY_DOWN_ARROW)),
    ("LEFT", Key::Standard(KEY_LEFT_ARROW)),
    ("RIGHT", Key::Standard(KEY_RIGHT_ARROW)),
    ("INSERT", Key::Standard(KEY_INSERT)),
    ("HOME", Key::Standard(KEY_HOME)),
    ("END", Key::Standard(KEY_END)),
    ("PAGE_UP", Key::Standard(KEY_PAGE_UP)),
    ("PAGE_DOWN", Key::Standard(KEY_PAGE_DOWN)),
    ("F1", Key::Standard(KEY_F1)),
    ("F2", Key::Standard(KEY_F1 + 1)),
    ("F3", Key::Standard(KEY_F1 + 2)),
    ("F4", Key::Standard(KEY_F1 + 3)),
    ("F5", Key::Standard(KEY_F1 + 4)),
    ("F6", Key::Standard(KEY_F1 + 5)),
    ("F7", Key::Standard(KEY_F1 + 6)),
    ("F8", Key::Standard(KEY_F1 + 7)),
    ("F9", Key::Standard(KEY_F1 + 8)),
    ("F10", Key::Standard(KEY_F1 + 9)),
    ("F11", Key::Standard(KEY_F1 + 10)),
    ("F12", Key::Standard(KEY_F12)),
    ("F13", Key::Standard(KEY_F13)),
    ("F14", Key::Standard(KEY_F13 + 1)),
    ("F15", Key::Standard(KEY_F13 + 2)),
    ("F16", Key::Standard(KEY_F13 + 3)),
    ("F17", Key::Standard(KEY_F13 + 4)),
    ("F18", Key::Standard(KEY_F13 + 5)),
    ("F19", Key::Standard(KEY_F13 + 6)),
    ("F20", Key::Standard(KEY_F13 + 7)),
    ("F21", Key::Standard(KEY_F13 + 8)),
    ("F22", Key::Standard(KEY_F13 + 9)),
    ("F23", Key::Standard(KEY_F13 + 10)),
    ("F24", Key::Standard(KEY_F24)),
    ("CAPS_LOCK", Key::Standard(KEY_CAPS_LOCK)),
    ("MENU", Key::Standard(KEY_MENU)),
    ("PRINT_SCREEN", Key::Standard(KEY_PRINT_SCREEN)),
    ("SCROLL_LOCK", Key::Standard(KEY_SCROLL_LOCK)),
    ("PAUSE", Key::Standard(KEY_PAUSE)),
    ("NUM_LOCK", Key::Standard(KEY_NUM_LOCK)),
    ("KP_SLASH", Key::Standard(KEY_KP_SLASH)),
    ("KP_ASTERISK", Key::Standard(KEY_KP_ASTERISK)),
    ("KP_MINUS", Key::Standard(KEY_KP_MINUS)),
    ("KP_PLUS", Key::Standard(KEY_KP_PLUS)),
    ("KP_ENTER", Key::Standard(KEY_KP_ENTER)),
    ("KP_1", Key::Standard(KEY_KP_1)),
    ("KP_2", Key::Standard(KEY_KP_1 + 1)),
    ("KP_3", Key::Standard(KEY_KP_1 + 2)),
    ("KP_4", Key::Standard(KEY_KP_1 + 3)),
    ("KP_5", Key::Standard(KEY_KP_1 + 4)),
    ("KP_6", Key::Standard(KEY_KP_1 + 5)),
    ("KP_7", Key::Standard(KEY_KP_1 + 6)),
    ("KP_8", Key::Standard(KEY_KP_1 + 7)),
    ("KP_9", Key::Standard(KEY_KP_9)),
    ("KP_0", Key::Standard(KEY_KP_0)),
    ("KP_DOT", Key::Standard(KEY_KP_DOT)),
];

/// Consumer-control keys as two-byte bitmask reports.
static MEDIA_KEYS: &[(&str, [u8; 2])] = &[
    ("MEDIA_NEXT_TRACK", [1, 0]),
    ("MEDIA_PREVIOUS_TRACK", [2, 0]),
    ("MEDIA_STOP", [4, 0]),
    ("MEDIA_PLAY_PAUSE", [8, 0]),
    ("MEDIA_MUTE", [16, 0]),
    ("MEDIA_VOLUME_UP", [32, 0]),
    ("MEDIA_VOLUME_DOWN", [64, 0]),
    ("MEDIA_WWW_HOME", [128, 0]),
    ("MEDIA_LOCAL_MACHINE_BROWSER", [0, 1]),
    ("MEDIA_CALCULATOR", [0, 2]),
    ("MEDIA_WWW_BOOKMARKS", [0, 4]),
    ("MEDIA_WWW_SEARCH", [0, 8]),
    ("MEDIA_WWW_STOP", [0, 16]),
    ("MEDIA_WWW_BACK", [0, 32]),
    ("MEDIA_CONSUMER_CONTROL_CONFIGURATION", [0, 64]),
    ("MEDIA_EMAIL_READER", [0, 128]),
];

/// Look up a key name in the standard/modifier table, then the media table.
pub fn lookup(name: &str) -> Option<Key> {
    KEYS.iter()
        .find(|(n, _)| *n == name)
        .map(|(_, key)| *key)
        .or_else(|| {
            MEDIA_KEYS
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, code)| Key::Media(*code))
        })
}

/// Resolve a script token to a key. Never fails.
///
/// Names are matched case-sensitively. A token that is not in either table
/// degrades to `Standard` with the token's first byte as the code, so `q`
/// types a literal `q`. The empty token resolves to `Standard(0)`.
///
/// ```
/// use duckyscript::keys::{resolve, Key, KEY_LEFT_CTRL};
///
/// assert_eq!(resolve("CTRL"), Key::Modifier(KEY_LEFT_CTRL));
/// assert_eq!(resolve("q"), Key::Standard(b'q'));
/// ```
pub fn resolve(name: &str) -> Key {
    lookup(name).unwrap_or_else(|| {
        let code = name.as_bytes().first().copied().unwrap_or(0);
        tracing::debug!(name, code, "unknown key name, using literal character");
        Key::Standard(code)
    })
}

/// Whether a code is one of the eight modifier positions.
///
/// [`Key::is_modifier`] checks its tag against this in debug builds.
pub fn is_modifier_key(code: u8) -> bool {
    (KEY_LEFT_CTRL..=KEY_RIGHT_GUI).contains(&code)
}

fn name_of(code: u8) -> Option<&'static str> {
    KEYS.iter()
        .find(|(_, key)| matches!(key, Key::Standard(c) | Key::Modifier(c) if *c == code))
        .map(|(name, _)| *name)
}
