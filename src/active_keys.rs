//! Bookkeeping of keys currently held down by a script.

use crate::keys::Key;

/// The keys a script has pressed with tracking and not yet released.
///
/// Keys are kept in three insertion-ordered lists, one per [`Key`] variant.
/// Duplicates are allowed; [`remove`](Self::remove) drops every entry equal to
/// the given key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActiveKeys {
    standard: Vec<u8>,
    modifiers: Vec<u8>,
    media: Vec<[u8; 2]>,
}

impl ActiveKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: Key) {
        match key {
            Key::Standard(code) => self.standard.push(code),
            Key::Modifier(code) => self.modifiers.push(code),
            Key::Media(code) => self.media.push(code),
        }
    }

    pub fn remove(&mut self, key: Key) {
        match key {
            Key::Standard(code) => self.standard.retain(|c| *c != code),
            Key::Modifier(code) => self.modifiers.retain(|c| *c != code),
            Key::Media(code) => self.media.retain(|c| *c != code),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.standard.is_empty() && self.modifiers.is_empty() && self.media.is_empty()
    }

    pub fn len(&self) -> usize {
        self.standard.len() + self.modifiers.len() + self.media.len()
    }

    pub fn contains(&self, key: Key) -> bool {
        match key {
            Key::Standard(code) => self.standard.contains(&code),
            Key::Modifier(code) => self.modifiers.contains(&code),
            Key::Media(code) => self.media.contains(&code),
        }
    }

    /// All held keys in release order: standard, then media, then modifiers.
    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        self.standard
            .iter()
            .map(|c| Key::Standard(*c))
            .chain(self.media.iter().map(|c| Key::Media(*c)))
            .chain(self.modifiers.iter().map(|c| Key::Modifier(*c)))
    }

    /// Empty all three lists, returning their contents in release order.
    pub fn drain(&mut self) -> Vec<Key> {
        let keys = self.iter().collect();
        self.clear();
        keys
    }

    pub fn clear(&mut self) {
        self.standard.clear();
        self.modifiers.clear();
        self.media.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{KEY_LEFT_CTRL, KEY_RETURN};

    #[test]
    fn test_insert_classifies_by_tag() {
        let mut keys = ActiveKeys::new();
        keys.insert(Key::Standard(b'a'));
        keys.insert(Key::Modifier(KEY_LEFT_CTRL));
        keys.insert(Key::Media([16, 0]));
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(Key::Modifier(KEY_LEFT_CTRL)));
        assert!(!keys.contains(Key::Standard(KEY_LEFT_CTRL)));
    }

    #[test]
    fn test_remove_collapses_duplicates() {
        let mut keys = ActiveKeys::new();
        keys.insert(Key::Standard(b'a'));
        keys.insert(Key::Standard(b'b'));
        keys.insert(Key::Standard(b'a'));
        keys.remove(Key::Standard(b'a'));
        assert_eq!(keys.iter().collect::<Vec<_>>(), vec![Key::Standard(b'b')]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut keys = ActiveKeys::new();
        keys.insert(Key::Standard(b'a'));
        keys.remove(Key::Standard(b'z'));
        keys.remove(Key::Modifier(b'a'));
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_drain_order() {
        let mut keys = ActiveKeys::new();
        keys.insert(Key::Modifier(KEY_LEFT_CTRL));
        keys.insert(Key::Standard(b'x'));
        keys.insert(Key::Media([8, 0]));
        keys.insert(Key::Standard(KEY_RETURN));
        assert_eq!(
            keys.drain(),
            vec![
                Key::Standard(b'x'),
                Key::Standard(KEY_RETURN),
                Key::Media([8, 0]),
                Key::Modifier(KEY_LEFT_CTRL),
            ]
        );
        assert!(keys.is_empty());
    }
}
