//! [`SendKey`] command — one keystroke that is never held.
//!
//! Script syntax: `SEND ENTER`, `SEND x`

use crate::command::{Context, DuckyCommand};
use crate::keys::{self, Key};
use crate::parser::next_token;
use anyhow::Result;
use async_trait::async_trait;

/// Resolves its argument as a key and writes it once, without touching the
/// held-key bookkeeping.
pub struct SendKey {
    pub key: Option<Key>,
}

impl SendKey {
    pub const NAME: &'static str = "SEND";
}

#[async_trait(?Send)]
impl DuckyCommand for SendKey {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Self {
        let (token, _) = next_token(args);
        Self {
            key: (!token.is_empty()).then(|| keys::resolve(token)),
        }
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        match self.key {
            Some(key) => ctx.write(key),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KEY_RETURN;

    #[test]
    fn test_parse_named_key() {
        assert_eq!(SendKey::parse(" ENTER").key, Some(Key::Standard(KEY_RETURN)));
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(SendKey::parse(" x trailing").key, Some(Key::Standard(b'x')));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(SendKey::parse("   ").key, None);
    }
}
