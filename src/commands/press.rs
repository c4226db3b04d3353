//! [`Press`] command — holds a key down until it is released.
//!
//! Script syntax: `PRESS SHIFT`

use crate::command::{Context, DuckyCommand};
use crate::keys::{self, Key};
use crate::parser::next_token;
use anyhow::Result;
use async_trait::async_trait;

/// Presses a key and records it as held. The key stays down until a matching
/// `RELEASE` or the end of the script.
pub struct Press {
    pub key: Option<Key>,
}

impl Press {
    pub const NAME: &'static str = "PRESS";
}

#[async_trait(?Send)]
impl DuckyCommand for Press {
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
            Some(key) => ctx.press(key, true),
            None => Ok(()),
        }
    }
}
