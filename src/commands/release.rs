//! [`Release`] command — lets go of one held key or all of them.
//!
//! Script syntax: `RELEASE SHIFT`, `RELEASE ALL` or bare `RELEASE`

use crate::command::{Context, DuckyCommand};
use crate::parser::next_token;
use anyhow::Result;
use async_trait::async_trait;

pub struct Release {
    /// The key name to release; `None` releases everything.
    pub key: Option<String>,
}

impl Release {
    pub const NAME: &'static str = "RELEASE";
}

#[async_trait(?Send)]
impl DuckyCommand for Release {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Self {
        let (token, _) = next_token(args);
        Self {
            key: (!token.is_empty()).then(|| token.to_string()),
        }
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        match &self.key {
            Some(name) => ctx.release_named(name, true),
            None => ctx.release_all(),
        }
    }
}
