//! [`PrintPaced`] command — types text one character at a time.
//!
//! Script syntax: `PRINT text` or `PRINT "text"`

use crate::command::{Context, DuckyCommand};
use crate::keys::Key;
use crate::parser::extract_string;
use anyhow::Result;
use async_trait::async_trait;

/// Writes each character as a single keystroke, waiting the current
/// interval (see `DELAY INTERVAL`) after every character.
///
/// ASCII characters are sent as key codes. Anything else has no single-byte
/// code and goes through the keyboard's `print` instead.
pub struct PrintPaced {
    pub text: String,
}

impl PrintPaced {
    pub const NAME: &'static str = "PRINT";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait(?Send)]
impl DuckyCommand for PrintPaced {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Self {
        Self::new(extract_string(args))
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        let mut utf8 = [0u8; 4];
        for ch in self.text.chars() {
            if ch.is_ascii() {
                ctx.write(Key::Standard(ch as u8))?;
            } else {
                ctx.print(ch.encode_utf8(&mut utf8))?;
            }
            ctx.sleep(ctx.interval()).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(PrintPaced::parse(r#" "a;b""#).text, "a;b");
        assert_eq!(PrintPaced::parse(" slow text").text, "slow text");
    }
}
