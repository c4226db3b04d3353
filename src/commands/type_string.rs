//! [`TypeString`] command — types text in one burst.
//!
//! Script syntax: `STRING text`, `STRING "text"` or `ECHO 'text'`

use crate::command::{Context, DuckyCommand};
use crate::parser::extract_string;
use anyhow::Result;
use async_trait::async_trait;

/// Sends the whole text to the keyboard's `print` with no pacing.
pub struct TypeString {
    pub text: String,
}

impl TypeString {
    pub const NAME: &'static str = "STRING";
    pub const ALIAS: &'static str = "ECHO";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait(?Send)]
impl DuckyCommand for TypeString {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Self {
        Self::new(extract_string(args))
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        if self.text.is_empty() {
            return Ok(());
        }
        ctx.print(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted() {
        assert_eq!(TypeString::parse(r#" "hello world""#).text, "hello world");
    }

    #[test]
    fn test_parse_unquoted_keeps_rest_of_command() {
        assert_eq!(TypeString::parse(" echo 'hi' there").text, "echo 'hi' there");
    }

    #[test]
    fn test_parse_single_quotes() {
        assert_eq!(TypeString::parse(r#" 'say "hi"'"#).text, r#"say "hi""#);
    }
}
