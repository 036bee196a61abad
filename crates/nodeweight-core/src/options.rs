//! Option string tokenizer.
//!
//! Splits strings such as SSH `authorized_keys` options into tokens, keeping
//! `key="quoted value"` groups whole.

use regex::Regex;

/// Tokenize `options`. Separators and stray punctuation are dropped.
pub fn split_options(options: &str) -> Result<Vec<String>, regex::Error> {
    let token_re = Regex::new(r#"\w+=".*?"|[\w-]+"#)?;
    Ok(token_re
        .find_iter(options)
        .map(|m| m.as_str().to_string())
        .collect())
}
