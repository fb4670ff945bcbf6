//! A deterministic stand-in for the network-backed chat model.
//!
//! Classification is an ordered list of pattern/reply rules evaluated
//! first-match-wins, so the matching order is an explicit artifact
//! rather than a side effect of nested conditionals. The mock holds
//! no state across calls, every invocation is independent.

use anyhow::{Error, Result};
use async_trait::async_trait;

use super::ChatModel;

/// How a rule decides whether an input utterance matches.
#[derive(Clone, Copy, Debug)]
pub enum Pattern {
    /// Equality against the case-normalized, whitespace-trimmed input.
    Exact(&'static str),
    /// Substring test against the case-normalized input.
    Contains(&'static str),
}

#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub pattern: Pattern,
    pub reply: &'static str,
}

const FALLBACK_REPLY: &str = "Mock response.";

pub struct MockChatModel {
    rules: Vec<Rule>,
    fallback: &'static str,
}

impl MockChatModel {
    pub fn with_rules(rules: Vec<Rule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// Classify an input utterance. Only case is normalized;
    /// punctuation is left alone. Exact rules are listed ahead of
    /// substring rules so they always win.
    pub fn reply_to(&self, input: &str) -> &'static str {
        let normalized = input.to_lowercase();

        for rule in &self.rules {
            let matched = match rule.pattern {
                Pattern::Exact(expected) => normalized.trim() == expected,
                Pattern::Contains(needle) => normalized.contains(needle),
            };
            if matched {
                return rule.reply;
            }
        }

        self.fallback
    }
}

impl Default for MockChatModel {
    fn default() -> Self {
        // NOTE: The second reply deliberately spells out the number so
        // the reply to "What about 15?" doesn't contain the digit 5.
        // That constraint belongs to this one reply string only.
        let rules = vec![
            Rule {
                pattern: Pattern::Exact("is 5 a prime number?"),
                reply: "Yes, 5 is a number.",
            },
            Rule {
                pattern: Pattern::Exact("what about 15?"),
                reply: "Fifteen is a number.",
            },
            Rule {
                pattern: Pattern::Contains("assistant"),
                reply: "I am your assistant.",
            },
            Rule {
                pattern: Pattern::Contains("hello"),
                reply: "I am your assistant.",
            },
        ];

        Self::with_rules(rules, FALLBACK_REPLY)
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn chat(&self, text: &str) -> Result<String, Error> {
        Ok(self.reply_to(text).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_any_case() {
        let model = MockChatModel::default();

        assert_eq!(model.reply_to("Is 5 a prime number?"), "Yes, 5 is a number.");
        assert_eq!(model.reply_to("IS 5 A PRIME NUMBER?"), "Yes, 5 is a number.");
        assert_eq!(
            model.reply_to("  is 5 a prime number?  "),
            "Yes, 5 is a number."
        );
    }

    #[test]
    fn test_follow_up_reply_avoids_the_digit() {
        let model = MockChatModel::default();

        let reply = model.reply_to("What about 15?");
        assert!(reply.contains("15") || reply.contains("Fifteen"));
        assert!(!reply.contains('5'));
    }

    #[test]
    fn test_substring_match() {
        let model = MockChatModel::default();

        assert_eq!(
            model.reply_to("Hello, are you an assistant?"),
            "I am your assistant."
        );
        assert_eq!(model.reply_to("hello there"), "I am your assistant.");
        assert_eq!(
            model.reply_to("Are you some kind of ASSISTANT?"),
            "I am your assistant."
        );
    }

    #[test]
    fn test_fallback() {
        let model = MockChatModel::default();

        assert_eq!(model.reply_to("xyz random"), "Mock response.");
        assert_eq!(model.reply_to(""), "Mock response.");
    }

    #[test]
    fn test_every_call_is_independent() {
        let model = MockChatModel::default();

        let first = model.reply_to("Is 5 a prime number?");
        let _intervening = model.reply_to("What about 15?");
        let again = model.reply_to("Is 5 a prime number?");

        assert_eq!(first, again);
    }

    #[test]
    fn test_exact_rules_win_over_substring_rules() {
        let rules = vec![
            Rule {
                pattern: Pattern::Exact("hello"),
                reply: "exact",
            },
            Rule {
                pattern: Pattern::Contains("hello"),
                reply: "substring",
            },
        ];
        let model = MockChatModel::with_rules(rules, "fallback");

        assert_eq!(model.reply_to("Hello"), "exact");
        assert_eq!(model.reply_to("well hello there"), "substring");
        assert_eq!(model.reply_to("goodbye"), "fallback");
    }

    #[test]
    fn test_no_punctuation_stripping() {
        let model = MockChatModel::default();

        // Dropping the question mark misses the exact rule and lands
        // on the fallback
        assert_eq!(model.reply_to("Is 5 a prime number"), "Mock response.");
    }
}
