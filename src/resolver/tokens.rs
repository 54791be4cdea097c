//! Token classification and the per-invocation resolution context

use std::collections::BTreeSet;

use logos::Logos;

/// Character range in the reconstructed command line
pub type Span = std::ops::Range<usize>;

/// Option-shaped tokens. Anything the lexer does not match as a whole is a
/// plain word.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum ArgToken {
    #[token("-h", priority = 10)]
    #[token("--help", priority = 10)]
    #[token("-?")]
    Help,

    #[regex(r"--[A-Za-z][A-Za-z0-9_.:-]*")]
    LongOption,

    #[regex(r"-[A-Za-z][A-Za-z0-9_]*")]
    ShortOption,
}

/// Syntactic class of a single command-line token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `-h`, `--help` or `-?`
    HelpFlag,
    /// `--name` style option
    LongOption,
    /// `-n` style option
    ShortOption,
    /// Selector or option value, e.g. `console`, `net7.0`, `F#`, `-1`
    Word,
}

/// Classify a token by lexing it as a whole
pub fn classify(token: &str) -> TokenKind {
    let mut lexer = ArgToken::lexer(token);
    let first = lexer.next();
    let whole = lexer.span() == (0..token.len());
    match first {
        Some(Ok(ArgToken::Help)) if whole => TokenKind::HelpFlag,
        Some(Ok(ArgToken::LongOption)) if whole => TokenKind::LongOption,
        Some(Ok(ArgToken::ShortOption)) if whole => TokenKind::ShortOption,
        _ => TokenKind::Word,
    }
}

/// State of one resolution: the original tokens and which of them have been
/// consumed by a stage so far.
///
/// Help flags are consumed on creation. Every other token is either still
/// remaining or consumed by exactly one stage, so the two sets always
/// partition the original sequence.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    tokens: Vec<String>,
    kinds: Vec<TokenKind>,
    consumed: BTreeSet<usize>,
    help_requested: bool,
}

impl ResolutionContext {
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| classify(t)).collect();
        let consumed: BTreeSet<usize> = kinds
            .iter()
            .enumerate()
            .filter(|(_, kind)| **kind == TokenKind::HelpFlag)
            .map(|(i, _)| i)
            .collect();
        let help_requested = !consumed.is_empty();

        Self {
            tokens,
            kinds,
            consumed,
            help_requested,
        }
    }

    pub fn token(&self, index: usize) -> &str {
        &self.tokens[index]
    }

    pub fn kind(&self, index: usize) -> TokenKind {
        self.kinds[index]
    }

    /// Whether a help flag appeared anywhere in the invocation
    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    /// Indices not yet consumed, in command-line order
    pub fn remaining(&self) -> Vec<usize> {
        (0..self.tokens.len())
            .filter(|i| !self.consumed.contains(i))
            .collect()
    }

    /// Indices consumed so far, in command-line order
    pub fn consumed(&self) -> Vec<usize> {
        self.consumed.iter().copied().collect()
    }

    pub fn consume(&mut self, index: usize) {
        debug_assert!(index < self.tokens.len());
        self.consumed.insert(index);
    }

    /// The selector is the first remaining token, provided it is a word
    pub fn selector(&self) -> Option<usize> {
        self.remaining()
            .into_iter()
            .next()
            .filter(|&i| self.kinds[i] == TokenKind::Word)
    }

    /// Cursor over the tokens remaining right now
    pub fn cursor(&self) -> TokenCursor {
        TokenCursor {
            indices: self.remaining(),
            pos: 0,
        }
    }

    /// Reconstruct the command line for diagnostics
    pub fn command_line(&self, command_name: &str) -> CommandLine {
        CommandLine::new(command_name, &self.tokens)
    }
}

/// Left-to-right cursor over token indices.
///
/// The cursor owns a snapshot of the indices, so stages can consume tokens
/// in the context while iterating.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    indices: Vec<usize>,
    pos: usize,
}

impl TokenCursor {
    pub fn peek(&self) -> Option<usize> {
        self.indices.get(self.pos).copied()
    }

    /// Next token if it can serve as an option value
    pub fn next_value(&mut self, ctx: &ResolutionContext) -> Option<usize> {
        let index = self.peek().filter(|&i| ctx.kind(i) == TokenKind::Word)?;
        self.pos += 1;
        Some(index)
    }
}

impl Iterator for TokenCursor {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let index = self.peek()?;
        self.pos += 1;
        Some(index)
    }
}

/// The invocation rendered as one line, with the span of every token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    text: String,
    spans: Vec<Span>,
}

impl CommandLine {
    pub fn new(command_name: &str, tokens: &[String]) -> Self {
        let mut text = command_name.to_string();
        let mut spans = Vec::with_capacity(tokens.len());
        let mut offset = text.chars().count();

        for token in tokens {
            let shown = if token.is_empty() || token.contains(char::is_whitespace) {
                format!("\"{}\"", token)
            } else {
                token.clone()
            };
            if !text.is_empty() {
                text.push(' ');
                offset += 1;
            }
            let len = shown.chars().count();
            spans.push(offset..offset + len);
            text.push_str(&shown);
            offset += len;
        }

        Self { text, spans }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self, index: usize) -> Span {
        self.spans.get(index).cloned().unwrap_or(0..0)
    }
}
