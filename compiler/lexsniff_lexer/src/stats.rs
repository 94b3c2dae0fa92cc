//! Per-kind token counts for summary reports.

use crate::{Token, TokenKind};

/// How many tokens of each [`TokenKind`] a scan produced.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenStats {
    counts: [usize; TokenKind::ALL.len()],
}

impl TokenStats {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut stats = TokenStats::default();
        for token in tokens {
            stats.counts[token.kind.index()] += 1;
        }
        stats
    }

    pub fn count(&self, kind: TokenKind) -> usize {
        self.counts[kind.index()]
    }

    pub fn keywords(&self) -> usize {
        self.count(TokenKind::Keyword)
    }

    pub fn identifiers(&self) -> usize {
        self.count(TokenKind::Identifier)
    }

    pub fn operators(&self) -> usize {
        self.count(TokenKind::Operator)
    }

    /// String and numeric literals together.
    pub fn literals(&self) -> usize {
        self.count(TokenKind::StringLiteral) + self.count(TokenKind::NumericLiteral)
    }

    /// Non-zero counts in [`TokenKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, usize)> + '_ {
        TokenKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|&(_, n)| n > 0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
