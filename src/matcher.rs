//! `Matcher` is the façade external collaborators are expected to use:
//! compile a pattern once, then run it over any number of texts.

use crate::ast::Ast;
use crate::error::Error;
use crate::matchmask::MatchMaskTable;
use crate::parser;
use crate::Bitset;

/// The default ceiling on text length accepted by a match call.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 100_000;

/// Per-matcher tunables. Currently just the text-length ceiling; stored on
/// the compiled `Matcher` so every match against it is checked
/// consistently, with no global or environment-derived state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherConfig {
    pub max_text_length: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig { max_text_length: DEFAULT_MAX_TEXT_LENGTH }
    }
}

/// A compiled pattern, ready to be matched against any number of texts.
///
/// Immutable after construction: `Ast` owns its children with no interior
/// mutability, so a `Matcher` is `Send + Sync` and may be shared across
/// concurrent matches on distinct texts.
#[derive(Debug, Clone)]
pub struct Matcher {
    ast: Ast,
    pattern: String,
    config: MatcherConfig,
}

impl Matcher {
    /// Compiles `pattern` with the default configuration.
    pub fn compile(pattern: &str) -> Result<Matcher, Error> {
        Self::compile_with_config(pattern, MatcherConfig::default())
    }

    /// Compiles `pattern` with an explicit configuration.
    pub fn compile_with_config(pattern: &str, config: MatcherConfig) -> Result<Matcher, Error> {
        let ast = parser::parse(pattern)?;
        Ok(Matcher { ast, pattern: pattern.to_string(), config })
    }

    /// The original pattern string this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The compiled AST's root node, exposed so callers (and this crate's
    /// own property tests) can apply sub-trees directly instead of only
    /// through a full match call.
    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    /// Finds every end position reachable from any start position in
    /// `text`, without a MatchMask accelerator.
    pub fn find_ends(&self, text: &[u8]) -> Result<Vec<usize>, Error> {
        self.find_ends_accelerated(text, None)
    }

    /// Finds every end position reachable from any start position in
    /// `text`, optionally consulting a precomputed [`MatchMaskTable`] to
    /// accelerate literal transformers.
    pub fn find_ends_accelerated(
        &self,
        text: &[u8],
        accel: Option<&MatchMaskTable>,
    ) -> Result<Vec<usize>, Error> {
        if text.len() > self.config.max_text_length {
            return Err(Error::TextTooLong { len: text.len(), max: self.config.max_text_length });
        }
        log::debug!(
            "matching pattern {:?} against {} byte(s) of text",
            self.pattern,
            text.len()
        );
        let mut initial = Bitset::new(text.len() + 1);
        for pos in 0..=text.len() {
            initial.set(pos);
        }
        let result = self.ast.apply(&initial, text, accel);
        let positions = result.enumerate();
        log::trace!("match produced {} end position(s)", positions.len());
        Ok(positions)
    }
}
