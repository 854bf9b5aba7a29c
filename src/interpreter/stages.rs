use tracing::{debug, trace, warn};

use crate::{
    ast::Expr,
    interpreter::{
        lexer::count_tokens,
        parser::core::{Parser, ParserOptions},
    },
};

/// The trees obtained by parsing every prefix of an expression's tokens.
///
/// Entry `i` is the tree built from the first `i` tokens in tolerant mode,
/// so entry `0` is always absent and the last entry is the tree of the whole
/// expression. The list always holds `token_count + 1` entries; its storage
/// is sized once and never grows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StageList {
    stages: Box<[Option<Expr>]>,
}

impl StageList {
    /// Number of stages, which is one more than the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` only for a default-constructed list.
    /// [`build_stages`] always yields at least one stage.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Number of tokens the expression was split into.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.stages.len().saturating_sub(1)
    }

    /// Returns the tree of stage `index`.
    ///
    /// The outer `Option` is `None` when `index` is out of range, the inner
    /// one when that prefix did not yield any operand.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Option<&Expr>> {
        self.stages.get(index).map(Option::as_ref)
    }

    /// The tree of the complete expression, if it has one.
    #[must_use]
    pub fn last(&self) -> Option<&Expr> {
        self.stages.last().and_then(Option::as_ref)
    }

    /// Iterates over the stages in prefix order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Option<&Expr>> {
        self.stages.iter().map(Option::as_ref)
    }

    /// Releases the list and returns its stages.
    #[must_use]
    pub fn into_vec(self) -> Vec<Option<Expr>> {
        self.stages.into_vec()
    }
}

/// Builds the tree for every token prefix of `source`.
///
/// The full text is lexed once to count its tokens `T`. Then, for each `i`
/// in `0..=T`, a fresh parser limited to `i` tokens parses the text in
/// tolerant mode. Each stage is derived on its own, costing `O(T²)` in total.
///
/// Never fails: truncated or malformed input yields absent subtrees.
///
/// # Example
/// ```
/// use calctree::{ast_build, build_stages};
///
/// let stages = build_stages("1 + 2 * 3");
/// assert_eq!(stages.len(), 6);
/// assert_eq!(stages.get(0), Some(None));
/// assert_eq!(stages.last(), ast_build("1 + 2 * 3").ok().as_ref());
/// assert_eq!(stages.get(4).flatten().map(ToString::to_string),
///            Some("(1 + (2 * _))".to_string()));
/// ```
#[must_use]
pub fn build_stages(source: &str) -> StageList {
    let token_count = count_tokens(source);
    debug!(token_count, "building parse stages");

    let stages = (0..=token_count).map(|budget| parse_stage(source, budget))
                                  .collect::<Vec<_>>();

    StageList { stages: stages.into_boxed_slice() }
}

/// Parses the first `budget` tokens of `source` in tolerant mode.
fn parse_stage(source: &str, budget: usize) -> Option<Expr> {
    let options = ParserOptions::tolerant().with_token_budget(budget);

    match Parser::new(source, options).parse() {
        Ok(stage) => {
            trace!(budget, nodes = stage.as_ref().map_or(0, Expr::node_count), "built stage");
            stage
        },
        Err(error) => {
            warn!(budget, %error, "tolerant parse failed; recording an empty stage");
            None
        },
    }
}
