/// The evaluator module reduces AST nodes to numbers.
///
/// The evaluator traverses the AST bottom-up, applies each arithmetic
/// operator and reports domain errors such as division by zero. Absent
/// subtrees left behind by tolerant parsing are rejected explicitly.
///
/// # Responsibilities
/// - Evaluates every node shape the parser produces.
/// - Reports runtime errors instead of producing infinities.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a lazy stream of tokens:
/// numbers, the four operators and parentheses. It can be limited to a fixed
/// number of tokens, after which it reports end of input.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Reports lexical errors for unreadable characters and malformed numbers.
/// - Enforces an optional token budget.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser over the lexer's token stream.
/// One grammar serves two failure policies: strict parsing rejects any
/// malformed input, tolerant parsing turns missing operands into absent
/// subtrees.
///
/// # Responsibilities
/// - Converts tokens into AST nodes honoring precedence and associativity.
/// - Validates the grammar in strict mode, reporting errors with positions.
/// - Recovers from truncated input in tolerant mode.
pub mod parser;
/// The stages module rebuilds the AST for every prefix of the token stream.
///
/// Each prefix is reparsed from scratch with a token-limited lexer in
/// tolerant mode. The resulting list shows how the tree grows as parsing
/// advances, one token at a time.
pub mod stages;
