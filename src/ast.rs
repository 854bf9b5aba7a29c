use std::fmt::{self, Write};

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Composite nodes own their children outright. A child is `None` when
/// tolerant parsing ran out of tokens before that subtree could be parsed,
/// so a tree built from a truncated prefix is still a valid value. Strict
/// parsing never produces absent children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Option<Box<Self>>,
        /// Right operand.
        right: Option<Box<Self>>,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Option<Box<Self>>,
    },
}

/// The shape of an [`Expr`] node, without its payload or children.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [`Expr::Number`]
    Number,
    /// [`Expr::BinaryOp`]
    BinaryOp,
    /// [`Expr::UnaryOp`]
    UnaryOp,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl Expr {
    /// Builds a binary node, boxing whichever operands are present.
    ///
    /// ## Example
    /// ```
    /// use calctree::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(BinaryOperator::Add, Some(Expr::Number(1.0)), None);
    /// assert_eq!(sum.to_string(), "(1 + _)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Option<Self>, right: Option<Self>) -> Self {
        Self::BinaryOp { op,
                         left: left.map(Box::new),
                         right: right.map(Box::new) }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Option<Self>) -> Self {
        Self::UnaryOp { op,
                        operand: operand.map(Box::new) }
    }

    /// Returns the shape of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Number(_) => NodeKind::Number,
            Self::BinaryOp { .. } => NodeKind::BinaryOp,
            Self::UnaryOp { .. } => NodeKind::UnaryOp,
        }
    }

    /// Returns the text a renderer draws inside this node.
    ///
    /// Numbers are shown with two decimals, operators as their symbol.
    ///
    /// ## Example
    /// ```
    /// use calctree::ast::{Expr, UnaryOperator};
    ///
    /// assert_eq!(Expr::Number(2.5).label(), "2.50");
    /// assert_eq!(Expr::unary(UnaryOperator::Negate, None).label(), "-");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Number(value) => format!("{value:.2}"),
            Self::BinaryOp { op, .. } => op.to_string(),
            Self::UnaryOp { op, .. } => op.to_string(),
        }
    }

    /// Returns the child slots of this node from left to right.
    ///
    /// Absent subtrees are reported as `None` so a renderer can still draw
    /// the empty slot.
    #[must_use]
    pub fn children(&self) -> Vec<Option<&Self>> {
        match self {
            Self::Number(_) => Vec::new(),
            Self::BinaryOp { left, right, .. } => vec![left.as_deref(), right.as_deref()],
            Self::UnaryOp { operand, .. } => vec![operand.as_deref()],
        }
    }

    /// Counts the nodes present in this tree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children()
                .into_iter()
                .flatten()
                .map(Self::node_count)
                .sum::<usize>()
    }

    /// Number of levels in this tree. A single number has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children()
                .into_iter()
                .flatten()
                .map(Self::depth)
                .max()
                .unwrap_or(0)
    }

    /// Returns `true` when no subtree anywhere in the tree is absent.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.children()
            .into_iter()
            .all(|child| child.is_some_and(Self::is_complete))
    }
}

/// Renders an indentation-based dump of a tree, one node per line.
///
/// Each level is indented by two spaces starting at `depth`. An absent node
/// prints as `<empty>` instead of recursing.
///
/// ## Example
/// ```
/// use calctree::{ast::print_tree, ast_build};
///
/// let ast = ast_build("1 + 2").unwrap();
/// assert_eq!(print_tree(Some(&ast), 0),
///            "BinaryOp(+)\n  Number(1)\n  Number(2)\n");
/// assert_eq!(print_tree(None, 1), "  <empty>\n");
/// ```
#[must_use]
pub fn print_tree(node: Option<&Expr>, depth: usize) -> String {
    let mut out = String::new();
    write_tree(&mut out, node, depth);
    out
}

fn write_tree(out: &mut String, node: Option<&Expr>, depth: usize) {
    let indent = "  ".repeat(depth);
    let Some(node) = node else {
        let _ = writeln!(out, "{indent}<empty>");
        return;
    };

    match node {
        Expr::Number(value) => {
            let _ = writeln!(out, "{indent}Number({value})");
        },
        Expr::BinaryOp { op, .. } => {
            let _ = writeln!(out, "{indent}BinaryOp({op})");
        },
        Expr::UnaryOp { op, .. } => {
            let _ = writeln!(out, "{indent}UnaryOp({op})");
        },
    }

    for child in node.children() {
        write_tree(out, child, depth + 1);
    }
}

/// Writes a subtree in infix form, or `_` when it is absent.
fn fmt_subtree(f: &mut fmt::Formatter<'_>, node: Option<&Expr>) -> fmt::Result {
    match node {
        Some(node) => write!(f, "{node}"),
        None => write!(f, "_"),
    }
}

/// Fully parenthesized infix form, e.g. `(1 + (2 * 3))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::BinaryOp { op, left, right } => {
                write!(f, "(")?;
                fmt_subtree(f, left.as_deref())?;
                write!(f, " {op} ")?;
                fmt_subtree(f, right.as_deref())?;
                write!(f, ")")
            },
            Self::UnaryOp { op, operand } => {
                write!(f, "({op}")?;
                fmt_subtree(f, operand.as_deref())?;
                write!(f, ")")
            },
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
