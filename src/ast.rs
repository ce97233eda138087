/// An abstract syntax tree (AST) node representing a condition expression.
///
/// `Expr` covers everything the condition language can say: literals,
/// variable references, function calls, binary and unary operations, and
/// list literals. The tree is produced by an external parser before playback
/// starts; the evaluator only borrows it and never mutates it. Each variant
/// carries the source line the parser recorded, used for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal (double precision floating-point).
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal.
    Str {
        /// The literal text.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    ///
    /// The names `True` and `False` are reserved words resolved to booleans
    /// without consulting the variable store.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Function call expression (e.g. `visited("cellar")`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A binary operation (arithmetic, comparison, logic, or list algebra).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A parenthesized, comma-separated group of list or item names, such as
    /// `(hot, humid)`.
    ///
    /// The group is kept as raw text and resolved against the variable store
    /// at evaluation time, not parse time.
    ListLiteral {
        /// The raw parenthesized text of the name group.
        group: String,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use quill::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "mood".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Str { line, .. }
            | Self::Variable { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::ListLiteral { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// The set is fixed by the condition language: boolean connectives, equality,
/// containment, arithmetic, orderings, and list intersection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// List containment (`?`)
    Has,
    /// Negated list containment (`!?`)
    Hasnt,
    /// Addition, or list union (`+`)
    Add,
    /// Subtraction, or list difference (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// List intersection (`^`)
    Intersect,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Boolean negation (`not` / `!`).
    Not,
    /// Any other tag the parser may emit; the operand passes through
    /// unchanged at evaluation time.
    Identity,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Has, Hasnt, Intersect, Less, LessEqual,
            Mod, Mul, NotEqual, Or, Sub,
        };
        let operator = match self {
            And => "&&",
            Or => "||",
            Equal => "==",
            NotEqual => "!=",
            Has => "?",
            Hasnt => "!?",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Greater => ">",
            GreaterEqual => ">=",
            Less => "<",
            LessEqual => "<=",
            Intersect => "^",
        };
        write!(f, "{operator}")
    }
}
