use crate::ast::items::Item;

/// Named elementwise functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Abs,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Root,
    Log10,
    Log,
    Exp,
    Ln,
    Floor,
    Ceil,
}

impl Function {
    /// Number of comma-separated arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            Function::Root | Function::Log => 2,
            _ => 1,
        }
    }

    /// The keyword this function is spelled as.
    pub fn name(self) -> &'static str {
        match self {
            Function::Abs => "abs",
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Sqrt => "sqrt",
            Function::Root => "root",
            Function::Log10 => "log10",
            Function::Log => "log",
            Function::Exp => "exp",
            Function::Ln => "ln",
            Function::Floor => "floor",
            Function::Ceil => "ceil",
        }
    }
}

/// Operator kinds with their compile-time contract.
///
/// Precedence determines compiler ordering; arity determines how many
/// preceding postfix values the operator consumes at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    /// Unary sign flip, bound from a context-disambiguated `-`
    Negative,
    /// Component selection (`array[i]`)
    Index(usize),
    /// Named function call
    Call(Function),
}

impl OpKind {
    /// Precedence, lowest to highest. The compiler pops the stack while
    /// its top operator's precedence is not lower than the incoming one.
    pub fn precedence(self) -> u8 {
        match self {
            OpKind::Add | OpKind::Sub => 1,
            OpKind::Mul | OpKind::Div => 2,
            OpKind::Pow => 3,
            OpKind::Negative => 4,
            OpKind::Index(_) | OpKind::Call(_) => 5,
        }
    }

    /// How many values the operator pops from the evaluation stack.
    pub fn arity(self) -> usize {
        match self {
            OpKind::Add | OpKind::Sub | OpKind::Mul | OpKind::Div | OpKind::Pow => 2,
            OpKind::Negative | OpKind::Index(_) => 1,
            OpKind::Call(function) => function.arity(),
        }
    }

    /// Whether this is one of the infix binary arithmetic operators.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            OpKind::Add | OpKind::Sub | OpKind::Mul | OpKind::Div | OpKind::Pow
        )
    }

    /// The operator as the user spelled it, for error messages.
    pub fn text(self) -> String {
        match self {
            OpKind::Add => "+".to_string(),
            OpKind::Sub | OpKind::Negative => "-".to_string(),
            OpKind::Mul => "*".to_string(),
            OpKind::Div => "/".to_string(),
            OpKind::Pow => "^".to_string(),
            OpKind::Index(index) => format!("[{}]", index),
            OpKind::Call(function) => function.name().to_string(),
        }
    }
}

/// The symbol table: the fixed, immutable mapping from literal token text
/// to operator and structural items.
pub fn lookup(text: &str) -> Option<Item> {
    let item = match text {
        "(" => Item::LeftParen,
        ")" => Item::RightParen,
        "," => Item::Comma,
        "+" => Item::Op(OpKind::Add),
        "-" => Item::Op(OpKind::Sub),
        "*" => Item::Op(OpKind::Mul),
        "/" => Item::Op(OpKind::Div),
        "^" => Item::Op(OpKind::Pow),
        "abs" => Item::Op(OpKind::Call(Function::Abs)),
        "sin" => Item::Op(OpKind::Call(Function::Sin)),
        "cos" => Item::Op(OpKind::Call(Function::Cos)),
        "tan" => Item::Op(OpKind::Call(Function::Tan)),
        "asin" => Item::Op(OpKind::Call(Function::Asin)),
        "acos" => Item::Op(OpKind::Call(Function::Acos)),
        "atan" => Item::Op(OpKind::Call(Function::Atan)),
        "sqrt" => Item::Op(OpKind::Call(Function::Sqrt)),
        "root" => Item::Op(OpKind::Call(Function::Root)),
        "log10" => Item::Op(OpKind::Call(Function::Log10)),
        "log" => Item::Op(OpKind::Call(Function::Log)),
        "exp" => Item::Op(OpKind::Call(Function::Exp)),
        "ln" => Item::Op(OpKind::Call(Function::Ln)),
        "floor" => Item::Op(OpKind::Call(Function::Floor)),
        "ceil" => Item::Op(OpKind::Call(Function::Ceil)),
        _ => return None,
    };
    Some(item)
}
