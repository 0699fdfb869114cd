use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Program(pub Vec<Stmt>);

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Print(Expr),
    Let(String, Expr),
    Assignment(String, Expr),
    If(Expr, Box<Stmt>, Option<Box<Stmt>>),
    While(Expr, Vec<Stmt>),
    Comment(String),
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Integer(i64),
    Float(f64),
    Ident(String),
    Binary(BinOpKind, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// The only expression shape accepted as an IF/WHILE condition.
    pub fn is_comparison(&self) -> bool {
        matches!(self, Expr::Binary(op, _, _) if op.is_comparison())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Equal,
    LessThan,
    GreaterThan,
}

impl BinOpKind {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(BinOpKind::Add),
            "-" => Some(BinOpKind::Sub),
            "*" => Some(BinOpKind::Mul),
            "/" => Some(BinOpKind::Div),
            "==" => Some(BinOpKind::Equal),
            "<" => Some(BinOpKind::LessThan),
            ">" => Some(BinOpKind::GreaterThan),
            _ => None,
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinOpKind::Equal | BinOpKind::LessThan | BinOpKind::GreaterThan
        )
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Equal => "==",
            BinOpKind::LessThan => "<",
            BinOpKind::GreaterThan => ">",
        };
        write!(f, "{}", s)
    }
}
