use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Infix binary operators, as written in model source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Quotient,
    Remainder,
    Eq,
    NotEq,
    Less,
    LessEq,
    More,
    MoreEq,
    And,
    Or,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Quotient => "//",
            BinaryOp::Remainder => "%",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEq => "<=",
            BinaryOp::More => ">",
            BinaryOp::MoreEq => ">=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
        }
    }
}

/// One node of a parsed expression tree, in the interchange form produced
/// by the upstream model toolchain. Trees are finite and acyclic by
/// construction of the exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Number(f64),
    Name(String),
    PrefixPlus(Box<Expr>),
    PrefixMinus(Box<Expr>),
    Not(Box<Expr>),
    Power {
        base: Box<Expr>,
        exponent: Box<Expr>,
    },
    Binop {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        fn_name: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Direct child nodes, in operand order. Empty for leaves.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Number(_) | Expr::Name(_) => Vec::new(),
            Expr::PrefixPlus(child) | Expr::PrefixMinus(child) | Expr::Not(child) => {
                vec![child]
            }
            Expr::Power { base, exponent } => vec![base, exponent],
            Expr::Binop { left, right, .. } => vec![left, right],
            Expr::Call { args, .. } => args.iter().collect(),
        }
    }

    /// True for expressions written with an infix operator. Power counts:
    /// `a^b` is infix even though it gets its own variant.
    pub fn is_infix(&self) -> bool {
        matches!(self, Expr::Binop { .. } | Expr::Power { .. })
    }
}

fn fmt_operand(f: &mut fmt::Formatter, expr: &Expr) -> fmt::Result {
    if expr.is_infix() {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::Name(name) => write!(f, "{name}"),
            Expr::PrefixPlus(child) => {
                write!(f, "+")?;
                fmt_operand(f, child)
            }
            Expr::PrefixMinus(child) => {
                write!(f, "-")?;
                fmt_operand(f, child)
            }
            Expr::Not(child) => {
                write!(f, "not ")?;
                fmt_operand(f, child)
            }
            Expr::Power { base, exponent } => {
                fmt_operand(f, base)?;
                write!(f, " ^ ")?;
                fmt_operand(f, exponent)
            }
            Expr::Binop { op, left, right } => {
                fmt_operand(f, left)?;
                write!(f, " {} ", op.symbol())?;
                fmt_operand(f, right)
            }
            Expr::Call { fn_name, args } => {
                write!(f, "{}({})", fn_name, args.iter().join(", "))
            }
        }
    }
}
