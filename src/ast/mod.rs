pub mod expr;

pub use expr::{BinaryOp, Expr};
