pub mod ast;
pub mod model;
pub mod report;
pub mod scan;

pub use ast::{BinaryOp, Expr};
pub use model::{load_model, parse_model, Component, Model, VarOwner, Variable};
pub use report::{format_finding, scan_file, scan_path};
pub use scan::{has_issue, scan_model, Finding, IssueKind};
