use std::fmt;

use crate::ast::Expr;
use crate::model::{Model, VarOwner, Variable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Equation,
    InitialValue,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IssueKind::Equation => write!(f, "Equation"),
            IssueKind::InitialValue => write!(f, "Initial value"),
        }
    }
}

/// One flagged expression. `expression` is a node reachable from the
/// variable's equation or initial-value tree.
#[derive(Debug, Clone, Copy)]
pub struct Finding<'m> {
    pub kind: IssueKind,
    pub variable: &'m Variable,
    pub expression: &'m Expr,
}

/// Returns true if the expression, or any sub-expression of it, has one of
/// the two shapes mis-evaluated by older expression parsers: a prefix plus
/// applied directly to an infix expression, or a power whose base operand
/// is itself a power. Only the base position of a power is checked; nesting
/// in the exponent was not covered by the upstream bug report.
pub fn has_issue(expr: &Expr) -> bool {
    if let Expr::PrefixPlus(child) = expr {
        if child.is_infix() {
            return true;
        }
    }
    if let Expr::Power { base, .. } = expr {
        if matches!(base.as_ref(), Expr::Power { .. }) {
            return true;
        }
    }
    expr.children().into_iter().any(has_issue)
}

fn scan_owner<'m>(owner: &'m impl VarOwner, issues: &mut Vec<Finding<'m>>) {
    for var in owner.variables() {
        if has_issue(&var.rhs) {
            issues.push(Finding {
                kind: IssueKind::Equation,
                variable: var,
                expression: &var.rhs,
            });
        }
        if var.is_state() {
            if let Some(init) = &var.initial_value {
                if has_issue(init) {
                    issues.push(Finding {
                        kind: IssueKind::InitialValue,
                        variable: var,
                        expression: init,
                    });
                }
            }
        }
        scan_owner(var, issues);
    }
}

/// Runs [`has_issue`] over every equation and initial value in the model.
/// Findings come back in traversal order: components in declaration order,
/// variables depth-first in declaration order, a variable's equation before
/// its initial value, a variable's own findings before its sub-variables'.
pub fn scan_model(model: &Model) -> Vec<Finding<'_>> {
    let mut issues = Vec::new();
    for component in &model.components {
        scan_owner(component, &mut issues);
    }
    issues
}
