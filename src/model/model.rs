use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::Expr;

/// A parsed model: an ordered list of components, each owning an ordered
/// tree of variables. The hierarchy is acyclic by construction of the
/// upstream exporter; nothing here re-validates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    /// Dotted qualified name, filled in by [`Model::qualify`] after
    /// loading. Not part of the interchange form.
    #[serde(skip)]
    qname: String,
    /// Defining right-hand-side expression. For a state variable this is
    /// the expression for its time derivative.
    pub rhs: Expr,
    #[serde(default)]
    pub state: bool,
    /// Present iff `state` is set, per the exporter's guarantee.
    #[serde(default)]
    pub initial_value: Option<Expr>,
    /// Nested sub-variables, in declaration order.
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl Model {
    /// Assigns each variable its `component.variable[.sub]*` name. Called
    /// once by the loader; hand-built models may call it themselves.
    pub fn qualify(&mut self) {
        for component in &mut self.components {
            for var in &mut component.variables {
                var.qualify(&component.name);
            }
        }
    }
}

impl Variable {
    pub fn new(name: &str, rhs: Expr) -> Self {
        Self {
            name: name.to_string(),
            qname: String::new(),
            rhs,
            state: false,
            initial_value: None,
            variables: Vec::new(),
        }
    }

    pub fn is_state(&self) -> bool {
        self.state
    }

    pub fn qname(&self) -> &str {
        if self.qname.is_empty() {
            &self.name
        } else {
            &self.qname
        }
    }

    fn qualify(&mut self, prefix: &str) {
        self.qname = format!("{}.{}", prefix, self.name);
        let prefix = self.qname.clone();
        for sub in &mut self.variables {
            sub.qualify(&prefix);
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.qname())
    }
}

/// Anything that directly owns an ordered list of variables: a component,
/// or a variable with nested sub-variables.
pub trait VarOwner {
    fn variables(&self) -> &[Variable];
}

impl VarOwner for Component {
    fn variables(&self) -> &[Variable] {
        &self.variables
    }
}

impl VarOwner for Variable {
    fn variables(&self) -> &[Variable] {
        &self.variables
    }
}
