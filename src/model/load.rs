use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use super::Model;

/// Parses the serialized interchange form of a model and qualifies its
/// variable names. The text must be a model tree exported by the upstream
/// toolchain; this is not a parser for model source syntax.
pub fn parse_model(text: &str) -> Result<Model> {
    let mut model: Model =
        serde_json::from_str(text).context("not a valid serialized model")?;
    model.qualify();
    Ok(model)
}

pub fn load_model(path: &Path) -> Result<Model> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let model = parse_model(&text)
        .with_context(|| format!("could not load model from {}", path.display()))?;
    debug!(
        "loaded model {} with {} components",
        model.name,
        model.components.len()
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::parse_model;
    use crate::ast::{BinaryOp, Expr};

    const MODEL_TEXT: &str = r#"
    {
        "name": "decay",
        "components": [
            {
                "name": "cell",
                "variables": [
                    {
                        "name": "k",
                        "rhs": { "Number": 0.3 }
                    },
                    {
                        "name": "x",
                        "state": true,
                        "rhs": {
                            "Binop": {
                                "op": "Mul",
                                "left": { "PrefixMinus": { "Name": "k" } },
                                "right": { "Name": "x" }
                            }
                        },
                        "initial_value": { "Number": 1.0 }
                    }
                ]
            }
        ]
    }
    "#;

    #[test]
    fn parses_and_qualifies() {
        let model = parse_model(MODEL_TEXT).unwrap();
        assert_eq!(model.name, "decay");
        let cell = &model.components[0];
        assert_eq!(cell.variables[0].qname(), "cell.k");
        let x = &cell.variables[1];
        assert_eq!(x.qname(), "cell.x");
        assert!(x.is_state());
        assert_eq!(x.initial_value, Some(Expr::Number(1.0)));
        assert!(matches!(
            x.rhs,
            Expr::Binop {
                op: BinaryOp::Mul,
                ..
            }
        ));
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(parse_model("[rhs]\nnot a model").is_err());
        assert!(parse_model("{\"components\": []}").is_err());
    }
}
