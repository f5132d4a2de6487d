use std::path::Path;

use anyhow::Result;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::model::load_model;
use crate::scan::{scan_model, Finding};

pub fn format_finding(finding: &Finding) -> String {
    format!(
        "{} for {}: {}",
        finding.kind,
        finding.variable.qname(),
        finding.expression
    )
}

/// Scans a single model file, printing a one-line verdict followed by one
/// line per finding. Returns the number of findings.
pub fn scan_file(path: &Path) -> Result<usize> {
    print!("Checking model {}...", path.display());
    let model = match load_model(path) {
        Ok(model) => model,
        Err(e) => {
            println!(" [error when reading model]");
            return Err(e);
        }
    };
    let issues = scan_model(&model);
    if issues.is_empty() {
        println!(" [ok]");
    } else {
        println!(" [potential issue detected]");
        for finding in &issues {
            println!("{}", format_finding(finding));
        }
    }
    Ok(issues.len())
}

/// Scans a model file, or every `*.json` model file under a directory.
/// In directory mode unreadable files are reported and skipped so one bad
/// export cannot end the run. Returns the total number of findings.
pub fn scan_path(path: &Path) -> Result<usize> {
    if !path.is_dir() {
        return scan_file(path);
    }
    let mut total = 0;
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == "json") {
            match scan_file(entry.path()) {
                Ok(count) => total += count,
                Err(e) => {
                    println!("{e:#}");
                    warn!("skipping {}", entry.path().display());
                }
            }
        } else {
            debug!("ignoring {}", entry.path().display());
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::format_finding;
    use crate::ast::{BinaryOp, Expr};
    use crate::model::{Component, Model, Variable};
    use crate::scan::scan_model;

    #[test]
    fn finding_lines_name_the_variable_and_expression() {
        let rhs = Expr::PrefixPlus(Box::new(Expr::Binop {
            op: BinaryOp::Add,
            left: Box::new(Expr::Name("a".to_string())),
            right: Box::new(Expr::Name("b".to_string())),
        }));
        let mut model = Model {
            name: "test".to_string(),
            components: vec![Component {
                name: "membrane".to_string(),
                variables: vec![Variable::new("V", rhs)],
            }],
        };
        model.qualify();
        let issues = scan_model(&model);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            format_finding(&issues[0]),
            "Equation for membrane.V: +(a + b)"
        );
    }
}
