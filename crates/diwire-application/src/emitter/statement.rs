//! Statements of a generated function body

use std::fmt;

use diwire_domain::ERROR_VARIABLE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `a, b := expression`
    Assign {
        names: Vec<String>,
        expression: String,
    },
    /// `if err != nil { return values... }`; `values` holds `err` in the
    /// error slot and zero values elsewhere
    ReturnOnError { values: Vec<String> },
}

impl Statement {
    /// Rendered lines without indentation
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Assign { names, expression } => {
                vec![format!("{} := {expression}", names.join(", "))]
            }
            Self::ReturnOnError { values } => {
                vec![
                    format!("if {ERROR_VARIABLE} != nil {{"),
                    format!("\treturn {}", values.join(", ")),
                    "}".to_string(),
                ]
            }
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
