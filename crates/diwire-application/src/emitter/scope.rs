//! Identifier allocation

use std::collections::HashSet;

use diwire_domain::{ERROR_VARIABLE, KEYWORDS, PREDECLARED, RESERVED_SUFFIX};

/// Names in use in the generated function
///
/// Variables and import names share one namespace.
#[derive(Debug, Clone)]
pub struct Scope {
    used: HashSet<String>,
    imports: HashSet<String>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    /// A scope with the error variable already reserved
    pub fn new() -> Self {
        let mut used = HashSet::new();
        used.insert(ERROR_VARIABLE.to_string());
        Self {
            used,
            imports: HashSet::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Allocate a variable named after `type_base`
    ///
    /// `Web` becomes `web`; a keyword, predeclared identifier or import
    /// name gets the `Var` suffix; a name already taken gets a numeric
    /// suffix (`pool`, `pool1`, `pool2`).
    pub fn declare(&mut self, type_base: &str) -> String {
        let mut base = lower_camel(type_base);
        if base.is_empty() {
            base.push('v');
        }
        if is_reserved(&base) || self.imports.contains(&base) {
            base.push_str(RESERVED_SUFFIX);
        }
        let name = self.unique(&base);
        self.used.insert(name.clone());
        name
    }

    /// Bind `preferred` (or a suffixed form) as an import name
    pub fn declare_import(&mut self, preferred: &str) -> String {
        let name = self.unique(preferred);
        self.used.insert(name.clone());
        self.imports.insert(name.clone());
        name
    }

    /// Claim an exact name, returning false if it was taken
    pub fn claim(&mut self, name: &str) -> bool {
        self.used.insert(name.to_string())
    }

    fn unique(&self, base: &str) -> String {
        if !self.used.contains(base) {
            return base.to_string();
        }
        (1..)
            .map(|n| format!("{base}{n}"))
            .find(|candidate| !self.used.contains(candidate))
            .unwrap_or_else(|| base.to_string())
    }
}

/// Keyword or predeclared identifier of the generated language
pub fn is_reserved(name: &str) -> bool {
    KEYWORDS.contains(&name) || PREDECLARED.contains(&name)
}

/// Lower the leading uppercase run of an identifier
///
/// The last capital of a run that is followed by a lowercase letter starts
/// the next word and is kept: `HTTPClient` becomes `httpClient`, `DB`
/// becomes `db`.
pub fn lower_camel(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let run = chars.iter().take_while(|c| c.is_uppercase()).count();
    let lowered = match run {
        0 => 0,
        n if n == chars.len() => n,
        1 => 1,
        n if chars[n].is_lowercase() => n - 1,
        n => n,
    };
    chars
        .iter()
        .enumerate()
        .flat_map(|(i, c)| {
            if i < lowered {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                vec![*c]
            }
        })
        .collect()
}
