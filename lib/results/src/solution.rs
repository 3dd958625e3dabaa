use lodbrowse_model::Term;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// A single row of a result set, mapping variable names to their bound [`Term`]s.
///
/// Unbound variables are not part of the solution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    terms: BTreeMap<String, Term>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the term bound to `variable`, if any.
    pub fn get(&self, variable: &str) -> Option<&Term> {
        self.terms.get(variable)
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.terms.contains_key(variable)
    }

    pub fn insert(&mut self, variable: impl Into<String>, term: impl Into<Term>) {
        self.terms.insert(variable.into(), term.into());
    }

    /// The bound variables, in name order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Term> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<V: Into<String>, T: Into<Term>> FromIterator<(V, T)> for Solution {
    fn from_iter<I: IntoIterator<Item = (V, T)>>(iter: I) -> Self {
        Self {
            terms: iter
                .into_iter()
                .map(|(variable, term)| (variable.into(), term.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Solution {
    type Item = (String, Term);
    type IntoIter = btree_map::IntoIter<String, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = (&'a String, &'a Term);
    type IntoIter = btree_map::Iter<'a, String, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
