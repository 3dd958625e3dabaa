use serde::{Deserialize, Serialize};

/// An ordered list of `(prefix, namespace)` pairs.
///
/// Order matters: [`prefixify`] uses the first namespace that matches. In configuration files the
/// dictionary is written as `[["dc", "http://purl.org/dc/terms/"], ...]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceDictionary(Vec<(String, String)>);

impl NamespaceDictionary {
    pub fn new<P: Into<String>, N: Into<String>>(entries: impl IntoIterator<Item = (P, N)>) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(prefix, namespace)| (prefix.into(), namespace.into()))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(prefix, namespace)| (prefix.as_str(), namespace.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// See [`prefixify`].
    pub fn prefixify(&self, text: &str) -> String {
        prefixify(self, text)
    }
}

/// Compresses a URI to its `prefix:localname` form.
///
/// `text` may be enclosed in `<` `>`. The first namespace of `namespaces` that is a prefix of the
/// URI is used, unless the remaining local name contains a `/`; such deeper paths are left
/// alone. If nothing is abbreviated, `text` is returned unmodified, delimiters included.
pub fn prefixify(namespaces: &NamespaceDictionary, text: &str) -> String {
    let uri = text
        .strip_prefix('<')
        .and_then(|inner| inner.strip_suffix('>'))
        .unwrap_or(text);

    for (prefix, namespace) in namespaces.iter() {
        if let Some(local_name) = uri.strip_prefix(namespace) {
            if local_name.contains('/') {
                return text.to_owned();
            }
            return format!("{prefix}:{local_name}");
        }
    }
    text.to_owned()
}
