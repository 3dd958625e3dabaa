use crate::NamespaceDictionary;

/// The configuration of the projection layer.
///
/// It is loaded once and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewConfig {
    /// URIs starting with this prefix belong to the browsed dataset and are rendered as links.
    /// An empty base URI disables links.
    pub base_uri: String,
    /// `None` disables namespace compression.
    pub namespaces: Option<NamespaceDictionary>,
    /// Compresses the predicates of literal previews, whether or not `namespaces` is active.
    pub preview_namespaces: NamespaceDictionary,
    pub title_predicates: Vec<String>,
    pub image_predicates: Vec<String>,
    pub max_images: usize,
    pub show_images: bool,
    /// Whether links carry the tooltip placeholder that the literal preview fills in.
    pub fetch_literals: bool,
}

impl ViewConfig {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            ..Self::default()
        }
    }

    /// Renders a term's canonical form, compressed if a namespace dictionary is active.
    pub(crate) fn display_text(&self, canonical_form: &str) -> String {
        match &self.namespaces {
            Some(namespaces) => namespaces.prefixify(canonical_form),
            None => canonical_form.to_owned(),
        }
    }
}
