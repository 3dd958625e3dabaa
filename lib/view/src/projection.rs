use crate::{
    find_images, find_title, literal_table, reject_where_unbound, DisplayRow, Markup, Role,
    ViewConfig,
};
use lodbrowse_results::Solution;
use std::sync::Arc;

/// The projection layer bound to one [`ViewConfig`].
///
/// A projection holds no mutable state. Clones share the configuration and can be used from any
/// number of concurrent requests.
#[derive(Clone, Debug)]
pub struct Projection {
    config: Arc<ViewConfig>,
}

impl Projection {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Renders the rows in which the browsed resource plays `role`.
    pub fn partition_by_role(&self, role: Role, solutions: &[Solution]) -> Vec<DisplayRow> {
        reject_where_unbound(role.gate_variable(), solutions, &self.config)
    }

    pub fn find_title(&self, solutions: &[Solution]) -> Option<String> {
        find_title(&self.config.title_predicates, solutions)
    }

    pub fn find_images(&self, solutions: &[Solution]) -> Vec<String> {
        find_images(
            &self.config.image_predicates,
            solutions,
            self.config.max_images,
            self.config.show_images,
        )
    }

    /// Compresses `text` with the configured namespaces. Returns `text` unchanged if namespace
    /// compression is disabled.
    pub fn prefixify(&self, text: &str) -> String {
        self.config.display_text(text)
    }

    /// Renders the literal preview of a resource. Predicates are always compressed with the
    /// preview namespaces.
    pub fn literal_table(&self, solutions: &[Solution]) -> Markup {
        literal_table(Some(&self.config.preview_namespaces), solutions)
    }
}

impl From<ViewConfig> for Projection {
    fn from(config: ViewConfig) -> Self {
        Self::new(config)
    }
}
