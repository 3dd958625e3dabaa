//! Turns SPARQL [`Solution`](lodbrowse_results::Solution)s into display-ready structures.
//!
//! All functions are pure. The configuration they depend on is passed explicitly, either as
//! arguments or captured once in a [`Projection`].

mod config;
mod display;
mod heuristics;
mod namespaces;
mod partition;
mod preview;
mod projection;

pub use config::ViewConfig;
pub use display::{escape_html, DisplayRow, DisplayValue, Markup};
pub use heuristics::{find_images, find_title};
pub use namespaces::{prefixify, NamespaceDictionary};
pub use partition::{reject_where_unbound, Role};
pub use preview::literal_table;
pub use projection::Projection;
