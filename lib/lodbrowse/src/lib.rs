#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod browser;
pub mod config;
pub mod error;
pub mod queries;

pub use browser::{BrowseOutcome, Browser, ResourcePage};
pub use config::BrowserConfig;
pub use error::{BrowseError, ConfigError};

pub mod model {
    pub use lodbrowse_model::*;
}

pub mod results {
    pub use lodbrowse_results::*;
}

pub mod client {
    pub use lodbrowse_client::*;
}

pub mod view {
    pub use lodbrowse_view::*;
}
