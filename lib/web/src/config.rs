use lodbrowse::BrowserConfig;

/// Holds the configuration for a lodbrowse web server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// The configuration of the browser serving the pages.
    pub browser: BrowserConfig,
    /// The IP address or DNS name that the socket binds to, with its port.
    pub bind: String,
    /// Whether CORS is enabled.
    pub cors: bool,
}

impl ServerConfig {
    /// Binds to all interfaces on the port of the browser configuration.
    pub fn new(browser: BrowserConfig) -> Self {
        let bind = format!("0.0.0.0:{}", browser.serve_port);
        Self {
            browser,
            bind,
            cors: false,
        }
    }
}
