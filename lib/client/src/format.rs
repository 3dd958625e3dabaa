/// The output format requested from the endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QueryOutputFormat {
    /// `application/sparql-results+json`, for `SELECT` queries.
    #[default]
    Json,
    /// `application/x-trig`, for `CONSTRUCT` queries.
    Rdf,
}

impl QueryOutputFormat {
    /// Resolves a format name. Unrecognized names fall back to [`QueryOutputFormat::Json`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "rdf" => Self::Rdf,
            _ => Self::Json,
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            Self::Json => "application/sparql-results+json",
            Self::Rdf => "application/x-trig",
        }
    }
}
