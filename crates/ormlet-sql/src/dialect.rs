use crate::{GenericTranslator, PostgresqlTranslator, Translator};

use ormlet_core::{Error, Result};

use url::Url;

/// A supported SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Generic,
    Postgresql,
}

/// Translator configuration.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Leave null key values out of key criteria instead of matching them
    /// with `IS NULL`.
    pub ignore_null_keys: bool,
}

impl Options {
    pub fn ignore_null_keys(mut self, ignore_null_keys: bool) -> Self {
        self.ignore_null_keys = ignore_null_keys;
        self
    }
}

impl Dialect {
    /// Picks the dialect from a connection URL's scheme.
    pub fn from_url(url: &str) -> Result<Self> {
        let url =
            Url::parse(url).map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        match url.scheme() {
            "postgres" | "postgresql" => Ok(Self::Postgresql),
            "generic" | "ansi" => Ok(Self::Generic),
            scheme => Err(Error::invalid_connection_url(format!(
                "unsupported database; scheme={scheme}; url={url}"
            ))),
        }
    }

    pub fn translator(self, options: Options) -> Box<dyn Translator> {
        tracing::debug!(dialect = ?self, ?options, "creating translator");

        match self {
            Self::Generic => Box::new(GenericTranslator::with_options(&options)),
            Self::Postgresql => Box::new(PostgresqlTranslator::with_options(&options)),
        }
    }
}
