// SPDX-License-Identifier: MPL-2.0
use crate::content::ContentError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Content Error: {0}")]
    Content(#[from] ContentError),
}

impl Error {
    /// Returns the i18n message key used when this error is surfaced in the
    /// warning banner.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "banner-io-error",
            Error::Config(_) => "banner-config-load-error",
            Error::Content(err) => err.i18n_key(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_maps_to_config() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("= nope");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.i18n_key(), "banner-config-load-error");
    }

    #[test]
    fn content_error_keeps_its_own_key() {
        let err: Error = ContentError::DuplicateId {
            list: "faq",
            id: "faq-1".into(),
        }
        .into();
        assert_eq!(err.i18n_key(), "banner-content-invalid");
        assert!(format!("{}", err).contains("faq-1"));
    }
}
