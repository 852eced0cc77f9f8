use super::Error;

/// Error when a property is applied to an instance of another record type.
#[derive(Debug)]
pub(super) struct RecordMismatch {
    pub(super) property: Box<str>,
    pub(super) expected: &'static str,
}

impl std::error::Error for RecordMismatch {}

impl core::fmt::Display for RecordMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "property `{}` belongs to record `{}`; instance is of another type",
            self.property, self.expected
        )
    }
}

impl Error {
    pub fn record_mismatch(property: impl Into<String>, expected: &'static str) -> Error {
        Error::from(super::ErrorKind::RecordMismatch(RecordMismatch {
            property: property.into().into(),
            expected,
        }))
    }

    pub fn is_record_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RecordMismatch(_))
    }
}
