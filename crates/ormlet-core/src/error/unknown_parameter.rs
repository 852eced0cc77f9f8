use super::Error;

/// Error when rendered SQL references a parameter that has no bound value.
#[derive(Debug)]
pub(super) struct UnknownParameter {
    pub(super) name: Box<str>,
}

impl std::error::Error for UnknownParameter {}

impl core::fmt::Display for UnknownParameter {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no value bound for parameter `:{}`", self.name)
    }
}

impl Error {
    pub fn unknown_parameter(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownParameter(UnknownParameter {
            name: name.into().into(),
        }))
    }

    pub fn is_unknown_parameter(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownParameter(_))
    }
}
