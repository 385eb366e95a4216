use std::fmt;

/// Status code carried by an assembled reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseStatus {
    #[default]
    NoError,
    ServFail,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::NoError => "NOERROR",
            ResponseStatus::ServFail => "SERVFAIL",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseStatus::NoError)
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
