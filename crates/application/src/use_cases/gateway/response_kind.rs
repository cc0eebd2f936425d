/// Outcome of answering one question, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Answer,
    NoData,
    NxDomain,
    Refused,
}

impl ResponseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Answer => "ANSWER",
            ResponseKind::NoData => "NODATA",
            ResponseKind::NxDomain => "NXDOMAIN",
            ResponseKind::Refused => "REFUSED",
        }
    }
}
