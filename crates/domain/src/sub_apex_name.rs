/// The one label under the reserved subdomain that carries address records.
pub const NAMESERVER_LABEL: &str = "ns1";

/// Shape of a query name below `<apex>.<zone>`.
///
/// Built from the labels of the name that sit above the zone, leftmost
/// first, so `[ns1, dns]` for `ns1.dns.example.org.` in zone `example.org.`.
/// The reserved subdomain label itself is not part of the depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubApexName {
    /// The reserved subdomain alone, e.g. `dns`. Exists only because names
    /// below it exist.
    EmptyNonTerminal,

    /// Exactly one label below the reserved subdomain.
    NsCandidate(String),

    /// Two or more labels below the reserved subdomain, or nothing at all.
    Invalid,
}

impl SubApexName {
    /// Labels are raw wire bytes. A label may itself contain a `.`; it still
    /// counts once.
    pub fn classify<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut labels = labels.into_iter();

        let first = match labels.next() {
            Some(label) => label,
            None => return SubApexName::Invalid,
        };

        match labels.count() {
            0 => SubApexName::EmptyNonTerminal,
            1 => SubApexName::NsCandidate(String::from_utf8_lossy(first).into_owned()),
            _ => SubApexName::Invalid,
        }
    }

    /// True when this is the nameserver label, compared without regard to case.
    pub fn is_nameserver(&self) -> bool {
        matches!(self, SubApexName::NsCandidate(label) if label.eq_ignore_ascii_case(NAMESERVER_LABEL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_labels_is_invalid() {
        assert_eq!(SubApexName::classify(Vec::<&[u8]>::new()), SubApexName::Invalid);
    }

    #[test]
    fn test_empty_label_still_counts() {
        let labels: [&[u8]; 2] = [b"", b"dns"];
        assert_eq!(
            SubApexName::classify(labels),
            SubApexName::NsCandidate(String::new())
        );
    }
}
