/// Substrings that flag a log line as unparseable.
pub const DEFAULT_MARKERS: [&str; 2] = ["INVALID_LINE", "cannot be parsed"];

/// The set of marker substrings scanned for in each line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    markers: Vec<String>,
}

impl MarkerSet {
    /// Builds a marker set. Empty markers are dropped since they would match every line.
    #[must_use]
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.markers.iter().any(|m| line.contains(m.as_str()))
    }

    /// Returns the first line containing any marker.
    ///
    /// Lines are split on `\n`. A trailing `\r` is stripped, so for CRLF files
    /// the returned text differs from the raw `\n`-split segment by that one
    /// byte; any other `\r` is kept.
    #[must_use]
    pub fn find_in<'a>(&self, content: &'a str) -> Option<&'a str> {
        content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .find(|line| self.matches(line))
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::new(DEFAULT_MARKERS)
    }
}
