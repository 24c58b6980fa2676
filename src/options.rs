//! Parser configuration options.

/// Configuration options for parsing a hand history.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hhreplay::ParseOptions;
///
/// let options = ParseOptions::default()
///     .with_uncalled_returns(true)
///     .with_max_seats(9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Whether `Uncalled bet (X) returned to Name` lines produce an
    /// [`Event::UncalledReturn`](crate::Event::UncalledReturn).
    ///
    /// Off by default: the refund is dropped and the replayed pot keeps the
    /// uncalled part.
    pub uncalled_returns: bool,
    /// Whether `collected`/`won` lines produce [`Event::Summary`](crate::Event::Summary) entries.
    pub summaries: bool,
    /// Highest seat number accepted from a seat declaration.
    pub max_seats: u8,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            uncalled_returns: false,
            summaries: true,
            max_seats: 10,
        }
    }
}

impl ParseOptions {
    /// Sets whether uncalled-bet returns are recorded.
    ///
    /// # Example
    ///
    /// ```
    /// use hhreplay::ParseOptions;
    ///
    /// let options = ParseOptions::default().with_uncalled_returns(true);
    /// assert_eq!(options.uncalled_returns, true);
    /// ```
    #[must_use]
    pub const fn with_uncalled_returns(mut self, enabled: bool) -> Self {
        self.uncalled_returns = enabled;
        self
    }

    /// Sets whether collection lines are recorded as summary entries.
    ///
    /// # Example
    ///
    /// ```
    /// use hhreplay::ParseOptions;
    ///
    /// let options = ParseOptions::default().with_summaries(false);
    /// assert_eq!(options.summaries, false);
    /// ```
    #[must_use]
    pub const fn with_summaries(mut self, enabled: bool) -> Self {
        self.summaries = enabled;
        self
    }

    /// Sets the highest accepted seat number.
    ///
    /// # Example
    ///
    /// ```
    /// use hhreplay::ParseOptions;
    ///
    /// let options = ParseOptions::default().with_max_seats(6);
    /// assert_eq!(options.max_seats, 6);
    /// ```
    #[must_use]
    pub const fn with_max_seats(mut self, max_seats: u8) -> Self {
        self.max_seats = max_seats;
        self
    }
}
