//! Closed value sets rendered as `<select>` options (course status,
//! certificate status, user role).
//!
//! Records keep the backend's string as is, so a value this console does not
//! know survives an edit unchanged. A [`Choice`] only interprets that string
//! for display and offers the known options.

pub trait Choice: Sized + Copy + PartialEq + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    /// Exact string stored by the backend.
    fn wire(self) -> &'static str;

    /// Text shown to the user.
    fn label(self) -> &'static str {
        self.wire()
    }

    fn from_wire(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.iter().copied().find(|choice| choice.wire() == value)
    }

    /// Display text for a stored value; unknown values show verbatim.
    fn label_of(value: &str) -> &str {
        Self::from_wire(value).map_or(value, |choice| choice.label())
    }
}
