//! Status flags carried by step markers.
//!
//! Markup exposes these as class tokens (`class="step-circle current available"`).
//! They are parsed once at the host boundary into a [`StatusFlags`] set so the
//! layout code only ever does set-membership checks.

use core::fmt;

/// A single status a step marker may carry. Statuses are not exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// The step the visitor is currently on.
    Current,
    /// The step has been completed.
    Complete,
    /// The step has not been completed yet.
    Incomplete,
    /// The step can be navigated to.
    Available,
    /// The step is locked behind earlier incomplete steps.
    Unavailable,
}

impl StepStatus {
    /// Every status, in bit order.
    pub const ALL: [Self; 5] = [
        Self::Current,
        Self::Complete,
        Self::Incomplete,
        Self::Available,
        Self::Unavailable,
    ];

    const fn bit(self) -> u8 {
        match self {
            Self::Current => 1,
            Self::Complete => 1 << 1,
            Self::Incomplete => 1 << 2,
            Self::Available => 1 << 3,
            Self::Unavailable => 1 << 4,
        }
    }

    /// The class token used for this status in markup.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }

    /// Match a class token, ignoring ASCII case. Unrelated tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.token().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.token())
    }
}

/// Set of [`StepStatus`] values carried by one marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StatusFlags(u8);

impl StatusFlags {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Returns a copy of the set with `status` added.
    #[must_use]
    pub const fn with(self, status: StepStatus) -> Self {
        Self(self.0 | status.bit())
    }

    pub fn insert(&mut self, status: StepStatus) {
        self.0 |= status.bit();
    }

    pub const fn contains(self, status: StepStatus) -> bool {
        self.0 & status.bit() != 0
    }

    /// True when every status in `other` is also in `self`.
    pub const fn contains_all(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Build a set from class tokens, skipping tokens that are not statuses.
    pub fn from_tokens<'tok, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'tok str>,
    {
        tokens
            .into_iter()
            .filter_map(StepStatus::from_token)
            .collect()
    }

    /// Build a set from a whitespace-separated `class` attribute value.
    pub fn from_class_attr(class_attr: &str) -> Self {
        Self::from_tokens(class_attr.split_ascii_whitespace())
    }

    /// Iterate the contained statuses in bit order.
    pub fn iter(self) -> impl Iterator<Item = StepStatus> {
        StepStatus::ALL
            .into_iter()
            .filter(move |status| self.contains(*status))
    }
}

impl FromIterator<StepStatus> for StatusFlags {
    fn from_iter<T: IntoIterator<Item = StepStatus>>(iter: T) -> Self {
        let mut flags = Self::EMPTY;
        for status in iter {
            flags.insert(status);
        }
        flags
    }
}

impl fmt::Display for StatusFlags {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for status in self.iter() {
            if !first {
                formatter.write_str(" ")?;
            }
            formatter.write_str(status.token())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_status_tokens_and_ignores_others() {
        let flags = StatusFlags::from_class_attr("step-circle  current\tAVAILABLE extra");
        assert!(flags.contains(StepStatus::Current));
        assert!(flags.contains(StepStatus::Available));
        assert!(!flags.contains(StepStatus::Complete));
        assert_eq!(flags.to_string(), "current available");
    }

    #[test]
    fn flags_are_not_exclusive() {
        let flags = StatusFlags::EMPTY
            .with(StepStatus::Current)
            .with(StepStatus::Complete)
            .with(StepStatus::Incomplete);
        let wanted = StatusFlags::EMPTY
            .with(StepStatus::Current)
            .with(StepStatus::Incomplete);
        assert!(flags.contains_all(wanted));
        assert!(!wanted.contains_all(flags));
    }
}
