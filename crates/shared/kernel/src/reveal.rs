//! Scroll-triggered entrance animations.
//!
//! Elements start hidden and are revealed the first time any part of them enters the viewport.
//! The renderer only reports the entry that starts an intersection, so there is no second
//! chance to cross a larger ratio. Reveals are one-shot: scrolling away never hides an element
//! again.

use std::collections::HashSet;
use std::time::Duration;

/// Animation family of an observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealGroup {
    /// Product cards, feature cards and the large content blocks; animated by class.
    Section,
    SchoolCard,
    Benefit,
    OrderStep,
    RegionalCard,
}

impl RevealGroup {
    /// Delay between consecutive elements of the group.
    #[must_use]
    pub const fn stagger(self) -> Duration {
        match self {
            Self::Section => Duration::ZERO,
            Self::SchoolCard => Duration::from_millis(100),
            Self::Benefit | Self::RegionalCard => Duration::from_millis(150),
            Self::OrderStep => Duration::from_millis(200),
        }
    }

    /// Hidden offset, in px.
    const fn offset(self) -> u32 {
        match self {
            Self::RegionalCard => 50,
            _ => 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealKey {
    pub group: RevealGroup,
    pub index: usize,
}

impl RevealKey {
    #[must_use]
    pub const fn new(group: RevealGroup, index: usize) -> Self {
        Self { group, index }
    }

    /// Transition delay of this element within its group.
    #[must_use]
    pub fn delay(self) -> Duration {
        self.group.stagger().saturating_mul(u32::try_from(self.index).unwrap_or(u32::MAX))
    }
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<RevealKey>,
}

impl RevealTracker {
    /// Visibility callback. Returns `true` only on the reveal itself.
    pub fn observe(&mut self, key: RevealKey, visible_ratio: f64) -> bool {
        visible_ratio > 0.0 && self.revealed.insert(key)
    }

    #[must_use]
    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.revealed.contains(&key)
    }

    /// Extra class for class-animated elements.
    #[must_use]
    pub fn class(&self, key: RevealKey) -> &'static str {
        if key.group == RevealGroup::Section && self.is_revealed(key) { "fade-in-up" } else { "" }
    }

    /// Inline style for staggered elements; empty for class-animated ones.
    #[must_use]
    pub fn style(&self, key: RevealKey) -> String {
        if key.group == RevealGroup::Section {
            return String::new();
        }

        let (opacity, offset) =
            if self.is_revealed(key) { (1, 0) } else { (0, key.group.offset()) };
        format!(
            "opacity: {opacity}; transform: translateY({offset}px); \
             transition: opacity 0.6s ease, transform 0.6s ease; transition-delay: {:.2}s;",
            key.delay().as_secs_f64()
        )
    }
}
