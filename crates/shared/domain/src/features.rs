use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Premium features a visitor can tick in the "check features" section.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureSet: u16 {
        const PURIFIED = 1 << 0;
        const MINERALS = 1 << 1;
        const PH_BALANCED = 1 << 2;
        const BPA_FREE = 1 << 3;
        const ECO_PACKAGING = 1 << 4;
        const QUALITY_TESTED = 1 << 5;
        const HOME_DELIVERY = 1 << 6;
        const SUBSCRIPTION = 1 << 7;

        const ALL = Self::PURIFIED.bits()
            | Self::MINERALS.bits()
            | Self::PH_BALANCED.bits()
            | Self::BPA_FREE.bits()
            | Self::ECO_PACKAGING.bits()
            | Self::QUALITY_TESTED.bits()
            | Self::HOME_DELIVERY.bits()
            | Self::SUBSCRIPTION.bits();
    }
}

impl FeatureSet {
    /// Every single feature with its checkbox label, in display order.
    pub const LABELED: [(Self, &'static str); 8] = [
        (Self::PURIFIED, "7-stage purification"),
        (Self::MINERALS, "Enhanced with essential minerals"),
        (Self::PH_BALANCED, "pH balanced"),
        (Self::BPA_FREE, "BPA-free bottles"),
        (Self::ECO_PACKAGING, "Eco-friendly packaging"),
        (Self::QUALITY_TESTED, "Lab quality tested"),
        (Self::HOME_DELIVERY, "Free home delivery"),
        (Self::SUBSCRIPTION, "Flexible subscription"),
    ];

    /// Number of features in [`Self::ALL`].
    #[must_use]
    pub const fn total() -> u32 {
        Self::ALL.bits().count_ones()
    }

    /// Number of features in this selection.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.bits().count_ones()
    }
}

impl From<u16> for FeatureSet {
    fn from(bits: u16) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for FeatureSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.bits())
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_covers_all() {
        let union = FeatureSet::LABELED.iter().fold(FeatureSet::empty(), |acc, (f, _)| acc | *f);
        assert_eq!(union, FeatureSet::ALL);
        assert_eq!(FeatureSet::total(), 8);
    }

    #[test]
    fn default_selection_is_empty() {
        assert_eq!(FeatureSet::default(), FeatureSet::empty());
        assert_eq!(FeatureSet::default().count(), 0);
    }

    #[test]
    fn unknown_bits_are_dropped() {
        assert_eq!(FeatureSet::from(0xFF03), FeatureSet::PURIFIED | FeatureSet::MINERALS);
    }
}
