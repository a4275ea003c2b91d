//! # Feature checklist
//!
//! Checkboxes over [`FeatureSet`], a progress bar and a delayed "verify" step that grades the
//! selection made at click time.

use crate::notification::Notice;
use crate::scheduler::Scheduler;
use crate::task::Task;
use aqua_domain::constants::{ALL_FEATURES_CHECKED, ALL_FEATURES_RESET, VERIFY_LABEL, VERIFYING_LABEL};
use aqua_domain::features::FeatureSet;
use std::time::Duration;
use tracing::debug;

/// Grade of a verified selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Complete,
    Most,
    Half,
    Started,
    Empty,
}

impl Tier {
    #[must_use]
    pub fn grade(checked: u32, total: u32) -> Self {
        let (checked, total) = (f64::from(checked), f64::from(total));
        if checked >= total && total > 0.0 {
            Self::Complete
        } else if checked >= total * 0.75 && checked > 0.0 {
            Self::Most
        } else if checked >= total * 0.5 && checked > 0.0 {
            Self::Half
        } else if checked > 0.0 {
            Self::Started
        } else {
            Self::Empty
        }
    }
}

/// Result panel content after a verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub tier: Tier,
    pub checked: u32,
    pub total: u32,
}

impl Verdict {
    #[must_use]
    pub fn new(checked: u32, total: u32) -> Self {
        Self { tier: Tier::grade(checked, total), checked, total }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self.tier {
            Tier::Complete => "🎉",
            Tier::Most => "👍",
            Tier::Half => "✅",
            Tier::Started => "📋",
            Tier::Empty => "❓",
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.tier {
            Tier::Complete => "Excellent Choice!",
            Tier::Most => "Great Selection!",
            Tier::Half => "Good Start!",
            Tier::Started => "Keep Going!",
            Tier::Empty => "Make Your Selection",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        let Self { checked, total, .. } = self;
        match self.tier {
            Tier::Complete => format!(
                "You've selected all {total} premium features. \
                 You're ready to experience the best water service!"
            ),
            Tier::Most => format!(
                "You've selected {checked} out of {total} features. You're getting excellent value!"
            ),
            Tier::Half => format!(
                "You've selected {checked} out of {total} features. \
                 Consider adding more for better experience!"
            ),
            Tier::Started => format!(
                "You've selected {checked} out of {total} features. \
                 Add more to unlock premium benefits!"
            ),
            Tier::Empty => "Select some features to see personalized recommendations!".to_owned(),
        }
    }

    #[must_use]
    pub const fn background(&self) -> &'static str {
        match self.tier {
            Tier::Complete => "rgba(76, 175, 80, 0.2)",
            Tier::Most => "rgba(255, 152, 0, 0.2)",
            Tier::Half => "rgba(33, 150, 243, 0.2)",
            Tier::Started => "rgba(156, 39, 176, 0.2)",
            Tier::Empty => "rgba(255, 255, 255, 0.1)",
        }
    }

    #[must_use]
    pub const fn border_color(&self) -> &'static str {
        match self.tier {
            Tier::Complete => "#4CAF50",
            Tier::Most => "#FF9800",
            Tier::Half => "#2196F3",
            Tier::Started => "#9C27B0",
            Tier::Empty => "rgba(255, 255, 255, 0.2)",
        }
    }

    /// Info notification accompanying the panel.
    #[must_use]
    pub fn notice(&self) -> Notice {
        Notice::info(match self.tier {
            Tier::Complete => "🎉 Perfect! All features verified!",
            Tier::Most => "👍 Great! Most features selected!",
            Tier::Half => "✅ Good! Keep adding more features!",
            Tier::Started => "📋 Add more features for better experience!",
            Tier::Empty => "❓ Please select some features first!",
        })
    }
}

#[derive(Debug, Default)]
pub struct Checklist {
    checked: FeatureSet,
    /// Count captured by a pending verification.
    verifying: Option<u32>,
    verdict: Option<Verdict>,
}

impl Checklist {
    #[must_use]
    pub const fn checked(&self) -> FeatureSet {
        self.checked
    }

    pub fn toggle(&mut self, feature: FeatureSet, on: bool) {
        self.checked.set(feature, on);
        debug!(checked = self.checked.count(), "Feature toggled");
    }

    pub fn check_all(&mut self) -> Notice {
        self.checked = FeatureSet::ALL;
        Notice::info(ALL_FEATURES_CHECKED)
    }

    pub fn uncheck_all(&mut self) -> Notice {
        self.checked = FeatureSet::empty();
        Notice::info(ALL_FEATURES_RESET)
    }

    /// Starts grading the current selection. Ignored while a verification is pending.
    pub fn verify(&mut self, scheduler: &mut Scheduler<Task>, now: Duration, delay: Duration) -> bool {
        if self.verifying.is_some() {
            return false;
        }
        self.verifying = Some(self.checked.count());
        scheduler.schedule(now, delay, Task::FinishVerification);
        true
    }

    /// Timer callback.
    pub fn finish_verification(&mut self) -> Option<Notice> {
        let checked = self.verifying.take()?;
        let verdict = Verdict::new(checked, FeatureSet::total());
        debug!(checked, tier = ?verdict.tier, "Selection verified");
        self.verdict = Some(verdict);
        Some(verdict.notice())
    }

    #[must_use]
    pub const fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    #[must_use]
    pub const fn is_verifying(&self) -> bool {
        self.verifying.is_some()
    }

    #[must_use]
    pub const fn verify_label(&self) -> &'static str {
        if self.is_verifying() { VERIFYING_LABEL } else { VERIFY_LABEL }
    }

    #[must_use]
    pub fn progress_text(&self) -> String {
        format!("{}/{} features checked", self.checked.count(), FeatureSet::total())
    }

    #[must_use]
    pub fn percentage(&self) -> f64 {
        f64::from(self.checked.count()) / f64::from(FeatureSet::total()) * 100.0
    }

    /// Progress bar fill, coloured by completion.
    #[must_use]
    pub fn progress_style(&self) -> String {
        let percentage = self.percentage();
        let gradient = if percentage >= 100.0 {
            "linear-gradient(90deg, #4CAF50, #8BC34A)"
        } else if percentage >= 75.0 {
            "linear-gradient(90deg, #FF9800, #FFC107)"
        } else if percentage >= 50.0 {
            "linear-gradient(90deg, #2196F3, #03A9F4)"
        } else {
            "linear-gradient(90deg, #9C27B0, #673AB7)"
        };
        format!("width: {percentage}%; background: {gradient};")
    }
}
