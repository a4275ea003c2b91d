use crate::ripple::RippleId;
use crate::shop::CartButton;
use aqua_domain::notification::NotificationId;

/// Every delayed action of the site, fired by [`crate::context::SiteContext::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    ExpireNotification(NotificationId),
    CompleteSubmission,
    ResetForm,
    RemoveRipple(RippleId),
    FinishVerification,
    RestoreCartButton(CartButton),
    FinishLocatorSearch,
    RefreshCountdown,
}
