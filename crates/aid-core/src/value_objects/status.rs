//! Status values and their transition rules
//!
//! Each record type has a small closed set of statuses. Some statuses are
//! terminal: once reached, certain moves back are refused. Guards run before
//! a status change is staged for writing.

use crate::error::DomainError;

text_enum! {
    /// Active flag shared by donors and life memberships
    pub enum ActivityStatus ("Status must be Active or Inactive") {
        Active => "Active",
        Inactive => "Inactive",
    }
}

text_enum! {
    /// Client lifecycle; `Dead` is terminal
    pub enum ClientStatus ("Status must be Active, Inactive, or Dead") {
        Active => "Active",
        Inactive => "Inactive",
        Dead => "Dead",
    }
}

text_enum! {
    /// Monetary donation state; a completed donation cannot become pending again
    pub enum DonationStatus ("Status must be Completed or Pending") {
        Completed => "Completed",
        Pending => "Pending",
    }
}

text_enum! {
    /// Medical donation review state; `collected` is terminal
    pub enum MedicalDonationStatus ("Status must be pending, approved, rejected, or collected") {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
        Collected => "collected",
    }
}

text_enum! {
    /// Distribution state; `provided` cannot move back to pending or cancelled
    pub enum DistributionStatus ("Status must be provided, pending, or cancelled") {
        Provided => "provided",
        Pending => "pending",
        Cancelled => "cancelled",
    }
}

impl Default for ActivityStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl Default for ClientStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl Default for DonationStatus {
    fn default() -> Self {
        Self::Completed
    }
}

impl Default for MedicalDonationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl Default for DistributionStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Transition rules for a status type
pub trait StatusTransition: Copy + Eq {
    /// Stored text, used in error messages
    fn label(self) -> &'static str;

    /// Whether a record currently in `self` may move to `next`
    fn allows(self, next: Self) -> bool;

    /// Whether this status forbids every further change to the record
    fn freezes_record(self) -> bool {
        false
    }

    /// Fails with `InvalidStatusTransition` if the move is refused.
    /// Staying in the same status is always accepted.
    fn ensure_transition(self, next: Self) -> Result<(), DomainError> {
        if self == next || self.allows(next) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.label(),
                to: next.label(),
            })
        }
    }
}

impl StatusTransition for ActivityStatus {
    fn label(self) -> &'static str {
        self.as_str()
    }

    fn allows(self, _next: Self) -> bool {
        true
    }
}

impl StatusTransition for ClientStatus {
    fn label(self) -> &'static str {
        self.as_str()
    }

    fn allows(self, _next: Self) -> bool {
        self != Self::Dead
    }

    fn freezes_record(self) -> bool {
        self == Self::Dead
    }
}

impl StatusTransition for DonationStatus {
    fn label(self) -> &'static str {
        self.as_str()
    }

    fn allows(self, next: Self) -> bool {
        !(self == Self::Completed && next == Self::Pending)
    }
}

impl StatusTransition for MedicalDonationStatus {
    fn label(self) -> &'static str {
        self.as_str()
    }

    fn allows(self, _next: Self) -> bool {
        self != Self::Collected
    }
}

impl StatusTransition for DistributionStatus {
    fn label(self) -> &'static str {
        self.as_str()
    }

    fn allows(self, next: Self) -> bool {
        !(self == Self::Provided && matches!(next, Self::Pending | Self::Cancelled))
    }
}
