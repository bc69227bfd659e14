//! # Order status machine
//!
//! One transition table shared by every page that shows order actions. The table
//! decides which buttons are rendered; the remote API performs and validates the
//! actual transition when it receives the `PATCH /orders/{id}/status` call.
//!
//! ```text
//! PENDING ──> IN_PROGRESS ──> READY_FOR_DELIVERY ──> DISPATCHED ──> DELIVERING ──> DELIVERED
//!    │             │                   │                  │              │
//!    └─────────────┴───────────────────┴──────────────────┴──────────────┴──> CANCELLED ──> PENDING
//! ```
//!
//! `actions_for` narrows the table to the moves a given role is allowed to issue:
//! the laboratory prepares, the delivery person ships, the bakery can cancel or
//! reopen its own request, and the administrator can do everything.

use crate::model::order::OrderStatus;
use crate::model::reclamation::ReclamationStatus;
use crate::model::user::Role;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Passage de « {} » à « {} » impossible", .from.label(), .to.label())]
    NotAllowed { from: OrderStatus, to: OrderStatus },
    #[error(
        "Le rôle {} ne peut pas passer une commande de « {} » à « {} »",
        .role.label(),
        .from.label(),
        .to.label()
    )]
    Forbidden {
        role: Role,
        from: OrderStatus,
        to: OrderStatus,
    },
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::ReadyForDelivery,
        OrderStatus::Dispatched,
        OrderStatus::Delivering,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Statuses reachable in one step from `self`.
    pub fn next_statuses(self) -> &'static [OrderStatus] {
        use OrderStatus::*;
        match self {
            Pending => &[InProgress, Cancelled],
            InProgress => &[ReadyForDelivery, Cancelled],
            ReadyForDelivery => &[Dispatched, Cancelled],
            Dispatched => &[Delivering, Cancelled],
            Delivering => &[Delivered, Cancelled],
            Delivered => &[],
            Cancelled => &[Pending],
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.next_statuses().is_empty()
    }

    /// Wire name, as used in query strings (`?status=READY_FOR_DELIVERY`).
    pub fn code(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::ReadyForDelivery => "READY_FOR_DELIVERY",
            OrderStatus::Dispatched => "DISPATCHED",
            OrderStatus::Delivering => "DELIVERING",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_code(code: &str) -> Option<OrderStatus> {
        OrderStatus::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "En attente",
            OrderStatus::InProgress => "En préparation",
            OrderStatus::ReadyForDelivery => "Prête à livrer",
            OrderStatus::Dispatched => "Expédiée",
            OrderStatus::Delivering => "En livraison",
            OrderStatus::Delivered => "Livrée",
            OrderStatus::Cancelled => "Annulée",
        }
    }

    /// Button caption for the action that moves an order *into* `self`.
    pub fn action_label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Rouvrir",
            OrderStatus::InProgress => "Démarrer la préparation",
            OrderStatus::ReadyForDelivery => "Marquer prête",
            OrderStatus::Dispatched => "Expédier",
            OrderStatus::Delivering => "Démarrer la livraison",
            OrderStatus::Delivered => "Marquer livrée",
            OrderStatus::Cancelled => "Annuler",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            OrderStatus::Pending => "badge badge-neutral",
            OrderStatus::InProgress => "badge badge-info",
            OrderStatus::ReadyForDelivery => "badge badge-warning",
            OrderStatus::Dispatched | OrderStatus::Delivering => "badge badge-primary",
            OrderStatus::Delivered => "badge badge-success",
            OrderStatus::Cancelled => "badge badge-danger",
        }
    }
}

fn role_may_issue(role: Role, from: OrderStatus, to: OrderStatus) -> bool {
    use OrderStatus::*;
    match role {
        Role::Admin => true,
        Role::Laboratory => matches!(
            (from, to),
            (Pending, InProgress)
                | (InProgress, ReadyForDelivery)
                | (Pending, Cancelled)
                | (InProgress, Cancelled)
        ),
        Role::Delivery => matches!(
            (from, to),
            (ReadyForDelivery, Dispatched) | (Dispatched, Delivering) | (Delivering, Delivered)
        ),
        Role::Bakery => matches!((from, to), (Pending, Cancelled) | (Cancelled, Pending)),
    }
}

/// Transitions out of `status` that `role` gets a button for, in table order.
pub fn actions_for(role: Role, status: OrderStatus) -> Vec<OrderStatus> {
    status
        .next_statuses()
        .iter()
        .copied()
        .filter(|next| role_may_issue(role, status, *next))
        .collect()
}

/// Checks a transition against the table and the role before the PATCH is issued.
pub fn check_transition(
    role: Role,
    from: OrderStatus,
    to: OrderStatus,
) -> Result<(), TransitionError> {
    if !from.can_transition_to(to) {
        return Err(TransitionError::NotAllowed { from, to });
    }
    if !role_may_issue(role, from, to) {
        return Err(TransitionError::Forbidden { role, from, to });
    }
    Ok(())
}

impl ReclamationStatus {
    pub fn next(self) -> Option<ReclamationStatus> {
        match self {
            ReclamationStatus::Reported => Some(ReclamationStatus::UnderReview),
            ReclamationStatus::UnderReview => Some(ReclamationStatus::Resolved),
            ReclamationStatus::Resolved => None,
        }
    }

    pub fn can_transition_to(self, next: ReclamationStatus) -> bool {
        self.next() == Some(next)
    }

    /// A resolution is only recorded once an administrator has taken the
    /// reclamation under review.
    pub fn can_resolve(self) -> bool {
        self.can_transition_to(ReclamationStatus::Resolved)
    }

    pub fn label(self) -> &'static str {
        match self {
            ReclamationStatus::Reported => "Signalée",
            ReclamationStatus::UnderReview => "En cours d'examen",
            ReclamationStatus::Resolved => "Résolue",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ReclamationStatus::Reported => "badge badge-danger",
            ReclamationStatus::UnderReview => "badge badge-warning",
            ReclamationStatus::Resolved => "badge badge-success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn pending_offers_exactly_preparation_or_cancel() {
        assert_eq!(Pending.next_statuses(), &[InProgress, Cancelled]);
    }

    #[test]
    fn table_is_fixed_for_every_status() {
        assert_eq!(InProgress.next_statuses(), &[ReadyForDelivery, Cancelled]);
        assert_eq!(ReadyForDelivery.next_statuses(), &[Dispatched, Cancelled]);
        assert_eq!(Dispatched.next_statuses(), &[Delivering, Cancelled]);
        assert_eq!(Delivering.next_statuses(), &[Delivered, Cancelled]);
        assert!(Delivered.next_statuses().is_empty());
        assert_eq!(Cancelled.next_statuses(), &[Pending]);
    }

    #[test]
    fn delivered_is_terminal_and_cannot_go_back() {
        assert!(Delivered.is_terminal());
        assert!(!Delivered.can_transition_to(Pending));
        assert!(!Cancelled.is_terminal());
    }

    #[test]
    fn role_actions_are_a_subset_of_the_table() {
        for role in Role::ALL {
            for status in OrderStatus::ALL {
                for next in actions_for(role, status) {
                    assert!(status.can_transition_to(next), "{role} {status:?} -> {next:?}");
                }
            }
        }
    }

    #[test]
    fn each_role_drives_its_own_segment() {
        assert_eq!(actions_for(Role::Laboratory, Pending), vec![InProgress, Cancelled]);
        assert!(actions_for(Role::Laboratory, ReadyForDelivery).is_empty());
        assert_eq!(actions_for(Role::Delivery, ReadyForDelivery), vec![Dispatched]);
        assert_eq!(actions_for(Role::Delivery, Delivering), vec![Delivered]);
        assert_eq!(actions_for(Role::Bakery, Pending), vec![Cancelled]);
        assert_eq!(actions_for(Role::Bakery, Cancelled), vec![Pending]);
        assert_eq!(actions_for(Role::Admin, Dispatched), vec![Delivering, Cancelled]);
    }

    #[test]
    fn check_transition_reports_the_failing_rule() {
        assert_eq!(check_transition(Role::Admin, Pending, InProgress), Ok(()));
        assert_eq!(
            check_transition(Role::Admin, Delivered, Pending),
            Err(TransitionError::NotAllowed { from: Delivered, to: Pending })
        );
        assert!(matches!(
            check_transition(Role::Bakery, Pending, InProgress),
            Err(TransitionError::Forbidden { .. })
        ));
    }

    #[test]
    fn transition_errors_read_in_french() {
        let not_allowed = check_transition(Role::Admin, Delivered, Pending).unwrap_err();
        assert_eq!(
            not_allowed.to_string(),
            "Passage de « Livrée » à « En attente » impossible"
        );
        let forbidden = check_transition(Role::Bakery, Pending, InProgress).unwrap_err();
        assert_eq!(
            forbidden.to_string(),
            "Le rôle Boulangerie ne peut pas passer une commande de « En attente » à « En préparation »"
        );
    }

    #[test]
    fn codes_round_trip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("SHIPPED"), None);
    }

    #[test]
    fn reclamation_moves_forward_only() {
        assert_eq!(ReclamationStatus::Reported.next(), Some(ReclamationStatus::UnderReview));
        assert!(ReclamationStatus::UnderReview.can_transition_to(ReclamationStatus::Resolved));
        assert!(!ReclamationStatus::Resolved.can_transition_to(ReclamationStatus::Reported));
    }

    #[test]
    fn only_reviewed_reclamations_can_be_resolved() {
        assert!(!ReclamationStatus::Reported.can_resolve());
        assert!(ReclamationStatus::UnderReview.can_resolve());
        assert!(!ReclamationStatus::Resolved.can_resolve());
    }
}
