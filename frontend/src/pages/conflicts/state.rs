use common::model::order::Order;
use common::model::reclamation::{Reclamation, Resolution};
use common::pricing::{corrections_for_order, resolve, LineCorrection, ResolutionOutcome};
use common::requests::ResolveConflictRequest;
use common::search::filter;

#[derive(Default)]
pub struct ConflictsPage {
    pub conflicts: Vec<Order>,
    pub search: String,
    pub loading: bool,
    pub busy: Option<String>,
    pub resolving: Option<ResolveForm>,
}

impl ConflictsPage {
    pub fn visible(&self) -> Vec<&Order> {
        filter(&self.conflicts, &self.search)
    }

    pub fn replace(&mut self, order: Order) {
        if order.has_conflict {
            if let Some(slot) = self.conflicts.iter_mut().find(|o| o.id == order.id) {
                *slot = order;
            }
        } else {
            self.conflicts.retain(|o| o.id != order.id);
        }
    }
}

pub struct ResolveForm {
    pub order: Order,
    pub resolution: Resolution,
    pub note: String,
    pub corrections: Vec<LineCorrection>,
    pub submitting: bool,
}

impl ResolveForm {
    /// Opens the form only for an order whose reclamation is under review.
    pub fn open(order: Order) -> Option<Self> {
        let reviewed = order
            .reclamation
            .as_ref()
            .is_some_and(|r| r.status.can_resolve());
        reviewed.then(|| Self::new(order))
    }

    pub fn new(order: Order) -> Self {
        let corrections = corrections_for_order(&order);
        Self {
            order,
            resolution: Resolution::AcceptAsIs,
            note: String::new(),
            corrections,
            submitting: false,
        }
    }

    pub fn reclamation(&self) -> Option<&Reclamation> {
        self.order.reclamation.as_ref()
    }

    /// Corrected lines and totals for the chosen resolution, recomputed from
    /// the current quantities.
    pub fn outcome(&self) -> ResolutionOutcome {
        resolve(&self.order, self.resolution, &self.corrections)
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u32) {
        if let Some(correction) = self.corrections.get_mut(index) {
            correction.quantity = quantity;
        }
    }

    pub fn to_request(&self) -> ResolveConflictRequest {
        let outcome = self.outcome();
        let note = self.note.trim();
        ResolveConflictRequest {
            resolution: self.resolution,
            resolution_note: (!note.is_empty()).then(|| note.to_string()),
            corrections: if self.resolution.recomputes_order() {
                self.corrections.clone()
            } else {
                Vec::new()
            },
            corrected_items: outcome.corrected_items,
            corrected_totals: outcome.corrected_totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::reclamation::ReclamationStatus;

    fn disputed_order() -> Order {
        serde_json::from_str(
            r#"{"_id":"o9","referenceId":"CMD-009","status":"DELIVERED","hasConflict":true,
                "items":[
                    {"productId":"p1","name":"Baguette","unitPriceHT":1.2,"taxRate":0.1,"quantity":2},
                    {"productId":"p2","name":"Croissant","unitPriceHT":1.0,"taxRate":0.05,"quantity":3}
                ],
                "totalHT":5.4,"totalTax":0.39,"totalTTC":5.79,
                "reclamation":{"description":"Il manque un croissant","status":"UNDER_REVIEW",
                    "discrepancies":[{"productId":"p2","productName":"Croissant",
                        "orderedQuantity":3,"receivedQuantity":2,"issueType":"MISSING"}]}}"#,
        )
        .unwrap()
    }

    #[test]
    fn quantities_start_from_the_reclamation() {
        let form = ResolveForm::new(disputed_order());
        let quantities: Vec<u32> = form.corrections.iter().map(|c| c.quantity).collect();
        assert_eq!(quantities, vec![2, 2]);
    }

    #[test]
    fn only_update_order_sends_corrections() {
        let mut form = ResolveForm::new(disputed_order());
        form.resolution = Resolution::Reject;
        let request = form.to_request();
        assert!(request.corrections.is_empty());
        assert!(request.corrected_totals.is_none());

        form.resolution = Resolution::UpdateOrder;
        let request = form.to_request();
        let totals = request.corrected_totals.unwrap();
        assert_eq!(totals.total_ht, 4.4);
        assert_eq!(totals.total_ttc, 4.74);
    }

    #[test]
    fn editing_a_quantity_changes_the_live_totals() {
        let mut form = ResolveForm::new(disputed_order());
        form.resolution = Resolution::UpdateOrder;
        form.set_quantity(0, 0);
        let outcome = form.outcome();
        assert_eq!(outcome.corrected_items.unwrap().len(), 1);
        assert_eq!(outcome.corrected_totals.unwrap().total_ttc, 2.1);
    }

    #[test]
    fn resolution_waits_for_the_review() {
        assert!(ResolveForm::open(disputed_order()).is_some());

        let mut fresh = disputed_order();
        if let Some(reclamation) = &mut fresh.reclamation {
            reclamation.status = ReclamationStatus::Reported;
        }
        assert!(ResolveForm::open(fresh).is_none());

        let mut without = disputed_order();
        without.reclamation = None;
        assert!(ResolveForm::open(without).is_none());
    }

    #[test]
    fn resolved_orders_leave_the_list() {
        let mut page = ConflictsPage {
            conflicts: vec![disputed_order()],
            ..ConflictsPage::default()
        };
        let mut resolved = disputed_order();
        resolved.has_conflict = false;
        page.replace(resolved);
        assert!(page.conflicts.is_empty());
    }
}
