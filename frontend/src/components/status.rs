//! Order status badge and the role-filtered transition buttons.

use common::model::order::OrderStatus;
use common::model::reclamation::ReclamationStatus;
use common::model::user::Role;
use common::status::actions_for;
use yew::prelude::*;

pub fn status_badge(status: OrderStatus) -> Html {
    html! {
        <span class={status.badge_class()}>{ status.label() }</span>
    }
}

pub fn reclamation_badge(status: ReclamationStatus) -> Html {
    html! {
        <span class={status.badge_class()}>{ status.label() }</span>
    }
}

/// One button per transition `role` may issue from `status`. Empty for
/// terminal states and for roles without a say.
pub fn status_actions(
    role: Role,
    status: OrderStatus,
    disabled: bool,
    on_transition: Callback<OrderStatus>,
) -> Html {
    let actions = actions_for(role, status);
    if actions.is_empty() {
        return html! {};
    }

    html! {
        <div class="status-actions">
            { for actions.into_iter().map(|next| {
                let on_transition = on_transition.clone();
                let class = if next == OrderStatus::Cancelled { "btn btn-danger" } else { "btn" };
                html! {
                    <button
                        class={class}
                        disabled={disabled}
                        onclick={Callback::from(move |_: MouseEvent| on_transition.emit(next))}
                    >
                        { next.action_label() }
                    </button>
                }
            }) }
        </div>
    }
}
