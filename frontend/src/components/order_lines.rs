//! Order line table and totals block, shared by the order, conflict and
//! reclamation views.

use common::format::{euros, percent};
use common::model::order::{OrderItem, OrderTotals};
use yew::prelude::*;

pub fn items_table(items: &[OrderItem]) -> Html {
    html! {
        <table class="data-table compact">
            <thead>
                <tr>
                    <th>{ "Produit" }</th>
                    <th class="num">{ "Qté" }</th>
                    <th class="num">{ "PU HT" }</th>
                    <th class="num">{ "TVA" }</th>
                    <th class="num">{ "Total HT" }</th>
                    <th class="num">{ "Total TTC" }</th>
                </tr>
            </thead>
            <tbody>
                { for items.iter().map(|item| html! {
                    <tr>
                        <td>{ item.name.clone() }</td>
                        <td class="num">{ item.quantity.to_string() }</td>
                        <td class="num">{ euros(item.unit_price_ht) }</td>
                        <td class="num">{ percent(item.tax_rate) }</td>
                        <td class="num">{ euros(item.total_price_ht) }</td>
                        <td class="num">{ euros(item.total_price_ttc) }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

pub fn totals_summary(totals: &OrderTotals) -> Html {
    html! {
        <dl class="totals">
            <dt>{ "Total HT" }</dt><dd>{ euros(totals.total_ht) }</dd>
            <dt>{ "TVA" }</dt><dd>{ euros(totals.total_tax) }</dd>
            <dt>{ "Total TTC" }</dt><dd class="strong">{ euros(totals.total_ttc) }</dd>
        </dl>
    }
}
