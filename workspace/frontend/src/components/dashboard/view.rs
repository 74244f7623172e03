use yew::prelude::*;

use super::cards::SummaryCards;
use super::styles;
use super::table::TransactionTable;
use crate::hooks::{use_dashboard, use_formatted_balance};
use crate::settings;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let format = *use_memo((), |_| settings::get_settings().display_format());
    let state = use_dashboard(format);

    let formatted_balance = use_formatted_balance(state.balance.clone(), format);

    html! {
        <main class={styles::container()}>
            <SummaryCards balance={formatted_balance} />
            <TransactionTable rows={state.rows.clone()} />
        </main>
    }
}
