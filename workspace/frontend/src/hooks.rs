use std::rc::Rc;

use chrono::Local;
use common::{DashboardState, DisplayFormat, FormattedBalance, SharedBalance};
use yew::prelude::*;

use crate::api_client::transaction::get_transactions;

/// Load the dashboard once per mount.
///
/// Until the request resolves the handle holds `DashboardState::default()`.
/// A failed request is logged and otherwise ignored, so the page keeps its
/// empty state. The task is not cancelled on unmount.
#[hook]
pub fn use_dashboard(format: DisplayFormat) -> UseStateHandle<DashboardState> {
    let state = use_state(DashboardState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match get_transactions().await {
                    Ok(response) => {
                        let loaded = DashboardState::loaded(response, &Local::now(), &format);
                        log::debug!("Committing {} transaction rows", loaded.rows.len());
                        state.set(loaded);
                    }
                    Err(err) => log::error!("Dashboard left empty: {}", err),
                }
            });
            || ()
        });
    }

    state
}

/// Formatted card values, recomputed only when a new balance is committed.
#[hook]
pub fn use_formatted_balance(balance: SharedBalance, format: DisplayFormat) -> Rc<FormattedBalance> {
    use_memo(balance, move |balance| {
        log::trace!("Formatting balance for summary cards");
        FormattedBalance::new(balance, &format)
    })
}
