use common::TransactionsResponse;
use crate::api_client;

/// Get all transactions together with the aggregate balance
pub async fn get_transactions() -> Result<TransactionsResponse, String> {
    log::trace!("Fetching transactions and balance");
    let result = api_client::get::<TransactionsResponse>("/transactions").await;
    match &result {
        Ok(response) => log::info!("Fetched {} transactions", response.transactions.len()),
        Err(e) => log::error!("Failed to fetch transactions: {}", e),
    }
    result
}
