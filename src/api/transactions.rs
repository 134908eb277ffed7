use std::fmt::Display;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tokio::time;
use tracing::debug;

use super::client::{ApiError, Client};
use crate::types::Uuid;

/// Wait between two status fetches. The service gives no completion
/// signal other than the status field, so polling is the only mechanism.
pub const POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Server-side lifecycle of an asynchronous operation.
///
/// Transitions are driven exclusively by the remote service; the client
/// only ever observes them.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    InProgress,
    Done,
    Error,
}

impl TransactionStatus {
    /// A terminal status is never left once reached.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransactionStatus::Done | TransactionStatus::Error)
    }
}

impl Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::InProgress => "IN_PROGRESS",
            TransactionStatus::Done => "DONE",
            TransactionStatus::Error => "ERROR",
        };
        f.write_str(status)
    }
}

/*
    transaction {
        transactionUid,
        tenantUid,
        entityUid?,
        entityType?,
        cdoTransactionStatus,
        transactionType,
        errorMessage?,
        errorDetails?,
        dateCreated,
        lastUpdated,
    }
*/
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_uid: Uuid,
    /// Entity the operation acts on, once the server has assigned one.
    #[serde(default)]
    pub entity_uid: Option<Uuid>,
    pub cdo_transaction_status: TransactionStatus,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("transaction {transaction_uid} ended in ERROR: {message}")]
    Failed {
        transaction_uid: Uuid,
        message: String,
    },
}

pub struct TransactionsApi<'a> {
    client: &'a Client,
}

impl<'a> TransactionsApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get_transaction(&self, transaction_uid: &Uuid) -> Result<Transaction, ApiError> {
        self.client
            .get(&format!("/v1/transactions/{transaction_uid}"), None)
            .await
    }

    /// Block until `transaction` reaches a terminal status.
    ///
    /// The transaction is re-fetched on a fixed interval and the observed
    /// status printed each round. There is no timeout: a transaction the
    /// server never completes blocks forever. A terminal transaction is
    /// returned as-is without a single fetch.
    pub async fn wait_for_completion(
        &self,
        mut transaction: Transaction,
        poll_interval: Duration,
    ) -> Result<Transaction, TransactionError> {
        while !transaction.cdo_transaction_status.is_terminal() {
            time::sleep(poll_interval).await;
            transaction = self.get_transaction(&transaction.transaction_uid).await?;
            println!(
                "CDO transaction status: {}",
                transaction.cdo_transaction_status
            );
        }

        debug!(
            "transaction {} reached {}",
            transaction.transaction_uid, transaction.cdo_transaction_status
        );

        if transaction.cdo_transaction_status == TransactionStatus::Error {
            let message = transaction
                .error_message
                .clone()
                .unwrap_or_else(|| "no error message supplied".to_owned());
            return Err(TransactionError::Failed {
                transaction_uid: transaction.transaction_uid,
                message,
            });
        }

        Ok(transaction)
    }
}
