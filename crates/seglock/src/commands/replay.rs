//! `seglock replay`: run a JSON-lines lock script
//!
//! Every operation runs against one shared [`LockService`], in file order.
//! Rejections are outcomes of the script, not failures of the command; a
//! line that is not a valid operation aborts the replay before anything
//! runs.

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::ArgMatches;
use seglock_core::{
    AcquireError, Config, Identity, LockRecord, LockRequest, LockService, ReleaseError,
    TransactionId,
};
use serde::{Deserialize, Serialize};

/// One line of a replay script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Operation {
    Acquire {
        requests: Vec<LockRecord>,
    },
    Release {
        transaction_ids: Vec<TransactionId>,
        session_id: String,
        console_id: String,
    },
    ReleaseSession {
        session_id: String,
        console_id: String,
    },
    List {
        session_ids: Vec<String>,
    },
}

impl Operation {
    const fn name(&self) -> &'static str {
        match self {
            Self::Acquire { .. } => "acquire",
            Self::Release { .. } => "release",
            Self::ReleaseSession { .. } => "releaseSession",
            Self::List { .. } => "list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Rejection {
    Acquire(AcquireError),
    Release(ReleaseError),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Acquire(err) => write!(f, "{err}"),
            Self::Release(err) => write!(f, "{err}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeldTransaction {
    pub transaction_id: TransactionId,
    pub requests: Vec<LockRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Outcome {
    Granted { transaction_id: TransactionId },
    Released { transaction_ids: Vec<TransactionId> },
    Rejected { rejection: Rejection },
    Locks { transactions: Vec<HeldTransaction> },
}

/// The outcome of one script line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub line: usize,
    pub op: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>4}  {:<14} ", self.line, self.op)?;
        match &self.outcome {
            Outcome::Granted { transaction_id } => {
                write!(f, "granted transaction {transaction_id}")
            }
            Outcome::Released { transaction_ids } if transaction_ids.is_empty() => {
                write!(f, "released nothing")
            }
            Outcome::Released { transaction_ids } => {
                let ids: Vec<String> = transaction_ids.iter().map(ToString::to_string).collect();
                write!(f, "released {}", ids.join(", "))
            }
            Outcome::Rejected { rejection } => write!(f, "rejected: {rejection}"),
            Outcome::Locks { transactions } if transactions.is_empty() => {
                write!(f, "no locks held")
            }
            Outcome::Locks { transactions } => {
                let held: Vec<String> = transactions
                    .iter()
                    .map(|held| format!("{} ({} records)", held.transaction_id, held.requests.len()))
                    .collect();
                write!(f, "held {}", held.join(", "))
            }
        }
    }
}

/// Parse a script into numbered operations.
///
/// Blank lines and lines starting with `#` are skipped; line numbers are
/// 1-based positions in the file.
pub fn parse_script(script: &str) -> Result<Vec<(usize, Operation)>> {
    script
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| {
            serde_json::from_str::<Operation>(line)
                .with_context(|| format!("Line {number}: not a valid operation"))
                .map(|op| (number, op))
        })
        .collect()
}

async fn apply(service: &LockService, operation: Operation) -> Outcome {
    match operation {
        Operation::Acquire { requests } => match service.acquire(&requests).await {
            Ok(transaction_id) => Outcome::Granted { transaction_id },
            Err(err) => Outcome::Rejected {
                rejection: Rejection::Acquire(err),
            },
        },
        Operation::Release {
            transaction_ids,
            session_id,
            console_id,
        } => {
            let identity = Identity::new(session_id, console_id);
            match service.release(&transaction_ids, &identity).await {
                Ok(()) => Outcome::Released { transaction_ids },
                Err(err) => Outcome::Rejected {
                    rejection: Rejection::Release(err),
                },
            }
        }
        Operation::ReleaseSession {
            session_id,
            console_id,
        } => {
            let identity = Identity::new(session_id, console_id);
            match service.release_session(&identity).await {
                Ok(transaction_ids) => Outcome::Released { transaction_ids },
                Err(err) => Outcome::Rejected {
                    rejection: Rejection::Release(err),
                },
            }
        }
        Operation::List { session_ids } => {
            let transactions = service
                .lock_list(&session_ids)
                .await
                .into_iter()
                .map(|(transaction_id, requests)| HeldTransaction {
                    transaction_id,
                    requests,
                })
                .collect();
            Outcome::Locks { transactions }
        }
    }
}

/// Run parsed operations in order against `service`.
pub async fn execute(service: &LockService, operations: Vec<(usize, Operation)>) -> Vec<Step> {
    let mut steps = Vec::with_capacity(operations.len());
    for (line, operation) in operations {
        let op = operation.name();
        let outcome = apply(service, operation).await;
        tracing::debug!(line, op, ?outcome, "Replayed operation");
        steps.push(Step { line, op, outcome });
    }
    steps
}

pub async fn run(config: &Config, sub_m: &ArgMatches) -> Result<ExitCode> {
    let path = sub_m
        .get_one::<PathBuf>("script")
        .ok_or_else(|| anyhow::anyhow!("Script path is required"))?;
    let json = sub_m.get_flag("json");

    let script = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let operations =
        parse_script(&script).with_context(|| format!("Invalid script {}", path.display()))?;

    let service = LockService::from_config(config);
    let steps = execute(&service, operations).await;

    for step in &steps {
        if json {
            println!("{}", serde_json::to_string(step)?);
        } else {
            println!("{step}");
        }
    }

    tracing::info!(
        operations = steps.len(),
        held = service.held_transactions().await,
        "Replay finished"
    );
    Ok(ExitCode::SUCCESS)
}
