use std::cell::RefCell;
use std::time::Duration;

use futures::future::{select, Either, LocalBoxFuture};
use serde::Serialize;
use serde_json::Value;

use crate::error::SubmissionError;
use crate::options::PageOptions;
use crate::sink::{DataSink, Table};
use crate::state::{CloseTicket, LandingState, ModalKind};

/// Shared, mutable access to the page state. The browser build backs this
/// with a reactive signal; tests use a plain `RefCell`.
pub trait StateCell {
    /// Runs `f` against the state. `None` means the state is gone (e.g. the
    /// page was torn down while a request was in flight).
    fn with_state<R>(
        &self,
        f: impl FnOnce(&mut LandingState) -> R,
    ) -> Option<R>;
}

impl StateCell for RefCell<LandingState> {
    fn with_state<R>(
        &self,
        f: impl FnOnce(&mut LandingState) -> R,
    ) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

pub trait Timer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission was in flight; nothing was sent.
    Ignored,
    /// Insert acknowledged. When set, the caller arms a timer and hands the
    /// ticket back to [`LandingState::fire_close`] once it elapses.
    Succeeded {
        close_after: Option<(Duration, CloseTicket)>,
    },
    Failed(SubmissionError),
}

pub struct SubmissionWorkflow<S: DataSink, T: Timer> {
    sink: S,
    timer: T,
    options: PageOptions,
}

impl<S: DataSink, T: Timer> SubmissionWorkflow<S, T> {
    pub fn new(sink: S, timer: T, options: PageOptions) -> Self {
        Self {
            sink,
            timer,
            options,
        }
    }

    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    pub async fn submit_user<C: StateCell>(&self, cell: &C) -> SubmitOutcome {
        self.submit(cell, ModalKind::User).await
    }

    pub async fn submit_vendor<C: StateCell>(
        &self,
        cell: &C,
    ) -> SubmitOutcome {
        self.submit(cell, ModalKind::Vendor).await
    }

    async fn submit<C: StateCell>(
        &self,
        cell: &C,
        kind: ModalKind,
    ) -> SubmitOutcome {
        let include_location = self.options.include_location_field;
        let prepared = cell.with_state(|state| {
            if !state.begin_submission(kind) {
                return None;
            }
            Some(prepare_rows(state, kind, include_location))
        });
        let prepared = match prepared.flatten() {
            Some(prepared) => prepared,
            None => {
                log::debug!("{} submission ignored, already submitting", kind);
                return SubmitOutcome::Ignored;
            }
        };

        match self.send(kind, prepared).await {
            Ok(()) => {
                let ticket = cell
                    .with_state(|state| {
                        state.finish_success(kind, &self.options)
                    })
                    .flatten();
                SubmitOutcome::Succeeded {
                    close_after: ticket
                        .map(|ticket| (self.options.close_delay, ticket)),
                }
            }
            Err(err) => {
                log::error!("Error submitting {} form: {}", kind, err);
                cell.with_state(|state| {
                    state.finish_failure(kind, err.user_message())
                });
                SubmitOutcome::Failed(err)
            }
        }
    }

    async fn send(
        &self,
        kind: ModalKind,
        prepared: Result<(Table, Value), SubmissionError>,
    ) -> Result<(), SubmissionError> {
        let (table, rows) = prepared?;
        self.insert_with_deadline(table, rows.clone()).await?;
        log::info!("{} form submitted successfully: {}", kind, rows);
        Ok(())
    }

    async fn insert_with_deadline(
        &self,
        table: Table,
        rows: Value,
    ) -> Result<(), SubmissionError> {
        let insert = self.sink.insert(table, rows);
        let deadline = self.timer.sleep(self.options.request_timeout);
        match select(insert, deadline).await {
            Either::Left((result, _)) => result.map_err(SubmissionError::from),
            Either::Right(_) => Err(SubmissionError::Timeout),
        }
    }
}

fn prepare_rows(
    state: &LandingState,
    kind: ModalKind,
    include_location: bool,
) -> Result<(Table, Value), SubmissionError> {
    match kind {
        ModalKind::User => {
            let record = state.user_form().to_submission(include_location)?;
            Ok((Table::UserSubmissions, batch_of_one(&record)?))
        }
        ModalKind::Vendor => {
            let record =
                state.vendor_form().to_submission(include_location)?;
            Ok((Table::VendorSubmissions, batch_of_one(&record)?))
        }
    }
}

fn batch_of_one<R: Serialize>(record: &R) -> Result<Value, SubmissionError> {
    let row = serde_json::to_value(record)
        .map_err(|e| SubmissionError::Sink(e.into()))?;
    Ok(Value::Array(vec![row]))
}
