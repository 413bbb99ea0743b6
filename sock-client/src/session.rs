//! Order form session
//!
//! Holds what the user has entered against one loaded [`FormData`]. The
//! builder in `shared::order` decides both whether submit is enabled and
//! what gets sent; this type only adds the in-flight guard and the
//! clear-on-success rule.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{ClientResult, FormData, FormError, FormResult, HttpClient};
use chrono::{DateTime, Utc};
use shared::order::{self, QuantitySelection};
use shared::{BuildError, OrderPayload, Park, SizeCode};

/// Clears the session's in-flight flag when dropped
#[derive(Debug)]
struct InFlight(Arc<AtomicBool>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A built order handed out by [`OrderSession::begin_submit`]
///
/// Give it back to [`OrderSession::finish_submit`] to settle the form.
/// Dropping it instead (for example when the submit future is cancelled)
/// unlocks the session and keeps every entry.
#[derive(Debug)]
#[must_use = "dropping a pending submit abandons it"]
pub struct PendingSubmit {
    payload: OrderPayload,
    _guard: InFlight,
}

impl PendingSubmit {
    pub fn payload(&self) -> &OrderPayload {
        &self.payload
    }
}

#[derive(Debug, Default)]
pub struct OrderSession {
    data: FormData,
    selected_park: Option<String>,
    selection: QuantitySelection,
    notes: String,
    in_flight: Arc<AtomicBool>,
}

impl OrderSession {
    pub fn new(data: FormData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Swap in freshly loaded documents; entries are re-validated at build time
    pub fn replace_data(&mut self, data: FormData) {
        self.data = data;
    }

    pub fn selection(&self) -> &QuantitySelection {
        &self.selection
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn select_park(&mut self, park_id: impl Into<String>) {
        self.selected_park = Some(park_id.into());
    }

    /// Explicit choice, or the first park when nothing was picked
    pub fn selected_park(&self) -> Option<&Park> {
        self.data.catalog.resolve_park(self.selected_park.as_deref())
    }

    pub fn set_quantity(&mut self, style_id: &str, size: &SizeCode, cases: i64) {
        self.selection
            .set_quantity(&self.data.availability, style_id, size, cases);
    }

    pub fn step(&mut self, style_id: &str, size: &SizeCode, delta: i64) {
        self.selection
            .step(&self.data.availability, style_id, size, delta);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Build the payload the current state would submit
    pub fn preview(&self, now: DateTime<Utc>) -> Result<OrderPayload, BuildError> {
        order::build(
            self.selected_park(),
            &self.selection,
            &self.notes,
            &self.data.catalog,
            &self.data.availability,
            now,
        )
    }

    /// Whether the submit action should be enabled
    pub fn can_submit(&self, now: DateTime<Utc>) -> bool {
        !self.is_submitting() && self.preview(now).is_ok()
    }

    /// Lock the session and hand out the payload to send
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> FormResult<PendingSubmit> {
        if self.is_submitting() {
            return Err(FormError::SubmitInFlight);
        }
        let payload = self.preview(now)?;
        self.in_flight.store(true, Ordering::Release);
        Ok(PendingSubmit {
            payload,
            _guard: InFlight(Arc::clone(&self.in_flight)),
        })
    }

    /// Release the lock; success clears the form, failure keeps everything
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmit,
        result: ClientResult<()>,
    ) -> FormResult<OrderPayload> {
        let PendingSubmit { payload, _guard: guard } = pending;
        drop(guard);
        match result {
            Ok(()) => {
                tracing::info!(
                    park = %payload.park.id,
                    lines = payload.lines.len(),
                    total_pairs = payload.total_pairs(),
                    "Order submitted"
                );
                self.selection.clear();
                self.notes.clear();
                Ok(payload)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Order submit failed, keeping selections");
                Err(FormError::SubmitFailed(e))
            }
        }
    }

    /// Build, post once to `webhook_url`, and settle the session
    pub async fn submit(
        &mut self,
        client: &HttpClient,
        webhook_url: &str,
        now: DateTime<Utc>,
    ) -> FormResult<OrderPayload> {
        let pending = self.begin_submit(now)?;
        let result = client.post_json(webhook_url, pending.payload()).await;
        self.finish_submit(pending, result)
    }
}
