/// Lifecycle status of a single contact-form send attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(SendFailure),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendFailure {
    /// One of the delivery identifiers is empty; no call was made.
    MissingConfig,
    /// The delivery service rejected the call or was unreachable.
    Delivery,
}

/// Ticket naming one delivery attempt. Settling with a stale ticket is a
/// no-op, so a slow response from an earlier submit can never overwrite the
/// outcome of a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeliveryTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct SendLifecycle {
    status: SendStatus,
    epoch: u64,
}

impl SendLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SendStatus {
        self.status
    }

    /// Start a new attempt. Returns `None` while one is already in flight;
    /// `Sent` and `Failed` are only terminal until the next call here.
    pub fn begin(&mut self) -> Option<DeliveryTicket> {
        if self.status == SendStatus::Sending {
            return None;
        }
        self.epoch += 1;
        self.status = SendStatus::Sending;
        Some(DeliveryTicket(self.epoch))
    }

    /// Fail without starting a delivery call. Ignored while an attempt is in
    /// flight.
    pub fn reject(&mut self, failure: SendFailure) {
        if self.status == SendStatus::Sending {
            return;
        }
        self.epoch += 1;
        self.status = SendStatus::Failed(failure);
    }

    /// Apply the outcome of the attempt named by `ticket`. Returns whether
    /// the status changed; stale tickets and repeat settles change nothing.
    pub fn settle(&mut self, ticket: DeliveryTicket, delivered: bool) -> bool {
        if ticket.0 != self.epoch || self.status != SendStatus::Sending {
            return false;
        }
        self.status = if delivered {
            SendStatus::Sent
        } else {
            SendStatus::Failed(SendFailure::Delivery)
        };
        true
    }
}

/// The three opaque identifiers the delivery service wants alongside the
/// payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub service_id: String,
    pub template_id: String,
    pub account_id: String,
}

impl DeliveryConfig {
    pub fn is_complete(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.account_id.is_empty()
    }
}
