use crate::domain::order::{OrderState, SalesOrder};
use crate::domain::payment::{MethodKind, PaymentAttempt, STATUS_PAGBANK};
use crate::domain::ports::{NotificationHandler, NotificationHandlerBox};
use crate::error::{PagBankError, Result};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Adjusts an order after its payment has been placed.
///
/// Placement is already committed at this point, so every failure is logged
/// and swallowed. Each placement is reconciled at most once.
pub struct NotificationReconciler {
    card_handler: NotificationHandlerBox,
}

impl NotificationReconciler {
    pub fn new(card_handler: NotificationHandlerBox) -> Self {
        Self { card_handler }
    }

    pub fn on_payment_place_end(&self, payment: &PaymentAttempt, order: &mut dyn SalesOrder) {
        let result = match payment.method_kind() {
            MethodKind::Card => self.reconcile_card(payment, order),
            MethodKind::Pix | MethodKind::Billet => order.set_state(OrderState::PendingPayment),
            MethodKind::Other => Ok(()),
        };

        if let Err(e) = result {
            warn!(
                order = order.increment_id(),
                method = payment.method(),
                "Error handling PagBank return: {}",
                e
            );
        }
    }

    fn reconcile_card(&self, payment: &PaymentAttempt, order: &mut dyn SalesOrder) -> Result<()> {
        let Some(data) = payment.decode_additional_data()? else {
            debug!(order = order.increment_id(), "No additional data on card payment");
            return Ok(());
        };

        let status = match data.get(STATUS_PAGBANK) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        if status.is_empty() {
            return Ok(());
        }

        self.card_handler.handle_notification(order, &status)
    }
}

/// Maps PagBank charge statuses onto order states.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusNotificationHandler;

impl StatusNotificationHandler {
    pub fn target_state(status: &str) -> Option<OrderState> {
        match status.to_ascii_uppercase().as_str() {
            "PAID" | "AUTHORIZED" => Some(OrderState::Processing),
            "IN_ANALYSIS" => Some(OrderState::PaymentReview),
            "WAITING" => Some(OrderState::PendingPayment),
            "DECLINED" | "CANCELED" => Some(OrderState::Canceled),
            _ => None,
        }
    }
}

impl NotificationHandler for StatusNotificationHandler {
    fn handle_notification(&self, order: &mut dyn SalesOrder, status: &str) -> Result<()> {
        let state = Self::target_state(status).ok_or_else(|| {
            PagBankError::Notification(format!("unknown PagBank status '{}'", status))
        })?;

        if order.state() != state {
            order.set_state(state)?;
            info!(order = order.increment_id(), status, state = %state, "Order updated from PagBank status");
        }
        Ok(())
    }
}
