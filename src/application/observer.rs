use super::cleanup::clear_card_payment_data;
use super::layout::CompatibilityLayoutPatch;
use super::presenter::{PaymentInfoPresenter, SpecificInformation};
use super::provisioning::KeyProvisioner;
use super::reconciler::NotificationReconciler;
use crate::domain::layout::LayoutUpdate;
use crate::domain::order::SalesOrder;
use crate::domain::payment::PaymentAttempt;
use crate::domain::quote::Quote;
use crate::error::Result;

/// Platform lifecycle events this integration reacts to. Aggregates are
/// borrowed so handlers can mutate them in place.
pub enum PlatformEvent<'a> {
    ConfigSaved,
    PaymentInfoPrepared {
        payment: &'a PaymentAttempt,
        secure_mode: bool,
        transport: &'a mut SpecificInformation,
    },
    PaymentPlaceEnd {
        payment: &'a PaymentAttempt,
        order: &'a mut dyn SalesOrder,
    },
    QuoteSubmitFailure {
        quote: &'a mut Quote,
    },
    LayoutGenerated {
        layout: Option<&'a mut LayoutUpdate>,
    },
}

/// Routes platform events to the component that handles them.
pub struct PagBankObserver {
    provisioner: KeyProvisioner,
    presenter: PaymentInfoPresenter,
    reconciler: NotificationReconciler,
    layout_patch: CompatibilityLayoutPatch,
}

impl PagBankObserver {
    pub fn new(
        provisioner: KeyProvisioner,
        reconciler: NotificationReconciler,
        layout_patch: CompatibilityLayoutPatch,
    ) -> Self {
        Self {
            provisioner,
            presenter: PaymentInfoPresenter::new(),
            reconciler,
            layout_patch,
        }
    }

    pub fn provisioner(&self) -> &KeyProvisioner {
        &self.provisioner
    }

    /// Only a configuration save can fail; every other event is handled
    /// best-effort.
    pub async fn dispatch(&self, event: PlatformEvent<'_>) -> Result<()> {
        match event {
            PlatformEvent::ConfigSaved => {
                self.provisioner.generate_public_key().await?;
            }
            PlatformEvent::PaymentInfoPrepared {
                payment,
                secure_mode,
                transport,
            } => {
                transport.merge(self.presenter.specific_information(payment, secure_mode));
            }
            PlatformEvent::PaymentPlaceEnd { payment, order } => {
                self.reconciler.on_payment_place_end(payment, order);
            }
            PlatformEvent::QuoteSubmitFailure { quote } => {
                clear_card_payment_data(quote);
            }
            PlatformEvent::LayoutGenerated { layout } => {
                self.layout_patch.apply(layout);
            }
        }
        Ok(())
    }
}
