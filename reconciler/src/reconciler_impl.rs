//! Reconciler implementation with dependency injection

use std::fmt;

use rust_decimal::Decimal;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::core::{decide_payment, find_authorization_reference, last_capture_amount, PaymentDecision};
use crate::error::ReconcileResult;
use crate::traits::{EventLogger, OrderPlatform, PaymentGateway};
use crate::types::{
    CaptureRequest, GatewayResultRecord, InvocationEvent, OrderLocator, PaymentRecord,
    PlatformResultRecord,
};

/// How an invocation ended; all variants are successful completions
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileOutcome {
    /// No gateway authorization reference on the order
    NoAuthorization,
    /// Gateway did not approve the capture
    CaptureNotApproved { response_code: String },
    /// Gateway approved but the order is already marked paid
    AlreadyPaid { financial_status: String },
    /// Capture recorded on the order
    PaymentRecorded { transaction_id: Option<u64>, amount: Decimal },
}

impl fmt::Display for ReconcileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAuthorization => write!(f, "no authorization reference, nothing to capture"),
            Self::CaptureNotApproved { response_code } => {
                write!(f, "capture not approved (response code {response_code})")
            }
            Self::AlreadyPaid { financial_status } => {
                write!(f, "capture approved, order already {financial_status}")
            }
            Self::PaymentRecorded { transaction_id, amount } => match transaction_id {
                Some(id) => write!(f, "recorded capture of {amount} as transaction {id}"),
                None => write!(f, "recorded capture of {amount}"),
            },
        }
    }
}

/// Reconciler with dependency injection
pub struct Reconciler<O, G, L>
where
    O: OrderPlatform,
    G: PaymentGateway,
    L: EventLogger,
{
    platform: O,
    gateway: G,
    logger: L,
}

impl<O, G, L> Reconciler<O, G, L>
where
    O: OrderPlatform,
    G: PaymentGateway,
    L: EventLogger,
{
    pub fn new(platform: O, gateway: G, logger: L) -> Self {
        Self {
            platform,
            gateway,
            logger,
        }
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Run one reconciliation for a trigger event
    pub async fn reconcile(&self, event: &InvocationEvent) -> ReconcileResult<ReconcileOutcome> {
        event.validate()?;

        let span = tracing::info_span!(
            "reconcile",
            invocation_id = %Uuid::new_v4(),
            order_number = %event.order_number,
        );
        self.run(event).instrument(span).await
    }

    async fn run(&self, event: &InvocationEvent) -> ReconcileResult<ReconcileOutcome> {
        let order = event.locator();

        let amount = self.order_amount(event, &order).await?;

        // Independent fetch; the order read for the amount is not reused
        let financial_status = self.platform.fetch_order(&order).await?.financial_status;

        let metafields = self.platform.fetch_metafields(&order).await?;
        let Some(ref_trans_id) = find_authorization_reference(&metafields)? else {
            info!("No authorization reference on order; nothing to capture");
            return Ok(ReconcileOutcome::NoAuthorization);
        };

        let capture = CaptureRequest {
            amount,
            ref_trans_id,
            invoice_number: event.order_number.clone(),
        };
        let result = self.gateway.capture_prior_authorization(&capture).await?;
        self.logger
            .gateway_result(&GatewayResultRecord::from_capture(&event.order_number, &result));

        match decide_payment(&result, financial_status.as_deref()) {
            PaymentDecision::CaptureNotApproved => Ok(ReconcileOutcome::CaptureNotApproved {
                response_code: result.transaction_response.response_code,
            }),
            PaymentDecision::AlreadyPaid => Ok(ReconcileOutcome::AlreadyPaid {
                financial_status: financial_status.unwrap_or_default(),
            }),
            PaymentDecision::Record => {
                let recorded = self
                    .platform
                    .record_payment(&order, &PaymentRecord::manual_capture(amount))
                    .await?;
                self.logger
                    .platform_result(&PlatformResultRecord::from_transaction(&event.order_number, &recorded));

                Ok(ReconcileOutcome::PaymentRecorded {
                    transaction_id: recorded.id,
                    amount,
                })
            }
        }
    }

    async fn order_amount(&self, event: &InvocationEvent, order: &OrderLocator) -> ReconcileResult<Decimal> {
        if event.amount_from_captures() {
            let transactions = self.platform.fetch_transactions(order).await?;
            last_capture_amount(&transactions)
        } else {
            Ok(self.platform.fetch_order(order).await?.total_price)
        }
    }
}
