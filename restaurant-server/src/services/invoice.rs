use super::{apply_update, find_or_not_found, resolve_reference};
use crate::auth::CurrentUser;
use crate::db::{Collection, DocumentStore, Patch};
use crate::utils::{required, validate_payload};
use chrono::Duration;
use shared::models::{
    DEFAULT_PAYMENT_TERM_DAYS, Invoice, InvoiceCreate, InvoiceUpdate, Order, PaymentMethod,
    PaymentStatus,
};
use shared::query::{PageQuery, PaginatedResponse};
use shared::util::{new_object_id, now};
use shared::{AppError, AppResult};
use std::sync::Arc;

#[derive(Clone)]
pub struct InvoiceService {
    invoices: Collection<Invoice>,
    orders: Collection<Order>,
}

impl InvoiceService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            invoices: Collection::new(store.clone()),
            orders: Collection::new(store),
        }
    }

    pub async fn list(&self, query: &PageQuery) -> AppResult<PaginatedResponse<Invoice>> {
        Ok(self.invoices.list(query).await?)
    }

    pub async fn get(&self, invoice_id: &str) -> AppResult<Invoice> {
        find_or_not_found(&self.invoices, invoice_id).await
    }

    /// Create an invoice for an existing order; payment falls due thirty
    /// days after creation unless a due date is supplied
    pub async fn create(&self, payload: InvoiceCreate, actor: &CurrentUser) -> AppResult<Invoice> {
        validate_payload(&payload)?;

        let order_id = required(payload.order_id, "order_id")?;
        resolve_reference(&self.orders, &order_id).await?;

        let payment_status = parse_status(&required(payload.payment_status, "payment_status")?)?;
        let payment_method = payload
            .payment_method
            .as_deref()
            .map(parse_method)
            .transpose()?;

        let id = new_object_id();
        let now = now();
        let invoice = Invoice {
            id: id.clone(),
            invoice_id: id,
            order_id,
            payment_method,
            payment_status,
            payment_due: payload
                .payment_due
                .unwrap_or(now + Duration::days(DEFAULT_PAYMENT_TERM_DAYS)),
            created_at: now,
            updated_at: now,
        };
        self.invoices.insert(&invoice).await?;

        tracing::info!(invoice_id = %invoice.invoice_id, order_id = %invoice.order_id, uid = %actor.uid, "Invoice created");
        Ok(invoice)
    }

    pub async fn update(
        &self,
        invoice_id: &str,
        payload: InvoiceUpdate,
        actor: &CurrentUser,
    ) -> AppResult<Invoice> {
        validate_payload(&payload)?;

        if let Some(order_id) = &payload.order_id {
            resolve_reference(&self.orders, order_id).await?;
        }
        let payment_status = payload.payment_status.as_deref().map(parse_status).transpose()?;
        let payment_method = payload.payment_method.as_deref().map(parse_method).transpose()?;

        let mut patch = Patch::new();
        patch
            .set_opt("order_id", payload.order_id)?
            .set_opt("payment_method", payment_method)?
            .set_opt("payment_status", payment_status)?
            .set_opt("payment_due", payload.payment_due)?;

        let invoice = apply_update(&self.invoices, invoice_id, patch).await?;
        tracing::info!(invoice_id, uid = %actor.uid, "Invoice updated");
        Ok(invoice)
    }
}

fn parse_status(value: &str) -> AppResult<PaymentStatus> {
    PaymentStatus::parse(value)
        .ok_or_else(|| AppError::validation("payment_status must be PENDING or PAID"))
}

fn parse_method(value: &str) -> AppResult<PaymentMethod> {
    PaymentMethod::parse(value)
        .ok_or_else(|| AppError::validation("payment_method must be CARD, CASH or empty"))
}
