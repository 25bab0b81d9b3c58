use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::{Config, Result, ServerError};
use crate::db::{self, DocumentStore};
use crate::services::{
    FoodService, InvoiceService, MenuService, NoteService, OrderItemService, OrderService,
    TableService, UserService,
};

/// Server state shared by every handler
///
/// Built once at startup from a single store handle, which is injected into
/// each entity service. Cloning is cheap (`Arc`s and collection handles).
///
/// | Field | Role |
/// |-------|------|
/// | config | configuration (immutable) |
/// | jwt_service | token issue/validation |
/// | users … notes | entity services |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    jwt_service: Arc<JwtService>,
    pub users: UserService,
    pub foods: FoodService,
    pub menus: MenuService,
    pub tables: TableService,
    pub orders: OrderService,
    pub order_items: OrderItemService,
    pub invoices: InvoiceService,
    pub notes: NoteService,
}

impl ServerState {
    /// Wire every service to the given store
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Self {
            users: UserService::new(store.clone(), jwt_service.clone()),
            foods: FoodService::new(store.clone()),
            menus: MenuService::new(store.clone()),
            tables: TableService::new(store.clone()),
            orders: OrderService::new(store.clone()),
            order_items: OrderItemService::new(store.clone()),
            invoices: InvoiceService::new(store.clone()),
            notes: NoteService::new(store),
            jwt_service,
            config,
        }
    }

    /// Connect to the configured store and build the state
    ///
    /// Fails when the store is unreachable or when a production deployment
    /// has no `SECRET_KEY`.
    pub async fn initialize(config: &Config) -> Result<Self> {
        if config.is_production() && config.jwt.uses_fallback_secret {
            return Err(ServerError::Config(
                "SECRET_KEY must be set in production".to_string(),
            ));
        }

        let store = db::connect(config).await?;
        Ok(Self::new(config.clone(), store))
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}
