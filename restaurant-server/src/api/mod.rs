//! HTTP API
//!
//! | Prefix | Auth |
//! |--------|------|
//! | /health | none |
//! | /users/signup, /users/login, GET /users/{user_id} | none |
//! | everything else | `token` header |

pub mod foods;
pub mod health;
pub mod invoices;
pub mod menus;
pub mod notes;
pub mod order_items;
pub mod orders;
pub mod tables;
pub mod users;
