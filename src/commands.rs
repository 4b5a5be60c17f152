//! The command boundary between form widgets and the catalog store
//!
//! Widgets never reach into the collections; they describe what they want
//! as a [`Command`] carrying their raw payload and hand it to
//! [`CatalogStore::execute`]. This is the complete set of mutations the
//! core accepts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::Result;
use crate::entities::car::{Car, CarInput};
use crate::entities::order::Order;
use crate::storage::store::CatalogStore;

/// A mutation request from a presentation widget.
///
/// Payloads are raw: car fields and status values arrive exactly as typed
/// into the form and are validated inside the store operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Add a new listing from the car form
    AddCar { input: CarInput },
    /// Replace an existing listing's fields from the car form
    UpdateCar { id: Uuid, input: CarInput },
    /// Remove a listing
    DeleteCar { id: Uuid },
    /// Remove an inquiry
    DeleteOrder { id: Uuid },
    /// Move an inquiry to a new status (raw select-widget value)
    SetOrderStatus { id: Uuid, status: String },
}

/// What a successfully executed command produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// The stored car record after an add or update
    Car(Car),
    /// The updated order record after a status change
    Order(Order),
    /// The id a delete removed
    Deleted { id: Uuid },
}

impl CatalogStore {
    /// Execute one command against the catalog.
    ///
    /// Errors propagate unchanged from the underlying operation; a failed
    /// command never leaves a partial mutation behind.
    pub fn execute(&self, command: Command) -> Result<CommandOutcome> {
        match command {
            Command::AddCar { input } => self.add_car(&input).map(CommandOutcome::Car),
            Command::UpdateCar { id, input } => {
                self.update_car(id, &input).map(CommandOutcome::Car)
            }
            Command::DeleteCar { id } => {
                self.delete_car(id)?;
                Ok(CommandOutcome::Deleted { id })
            }
            Command::DeleteOrder { id } => {
                self.delete_order(id)?;
                Ok(CommandOutcome::Deleted { id })
            }
            Command::SetOrderStatus { id, status } => self
                .set_order_status(id, &status)
                .map(CommandOutcome::Order),
        }
    }
}
