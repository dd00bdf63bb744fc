//! Entity trait implementation for the Customer domain type.

use crate::customer_actor::CustomerError;
use crate::model::{required, Customer, CustomerCreate, CustomerId, CustomerUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

fn field(name: &str, value: &str) -> Result<String, CustomerError> {
    required(name, value).map_err(CustomerError::ValidationError)
}

fn phone(value: Option<String>) -> Option<String> {
    value
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn id(&self) -> &CustomerId {
        &self.id
    }

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, CustomerError> {
        Ok(Self {
            id,
            name: field("name", &params.name)?,
            surname: field("surname", &params.surname)?,
            email: field("email", &params.email)?,
            company: field("company", &params.company)?,
            phone: phone(params.phone),
            created: Utc::now(),
            seller: params.seller,
        })
    }

    fn check_conflict(&self, other: &Self) -> Result<(), CustomerError> {
        if self.email.eq_ignore_ascii_case(&other.email) {
            return Err(CustomerError::AlreadyExists(self.email.clone()));
        }
        Ok(())
    }

    /// Replaces the contact details. A seller other than the owner gets `NotFound`,
    /// so client ids of other sellers are not revealed. `seller` never changes.
    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), CustomerError> {
        if update.actor != self.seller {
            return Err(CustomerError::NotFound(self.id.to_string()));
        }
        self.name = field("name", &update.name)?;
        self.surname = field("surname", &update.surname)?;
        self.email = field("email", &update.email)?;
        self.company = field("company", &update.company)?;
        self.phone = phone(update.phone);
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CustomerError> {
        Ok(())
    }
}
