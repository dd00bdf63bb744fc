use actor_framework::{ActorClient, ActorEntity, Filter, FrameworkError, ResourceActor, ResourceClient};
use async_trait::async_trait;

// --- Test Entities ---

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: u32,
    label: String,
    stock: u32,
}

#[derive(Debug)]
struct ItemCreate {
    label: String,
    stock: u32,
}

#[derive(Debug)]
struct ItemUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum ItemAction {
    Take(u32),
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum ItemError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("not enough {0}")]
    NotEnough(String),
    #[error("duplicate label {0}")]
    Duplicate(String),
}

#[async_trait]
impl ActorEntity for Item {
    type Id = u32;
    type Create = ItemCreate;
    type Update = ItemUpdate;
    type Action = ItemAction;
    type ActionResult = u32;
    type Context = ();
    type Error = ItemError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: ItemCreate) -> Result<Self, ItemError> {
        if params.label.trim().is_empty() {
            return Err(ItemError::EmptyLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            stock: params.stock,
        })
    }

    fn check_conflict(&self, other: &Self) -> Result<(), ItemError> {
        if self.label == other.label {
            return Err(ItemError::Duplicate(self.label.clone()));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: ItemUpdate, _ctx: &()) -> Result<(), ItemError> {
        if let Some(label) = update.label {
            self.label = label;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ItemAction, _ctx: &()) -> Result<u32, ItemError> {
        match action {
            ItemAction::Take(quantity) => {
                if quantity > self.stock {
                    return Err(ItemError::NotEnough(self.label.clone()));
                }
                self.stock -= quantity;
                Ok(self.stock)
            }
        }
    }
}

/// Takes stock from an `Item` when created; fails creation if the take fails.
#[derive(Clone, Debug)]
struct Reservation {
    id: u32,
    item: u32,
    quantity: u32,
}

#[derive(Debug)]
struct ReservationCreate {
    item: u32,
    quantity: u32,
}

#[derive(Debug, thiserror::Error)]
enum ReservationError {
    #[error("item {0} missing")]
    MissingItem(u32),
    #[error(transparent)]
    Item(#[from] ItemError),
    #[error("framework: {0}")]
    Framework(String),
}

#[async_trait]
impl ActorEntity for Reservation {
    type Id = u32;
    type Create = ReservationCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ResourceClient<Item>;
    type Error = ReservationError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: ReservationCreate) -> Result<Self, ReservationError> {
        Ok(Self {
            id,
            item: params.item,
            quantity: params.quantity,
        })
    }

    async fn on_create(&mut self, items: &ResourceClient<Item>) -> Result<(), ReservationError> {
        match items.perform_action(self.item, ItemAction::Take(self.quantity)).await {
            Ok(_) => Ok(()),
            Err(FrameworkError::NotFound(_)) => Err(ReservationError::MissingItem(self.item)),
            Err(e) => match e.downcast::<ItemError>() {
                Ok(item_error) => Err(item_error.into()),
                Err(other) => Err(ReservationError::Framework(other.to_string())),
            },
        }
    }

    async fn on_update(&mut self, _: (), _: &ResourceClient<Item>) -> Result<(), ReservationError> {
        Ok(())
    }

    async fn handle_action(&mut self, _: (), _: &ResourceClient<Item>) -> Result<(), ReservationError> {
        Ok(())
    }
}

#[derive(Clone)]
struct ItemClient {
    inner: ResourceClient<Item>,
}

impl ActorClient<Item> for ItemClient {
    type Error = String;

    fn inner(&self) -> &ResourceClient<Item> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> String {
        e.to_string()
    }
}

fn item(label: &str, stock: u32) -> ItemCreate {
    ItemCreate {
        label: label.into(),
        stock,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let created = client.create(item("Laptop", 5)).await.unwrap();
    assert_eq!(created.id, 1);
    let second = client.create(item("Mouse", 20)).await.unwrap();
    assert_eq!(second.id, 2);

    // 2. Action
    let left = client.perform_action(1, ItemAction::Take(2)).await.unwrap();
    assert_eq!(left, 3);
    assert_eq!(client.get(1).await.unwrap().unwrap().stock, 3);

    // 3. Find
    let low: Vec<Item> = client
        .find(Filter::new(|item: &Item| item.stock < 10))
        .await
        .unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].label, "Laptop");

    // 4. Update
    let renamed = client
        .update(
            2,
            ItemUpdate {
                label: Some("Trackball".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.label, "Trackball");
    assert_eq!(renamed.stock, 20);

    // 5. Delete
    let removed = client.delete(1).await.unwrap();
    assert_eq!(removed.label, "Laptop");
    assert!(client.get(1).await.unwrap().is_none());
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_entity_errors_keep_their_type() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    tokio::spawn(actor.run(()));

    let rejected = client.create(item("  ", 1)).await.unwrap_err();
    assert_eq!(rejected.downcast::<ItemError>().unwrap(), ItemError::EmptyLabel);

    client.create(item("Laptop", 1)).await.unwrap();
    let err = client.perform_action(1, ItemAction::Take(2)).await.unwrap_err();
    assert_eq!(
        err.downcast::<ItemError>().unwrap(),
        ItemError::NotEnough("Laptop".into())
    );

    // The failed action did not touch the stored entity.
    assert_eq!(client.get(1).await.unwrap().unwrap().stock, 1);
}

#[tokio::test]
async fn test_unique_constraint_on_create_and_update() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    tokio::spawn(actor.run(()));

    client.create(item("Laptop", 1)).await.unwrap();
    client.create(item("Mouse", 1)).await.unwrap();

    let duplicate = client.create(item("Laptop", 4)).await.unwrap_err();
    assert_eq!(
        duplicate.downcast::<ItemError>().unwrap(),
        ItemError::Duplicate("Laptop".into())
    );

    // Renaming onto an existing label is rejected and the stored entity is kept.
    let renamed = client
        .update(
            2,
            ItemUpdate {
                label: Some("Laptop".into()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        renamed.downcast::<ItemError>().unwrap(),
        ItemError::Duplicate(_)
    ));
    assert_eq!(client.get(2).await.unwrap().unwrap().label, "Mouse");

    // An entity never conflicts with itself.
    let same = client
        .update(
            1,
            ItemUpdate {
                label: Some("Laptop".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(same.label, "Laptop");
    assert_eq!(client.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    tokio::spawn(actor.run(()));

    assert!(client.get(9).await.unwrap().is_none());
    assert!(matches!(
        client.update(9, ItemUpdate { label: None }).await,
        Err(FrameworkError::NotFound(_))
    ));
    assert!(matches!(client.delete(9).await, Err(FrameworkError::NotFound(_))));
    assert!(matches!(
        client.perform_action(9, ItemAction::Take(1)).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_context_injection_and_failed_create() {
    let (item_actor, items) = ResourceActor::<Item>::new(10);
    let (reservation_actor, reservations) = ResourceActor::<Reservation>::new(10);
    tokio::spawn(item_actor.run(()));
    tokio::spawn(reservation_actor.run(items.clone()));

    items.create(item("Laptop", 3)).await.unwrap();

    let ok = reservations
        .create(ReservationCreate { item: 1, quantity: 2 })
        .await
        .unwrap();
    assert_eq!(ok.id, 1);
    assert_eq!(items.get(1).await.unwrap().unwrap().stock, 1);

    let too_many = reservations
        .create(ReservationCreate { item: 1, quantity: 2 })
        .await
        .unwrap_err();
    assert!(matches!(
        too_many.downcast::<ReservationError>().unwrap(),
        ReservationError::Item(ItemError::NotEnough(_))
    ));

    let missing = reservations
        .create(ReservationCreate { item: 7, quantity: 1 })
        .await
        .unwrap_err();
    assert!(matches!(
        missing.downcast::<ReservationError>().unwrap(),
        ReservationError::MissingItem(7)
    ));

    // Rejected creations are not stored.
    assert_eq!(reservations.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_actions_are_serialized() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    tokio::spawn(actor.run(()));
    client.create(item("Laptop", 20)).await.unwrap();

    let mut handles = vec![];
    for _ in 0..10 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.perform_action(1, ItemAction::Take(3)).await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 6);
    assert_eq!(client.get(1).await.unwrap().unwrap().stock, 2);
}

#[tokio::test]
async fn test_actor_client_defaults() {
    let (actor, inner) = ResourceActor::<Item>::new(10);
    tokio::spawn(actor.run(()));
    let client = ItemClient { inner };

    client.inner().create(item("Laptop", 1)).await.unwrap();
    client.inner().create(item("Mouse", 1)).await.unwrap();

    assert_eq!(client.list().await.unwrap().len(), 2);
    let mice = client
        .find(Filter::new(|item: &Item| item.label == "Mouse"))
        .await
        .unwrap();
    assert_eq!(mice[0].id, 2);
    assert_eq!(client.get(2).await.unwrap().unwrap().label, "Mouse");
    assert_eq!(client.delete(2).await.unwrap().label, "Mouse");
    assert!(client.delete(2).await.unwrap_err().contains("not found"));
}

#[tokio::test]
async fn test_closed_actor() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    drop(actor);
    assert!(matches!(
        client.create(item("Laptop", 1)).await,
        Err(FrameworkError::ActorClosed)
    ));
}
