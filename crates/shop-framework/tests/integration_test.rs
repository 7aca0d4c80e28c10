use async_trait::async_trait;
use shop_framework::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: u32,
    code: String,
    tags: Vec<String>,
    stock: u32,
}

#[derive(Debug)]
struct ItemCreate {
    code: String,
    tags: Vec<String>,
    stock: u32,
}

#[derive(Debug)]
struct ItemUpdate {
    code: Option<String>,
}

#[derive(Debug)]
enum ItemAction {
    Reserve(u32),
}

#[derive(Debug)]
struct ItemFilter {
    codes: Vec<String>,
    with_tags: bool,
}

#[derive(Debug, thiserror::Error)]
enum ItemError {
    #[error("empty code")]
    EmptyCode,
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
}

#[async_trait]
impl ActorEntity for Item {
    type Id = u32;
    type Create = ItemCreate;
    type Update = ItemUpdate;
    type Action = ItemAction;
    type ActionResult = u32;
    type Filter = ItemFilter;
    type Context = ();
    type Error = ItemError;

    fn from_create_params(id: u32, params: ItemCreate) -> Result<Self, Self::Error> {
        if params.code.is_empty() {
            return Err(ItemError::EmptyCode);
        }
        Ok(Self {
            id,
            code: params.code,
            tags: params.tags,
            stock: params.stock,
        })
    }

    fn matches(&self, filter: &ItemFilter) -> bool {
        filter.codes.contains(&self.code)
    }

    fn project(&self, filter: &ItemFilter) -> Self {
        let mut item = self.clone();
        if !filter.with_tags {
            item.tags.clear();
        }
        item
    }

    async fn on_update(&mut self, update: ItemUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(code) = update.code {
            self.code = code;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ItemAction, _ctx: &()) -> Result<u32, Self::Error> {
        match action {
            ItemAction::Reserve(requested) => {
                if requested > self.stock {
                    return Err(ItemError::InsufficientStock {
                        requested,
                        available: self.stock,
                    });
                }
                self.stock -= requested;
                Ok(self.stock)
            }
        }
    }
}

fn create(code: &str, tags: &[&str], stock: u32) -> ItemCreate {
    ItemCreate {
        code: code.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        stock,
    }
}

#[tokio::test]
async fn test_resource_actor_crud_and_actions() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    let handle = tokio::spawn(actor.run(()));

    let id = client.create(create("A1", &["red"], 10)).await.unwrap();
    assert_eq!(id, 1);

    let left = client.perform_action(id, ItemAction::Reserve(4)).await.unwrap();
    assert_eq!(left, 6);

    let err = client
        .perform_action(id, ItemAction::Reserve(7))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("insufficient stock"));

    let updated = client
        .update(
            id,
            ItemUpdate {
                code: Some("B1".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.code, "B1");

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_create_failure_is_reported() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    tokio::spawn(actor.run(()));

    let result = client.create(create("", &[], 1)).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
}

#[tokio::test]
async fn test_missing_entity_is_not_found() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    tokio::spawn(actor.run(()));

    let result = client.update(42, ItemUpdate { code: None }).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));
}

#[tokio::test]
async fn test_search_returns_hits_in_id_order_and_projects() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    tokio::spawn(actor.run(()));

    client.create(create("C3", &["x"], 1)).await.unwrap();
    client.create(create("A1", &["y"], 1)).await.unwrap();
    client.create(create("B2", &["z"], 1)).await.unwrap();

    let hits = client
        .search(ItemFilter {
            codes: vec!["B2".into(), "C3".into()],
            with_tags: false,
        })
        .await
        .unwrap();
    let codes: Vec<&str> = hits.iter().map(|i| i.code.as_str()).collect();
    assert_eq!(codes, vec!["C3", "B2"]);
    assert!(hits.iter().all(|i| i.tags.is_empty()));

    let hits = client
        .search(ItemFilter {
            codes: vec!["A1".into()],
            with_tags: true,
        })
        .await
        .unwrap();
    assert_eq!(hits[0].tags, vec!["y".to_string()]);

    let none = client
        .search(ItemFilter {
            codes: vec![],
            with_tags: true,
        })
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = ResourceActor::<Item>::new(10);
    drop(actor);

    let result = client.get(1).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
