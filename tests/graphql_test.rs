use actor_framework::ActorClient;
use async_graphql::{Request, Response, Value, Variables};
use sales_orders::auth::{Seller, TokenService};
use sales_orders::graphql::{build_schema, SalesSchema};
use sales_orders::lifecycle::OrderSystem;
use serde_json::{json, Value as Json};
use std::time::Duration;

/// GraphQL schema executed in-process against a full system.

struct App {
    system: OrderSystem,
    schema: SalesSchema,
    tokens: TokenService,
}

impl App {
    fn start() -> Self {
        let system = OrderSystem::new();
        let tokens = TokenService::new("test-secret", Duration::from_secs(3600));
        let schema = build_schema(&system, tokens.clone());
        Self {
            system,
            schema,
            tokens,
        }
    }

    async fn execute(&self, seller: Option<&Seller>, query: &str, variables: Json) -> Response {
        let mut request = Request::new(query).variables(Variables::from_json(variables));
        if let Some(seller) = seller {
            request = request.data(seller.clone());
        }
        self.schema.execute(request).await
    }

    /// Executes and returns `data`, failing on any error.
    async fn data(&self, seller: Option<&Seller>, query: &str, variables: Json) -> Json {
        let response = self.execute(seller, query, variables).await;
        assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);
        response.data.into_json().unwrap()
    }

    /// Registers a seller through the API and logs them in.
    async fn seller(&self, email: &str) -> Seller {
        self.data(
            None,
            "mutation($input: UserInput!) { newUser(input: $input) { id } }",
            json!({ "input": { "name": "Alice", "surname": "Smith", "email": email, "password": "hunter22" } }),
        )
        .await;
        let data = self
            .data(
                None,
                "mutation($input: AuthInput!) { authUser(input: $input) { token } }",
                json!({ "input": { "email": email, "password": "hunter22" } }),
            )
            .await;
        let token = data["authUser"]["token"].as_str().unwrap();
        self.tokens.verify(token).unwrap()
    }

    async fn product(&self, name: &str, exists: u32, price: f64) -> String {
        let data = self
            .data(
                None,
                "mutation($input: ProductInput!) { newProduct(input: $input) { id } }",
                json!({ "input": { "name": name, "exists": exists, "price": price } }),
            )
            .await;
        data["newProduct"]["id"].as_str().unwrap().to_string()
    }

    async fn client(&self, seller: &Seller, email: &str) -> String {
        let data = self
            .data(
                Some(seller),
                "mutation($input: ClientInput!) { newClient(input: $input) { id seller } }",
                json!({ "input": { "name": "Bob", "surname": "Jones", "email": email, "company": "Acme" } }),
            )
            .await;
        assert_eq!(data["newClient"]["seller"], json!(seller.id.to_string()));
        data["newClient"]["id"].as_str().unwrap().to_string()
    }

    async fn stop(self) {
        drop(self.schema);
        self.system.shutdown().await.unwrap();
    }
}

const NEW_ORDER: &str = "mutation($input: OrderInput!) {
    newOrder(input: $input) { id total state orders { id quantity name price } client { name } }
}";

fn error_code(response: &Response) -> Option<Value> {
    response
        .errors
        .first()?
        .extensions
        .as_ref()?
        .get("code")
        .cloned()
}

#[tokio::test]
async fn test_seller_scoped_operations_need_a_token() {
    let app = App::start();

    for query in [
        "{ getUser { id } }",
        "{ getSellerClients { id } }",
        "{ getSellerOrders { id } }",
        "{ getOrdersByState(state: PENDING) { id } }",
    ] {
        let response = app.execute(None, query, json!({})).await;
        assert_eq!(
            error_code(&response),
            Some(Value::from("UNAUTHENTICATED")),
            "{query}"
        );
    }

    let response = app
        .execute(
            None,
            "mutation { newClient(input: { name: \"Bob\", surname: \"Jones\", email: \"b@x.io\", company: \"Acme\" }) { id } }",
            json!({}),
        )
        .await;
    assert_eq!(error_code(&response), Some(Value::from("UNAUTHENTICATED")));

    // Nothing reached the customer actor.
    let data = app.data(None, "{ getClients { id } }", json!({})).await;
    assert_eq!(data["getClients"], json!([]));

    app.stop().await;
}

#[tokio::test]
async fn test_login_errors_carry_codes() {
    let app = App::start();
    let alice = app.seller("alice@example.com").await;

    let data = app.data(Some(&alice), "{ getUser { id email } }", json!({})).await;
    assert_eq!(data["getUser"]["email"], json!("alice@example.com"));

    let wrong = app
        .execute(
            None,
            "mutation { authUser(input: { email: \"alice@example.com\", password: \"nope\" }) { token } }",
            json!({}),
        )
        .await;
    assert_eq!(error_code(&wrong), Some(Value::from("INVALID_CREDENTIALS")));

    let duplicate = app
        .execute(
            None,
            "mutation { newUser(input: { name: \"A\", surname: \"B\", email: \"alice@example.com\", password: \"x\" }) { id } }",
            json!({}),
        )
        .await;
    assert_eq!(error_code(&duplicate), Some(Value::from("ALREADY_EXISTS")));

    app.stop().await;
}

#[tokio::test]
async fn test_order_flow_through_the_schema() {
    let app = App::start();
    let alice = app.seller("alice@example.com").await;
    let bob = app.client(&alice, "bob@example.com").await;
    let laptop = app.product("Laptop", 10, 600.0).await;

    let data = app
        .data(
            Some(&alice),
            NEW_ORDER,
            json!({ "input": {
                "orders": [{ "id": laptop, "quantity": 3, "name": "ignored", "price": 1.0 }],
                "total": 1800.0,
                "client": bob,
            } }),
        )
        .await;
    let order = &data["newOrder"];
    assert_eq!(order["total"], json!(1800.0));
    assert_eq!(order["state"], json!("PENDING"));
    assert_eq!(order["orders"][0]["name"], json!("Laptop"));
    assert_eq!(order["client"]["name"], json!("Bob"));
    let order_id = order["id"].as_str().unwrap().to_string();

    let data = app
        .data(None, "query($id: ID!) { getProduct(id: $id) { exists } }", json!({ "id": laptop }))
        .await;
    assert_eq!(data["getProduct"]["exists"], json!(7));

    let data = app
        .data(
            Some(&alice),
            "mutation($id: ID!, $input: OrderInput!) { updateOrder(id: $id, input: $input) { state total } }",
            json!({ "id": order_id, "input": { "client": bob, "state": "COMPLETED" } }),
        )
        .await;
    assert_eq!(data["updateOrder"]["state"], json!("COMPLETED"));
    assert_eq!(data["updateOrder"]["total"], json!(1800.0));

    let data = app
        .data(Some(&alice), "{ getOrdersByState(state: COMPLETED) { id } }", json!({}))
        .await;
    assert_eq!(data["getOrdersByState"], json!([{ "id": order_id }]));

    let data = app
        .data(
            None,
            "{ getBestClients { total client { id } } getBestSellers { total user { email } } }",
            json!({}),
        )
        .await;
    assert_eq!(data["getBestClients"], json!([{ "total": 1800.0, "client": [{ "id": bob }] }]));
    assert_eq!(
        data["getBestSellers"],
        json!([{ "total": 1800.0, "user": [{ "email": "alice@example.com" }] }])
    );

    let data = app
        .data(Some(&alice), "mutation($id: ID!) { deleteOrder(id: $id) }", json!({ "id": order_id }))
        .await;
    assert_eq!(data["deleteOrder"], json!("Order deleted"));

    app.stop().await;
}

#[tokio::test]
async fn test_order_errors_carry_codes() {
    let app = App::start();
    let alice = app.seller("alice@example.com").await;
    let carol = app.seller("carol@example.com").await;
    let bob = app.client(&alice, "bob@example.com").await;
    let widget = app.product("Widget", 5, 10.0).await;

    let too_many = app
        .execute(
            Some(&alice),
            NEW_ORDER,
            json!({ "input": { "orders": [{ "id": widget, "quantity": 6 }], "client": bob } }),
        )
        .await;
    assert_eq!(error_code(&too_many), Some(Value::from("INSUFFICIENT_STOCK")));
    assert_eq!(too_many.errors[0].message, "Insufficient stock for 'Widget'");

    let foreign = app
        .execute(
            Some(&carol),
            NEW_ORDER,
            json!({ "input": { "orders": [{ "id": widget, "quantity": 1 }], "client": bob } }),
        )
        .await;
    assert_eq!(error_code(&foreign), Some(Value::from("UNAUTHENTICATED")));

    let no_quantity = app
        .execute(
            Some(&alice),
            NEW_ORDER,
            json!({ "input": { "orders": [{ "id": widget }], "client": bob } }),
        )
        .await;
    assert_eq!(error_code(&no_quantity), Some(Value::from("BAD_USER_INPUT")));

    let malformed = app
        .execute(None, "{ getProduct(id: \"order_1\") { id } }", json!({}))
        .await;
    assert_eq!(error_code(&malformed), Some(Value::from("BAD_USER_INPUT")));

    let missing = app
        .execute(None, "{ getProduct(id: \"product_99\") { id } }", json!({}))
        .await;
    assert_eq!(error_code(&missing), Some(Value::from("NOT_FOUND")));

    let data = app
        .data(None, "query($id: ID!) { getProduct(id: $id) { exists } }", json!({ "id": widget }))
        .await;
    assert_eq!(data["getProduct"]["exists"], json!(5));

    app.stop().await;
}

#[tokio::test]
async fn test_clients_are_hidden_from_other_sellers() {
    let app = App::start();
    let alice = app.seller("alice@example.com").await;
    let carol = app.seller("carol@example.com").await;
    let bob = app.client(&alice, "bob@example.com").await;

    let response = app
        .execute(Some(&carol), "query($id: ID!) { getClient(id: $id) { id } }", json!({ "id": bob }))
        .await;
    assert_eq!(error_code(&response), Some(Value::from("NOT_FOUND")));

    let response = app
        .execute(Some(&carol), "mutation($id: ID!) { deleteClient(id: $id) }", json!({ "id": bob }))
        .await;
    assert_eq!(error_code(&response), Some(Value::from("NOT_FOUND")));

    let data = app.data(Some(&carol), "{ getSellerClients { id } }", json!({})).await;
    assert_eq!(data["getSellerClients"], json!([]));

    let data = app
        .data(Some(&alice), "mutation($id: ID!) { deleteClient(id: $id) }", json!({ "id": bob }))
        .await;
    assert_eq!(data["deleteClient"], json!("Client 'Bob' deleted"));

    app.stop().await;
}

#[tokio::test]
async fn test_products_by_text() {
    let app = App::start();
    app.product("Gaming Laptop", 1, 900.0).await;
    app.product("Laptop Stand", 1, 30.0).await;
    app.product("Mouse", 1, 20.0).await;

    let data = app
        .data(None, "{ getProductsByText(text: \"lap\") { name } }", json!({}))
        .await;
    let mut names: Vec<&str> = data["getProductsByText"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Gaming Laptop", "Laptop Stand"]);

    let negative = app
        .execute(None, "mutation { newProduct(input: { name: \"X\", exists: -1, price: 1.0 }) { id } }", json!({}))
        .await;
    assert!(!negative.errors.is_empty());

    app.stop().await;
}

#[tokio::test]
async fn test_token_from_a_previous_process_is_rejected() {
    let first = App::start();
    let alice = first.seller("alice@example.com").await;
    let user = first.system.user_client.get(alice.id).await.unwrap().unwrap();
    let token = first.tokens.issue(&user).unwrap();
    first.stop().await;

    // Same secret, fresh store: ids start over.
    let second = App::start();
    let mallory = second.seller("mallory@example.com").await;
    assert_eq!(mallory.id, alice.id);

    let stale = second.tokens.verify(&token).unwrap();
    for query in ["{ getUser { email } }", "{ getSellerOrders { id } }"] {
        let response = second.execute(Some(&stale), query, json!({})).await;
        assert_eq!(
            error_code(&response),
            Some(Value::from("UNAUTHENTICATED")),
            "{query}"
        );
    }

    let data = second.data(Some(&mallory), "{ getUser { email } }", json!({})).await;
    assert_eq!(data["getUser"]["email"], json!("mallory@example.com"));

    second.stop().await;
}

#[tokio::test]
async fn test_orders_outlive_their_deleted_client() {
    let app = App::start();
    let alice = app.seller("alice@example.com").await;
    let bob = app.client(&alice, "bob@example.com").await;
    let widget = app.product("Widget", 5, 10.0).await;

    app.data(
        Some(&alice),
        NEW_ORDER,
        json!({ "input": { "orders": [{ "id": widget, "quantity": 1 }], "client": bob } }),
    )
    .await;
    app.data(Some(&alice), "mutation($id: ID!) { deleteClient(id: $id) }", json!({ "id": bob }))
        .await;

    let data = app
        .data(Some(&alice), "{ getSellerOrders { total client { name } } }", json!({}))
        .await;
    assert_eq!(data["getSellerOrders"], json!([{ "total": 10.0, "client": null }]));

    app.stop().await;
}
