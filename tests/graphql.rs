//! End-to-end checks against a running server backed by a migrated database.
//!
//! Run with `cargo test -- --ignored` once the server listens on `APP_URL`
//! (defaults to `http://localhost:8000`).

use reqwest::Client;
use serde_json::{json, Value};

fn endpoint() -> String {
    let url = std::env::var("APP_URL").unwrap_or_else(|_| String::from("http://localhost:8000"));
    format!("{}/graphql", url.trim_end_matches('/'))
}

async fn execute(client: &Client, token: Option<&str>, query: &str, variables: Value) -> Value {
    let mut request = client
        .post(endpoint())
        .json(&json!({ "query": query, "variables": variables }));
    if let Some(token) = token {
        request = request.header("x-jwt", token);
    }

    request.send().await.unwrap().json::<Value>().await.unwrap()
}

fn unique_email(prefix: &str) -> String {
    format!("{}-{}@test.com", prefix, ulid::Ulid::new().to_string().to_lowercase())
}

async fn sign_up_and_login(client: &Client, role: &str) -> String {
    let email = unique_email(role);

    let created = execute(
        client,
        None,
        "mutation ($input: CreateAccountInput!) { createAccount(input: $input) { ok error } }",
        json!({ "input": { "email": email, "password": "12341234", "role": role } }),
    )
    .await;
    assert_eq!(created["data"]["createAccount"]["ok"], true, "{created}");

    let logged_in = execute(
        client,
        None,
        "mutation ($input: LoginInput!) { login(input: $input) { ok error token } }",
        json!({ "input": { "email": email, "password": "12341234" } }),
    )
    .await;
    assert_eq!(logged_in["data"]["login"]["ok"], true, "{logged_in}");

    logged_in["data"]["login"]["token"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
#[ignore]
async fn accounts_reject_duplicates_and_wrong_passwords() {
    let client = Client::new();
    let email = unique_email("client");
    let create_account =
        "mutation ($input: CreateAccountInput!) { createAccount(input: $input) { ok error } }";
    let input = json!({ "input": { "email": email, "password": "12341234", "role": "Client" } });

    let first = execute(&client, None, create_account, input.clone()).await;
    assert_eq!(first["data"]["createAccount"]["ok"], true);

    let second = execute(&client, None, create_account, input).await;
    assert_eq!(
        second["data"]["createAccount"]["error"],
        "There is a user with that email already"
    );

    let login = execute(
        &client,
        None,
        "mutation ($input: LoginInput!) { login(input: $input) { ok error } }",
        json!({ "input": { "email": email, "password": "wrong-password" } }),
    )
    .await;
    assert_eq!(login["data"]["login"]["error"], "Wrong password");
}

#[tokio::test]
#[ignore]
async fn orders_flow_from_client_to_driver() {
    let client = Client::new();
    let owner = sign_up_and_login(&client, "Owner").await;
    let customer = sign_up_and_login(&client, "Client").await;
    let driver = sign_up_and_login(&client, "Delivery").await;

    let restaurant = execute(
        &client,
        Some(&owner),
        "mutation ($input: CreateRestaurantInput!) { createRestaurant(input: $input) { ok error restaurantId } }",
        json!({ "input": {
            "name": "Burger Palace",
            "coverImg": "https://images.test/burger.png",
            "address": "123 Altar St",
            "categoryName": "Fast Food"
        } }),
    )
    .await;
    assert_eq!(restaurant["data"]["createRestaurant"]["ok"], true, "{restaurant}");
    let restaurant_id = restaurant["data"]["createRestaurant"]["restaurantId"].clone();

    let dish = execute(
        &client,
        Some(&owner),
        "mutation ($input: CreateDishInput!) { createDish(input: $input) { ok error } }",
        json!({ "input": {
            "restaurantId": restaurant_id,
            "name": "Burger",
            "price": "10",
            "description": "Double patty",
            "options": [{ "name": "Size", "choices": [{ "name": "XL", "extra": "3" }] }]
        } }),
    )
    .await;
    assert_eq!(dish["data"]["createDish"]["ok"], true, "{dish}");

    let menu = execute(
        &client,
        None,
        "query ($input: RestaurantInput!) { restaurant(input: $input) { ok restaurant { category { slug } menu { id } } } }",
        json!({ "input": { "restaurantId": restaurant_id } }),
    )
    .await;
    assert_eq!(
        menu["data"]["restaurant"]["restaurant"]["category"]["slug"],
        "fast-food"
    );
    let dish_id = menu["data"]["restaurant"]["restaurant"]["menu"][0]["id"].clone();

    let order = execute(
        &client,
        Some(&customer),
        "mutation ($input: CreateOrderInput!) { createOrder(input: $input) { ok error orderId } }",
        json!({ "input": {
            "restaurantId": restaurant_id,
            "items": [{ "dishId": dish_id, "options": [{ "name": "Size", "choice": "XL" }] }]
        } }),
    )
    .await;
    assert_eq!(order["data"]["createOrder"]["ok"], true, "{order}");
    let order_id = order["data"]["createOrder"]["orderId"].clone();

    let fetched = execute(
        &client,
        Some(&owner),
        "query ($input: GetOrderInput!) { getOrder(input: $input) { ok order { total status } } }",
        json!({ "input": { "id": order_id } }),
    )
    .await;
    assert_eq!(fetched["data"]["getOrder"]["order"]["total"], "13");
    assert_eq!(fetched["data"]["getOrder"]["order"]["status"], "Pending");

    let edit_order =
        "mutation ($input: EditOrderInput!) { editOrder(input: $input) { ok error } }";

    let by_customer = execute(
        &client,
        Some(&customer),
        edit_order,
        json!({ "input": { "id": order_id, "status": "Cooking" } }),
    )
    .await;
    assert_eq!(by_customer["data"]["editOrder"]["error"], "You can't do that");

    let cooked = execute(
        &client,
        Some(&owner),
        edit_order,
        json!({ "input": { "id": order_id, "status": "Cooked" } }),
    )
    .await;
    assert_eq!(cooked["data"]["editOrder"]["ok"], true);

    let take_order = "mutation ($input: TakeOrderInput!) { takeOrder(input: $input) { ok error } }";
    let taken = execute(
        &client,
        Some(&driver),
        take_order,
        json!({ "input": { "id": order_id } }),
    )
    .await;
    assert_eq!(taken["data"]["takeOrder"]["ok"], true);

    let taken_again = execute(
        &client,
        Some(&driver),
        take_order,
        json!({ "input": { "id": order_id } }),
    )
    .await;
    assert_eq!(
        taken_again["data"]["takeOrder"]["error"],
        "This order already has a driver"
    );

    let delivered = execute(
        &client,
        Some(&driver),
        edit_order,
        json!({ "input": { "id": order_id, "status": "Delivered" } }),
    )
    .await;
    assert_eq!(delivered["data"]["editOrder"]["ok"], true);
}

#[tokio::test]
#[ignore]
async fn payments_promote_restaurants() {
    let client = Client::new();
    let owner = sign_up_and_login(&client, "Owner").await;

    let restaurant = execute(
        &client,
        Some(&owner),
        "mutation ($input: CreateRestaurantInput!) { createRestaurant(input: $input) { ok restaurantId } }",
        json!({ "input": {
            "name": "Taco Town",
            "coverImg": "https://images.test/taco.png",
            "address": "1 Main St",
            "categoryName": "Mexican"
        } }),
    )
    .await;
    let restaurant_id = restaurant["data"]["createRestaurant"]["restaurantId"].clone();

    let payment = execute(
        &client,
        Some(&owner),
        "mutation ($input: CreatePaymentInput!) { createPayment(input: $input) { ok error } }",
        json!({ "input": { "transactionId": "tx-1", "restaurantId": restaurant_id } }),
    )
    .await;
    assert_eq!(payment["data"]["createPayment"]["ok"], true, "{payment}");

    let mine = execute(
        &client,
        Some(&owner),
        "query ($input: MyRestaurantInput!) { myRestaurant(input: $input) { ok restaurant { isPromoted promotedUntil } } }",
        json!({ "input": { "id": restaurant_id } }),
    )
    .await;
    assert_eq!(mine["data"]["myRestaurant"]["restaurant"]["isPromoted"], true);

    let payments = execute(&client, Some(&owner), "{ getPayments { ok payments { transactionId } } }", json!({})).await;
    assert_eq!(payments["data"]["getPayments"]["payments"][0]["transactionId"], "tx-1");
}

#[tokio::test]
#[ignore]
async fn search_matches_wildcards_literally() {
    let client = Client::new();
    let owner = sign_up_and_login(&client, "Owner").await;
    let marker = ulid::Ulid::new().to_string().to_lowercase();
    let create_restaurant =
        "mutation ($input: CreateRestaurantInput!) { createRestaurant(input: $input) { ok error } }";

    for name in [format!("50%{} Off Pizza", marker), format!("50{} Pizza", marker)] {
        let created = execute(
            &client,
            Some(&owner),
            create_restaurant,
            json!({ "input": {
                "name": name,
                "coverImg": "https://images.test/pizza.png",
                "address": "9 Side St",
                "categoryName": "Pizza"
            } }),
        )
        .await;
        assert_eq!(created["data"]["createRestaurant"]["ok"], true, "{created}");
    }

    let search = "query ($input: SearchRestaurantInput!) { searchRestaurant(input: $input) { ok totalResults restaurants { name } } }";

    let percent = execute(
        &client,
        None,
        search,
        json!({ "input": { "query": format!("%{}", marker) } }),
    )
    .await;
    assert_eq!(percent["data"]["searchRestaurant"]["totalResults"], 1, "{percent}");
    assert_eq!(
        percent["data"]["searchRestaurant"]["restaurants"][0]["name"],
        format!("50%{} Off Pizza", marker)
    );

    let underscore = execute(
        &client,
        None,
        search,
        json!({ "input": { "query": format!("_{}", marker) } }),
    )
    .await;
    assert_eq!(underscore["data"]["searchRestaurant"]["totalResults"], 0, "{underscore}");

    let plain = execute(
        &client,
        None,
        search,
        json!({ "input": { "query": marker.to_uppercase() } }),
    )
    .await;
    assert_eq!(plain["data"]["searchRestaurant"]["totalResults"], 2, "{plain}");
}

#[tokio::test]
#[ignore]
async fn concurrent_sign_ups_report_the_taken_email() {
    let client = Client::new();
    let email = unique_email("racer");
    let create_account =
        "mutation ($input: CreateAccountInput!) { createAccount(input: $input) { ok error } }";
    let input = json!({ "input": { "email": email, "password": "12341234", "role": "Client" } });

    let attempts = futures::future::join_all(
        (0..4).map(|_| execute(&client, None, create_account, input.clone())),
    )
    .await;

    let created = attempts
        .iter()
        .filter(|attempt| attempt["data"]["createAccount"]["ok"] == true)
        .count();
    assert_eq!(created, 1, "{attempts:?}");

    for attempt in attempts
        .iter()
        .filter(|attempt| attempt["data"]["createAccount"]["ok"] == false)
    {
        assert_eq!(
            attempt["data"]["createAccount"]["error"],
            "There is a user with that email already"
        );
    }
}
