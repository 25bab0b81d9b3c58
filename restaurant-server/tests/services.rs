use restaurant_server::{Config, CurrentUser, ErrorCode, ServerState};
use shared::models::{
    FoodCreate, FoodUpdate, LoginRequest, MenuCreate, NoteCreate, SignUpRequest, TableCreate,
};
use shared::query::PageQuery;

async fn state() -> ServerState {
    ServerState::initialize(&Config::in_memory("service-test-secret"))
        .await
        .unwrap()
}

fn actor() -> CurrentUser {
    CurrentUser {
        uid: "tester".into(),
        email: "tester@example.com".into(),
        first_name: "Test".into(),
        last_name: "Er".into(),
    }
}

fn sign_up_request(email: &str, phone: &str) -> SignUpRequest {
    SignUpRequest {
        first_name: Some("Edsger".into()),
        last_name: Some("Dijkstra".into()),
        email: Some(email.into()),
        password: Some("shortest-path".into()),
        phone: Some(phone.into()),
        avatar: None,
    }
}

#[tokio::test]
async fn test_sign_up_stores_hashed_password() {
    let state = state().await;
    let user = state
        .users
        .sign_up(sign_up_request("ewd@example.com", "31-40"))
        .await
        .unwrap();

    let claims = state
        .jwt_service()
        .validate_access_token(user.token.as_deref().unwrap())
        .unwrap();
    assert_eq!(claims.uid, user.user_id);
    assert_eq!(claims.email, "ewd@example.com");

    let logged_in = state
        .users
        .login(LoginRequest {
            email: "ewd@example.com".into(),
            password: "shortest-path".into(),
        })
        .await
        .unwrap();
    assert_eq!(logged_in.user_id, user.user_id);
    assert!(logged_in.updated_at >= user.updated_at);
}

#[tokio::test]
async fn test_duplicate_phone_leaves_one_record() {
    let state = state().await;
    state
        .users
        .sign_up(sign_up_request("a@example.com", "100"))
        .await
        .unwrap();

    let err = state
        .users
        .sign_up(sign_up_request("b@example.com", "100"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::PhoneAlreadyExists);

    let page = state.users.list(&PageQuery::default()).await.unwrap();
    assert_eq!(page.total, 1);
}

#[tokio::test]
async fn test_food_update_checks_menu_reference() {
    let state = state().await;
    let menu = state
        .menus
        .create(
            MenuCreate {
                name: Some("Breakfast".into()),
                category: Some("morning".into()),
                ..Default::default()
            },
            &actor(),
        )
        .await
        .unwrap();
    let food = state
        .foods
        .create(
            FoodCreate {
                name: Some("Pancakes".into()),
                price: Some(6.0),
                food_image: Some("pancakes.png".into()),
                menu_id: Some(menu.menu_id.clone()),
            },
            &actor(),
        )
        .await
        .unwrap();
    assert_eq!(food.created_at, food.updated_at);

    let err = state
        .foods
        .update(
            &food.food_id,
            FoodUpdate {
                menu_id: Some("gone".into()),
                price: Some(1.0),
                ..Default::default()
            },
            &actor(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ReferenceNotFound);

    let stored = state.foods.get(&food.food_id).await.unwrap();
    assert_eq!(stored.price, 6.0);
    assert_eq!(stored.menu_id, menu.menu_id);
}

#[tokio::test]
async fn test_table_and_note_lists() {
    let state = state().await;
    for number in 1..=3 {
        state
            .tables
            .create(
                TableCreate {
                    number_of_guests: Some(2),
                    table_number: Some(number),
                },
                &actor(),
            )
            .await
            .unwrap();
    }
    state
        .notes
        .create(
            NoteCreate {
                title: Some("Delivery".into()),
                text: Some("Fish arrives at 6".into()),
            },
            &actor(),
        )
        .await
        .unwrap();

    let tables = state.tables.list(&PageQuery::new(1, 2)).await.unwrap();
    assert_eq!(tables.total, 3);
    assert_eq!(tables.data.len(), 2);
    assert_eq!(tables.total_pages, 2);

    let notes = state.notes.list(&PageQuery::default()).await.unwrap();
    assert_eq!(notes.total, 1);
    assert_eq!(notes.data[0].title, "Delivery");
}

#[tokio::test]
async fn test_login_unknown_email_and_wrong_password() {
    let state = state().await;
    state
        .users
        .sign_up(sign_up_request("ewd@example.com", "31-40"))
        .await
        .unwrap();

    let unknown = state
        .users
        .login(LoginRequest {
            email: "nobody@example.com".into(),
            password: "shortest-path".into(),
        })
        .await
        .unwrap_err();
    let wrong = state
        .users
        .login(LoginRequest {
            email: "ewd@example.com".into(),
            password: "longest-path".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(unknown.code, ErrorCode::InvalidCredentials);
    assert_eq!(unknown.code, wrong.code);
    assert_eq!(unknown.message, wrong.message);
}
