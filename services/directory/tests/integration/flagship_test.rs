use resto_directory::domain::types::FlagshipDishFields;
use resto_directory::error::DirectoryError;
use resto_directory::usecase::flagship::{
    CreateFlagshipDishUseCase, DeleteFlagshipDishUseCase, GetFlagshipDishUseCase,
    ListFlagshipDishesUseCase, UpdateFlagshipDishUseCase,
};

use crate::helpers::{MockFlagshipDishRepo, MockRestaurantRepo, test_dish, test_restaurant};

fn fields(restaurant_id: i32) -> FlagshipDishFields {
    FlagshipDishFields {
        label: "Tarte aux pralines".to_owned(),
        description: "Pralines roses de Lyon".to_owned(),
        photo: "https://img.example.com/tarte.jpg".to_owned(),
        restaurant_id,
    }
}

#[tokio::test]
async fn should_list_dishes_with_restaurant_reference() {
    let uc = ListFlagshipDishesUseCase {
        dishes: MockFlagshipDishRepo::new(vec![
            test_dish(1, 1, "Quenelle"),
            test_dish(2, 2, "Maki"),
        ]),
        restaurants: MockRestaurantRepo::new(vec![
            test_restaurant(1, "Le Bouchon"),
            test_restaurant(2, "Sushi Ya"),
        ]),
    };

    let views = uc.execute().await.unwrap();

    assert_eq!(views.len(), 2);
    assert_eq!(views[0].restaurant.name, "Le Bouchon");
    assert_eq!(views[1].restaurant.id, 2);
}

#[tokio::test]
async fn should_get_dish_by_id() {
    let uc = GetFlagshipDishUseCase {
        dishes: MockFlagshipDishRepo::new(vec![test_dish(4, 1, "Quenelle")]),
        restaurants: MockRestaurantRepo::new(vec![test_restaurant(1, "Le Bouchon")]),
    };

    let view = uc.execute(4).await.unwrap();

    assert_eq!(view.dish.label, "Quenelle");
    assert_eq!(view.restaurant.name, "Le Bouchon");
}

#[tokio::test]
async fn should_return_not_found_for_unknown_dish() {
    let uc = GetFlagshipDishUseCase {
        dishes: MockFlagshipDishRepo::empty(),
        restaurants: MockRestaurantRepo::empty(),
    };

    let result = uc.execute(4).await;

    assert!(
        matches!(result, Err(DirectoryError::FlagshipDishNotFound)),
        "expected FlagshipDishNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_create_dish_for_existing_restaurant() {
    let repo = MockFlagshipDishRepo::empty();
    let handle = repo.handle();
    let uc = CreateFlagshipDishUseCase {
        dishes: repo,
        restaurants: MockRestaurantRepo::new(vec![test_restaurant(1, "Le Bouchon")]),
    };

    let id = uc.execute(fields(1)).await.unwrap();

    let rows = handle.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].restaurant_id, 1);
}

#[tokio::test]
async fn should_reject_dish_for_unknown_restaurant() {
    let repo = MockFlagshipDishRepo::empty();
    let handle = repo.handle();
    let uc = CreateFlagshipDishUseCase {
        dishes: repo,
        restaurants: MockRestaurantRepo::empty(),
    };

    let result = uc.execute(fields(1)).await;

    assert!(matches!(result, Err(DirectoryError::RestaurantNotFound)));
    assert!(handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_update_dish() {
    let repo = MockFlagshipDishRepo::new(vec![test_dish(1, 1, "Quenelle")]);
    let handle = repo.handle();
    let uc = UpdateFlagshipDishUseCase {
        dishes: repo,
        restaurants: MockRestaurantRepo::new(vec![
            test_restaurant(1, "Le Bouchon"),
            test_restaurant(2, "Sushi Ya"),
        ]),
    };

    uc.execute(1, fields(2)).await.unwrap();

    let rows = handle.lock().unwrap();
    assert_eq!(rows[0].label, "Tarte aux pralines");
    assert_eq!(rows[0].restaurant_id, 2);
}

#[tokio::test]
async fn should_check_dish_before_restaurant_on_update() {
    let uc = UpdateFlagshipDishUseCase {
        dishes: MockFlagshipDishRepo::empty(),
        restaurants: MockRestaurantRepo::empty(),
    };

    let result = uc.execute(1, fields(2)).await;

    assert!(matches!(result, Err(DirectoryError::FlagshipDishNotFound)));
}

#[tokio::test]
async fn should_return_not_found_when_deleting_unknown_dish() {
    let uc = DeleteFlagshipDishUseCase {
        dishes: MockFlagshipDishRepo::empty(),
    };

    let result = uc.execute(1).await;

    assert!(matches!(result, Err(DirectoryError::FlagshipDishNotFound)));
}
