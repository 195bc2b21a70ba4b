use resto_directory::error::DirectoryError;
use resto_directory::usecase::avis::{
    AvisInput, CreateAvisUseCase, DeleteAvisUseCase, GetAvisUseCase, ListAvisUseCase,
    UpdateAvisUseCase,
};

use crate::helpers::{
    MockAvisRepo, MockRestaurantRepo, MockUserRepo, test_avis, test_restaurant, test_user,
};

fn input(star_nb: i64, user_id: i32, restaurant_id: i32) -> AvisInput {
    AvisInput {
        content: "Service impeccable".to_owned(),
        star_nb,
        user_id,
        restaurant_id,
    }
}

#[tokio::test]
async fn should_list_avis_with_author_and_restaurant() {
    let uc = ListAvisUseCase {
        avis: MockAvisRepo::new(vec![test_avis(1, 5, 2, 3)]),
        users: MockUserRepo::new(vec![test_user(5, "gourmet")]),
        restaurants: MockRestaurantRepo::new(vec![test_restaurant(2, "Sushi Ya")]),
    };

    let views = uc.execute().await.unwrap();

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].user.id, 5);
    assert_eq!(views[0].user.first_name, "Camille");
    assert_eq!(views[0].restaurant.name, "Sushi Ya");
    assert_eq!(views[0].avis.star_nb.get(), 3);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_avis() {
    let uc = GetAvisUseCase {
        avis: MockAvisRepo::empty(),
        users: MockUserRepo::empty(),
        restaurants: MockRestaurantRepo::empty(),
    };

    let result = uc.execute(9).await;

    assert!(
        matches!(result, Err(DirectoryError::AvisNotFound)),
        "expected AvisNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_create_avis_when_references_exist() {
    let repo = MockAvisRepo::empty();
    let handle = repo.handle();
    let uc = CreateAvisUseCase {
        avis: repo,
        users: MockUserRepo::new(vec![test_user(5, "gourmet")]),
        restaurants: MockRestaurantRepo::new(vec![test_restaurant(2, "Sushi Ya")]),
    };

    let id = uc.execute(input(4, 5, 2)).await.unwrap();

    let rows = handle.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].star_nb.get(), 4);
    assert_eq!(rows[0].created_at, rows[0].updated_at);
}

#[tokio::test]
async fn should_reject_star_nb_out_of_range() {
    for stars in [-1, 6, 100] {
        let uc = CreateAvisUseCase {
            avis: MockAvisRepo::empty(),
            users: MockUserRepo::new(vec![test_user(5, "gourmet")]),
            restaurants: MockRestaurantRepo::new(vec![test_restaurant(2, "Sushi Ya")]),
        };

        let result = uc.execute(input(stars, 5, 2)).await;

        assert!(
            matches!(result, Err(DirectoryError::InvalidStarNb)),
            "expected InvalidStarNb for {stars}, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_return_user_not_found_for_dangling_author() {
    let uc = CreateAvisUseCase {
        avis: MockAvisRepo::empty(),
        users: MockUserRepo::empty(),
        restaurants: MockRestaurantRepo::new(vec![test_restaurant(2, "Sushi Ya")]),
    };

    let result = uc.execute(input(3, 5, 2)).await;

    assert!(matches!(result, Err(DirectoryError::UserNotFound)));
}

#[tokio::test]
async fn should_return_restaurant_not_found_for_dangling_restaurant() {
    let uc = CreateAvisUseCase {
        avis: MockAvisRepo::empty(),
        users: MockUserRepo::new(vec![test_user(5, "gourmet")]),
        restaurants: MockRestaurantRepo::empty(),
    };

    let result = uc.execute(input(3, 5, 2)).await;

    assert!(matches!(result, Err(DirectoryError::RestaurantNotFound)));
}

#[tokio::test]
async fn should_overwrite_avis_on_update() {
    let original = test_avis(1, 5, 2, 1);
    let repo = MockAvisRepo::new(vec![original.clone()]);
    let handle = repo.handle();
    let uc = UpdateAvisUseCase {
        avis: repo,
        users: MockUserRepo::new(vec![test_user(5, "gourmet")]),
        restaurants: MockRestaurantRepo::new(vec![test_restaurant(2, "Sushi Ya")]),
    };

    uc.execute(1, input(5, 5, 2)).await.unwrap();

    let rows = handle.lock().unwrap();
    assert_eq!(rows[0].star_nb.get(), 5);
    assert_eq!(rows[0].content, "Service impeccable");
    assert_eq!(rows[0].created_at, original.created_at);
    assert!(rows[0].updated_at >= original.updated_at);
}

#[tokio::test]
async fn should_return_avis_not_found_before_checking_rating_on_update() {
    let uc = UpdateAvisUseCase {
        avis: MockAvisRepo::empty(),
        users: MockUserRepo::empty(),
        restaurants: MockRestaurantRepo::empty(),
    };

    let result = uc.execute(1, input(9, 5, 2)).await;

    assert!(matches!(result, Err(DirectoryError::AvisNotFound)));
}

#[tokio::test]
async fn should_delete_avis() {
    let repo = MockAvisRepo::new(vec![test_avis(1, 5, 2, 3)]);
    let handle = repo.handle();
    let uc = DeleteAvisUseCase { avis: repo };

    uc.execute(1).await.unwrap();

    assert!(handle.lock().unwrap().is_empty());
    let again = uc.execute(1).await;
    assert!(matches!(again, Err(DirectoryError::AvisNotFound)));
}
