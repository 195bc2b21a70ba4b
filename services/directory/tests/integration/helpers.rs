use std::sync::{Arc, Mutex};

use chrono::Utc;

use resto_directory::domain::repository::{
    AvisRepository, FlagshipDishRepository, PasswordHasher, RestaurantRepository, TagRepository,
    TypeUserRepository, UserRepository,
};
use resto_directory::domain::types::{
    Avis, AvisFields, FlagshipDish, FlagshipDishFields, Restaurant, RestaurantFields,
    RestaurantTag, Tag, TypeUser, User, UserFields,
};
use resto_directory::error::DirectoryError;
use resto_domain::rating::StarRating;
use resto_domain::user_type::UserType;

fn next_id(ids: impl Iterator<Item = i32>) -> i32 {
    ids.max().unwrap_or(0) + 1
}

// ── MockRestaurantRepo ───────────────────────────────────────────────────────

pub struct MockRestaurantRepo {
    pub restaurants: Arc<Mutex<Vec<Restaurant>>>,
}

impl MockRestaurantRepo {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants: Arc::new(Mutex::new(restaurants)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the stored rows for post-execution inspection.
    pub fn handle(&self) -> Arc<Mutex<Vec<Restaurant>>> {
        Arc::clone(&self.restaurants)
    }
}

impl RestaurantRepository for MockRestaurantRepo {
    async fn list(&self) -> Result<Vec<Restaurant>, DirectoryError> {
        let mut all = self.restaurants.lock().unwrap().clone();
        all.sort_by_key(|r| r.id);
        Ok(all)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Restaurant>, DirectoryError> {
        Ok(self
            .restaurants
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn list_by_ids(&self, ids: &[i32]) -> Result<Vec<Restaurant>, DirectoryError> {
        Ok(self
            .restaurants
            .lock()
            .unwrap()
            .iter()
            .filter(|r| ids.contains(&r.id))
            .cloned()
            .collect())
    }

    async fn create(&self, fields: &RestaurantFields) -> Result<i32, DirectoryError> {
        let mut rows = self.restaurants.lock().unwrap();
        let id = next_id(rows.iter().map(|r| r.id));
        rows.push(Restaurant::from_fields(id, fields.clone()));
        Ok(id)
    }

    async fn update(&self, id: i32, fields: &RestaurantFields) -> Result<(), DirectoryError> {
        let mut rows = self.restaurants.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
            *row = Restaurant::from_fields(id, fields.clone());
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, DirectoryError> {
        let mut rows = self.restaurants.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }
}

// ── MockTagRepo ──────────────────────────────────────────────────────────────

pub struct MockTagRepo {
    pub tags: Vec<Tag>,
    /// `(restaurant_id, tag_id)` links in insertion order.
    pub links: Vec<(i32, i32)>,
}

impl MockTagRepo {
    pub fn new(tags: Vec<Tag>, links: Vec<(i32, i32)>) -> Self {
        Self { tags, links }
    }

    pub fn empty() -> Self {
        Self::new(vec![], vec![])
    }
}

impl TagRepository for MockTagRepo {
    async fn list(&self) -> Result<Vec<Tag>, DirectoryError> {
        Ok(self.tags.clone())
    }

    async fn list_for_restaurants(
        &self,
        restaurant_ids: &[i32],
    ) -> Result<Vec<RestaurantTag>, DirectoryError> {
        Ok(self
            .links
            .iter()
            .filter(|(restaurant_id, _)| restaurant_ids.contains(restaurant_id))
            .filter_map(|&(restaurant_id, tag_id)| {
                let tag = self.tags.iter().find(|t| t.id == tag_id)?.clone();
                Some(RestaurantTag { restaurant_id, tag })
            })
            .collect())
    }
}

// ── MockFlagshipDishRepo ─────────────────────────────────────────────────────

pub struct MockFlagshipDishRepo {
    pub dishes: Arc<Mutex<Vec<FlagshipDish>>>,
}

impl MockFlagshipDishRepo {
    pub fn new(dishes: Vec<FlagshipDish>) -> Self {
        Self {
            dishes: Arc::new(Mutex::new(dishes)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<FlagshipDish>>> {
        Arc::clone(&self.dishes)
    }
}

impl FlagshipDishRepository for MockFlagshipDishRepo {
    async fn list(&self) -> Result<Vec<FlagshipDish>, DirectoryError> {
        Ok(self.dishes.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<FlagshipDish>, DirectoryError> {
        Ok(self
            .dishes
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    async fn list_by_restaurant(
        &self,
        restaurant_id: i32,
    ) -> Result<Vec<FlagshipDish>, DirectoryError> {
        Ok(self
            .dishes
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }

    async fn create(&self, fields: &FlagshipDishFields) -> Result<i32, DirectoryError> {
        let mut rows = self.dishes.lock().unwrap();
        let id = next_id(rows.iter().map(|d| d.id));
        rows.push(FlagshipDish {
            id,
            label: fields.label.clone(),
            description: fields.description.clone(),
            photo: fields.photo.clone(),
            restaurant_id: fields.restaurant_id,
        });
        Ok(id)
    }

    async fn update(&self, id: i32, fields: &FlagshipDishFields) -> Result<(), DirectoryError> {
        let mut rows = self.dishes.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|d| d.id == id) {
            row.label = fields.label.clone();
            row.description = fields.description.clone();
            row.photo = fields.photo.clone();
            row.restaurant_id = fields.restaurant_id;
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, DirectoryError> {
        let mut rows = self.dishes.lock().unwrap();
        let before = rows.len();
        rows.retain(|d| d.id != id);
        Ok(rows.len() < before)
    }
}

// ── MockAvisRepo ─────────────────────────────────────────────────────────────

pub struct MockAvisRepo {
    pub avis: Arc<Mutex<Vec<Avis>>>,
}

impl MockAvisRepo {
    pub fn new(avis: Vec<Avis>) -> Self {
        Self {
            avis: Arc::new(Mutex::new(avis)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<Avis>>> {
        Arc::clone(&self.avis)
    }
}

impl AvisRepository for MockAvisRepo {
    async fn list(&self) -> Result<Vec<Avis>, DirectoryError> {
        Ok(self.avis.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Avis>, DirectoryError> {
        Ok(self
            .avis
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list_for_restaurants(
        &self,
        restaurant_ids: &[i32],
    ) -> Result<Vec<Avis>, DirectoryError> {
        Ok(self
            .avis
            .lock()
            .unwrap()
            .iter()
            .filter(|a| restaurant_ids.contains(&a.restaurant_id))
            .cloned()
            .collect())
    }

    async fn create(&self, fields: &AvisFields) -> Result<i32, DirectoryError> {
        let mut rows = self.avis.lock().unwrap();
        let id = next_id(rows.iter().map(|a| a.id));
        let now = Utc::now();
        rows.push(Avis {
            id,
            content: fields.content.clone(),
            star_nb: fields.star_nb,
            user_id: fields.user_id,
            restaurant_id: fields.restaurant_id,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    async fn update(&self, id: i32, fields: &AvisFields) -> Result<(), DirectoryError> {
        let mut rows = self.avis.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|a| a.id == id) {
            row.content = fields.content.clone();
            row.star_nb = fields.star_nb;
            row.user_id = fields.user_id;
            row.restaurant_id = fields.restaurant_id;
            row.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, DirectoryError> {
        let mut rows = self.avis.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        Ok(rows.len() < before)
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn list(&self) -> Result<Vec<User>, DirectoryError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DirectoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DirectoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn create(&self, fields: &UserFields) -> Result<i32, DirectoryError> {
        let mut rows = self.users.lock().unwrap();
        let id = next_id(rows.iter().map(|u| u.id));
        rows.push(user_from_fields(id, fields));
        Ok(id)
    }

    async fn update(&self, id: i32, fields: &UserFields) -> Result<(), DirectoryError> {
        let mut rows = self.users.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|u| u.id == id) {
            *row = user_from_fields(id, fields);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, DirectoryError> {
        let mut rows = self.users.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != id);
        Ok(rows.len() < before)
    }
}

fn user_from_fields(id: i32, fields: &UserFields) -> User {
    User {
        id,
        first_name: fields.first_name.clone(),
        last_name: fields.last_name.clone(),
        email: fields.email.clone(),
        username: fields.username.clone(),
        password_hash: fields.password_hash.clone(),
        type_user_id: fields.type_user_id,
    }
}

// ── MockTypeUserRepo ─────────────────────────────────────────────────────────

/// Serves the four seeded account types.
pub struct MockTypeUserRepo;

impl TypeUserRepository for MockTypeUserRepo {
    async fn list(&self) -> Result<Vec<TypeUser>, DirectoryError> {
        Ok(UserType::ALL.into_iter().map(type_user).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<TypeUser>, DirectoryError> {
        Ok(UserType::from_id(id).map(type_user))
    }
}

fn type_user(t: UserType) -> TypeUser {
    TypeUser {
        id: t.id(),
        label: t.label().to_owned(),
    }
}

// ── FakeHasher ───────────────────────────────────────────────────────────────

/// Cheap reversible stand-in for argon2.
pub struct FakeHasher;

impl PasswordHasher for FakeHasher {
    async fn hash(&self, password: &str) -> Result<String, DirectoryError> {
        Ok(format!("fake${password}"))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DirectoryError> {
        Ok(hash.strip_prefix("fake$") == Some(password))
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn restaurant_fields(name: &str) -> RestaurantFields {
    RestaurantFields {
        name: name.to_owned(),
        city: "Lyon".to_owned(),
        postal_code: "69002".to_owned(),
        address: "12 rue Mercière".to_owned(),
        phone: "0478000000".to_owned(),
        latitude: 45.7640,
        longitude: 4.8357,
    }
}

pub fn test_restaurant(id: i32, name: &str) -> Restaurant {
    Restaurant::from_fields(id, restaurant_fields(name))
}

pub fn test_tag(id: i32, label: &str) -> Tag {
    Tag {
        id,
        label: label.to_owned(),
    }
}

pub fn test_user(id: i32, username: &str) -> User {
    User {
        id,
        first_name: "Camille".to_owned(),
        last_name: "Durand".to_owned(),
        email: format!("{username}@example.com"),
        username: username.to_owned(),
        password_hash: "fake$s3cret".to_owned(),
        type_user_id: UserType::User.id(),
    }
}

pub fn test_avis(id: i32, user_id: i32, restaurant_id: i32, stars: i64) -> Avis {
    let now = Utc::now();
    Avis {
        id,
        content: format!("avis {id}"),
        star_nb: StarRating::new(stars).unwrap(),
        user_id,
        restaurant_id,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_dish(id: i32, restaurant_id: i32, label: &str) -> FlagshipDish {
    FlagshipDish {
        id,
        label: label.to_owned(),
        description: format!("{label}, house style"),
        photo: format!("https://img.example.com/{id}.jpg"),
        restaurant_id,
    }
}
