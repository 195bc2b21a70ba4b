use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};

use resto_directory_schema::{
    avis, flagship_dishes, restaurants, tag_restos, tags, type_users, users,
};
use resto_domain::rating::StarRating;

use crate::domain::repository::{
    AvisRepository, FlagshipDishRepository, RestaurantRepository, TagRepository,
    TypeUserRepository, UserRepository,
};
use crate::domain::types::{
    Avis, AvisFields, FlagshipDish, FlagshipDishFields, Restaurant, RestaurantFields,
    RestaurantTag, Tag, TypeUser, User, UserFields,
};
use crate::error::DirectoryError;

// ── Restaurant repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRestaurantRepository {
    pub db: DatabaseConnection,
}

impl RestaurantRepository for DbRestaurantRepository {
    async fn list(&self) -> Result<Vec<Restaurant>, DirectoryError> {
        let models = restaurants::Entity::find()
            .order_by_asc(restaurants::Column::Id)
            .all(&self.db)
            .await
            .context("list restaurants")?;
        Ok(models.into_iter().map(restaurant_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Restaurant>, DirectoryError> {
        let model = restaurants::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find restaurant by id")?;
        Ok(model.map(restaurant_from_model))
    }

    async fn list_by_ids(&self, ids: &[i32]) -> Result<Vec<Restaurant>, DirectoryError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let models = restaurants::Entity::find()
            .filter(restaurants::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(restaurants::Column::Id)
            .all(&self.db)
            .await
            .context("list restaurants by ids")?;
        Ok(models.into_iter().map(restaurant_from_model).collect())
    }

    async fn create(&self, fields: &RestaurantFields) -> Result<i32, DirectoryError> {
        let model = restaurant_active_model(fields)
            .insert(&self.db)
            .await
            .context("create restaurant")?;
        Ok(model.id)
    }

    async fn update(&self, id: i32, fields: &RestaurantFields) -> Result<(), DirectoryError> {
        let mut am = restaurant_active_model(fields);
        am.id = Set(id);
        am.update(&self.db).await.context("update restaurant")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, DirectoryError> {
        let res = restaurants::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete restaurant")?;
        Ok(res.rows_affected > 0)
    }
}

fn restaurant_active_model(fields: &RestaurantFields) -> restaurants::ActiveModel {
    restaurants::ActiveModel {
        name: Set(fields.name.clone()),
        city: Set(fields.city.clone()),
        postal_code: Set(fields.postal_code.clone()),
        address: Set(fields.address.clone()),
        phone: Set(fields.phone.clone()),
        latitude: Set(fields.latitude),
        longitude: Set(fields.longitude),
        ..Default::default()
    }
}

fn restaurant_from_model(model: restaurants::Model) -> Restaurant {
    Restaurant {
        id: model.id,
        name: model.name,
        city: model.city,
        postal_code: model.postal_code,
        address: model.address,
        phone: model.phone,
        latitude: model.latitude,
        longitude: model.longitude,
    }
}

// ── Tag repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTagRepository {
    pub db: DatabaseConnection,
}

impl TagRepository for DbTagRepository {
    async fn list(&self) -> Result<Vec<Tag>, DirectoryError> {
        let models = tags::Entity::find()
            .order_by_asc(tags::Column::Id)
            .all(&self.db)
            .await
            .context("list tags")?;
        Ok(models.into_iter().map(tag_from_model).collect())
    }

    async fn list_for_restaurants(
        &self,
        restaurant_ids: &[i32],
    ) -> Result<Vec<RestaurantTag>, DirectoryError> {
        if restaurant_ids.is_empty() {
            return Ok(vec![]);
        }
        let rows = tag_restos::Entity::find()
            .filter(tag_restos::Column::RestaurantId.is_in(restaurant_ids.iter().copied()))
            .order_by_asc(tag_restos::Column::Id)
            .find_also_related(tags::Entity)
            .all(&self.db)
            .await
            .context("list tags for restaurants")?;
        Ok(rows
            .into_iter()
            .filter_map(|(link, tag)| {
                Some(RestaurantTag {
                    restaurant_id: link.restaurant_id,
                    tag: tag_from_model(tag?),
                })
            })
            .collect())
    }
}

fn tag_from_model(model: tags::Model) -> Tag {
    Tag {
        id: model.id,
        label: model.label,
    }
}

// ── Flagship dish repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFlagshipDishRepository {
    pub db: DatabaseConnection,
}

impl FlagshipDishRepository for DbFlagshipDishRepository {
    async fn list(&self) -> Result<Vec<FlagshipDish>, DirectoryError> {
        let models = flagship_dishes::Entity::find()
            .order_by_asc(flagship_dishes::Column::Id)
            .all(&self.db)
            .await
            .context("list flagship dishes")?;
        Ok(models.into_iter().map(dish_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<FlagshipDish>, DirectoryError> {
        let model = flagship_dishes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find flagship dish by id")?;
        Ok(model.map(dish_from_model))
    }

    async fn list_by_restaurant(
        &self,
        restaurant_id: i32,
    ) -> Result<Vec<FlagshipDish>, DirectoryError> {
        let models = flagship_dishes::Entity::find()
            .filter(flagship_dishes::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(flagship_dishes::Column::Id)
            .all(&self.db)
            .await
            .context("list flagship dishes by restaurant")?;
        Ok(models.into_iter().map(dish_from_model).collect())
    }

    async fn create(&self, fields: &FlagshipDishFields) -> Result<i32, DirectoryError> {
        let model = dish_active_model(fields)
            .insert(&self.db)
            .await
            .context("create flagship dish")?;
        Ok(model.id)
    }

    async fn update(&self, id: i32, fields: &FlagshipDishFields) -> Result<(), DirectoryError> {
        let mut am = dish_active_model(fields);
        am.id = Set(id);
        am.update(&self.db).await.context("update flagship dish")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, DirectoryError> {
        let res = flagship_dishes::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete flagship dish")?;
        Ok(res.rows_affected > 0)
    }
}

fn dish_active_model(fields: &FlagshipDishFields) -> flagship_dishes::ActiveModel {
    flagship_dishes::ActiveModel {
        label: Set(fields.label.clone()),
        description: Set(fields.description.clone()),
        photo: Set(fields.photo.clone()),
        restaurant_id: Set(fields.restaurant_id),
        ..Default::default()
    }
}

fn dish_from_model(model: flagship_dishes::Model) -> FlagshipDish {
    FlagshipDish {
        id: model.id,
        label: model.label,
        description: model.description,
        photo: model.photo,
        restaurant_id: model.restaurant_id,
    }
}

// ── Avis repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAvisRepository {
    pub db: DatabaseConnection,
}

impl AvisRepository for DbAvisRepository {
    async fn list(&self) -> Result<Vec<Avis>, DirectoryError> {
        let models = avis::Entity::find()
            .order_by_asc(avis::Column::Id)
            .all(&self.db)
            .await
            .context("list avis")?;
        models.into_iter().map(avis_from_model).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Avis>, DirectoryError> {
        let model = avis::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find avis by id")?;
        model.map(avis_from_model).transpose()
    }

    async fn list_for_restaurants(
        &self,
        restaurant_ids: &[i32],
    ) -> Result<Vec<Avis>, DirectoryError> {
        if restaurant_ids.is_empty() {
            return Ok(vec![]);
        }
        let models = avis::Entity::find()
            .filter(avis::Column::RestaurantId.is_in(restaurant_ids.iter().copied()))
            .order_by_asc(avis::Column::Id)
            .all(&self.db)
            .await
            .context("list avis for restaurants")?;
        models.into_iter().map(avis_from_model).collect()
    }

    async fn create(&self, fields: &AvisFields) -> Result<i32, DirectoryError> {
        let now = Utc::now();
        let mut am = avis_active_model(fields);
        am.created_at = Set(now);
        am.updated_at = Set(now);
        let model = am.insert(&self.db).await.context("create avis")?;
        Ok(model.id)
    }

    async fn update(&self, id: i32, fields: &AvisFields) -> Result<(), DirectoryError> {
        let mut am = avis_active_model(fields);
        am.id = Set(id);
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update avis")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, DirectoryError> {
        let res = avis::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete avis")?;
        Ok(res.rows_affected > 0)
    }
}

fn avis_active_model(fields: &AvisFields) -> avis::ActiveModel {
    avis::ActiveModel {
        content: Set(fields.content.clone()),
        star_nb: Set(i16::from(fields.star_nb.get())),
        user_id: Set(fields.user_id),
        restaurant_id: Set(fields.restaurant_id),
        ..Default::default()
    }
}

fn avis_from_model(model: avis::Model) -> Result<Avis, DirectoryError> {
    let star_nb = StarRating::new(i64::from(model.star_nb))
        .with_context(|| format!("avis {} has invalid star_nb", model.id))?;
    Ok(Avis {
        id: model.id,
        content: model.content,
        star_nb,
        user_id: model.user_id,
        restaurant_id: model.restaurant_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, DirectoryError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DirectoryError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn list_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DirectoryError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let models = users::Entity::find()
            .filter(users::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users by ids")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create(&self, fields: &UserFields) -> Result<i32, DirectoryError> {
        let model = user_active_model(fields)
            .insert(&self.db)
            .await
            .context("create user")?;
        Ok(model.id)
    }

    async fn update(&self, id: i32, fields: &UserFields) -> Result<(), DirectoryError> {
        let mut am = user_active_model(fields);
        am.id = Set(id);
        am.update(&self.db).await.context("update user")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, DirectoryError> {
        let res = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(res.rows_affected > 0)
    }
}

fn user_active_model(fields: &UserFields) -> users::ActiveModel {
    users::ActiveModel {
        first_name: Set(fields.first_name.clone()),
        last_name: Set(fields.last_name.clone()),
        email: Set(fields.email.clone()),
        username: Set(fields.username.clone()),
        password: Set(fields.password_hash.clone()),
        type_user_id: Set(fields.type_user_id),
        ..Default::default()
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        username: model.username,
        password_hash: model.password,
        type_user_id: model.type_user_id,
    }
}

// ── Type user repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTypeUserRepository {
    pub db: DatabaseConnection,
}

impl TypeUserRepository for DbTypeUserRepository {
    async fn list(&self) -> Result<Vec<TypeUser>, DirectoryError> {
        let models = type_users::Entity::find()
            .order_by_asc(type_users::Column::Id)
            .all(&self.db)
            .await
            .context("list type users")?;
        Ok(models.into_iter().map(type_user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<TypeUser>, DirectoryError> {
        let model = type_users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find type user by id")?;
        Ok(model.map(type_user_from_model))
    }
}

fn type_user_from_model(model: type_users::Model) -> TypeUser {
    TypeUser {
        id: model.id,
        label: model.label,
    }
}
