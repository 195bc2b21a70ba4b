use crate::domain::repository::TagRepository;
use crate::domain::types::Tag;
use crate::error::DirectoryError;

pub struct ListTagsUseCase<T: TagRepository> {
    pub tags: T,
}

impl<T: TagRepository> ListTagsUseCase<T> {
    pub async fn execute(&self) -> Result<Vec<Tag>, DirectoryError> {
        self.tags.list().await
    }
}
