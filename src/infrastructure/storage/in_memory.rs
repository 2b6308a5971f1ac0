//! In-memory storage implementation

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::{Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Thread-safe in-memory storage implementation
///
/// Entities are kept in insertion order, which backs the directory's
/// stable-sort tie-break. Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entities: RwLock<Vec<E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }

    /// Creates storage pre-populated with entities
    pub fn with_entities(entities: Vec<E>) -> Self {
        Self {
            entities: RwLock::new(entities),
        }
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entities.iter().find(|e| e.key() == *key).cloned())
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entities.clone())
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if entities.iter().any(|e| e.key() == entity.key()) {
            return Err(DomainError::conflict(format!(
                "Entity with key '{}' already exists",
                entity.key().to_key()
            )));
        }

        entities.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E, DomainError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        match entities.iter_mut().find(|e| e.key() == entity.key()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(DomainError::not_found(format!(
                "Entity with key '{}' not found",
                entity.key().to_key()
            ))),
        }
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = entities.len();
        entities.retain(|e| e.key() != *key);
        Ok(entities.len() < before)
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        entities.clear();
        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entities.len())
    }

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entities.iter().any(|e| e.key() == *key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    struct TestId(u64);

    impl StorageKey for TestId {
        fn to_key(&self) -> String {
            self.0.to_string()
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestEntity {
        id: TestId,
        name: String,
    }

    impl StorageEntity for TestEntity {
        type Key = TestId;

        fn key(&self) -> Self::Key {
            self.id
        }
    }

    fn entity(id: u64, name: &str) -> TestEntity {
        TestEntity {
            id: TestId(id),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();
        let e = entity(1, "Test");

        storage.create(e.clone()).await.unwrap();

        let result = storage.get(&TestId(1)).await.unwrap();
        assert_eq!(result, Some(e));
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        storage.create(entity(1, "Test")).await.unwrap();
        let result = storage.create(entity(1, "Other")).await;

        assert!(matches!(
            result.unwrap_err(),
            DomainError::Conflict { .. }
        ));
    }

    #[tokio::test]
    async fn test_conflict_message_names_the_key() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        storage.create(entity(7, "Test")).await.unwrap();
        let err = storage.create(entity(7, "Other")).await.unwrap_err();

        assert!(err.to_string().contains("'7'"));
    }

    #[tokio::test]
    async fn test_update() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        storage.create(entity(1, "Test")).await.unwrap();
        storage.update(entity(1, "Updated")).await.unwrap();

        let result = storage.get(&TestId(1)).await.unwrap();
        assert_eq!(result.unwrap().name, "Updated");
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        let result = storage.update(entity(1, "Test")).await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_delete() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        storage.create(entity(1, "Test")).await.unwrap();
        assert!(storage.delete(&TestId(1)).await.unwrap());
        assert!(!storage.exists(&TestId(1)).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();
        assert!(!storage.delete(&TestId(1)).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        storage.create(entity(3, "C")).await.unwrap();
        storage.create(entity(1, "A")).await.unwrap();
        storage.create(entity(2, "B")).await.unwrap();

        let list = storage.list().await.unwrap();
        let names: Vec<&str> = list.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_update_keeps_position() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        storage.create(entity(1, "A")).await.unwrap();
        storage.create(entity(2, "B")).await.unwrap();
        storage.update(entity(1, "A2")).await.unwrap();

        let list = storage.list().await.unwrap();
        assert_eq!(list[0].name, "A2");
        assert_eq!(list[1].name, "B");
    }

    #[tokio::test]
    async fn test_count_and_clear() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        storage.create(entity(1, "A")).await.unwrap();
        storage.create(entity(2, "B")).await.unwrap();
        assert_eq!(storage.count().await.unwrap(), 2);

        storage.clear().await.unwrap();
        assert_eq!(storage.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_save_creates_then_updates() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        storage.save(entity(1, "Original")).await.unwrap();
        storage.save(entity(1, "Updated")).await.unwrap();

        let result = storage.get(&TestId(1)).await.unwrap();
        assert_eq!(result.unwrap().name, "Updated");
        assert_eq!(storage.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_with_entities() {
        let storage = InMemoryStorage::with_entities(vec![entity(1, "A"), entity(2, "B")]);
        assert_eq!(storage.count().await.unwrap(), 2);
    }
}
