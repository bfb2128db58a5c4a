//! Repository Integration Tests
//!
//! Tests for ItemRepository and ItemController over in-memory storage.

#[cfg(test)]
mod tests {
    use crate::config::StoreConfig;
    use crate::domain::{Item, ViewMode};
    use crate::repository::{ItemRepository, KeyValueStorage, MemoryStorage, StorageError};
    use crate::ItemController;

    fn setup_repo(storage: &MemoryStorage) -> ItemRepository<&MemoryStorage> {
        ItemRepository::new(storage, &StoreConfig::default())
    }

    fn stored(storage: &MemoryStorage) -> Vec<Item> {
        let raw = storage.raw("items").expect("slot should be written");
        serde_json::from_str(&raw).expect("slot should hold a JSON array")
    }

    #[test]
    fn test_load_absent_slot() {
        let storage = MemoryStorage::new();
        let items = setup_repo(&storage).load().expect("Load failed");
        assert!(items.is_empty());
    }

    #[test]
    fn test_load_null_slot() {
        let storage = MemoryStorage::with_slot("items", "null");
        let items = setup_repo(&storage).load().expect("Load failed");
        assert!(items.is_empty());
    }

    #[test]
    fn test_load_invalid_text() {
        let storage = MemoryStorage::with_slot("items", "{not json");
        let result = setup_repo(&storage).load();
        assert!(matches!(result, Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_load_wrong_shape() {
        let storage = MemoryStorage::with_slot("items", r#"{"id":1,"name":"Milk"}"#);
        let result = setup_repo(&storage).load();
        assert!(matches!(result, Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let storage = MemoryStorage::new();
        let repo = setup_repo(&storage);
        let items = vec![Item::new(3, "Eggs"), Item::new(1, "Milk"), Item::new(2, "Milk")];

        repo.save(&items).expect("Save failed");
        assert_eq!(repo.load().expect("Load failed"), items);
    }

    #[test]
    fn test_save_writes_json_array() {
        let storage = MemoryStorage::new();
        setup_repo(&storage)
            .save(&[Item::new(1, "Milk"), Item::new(2, "Bread")])
            .unwrap();
        assert_eq!(
            storage.raw("items").unwrap(),
            r#"[{"id":1,"name":"Milk"},{"id":2,"name":"Bread"}]"#
        );
    }

    #[test]
    fn test_save_empty_collection() {
        let storage = MemoryStorage::new();
        let repo = setup_repo(&storage);
        repo.save(&[]).unwrap();
        assert_eq!(storage.raw("items").unwrap(), "[]");
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let storage = MemoryStorage::new();
        let repo = ItemRepository::new(&storage, &StoreConfig::with_key("groceries"));
        repo.save(&[Item::new(1, "Milk")]).unwrap();

        assert_eq!(repo.key(), "groceries");
        assert!(storage.raw("items").is_none());
        assert!(setup_repo(&storage).load().unwrap().is_empty());
    }

    #[test]
    fn test_save_failure_surfaces() {
        let storage = MemoryStorage::new();
        storage.fail_writes("QuotaExceededError");
        let result = setup_repo(&storage).save(&[Item::new(1, "Milk")]);
        assert_eq!(result, Err(StorageError::Backend("QuotaExceededError".to_string())));
    }

    #[test]
    fn test_controller_grocery_scenario() {
        let storage = MemoryStorage::new();
        let mut controller = ItemController::open(setup_repo(&storage));

        controller.add("Milk").unwrap();
        assert_eq!(stored(&storage), vec![Item::new(1, "Milk")]);

        controller.add("Bread").unwrap();
        assert_eq!(stored(&storage), vec![Item::new(1, "Milk"), Item::new(2, "Bread")]);

        assert!(controller.begin_edit(1));
        assert!(controller.submit_edit("Oat Milk").unwrap());
        assert_eq!(controller.mode(), ViewMode::Adding);
        assert_eq!(stored(&storage), vec![Item::new(1, "Oat Milk"), Item::new(2, "Bread")]);

        assert!(controller.remove(2).unwrap());
        assert_eq!(stored(&storage), vec![Item::new(1, "Oat Milk")]);
        assert_eq!(controller.items(), stored(&storage).as_slice());
    }

    #[test]
    fn test_controller_reopens_saved_items() {
        let storage = MemoryStorage::new();
        {
            let mut controller = ItemController::open(setup_repo(&storage));
            controller.add("Milk").unwrap();
            controller.add("Bread").unwrap();
        }
        let mut controller = ItemController::open(setup_repo(&storage));
        assert_eq!(controller.items(), &[Item::new(1, "Milk"), Item::new(2, "Bread")]);
        assert_eq!(controller.add("Eggs").unwrap().unwrap().id, 3);
    }

    #[test]
    fn test_controller_open_corrupt_slot() {
        let storage = MemoryStorage::with_slot("items", "definitely not json");
        let controller = ItemController::open(setup_repo(&storage));

        assert!(controller.items().is_empty());
        assert!(matches!(controller.load_error(), Some(StorageError::Corrupt(_))));
        assert_eq!(controller.mode(), ViewMode::Adding);
    }

    #[test]
    fn test_controller_noops_do_not_write() {
        let storage = MemoryStorage::new();
        let mut controller = ItemController::open(setup_repo(&storage));

        assert_eq!(controller.add("   ").unwrap(), None);
        assert!(!controller.remove(42).unwrap());
        assert!(storage.raw("items").is_none());
    }

    #[test]
    fn test_controller_remove_twice() {
        let storage = MemoryStorage::new();
        let mut controller = ItemController::open(setup_repo(&storage));
        controller.add("Milk").unwrap();
        controller.add("Bread").unwrap();

        assert!(controller.remove(1).unwrap());
        assert!(!controller.remove(1).unwrap());
        assert_eq!(controller.items(), &[Item::new(2, "Bread")]);
    }

    #[test]
    fn test_controller_edit_flow() {
        let storage = MemoryStorage::new();
        let mut controller = ItemController::open(setup_repo(&storage));
        controller.add("Milk").unwrap();
        controller.add("Bread").unwrap();

        assert!(!controller.begin_edit(9));
        assert_eq!(controller.mode(), ViewMode::Adding);

        assert!(controller.begin_edit(1));
        assert_eq!(controller.edit_target(), Some(&Item::new(1, "Milk")));

        // Selecting another row re-targets the form
        assert!(controller.begin_edit(2));
        assert_eq!(controller.mode(), ViewMode::Editing(2));

        controller.cancel_edit();
        assert_eq!(controller.mode(), ViewMode::Adding);
        assert_eq!(controller.items(), &[Item::new(1, "Milk"), Item::new(2, "Bread")]);
    }

    #[test]
    fn test_controller_submit_edit_without_target() {
        let storage = MemoryStorage::new();
        let mut controller = ItemController::open(setup_repo(&storage));
        controller.add("Milk").unwrap();

        assert!(!controller.submit_edit("ignored").unwrap());
        assert_eq!(controller.items(), &[Item::new(1, "Milk")]);
    }

    #[test]
    fn test_controller_edit_allows_blank_name() {
        let storage = MemoryStorage::new();
        let mut controller = ItemController::open(setup_repo(&storage));
        controller.add("Milk").unwrap();

        controller.begin_edit(1);
        assert!(controller.submit_edit("").unwrap());
        assert_eq!(stored(&storage), vec![Item::new(1, "")]);
    }

    #[test]
    fn test_controller_delete_edit_target() {
        let storage = MemoryStorage::new();
        let mut controller = ItemController::open(setup_repo(&storage));
        controller.add("Milk").unwrap();
        controller.add("Bread").unwrap();

        controller.begin_edit(2);
        controller.remove(1).unwrap();
        assert_eq!(controller.mode(), ViewMode::Editing(2));

        controller.remove(2).unwrap();
        assert_eq!(controller.mode(), ViewMode::Adding);
        assert_eq!(controller.edit_target(), None);
    }

    #[test]
    fn test_controller_write_failure_keeps_change() {
        let storage = MemoryStorage::new();
        let mut controller = ItemController::open(setup_repo(&storage));
        controller.add("Milk").unwrap();

        storage.fail_writes("QuotaExceededError");
        let result = controller.add("Bread");
        assert!(matches!(result, Err(StorageError::Backend(_))));
        assert_eq!(controller.items().len(), 2);
        assert_eq!(stored(&storage), vec![Item::new(1, "Milk")]);

        storage.restore_writes();
        controller.add("Eggs").unwrap();
        assert_eq!(stored(&storage).len(), 3);
    }

    #[test]
    fn test_controller_dedupes_loaded_ids() {
        let storage = MemoryStorage::with_slot(
            "items",
            r#"[{"id":1,"name":"Milk"},{"id":1,"name":"Copy"},{"id":4,"name":"Eggs"}]"#,
        );
        let mut controller = ItemController::open(setup_repo(&storage));
        assert_eq!(controller.items(), &[Item::new(1, "Milk"), Item::new(4, "Eggs")]);
        assert_eq!(controller.add("Bread").unwrap().unwrap().id, 5);
    }

    #[test]
    fn test_storage_through_reference() {
        let storage = MemoryStorage::new();
        let by_ref: &MemoryStorage = &storage;
        by_ref.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), Some("v".to_string()));
    }
}
