use super::*;
use crate::config::ConfigError;
use crate::record::RecordError;
use crate::storage::StorageError;
use std::collections::HashSet;

/// Two pages of two records each
fn small_config() -> TableConfig {
    TableConfig {
        page_size: ROW_SIZE * 2 + 7,
        max_pages: 2,
        on_overflow: OverflowPolicy::Reject,
    }
}

fn setup_small_table() -> Table {
    Table::new(&small_config()).unwrap()
}

fn user(id: i64) -> Record {
    Record::new(id, format!("user{}", id), format!("user{}@x.com", id))
}

#[test]
fn test_new_table_is_empty() {
    let table = Table::new(&TableConfig::default()).unwrap();
    assert_eq!(table.num_rows(), 0);
    assert_eq!(table.rows_per_page(), 13);
    assert_eq!(table.max_rows(), 1300);
    assert_eq!(table.allocated_pages(), 0);
    assert!(!table.is_full());
    assert!(table.select().unwrap().is_empty());
}

#[test]
fn test_invalid_config() {
    let config = TableConfig {
        page_size: ROW_SIZE - 1,
        ..TableConfig::default()
    };
    let result = Table::new(&config);
    assert!(matches!(
        result,
        Err(TableError::Config(ConfigError::PageTooSmall { .. }))
    ));
}

#[test]
fn test_capacity_overflow_config() {
    let config = TableConfig {
        max_pages: usize::MAX,
        ..TableConfig::default()
    };
    assert!(matches!(
        Table::new(&config),
        Err(TableError::Config(ConfigError::TooManyRows { .. }))
    ));
}

#[test]
fn test_insert_and_scan_in_order() {
    let mut table = Table::new(&TableConfig::default()).unwrap();
    let records: Vec<Record> = (1..=30).map(user).collect();

    for record in &records {
        table.insert(record).unwrap();
    }

    assert_eq!(table.num_rows(), 30);
    assert_eq!(table.select().unwrap(), records);
    // 30 rows at 13 per page span three pages
    assert_eq!(table.allocated_pages(), 3);
}

#[test]
fn test_insert_returns_slot() {
    let mut table = setup_small_table();

    assert_eq!(table.insert(&user(1)).unwrap(), RecordId::new(0, 0));
    assert_eq!(table.insert(&user(2)).unwrap(), RecordId::new(0, 1));
    assert_eq!(table.insert(&user(3)).unwrap(), RecordId::new(1, 0));
    assert_eq!(table.allocated_pages(), 2);
}

#[test]
fn test_pages_allocated_lazily() {
    let mut table = setup_small_table();
    assert_eq!(table.allocated_pages(), 0);

    table.insert(&user(1)).unwrap();
    assert_eq!(table.allocated_pages(), 1);

    table.insert(&user(2)).unwrap();
    assert_eq!(table.allocated_pages(), 1);

    table.insert(&user(3)).unwrap();
    assert_eq!(table.allocated_pages(), 2);
}

#[test]
fn test_capacity_boundary() {
    let mut table = setup_small_table();
    assert_eq!(table.max_rows(), 4);

    for id in 1..=4 {
        table.insert(&user(id)).unwrap();
    }
    assert!(table.is_full());
    let before = table.select().unwrap();

    let result = table.insert(&user(5));
    assert!(matches!(result, Err(TableError::Full { max_rows: 4 })));
    assert!(result.unwrap_err().is_recoverable());

    // Rejected insert leaves the table unchanged
    assert_eq!(table.num_rows(), 4);
    assert_eq!(table.select().unwrap(), before);
    assert_eq!(before, (1..=4).map(user).collect::<Vec<_>>());

    // Still full on later attempts
    assert!(matches!(
        table.insert(&user(6)),
        Err(TableError::Full { .. })
    ));
}

#[test]
fn test_default_capacity_boundary() {
    let mut table = Table::new(&TableConfig::default()).unwrap();
    for id in 0..1300 {
        table.insert(&user(id)).unwrap();
    }
    assert_eq!(table.allocated_pages(), 100);
    assert!(matches!(
        table.insert(&user(1300)),
        Err(TableError::Full { max_rows: 1300 })
    ));
    assert_eq!(table.scan().count(), 1300);
}

#[test]
fn test_stored_rows_live_on_allocated_pages() {
    let mut table = Table::new(&TableConfig::default()).unwrap();
    for id in 0..40 {
        table.insert(&user(id)).unwrap();
    }
    assert_eq!(table.allocated_pages(), 4);

    for index in 0..table.num_rows() {
        let rid = table.row_slot(index);
        assert!(
            table.pages.is_allocated(rid.page_id),
            "row {} maps to unallocated page {}",
            index,
            rid.page_id
        );
    }

    // First unused page stays untouched by scans
    table.select().unwrap();
    let next_page = table.row_slot(table.num_rows() + 13).page_id;
    assert!(!table.pages.is_allocated(next_page));
    assert_eq!(table.allocated_pages(), 4);
}

#[test]
fn test_scan_is_repeatable() {
    let mut table = setup_small_table();
    table.insert(&user(1)).unwrap();
    table.insert(&user(2)).unwrap();
    table.insert(&user(3)).unwrap();

    let first = table.select().unwrap();
    let second = table.select().unwrap();
    assert_eq!(first, second);
    assert_eq!(table.scan().len(), 3);
}

#[test]
fn test_scan_sees_later_inserts() {
    let mut table = setup_small_table();
    table.insert(&user(1)).unwrap();
    assert_eq!(table.select().unwrap().len(), 1);

    table.insert(&user(2)).unwrap();
    assert_eq!(table.select().unwrap(), vec![user(1), user(2)]);
}

#[test]
fn test_addressing_is_unique_and_in_bounds() {
    let table = Table::new(&TableConfig::default()).unwrap();
    let mut seen = HashSet::new();

    for index in 0..table.max_rows() {
        let rid = table.row_slot(index);
        assert!(rid.page_id < table.max_pages());
        assert!(rid.slot_id < table.rows_per_page());
        assert_eq!(rid.page_id * table.rows_per_page() + rid.slot_id, index);
        assert!(seen.insert(rid), "duplicate slot for index {}", index);
    }
}

#[test]
fn test_get_by_index() {
    let mut table = setup_small_table();
    table.insert(&user(10)).unwrap();
    table.insert(&user(20)).unwrap();
    table.insert(&user(30)).unwrap();

    assert_eq!(table.get(2).unwrap(), user(30));
    assert!(matches!(
        table.get(3),
        Err(TableError::RowOutOfRange {
            index: 3,
            num_rows: 3
        })
    ));
}

#[test]
fn test_oversized_field_rejected() {
    let mut table = setup_small_table();
    let record = Record::new(1, "n".repeat(33), "a@b");

    let err = table.insert(&record).unwrap_err();
    assert!(matches!(
        err,
        TableError::Record(RecordError::FieldTooLong { field: "name", .. })
    ));
    assert!(err.is_recoverable());
    assert_eq!(table.num_rows(), 0);
    assert_eq!(table.allocated_pages(), 0);
}

#[test]
fn test_oversized_field_truncated() {
    let config = TableConfig {
        on_overflow: OverflowPolicy::Truncate,
        ..small_config()
    };
    let mut table = Table::new(&config).unwrap();
    table.insert(&Record::new(1, "n".repeat(40), "a@b")).unwrap();

    let stored = table.get(0).unwrap();
    assert_eq!(stored.name, "n".repeat(32));
    assert_eq!(stored.email, "a@b");
}

#[test]
fn test_storage_errors_are_fatal() {
    let err = TableError::Storage(StorageError::PageOutOfBounds {
        page_id: 100,
        max_pages: 100,
    });
    assert!(!err.is_recoverable());

    let err = TableError::Record(RecordError::Deserialization("bad".into()));
    assert!(!err.is_recoverable());
}
