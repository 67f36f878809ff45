use chrono::NaiveDate;
use staffbook_core::{
    aggregate_counts, Department, EmployeePatch, EmployeeStatus, EmployeeStore, KeyValueStore,
    LoadSource, MemoryKeyValueStore, NewEmployee,
};
use std::collections::HashSet;

fn seeded() -> EmployeeStore<MemoryKeyValueStore> {
    EmployeeStore::load(MemoryKeyValueStore::new(), "employees").unwrap()
}

fn ann_lee() -> NewEmployee {
    NewEmployee {
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        email: "a@x.com".to_string(),
        phone: "555".to_string(),
        department: Department::Sales,
        position: "Rep".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        salary: 50_000.0,
        address: None,
    }
}

fn stored_blob(store: &EmployeeStore<MemoryKeyValueStore>) -> serde_json::Value {
    let raw = store.storage().get("employees").unwrap().unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn empty_storage_is_seeded_and_persisted() {
    let store = seeded();

    assert_eq!(store.load_source(), LoadSource::SeededEmpty);
    assert_eq!(store.len(), 5);
    assert!(!store.is_empty());
    let blob = stored_blob(&store);
    assert_eq!(blob.as_array().unwrap().len(), 5);
    assert_eq!(blob[0]["firstName"], "John");
    assert_eq!(blob[0]["hireDate"], "2022-01-15");
    assert_eq!(blob[3]["department"], "HR");
    assert_eq!(blob[3]["status"], "inactive");
}

#[test]
fn seed_aggregates_match_sample_data() {
    let stats = aggregate_counts(seeded().employees());

    assert_eq!(stats.total, 5);
    assert_eq!(stats.active_count, 4);
    assert_eq!(stats.inactive_count, 1);
    assert_eq!(stats.total_salary, 375_000.0);
}

#[test]
fn malformed_blob_falls_back_to_seed_and_overwrites_it() {
    let kv = MemoryKeyValueStore::with_entry("employees", "{not json");
    let store = EmployeeStore::load(kv, "employees").unwrap();

    assert_eq!(store.load_source(), LoadSource::SeededCorrupt);
    assert_eq!(store.len(), 5);
    assert_eq!(stored_blob(&store).as_array().unwrap().len(), 5);
}

#[test]
fn stored_blob_with_missing_address_and_status_loads() {
    let blob = r#"[{
        "id": 9,
        "firstName": "Kim",
        "lastName": "Park",
        "email": "kim@x.com",
        "phone": "1",
        "department": "Design",
        "position": "Designer",
        "hireDate": "2020-02-29",
        "salary": 61000
    }]"#;
    let store =
        EmployeeStore::load(MemoryKeyValueStore::with_entry("employees", blob), "employees")
            .unwrap();

    assert_eq!(store.load_source(), LoadSource::Storage);
    let kim = store.get_by_id(9).unwrap();
    assert_eq!(kim.status, EmployeeStatus::Active);
    assert_eq!(kim.address, None);
    assert_eq!(kim.salary, 61_000.0);
}

#[test]
fn add_appends_active_record_with_exact_fields() {
    let mut store = seeded();

    let created = store.add(ann_lee()).unwrap();

    assert_eq!(store.len(), 6);
    assert_eq!(created.status, EmployeeStatus::Active);
    let loaded = store.get_by_id(created.id).unwrap();
    assert_eq!(loaded, &created);
    assert_eq!(loaded.first_name, "Ann");
    assert_eq!(loaded.department, Department::Sales);
    assert_eq!(loaded.hire_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(store.employees().last(), Some(&created));
    assert_eq!(stored_blob(&store).as_array().unwrap().len(), 6);
}

#[test]
fn added_ids_never_collide_even_with_a_frozen_clock() {
    let mut store =
        EmployeeStore::load_with_clock(MemoryKeyValueStore::new(), "employees", || 2_i64)
            .unwrap();

    for _ in 0..10 {
        let existing = store
            .employees()
            .iter()
            .map(|employee| employee.id)
            .collect::<HashSet<_>>();
        let created = store.add(ann_lee()).unwrap();
        assert!(!existing.contains(&created.id));
    }

    let ids = store
        .employees()
        .iter()
        .map(|employee| employee.id)
        .collect::<HashSet<_>>();
    assert_eq!(ids.len(), store.len());
}

#[test]
fn update_overlays_supplied_fields_only() {
    let mut store = seeded();
    let before = store.get_by_id(2).unwrap().clone();

    let patch = EmployeePatch {
        position: Some("Head of Marketing".to_string()),
        salary: Some(90_000.0),
        ..EmployeePatch::default()
    };
    store.update(2, &patch).unwrap();

    let mut expected = before;
    expected.position = "Head of Marketing".to_string();
    expected.salary = 90_000.0;
    assert_eq!(store.get_by_id(2), Some(&expected));
    assert_eq!(stored_blob(&store)[1]["position"], "Head of Marketing");
}

#[test]
fn update_of_unknown_id_is_a_noop() {
    let mut store = seeded();
    let before = store.employees().to_vec();

    let patch = EmployeePatch {
        first_name: Some("Nobody".to_string()),
        ..EmployeePatch::default()
    };
    store.update(404, &patch).unwrap();

    assert_eq!(store.employees(), before.as_slice());
}

#[test]
fn delete_removes_exactly_one_record() {
    let mut store = seeded();

    store.delete(3).unwrap();

    assert_eq!(store.len(), 4);
    assert!(store.get_by_id(3).is_none());
    let ids = store
        .employees()
        .iter()
        .map(|employee| employee.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2, 4, 5]);
}

#[test]
fn delete_of_unknown_id_leaves_collection_unchanged() {
    let mut store = seeded();
    let before = store.employees().to_vec();

    store.delete(12_345).unwrap();

    assert_eq!(store.employees(), before.as_slice());
}
