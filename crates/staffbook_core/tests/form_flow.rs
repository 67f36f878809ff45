use chrono::NaiveDate;
use staffbook_core::{
    Department, EmployeeForm, EmployeeStore, FormError, FormField, FormMode, MemoryKeyValueStore,
    Route, RouteId, ValidationError,
};

fn seeded() -> EmployeeStore<MemoryKeyValueStore> {
    EmployeeStore::load(MemoryKeyValueStore::new(), "employees").unwrap()
}

fn fill_ann_lee(form: &mut EmployeeForm) {
    form.set(FormField::FirstName, "Ann");
    form.set(FormField::LastName, "Lee");
    form.set(FormField::Email, "a@x.com");
    form.set(FormField::Phone, "555");
    form.set(FormField::Department, "Sales");
    form.set(FormField::Position, "Rep");
    form.set(FormField::HireDate, "2024-01-01");
    form.set(FormField::Salary, "50000");
}

#[test]
fn create_submit_adds_record_and_navigates_to_list() {
    let mut store = seeded();
    let mut form = EmployeeForm::open(&store, None);
    assert_eq!(form.mode(), &FormMode::Create);
    fill_ann_lee(&mut form);

    let submission = form.submit(&mut store).unwrap();

    assert_eq!(submission.navigate_to, Route::EmployeeList);
    assert_eq!(store.len(), 6);
    let created = store.get_by_id(submission.employee_id.unwrap()).unwrap();
    assert_eq!(created.full_name(), "Ann Lee");
    assert_eq!(created.salary, 50_000.0);
    assert_eq!(created.department, Department::Sales);
    assert_eq!(created.address, None);
    assert!(form.error().is_none());
}

#[test]
fn missing_required_field_blocks_submit_without_touching_store() {
    let mut store = seeded();
    let before = store.employees().to_vec();
    let mut form = EmployeeForm::create();
    fill_ann_lee(&mut form);
    form.set(FormField::Phone, "");
    let values_before = form.values().clone();

    let err = form.submit(&mut store).unwrap_err();

    assert!(matches!(
        err,
        FormError::Validation(ValidationError::MissingFields(ref fields)) if fields == &[FormField::Phone]
    ));
    assert_eq!(store.employees(), before.as_slice());
    assert_eq!(form.values(), &values_before);
    assert_eq!(form.error(), Some("Please fill in all required fields."));
    assert_eq!(
        form.view().error.as_deref(),
        Some("Please fill in all required fields.")
    );
}

#[test]
fn edit_prefills_from_existing_record() {
    let store = seeded();
    let form = EmployeeForm::open(&store, Some(RouteId::from(1)));

    assert!(form.prefilled());
    let values = form.values();
    assert_eq!(values.first_name, "John");
    assert_eq!(values.department, "Engineering");
    assert_eq!(values.hire_date, "2022-01-15");
    assert_eq!(values.salary, "85000");
    assert_eq!(values.address, "123 Main St, City, State 12345");

    let view = form.view();
    assert_eq!(view.title, "Edit Employee");
    assert_eq!(view.submit_label, "Update Employee");
    assert!(view
        .department_options
        .iter()
        .any(|option| option.value == "Engineering" && option.selected));
}

#[test]
fn edit_submit_updates_record_in_place() {
    let mut store = seeded();
    let mut form = EmployeeForm::edit(&store, RouteId::from(3));
    form.set(FormField::Position, "Account Executive");
    form.set(FormField::Salary, "68000.5");
    form.set(FormField::Address, "  ");

    let submission = form.submit(&mut store).unwrap();

    assert_eq!(submission.employee_id, Some(3));
    assert_eq!(store.len(), 5);
    let updated = store.get_by_id(3).unwrap();
    assert_eq!(updated.position, "Account Executive");
    assert_eq!(updated.salary, 68_000.5);
    assert_eq!(updated.address, None);
    assert_eq!(updated.first_name, "Mike");
    assert_eq!(
        updated.hire_date,
        NaiveDate::from_ymd_opt(2023, 3, 10).unwrap()
    );
    assert_eq!(store.employees()[2].id, 3);
}

#[test]
fn edit_with_unknown_id_renders_blank_usable_form() {
    let mut store = seeded();
    let before = store.employees().to_vec();
    let mut form = EmployeeForm::edit(&store, RouteId::from(999));

    assert!(!form.prefilled());
    assert!(form.values().first_name.is_empty());
    assert_eq!(form.view().title, "Edit Employee");

    fill_ann_lee(&mut form);
    let submission = form.submit(&mut store).unwrap();
    assert_eq!(submission.navigate_to, Route::EmployeeList);
    assert_eq!(store.employees(), before.as_slice());
}

#[test]
fn invalid_hire_date_is_rejected() {
    let mut store = seeded();
    let mut form = EmployeeForm::create();
    fill_ann_lee(&mut form);
    form.set(FormField::HireDate, "01/02/2024");

    let err = form.submit(&mut store).unwrap_err();

    assert!(matches!(
        err,
        FormError::Validation(ValidationError::InvalidField {
            field: FormField::HireDate,
            ..
        })
    ));
    assert_eq!(store.len(), 5);
}
