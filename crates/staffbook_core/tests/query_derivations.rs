use chrono::NaiveDate;
use staffbook_core::repo::seed::seed_employees;
use staffbook_core::{
    aggregate_counts, distinct_departments, filter_employees, recent_hires, Department,
    DepartmentFilter, Employee, EmployeeFilter, EmployeeStatus, StatusFilter,
};

fn ids(employees: &[&Employee]) -> Vec<i64> {
    employees.iter().map(|employee| employee.id).collect()
}

fn hire(id: i64, date: (i32, u32, u32), status: EmployeeStatus) -> Employee {
    let mut employee = seed_employees()[0].clone();
    employee.id = id;
    employee.hire_date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
    employee.status = status;
    employee
}

#[test]
fn unfiltered_returns_full_collection_in_order() {
    let employees = seed_employees();
    let filtered = filter_employees(&employees, &EmployeeFilter::default());
    assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5]);
}

#[test]
fn search_is_case_insensitive_across_name_email_and_position() {
    let employees = seed_employees();

    let by_last_name = EmployeeFilter::new("BROWN", StatusFilter::All, DepartmentFilter::All);
    assert_eq!(ids(&filter_employees(&employees, &by_last_name)), vec![5]);

    let by_email = EmployeeFilter::new("jane.smith@", StatusFilter::All, DepartmentFilter::All);
    assert_eq!(ids(&filter_employees(&employees, &by_email)), vec![2]);

    let by_position = EmployeeFilter::new("developer", StatusFilter::All, DepartmentFilter::All);
    assert_eq!(ids(&filter_employees(&employees, &by_position)), vec![1, 5]);

    let by_phone = EmployeeFilter::new("555", StatusFilter::All, DepartmentFilter::All);
    assert!(filter_employees(&employees, &by_phone).is_empty());
}

#[test]
fn criteria_are_combined_conjunctively() {
    let mut employees = seed_employees();
    employees[4].status = EmployeeStatus::Inactive;

    let filter = EmployeeFilter::new(
        "developer",
        StatusFilter::Only(EmployeeStatus::Active),
        DepartmentFilter::Only(Department::Engineering),
    );
    let filtered = filter_employees(&employees, &filter);

    assert_eq!(ids(&filtered), vec![1]);
    assert!(filtered.iter().all(|employee| filter.matches(employee)));
}

#[test]
fn department_filter_excludes_other_departments() {
    let employees = seed_employees();
    let filter = EmployeeFilter::new("", StatusFilter::All, DepartmentFilter::Only(Department::Hr));
    assert_eq!(ids(&filter_employees(&employees, &filter)), vec![4]);
    assert!(filter.is_active());
    assert!(!EmployeeFilter::default().is_active());
}

#[test]
fn distinct_departments_follow_first_occurrence() {
    let employees = seed_employees();
    assert_eq!(
        distinct_departments(&employees),
        vec![
            Department::Engineering,
            Department::Marketing,
            Department::Sales,
            Department::Hr,
        ]
    );
}

#[test]
fn aggregate_counts_hold_invariants() {
    let mut employees = seed_employees();
    employees.push(hire(6, (2020, 1, 1), EmployeeStatus::Inactive));
    employees[5].salary = 1_234.5;

    let stats = aggregate_counts(&employees);

    assert_eq!(stats.active_count + stats.inactive_count, stats.total);
    let expected_salary = employees.iter().map(|employee| employee.salary).sum::<f64>();
    assert_eq!(stats.total_salary, expected_salary);
    let engineering = stats
        .counts_by_department
        .iter()
        .find(|entry| entry.department == Department::Engineering)
        .unwrap();
    assert_eq!(engineering.count, 3);
    assert_eq!(stats.counts_by_department[0].department, Department::Engineering);
}

#[test]
fn aggregate_counts_of_empty_collection_are_zero() {
    let stats = aggregate_counts(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.total_salary, 0.0);
    assert!(stats.counts_by_department.is_empty());
}

#[test]
fn recent_hires_are_active_newest_first() {
    let employees = seed_employees();

    let recent = recent_hires(&employees, 5);

    assert_eq!(ids(&recent), vec![5, 3, 1, 2]);
    assert_eq!(ids(&recent_hires(&employees, 5)), ids(&recent));
}

#[test]
fn recent_hires_compare_dates_not_strings_and_cap_results() {
    let employees = vec![
        hire(1, (2023, 9, 1), EmployeeStatus::Active),
        hire(2, (2023, 10, 1), EmployeeStatus::Active),
        hire(3, (2023, 10, 1), EmployeeStatus::Active),
        hire(4, (2024, 1, 1), EmployeeStatus::Inactive),
        hire(5, (2022, 12, 31), EmployeeStatus::Active),
        hire(6, (2021, 1, 1), EmployeeStatus::Active),
        hire(7, (2020, 1, 1), EmployeeStatus::Active),
    ];

    let recent = recent_hires(&employees, 5);

    assert_eq!(ids(&recent), vec![2, 3, 1, 5, 6]);
}
