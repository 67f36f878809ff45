//! Sample records used when storage holds no readable collection.

use crate::model::employee::{Department, Employee, EmployeeStatus};
use chrono::NaiveDate;

struct SeedRow {
    id: i64,
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone: &'static str,
    department: Department,
    position: &'static str,
    hire_date: (i32, u32, u32),
    salary: f64,
    status: EmployeeStatus,
    address: &'static str,
}

const SEED_ROWS: [SeedRow; 5] = [
    SeedRow {
        id: 1,
        first_name: "John",
        last_name: "Doe",
        email: "john.doe@company.com",
        phone: "+1 (555) 123-4567",
        department: Department::Engineering,
        position: "Senior Developer",
        hire_date: (2022, 1, 15),
        salary: 85_000.0,
        status: EmployeeStatus::Active,
        address: "123 Main St, City, State 12345",
    },
    SeedRow {
        id: 2,
        first_name: "Jane",
        last_name: "Smith",
        email: "jane.smith@company.com",
        phone: "+1 (555) 234-5678",
        department: Department::Marketing,
        position: "Marketing Manager",
        hire_date: (2021, 8, 20),
        salary: 75_000.0,
        status: EmployeeStatus::Active,
        address: "456 Oak Ave, City, State 12345",
    },
    SeedRow {
        id: 3,
        first_name: "Mike",
        last_name: "Johnson",
        email: "mike.johnson@company.com",
        phone: "+1 (555) 345-6789",
        department: Department::Sales,
        position: "Sales Representative",
        hire_date: (2023, 3, 10),
        salary: 65_000.0,
        status: EmployeeStatus::Active,
        address: "789 Pine Rd, City, State 12345",
    },
    SeedRow {
        id: 4,
        first_name: "Sarah",
        last_name: "Williams",
        email: "sarah.williams@company.com",
        phone: "+1 (555) 456-7890",
        department: Department::Hr,
        position: "HR Specialist",
        hire_date: (2022, 11, 5),
        salary: 70_000.0,
        status: EmployeeStatus::Inactive,
        address: "321 Elm St, City, State 12345",
    },
    SeedRow {
        id: 5,
        first_name: "David",
        last_name: "Brown",
        email: "david.brown@company.com",
        phone: "+1 (555) 567-8901",
        department: Department::Engineering,
        position: "Frontend Developer",
        hire_date: (2023, 6, 15),
        salary: 80_000.0,
        status: EmployeeStatus::Active,
        address: "654 Maple Dr, City, State 12345",
    },
];

/// Returns the fixed five-record sample collection.
pub fn seed_employees() -> Vec<Employee> {
    SEED_ROWS
        .iter()
        .map(|row| {
            let (year, month, day) = row.hire_date;
            Employee {
                id: row.id,
                first_name: row.first_name.to_string(),
                last_name: row.last_name.to_string(),
                email: row.email.to_string(),
                phone: row.phone.to_string(),
                department: row.department,
                position: row.position.to_string(),
                hire_date: NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date"),
                salary: row.salary,
                status: row.status,
                address: Some(row.address.to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::seed_employees;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let seed = seed_employees();
        let ids = seed.iter().map(|employee| employee.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), seed.len());
    }
}
