use super::aggregate::{Customer, CustomerId};
use crate::domain::common::{Address, AggregateId};

const CUSTOMERS: &[(&str, &str, &str, &str, &str, &str, &str, &str)] = &[
    (
        "9bd4fc01-f24e-42c8-8ca1-b7d619427bb1",
        "John Doe",
        "john.doe@example.com",
        "1234567890",
        "123 Main St",
        "Anytown",
        "CA",
        "12345",
    ),
    (
        "2c6f4c01-f24e-42c8-8ca1-b7d619427bb2",
        "Jane Smith",
        "jane.smith@example.com",
        "2345678901",
        "456 Oak St",
        "Othertown",
        "TX",
        "23456",
    ),
    (
        "3e7f4c01-f24e-42c8-8ca1-b7d619427bb3",
        "Alice Johnson",
        "alice.johnson@example.com",
        "3456789012",
        "789 Pine St",
        "Sometown",
        "NY",
        "34567",
    ),
    (
        "4a8f4c01-f24e-42c8-8ca1-b7d619427bb4",
        "Bob Brown",
        "bob.brown@example.com",
        "4567890123",
        "101 Maple Ave",
        "Smalltown",
        "FL",
        "45678",
    ),
    (
        "5b9f4c01-f24e-42c8-8ca1-b7d619427bb5",
        "Carol White",
        "carol.white@example.com",
        "5678901234",
        "202 Elm St",
        "Bigcity",
        "IL",
        "56789",
    ),
];

/// Customers loaded at startup
pub fn seed_customers() -> Vec<Customer> {
    CUSTOMERS
        .iter()
        .map(|&(id, name, email, phone, street, city, state, zip)| Customer {
            id: CustomerId::from_string(id),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: Address {
                addressline1: street.to_string(),
                addressline2: None,
                city: city.to_string(),
                state: state.to_string(),
                zip: zip.to_string(),
                country: "USA".to_string(),
            },
        })
        .collect()
}
