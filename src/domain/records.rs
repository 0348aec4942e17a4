//! Records - Console Entity Types
//!
//! Row types for the management screens. Each one is keyed by its own
//! identifier field.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::entity::{Entity, Searchable, Sortable, contains_ignore_case};

/// A console user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub active: bool,
}

impl Entity for User {
    type Key = u64;

    fn key(&self) -> &u64 {
        &self.id
    }
}

impl Searchable for User {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.username, filter)
            || contains_ignore_case(&self.full_name, filter)
            || contains_ignore_case(&self.email, filter)
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "username" => self.username.cmp(&other.username),
            "fullName" => self.full_name.cmp(&other.full_name),
            "email" => self.email.cmp(&other.email),
            "active" => self.active.cmp(&other.active),
            _ => Ordering::Equal,
        }
    }
}

/// A supplier, keyed by vendor code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub vendor_code: String,
    pub name: String,
    pub city: String,
}

impl Entity for Vendor {
    type Key = String;

    fn key(&self) -> &String {
        &self.vendor_code
    }
}

impl Searchable for Vendor {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.vendor_code, filter)
            || contains_ignore_case(&self.name, filter)
            || contains_ignore_case(&self.city, filter)
    }
}

impl Sortable for Vendor {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "vendorCode" => self.vendor_code.cmp(&other.vendor_code),
            "name" => self.name.cmp(&other.name),
            "city" => self.city.cmp(&other.city),
            _ => Ordering::Equal,
        }
    }
}

/// A customer, keyed by customer code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub code: String,
    pub name: String,
    pub country: String,
}

impl Entity for Customer {
    type Key = String;

    fn key(&self) -> &String {
        &self.code
    }
}

impl Searchable for Customer {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.code, filter)
            || contains_ignore_case(&self.name, filter)
            || contains_ignore_case(&self.country, filter)
    }
}

impl Sortable for Customer {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "name" => self.name.cmp(&other.name),
            "country" => self.country.cmp(&other.country),
            _ => Ordering::Equal,
        }
    }
}
