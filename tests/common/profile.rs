//! Account profile fixture with a structural validator and a lookup-backed
//! validator.

use std::time::{Duration, SystemTime};
use tokio_util::sync::CancellationToken;
use verifast::predicate::RangeExt;
use verifast::{ensure_active, Aborted, AsyncValidator, EmailLookup, ValidationResult, Validator};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
    pub address: Option<Address>,
    pub phone_numbers: Vec<String>,
    pub preferences: Option<Preferences>,
    pub registered_at: Option<SystemTime>,
    pub last_login_at: Option<SystemTime>,
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preferences {
    pub receive_newsletter: bool,
    pub marketing_opt_in: bool,
    pub preferred_language: String,
    pub timezone: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    pub order_id: u64,
    pub total_cents: i64,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderItem {
    pub name: String,
    pub quantity: i32,
    pub price_cents: i64,
}

impl Order {
    // Widened so extreme prices times quantities cannot overflow.
    fn items_sum_cents(&self) -> i128 {
        self.items
            .iter()
            .map(|item| i128::from(item.price_cents) * i128::from(item.quantity))
            .sum()
    }
}

pub fn valid_profile(email: &str) -> UserProfile {
    let now = SystemTime::now();
    let mut orders = vec![
        Order {
            order_id: 1001,
            total_cents: 0,
            items: vec![OrderItem {
                name: "Widget".to_string(),
                quantity: 2,
                price_cents: 1999,
            }],
        },
        Order {
            order_id: 1002,
            total_cents: 0,
            items: vec![OrderItem {
                name: "Gadget".to_string(),
                quantity: 1,
                price_cents: 4999,
            }],
        },
    ];
    for order in &mut orders {
        order.total_cents = i64::try_from(order.items_sum_cents()).unwrap_or(i64::MAX);
    }

    UserProfile {
        id: 42,
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        age: 34,
        address: Some(Address {
            street: "123 Main St".to_string(),
            city: "Metropolis".to_string(),
            state: "NY".to_string(),
            postal_code: "10001".to_string(),
            country: "US".to_string(),
        }),
        phone_numbers: vec!["+1-212-555-0101".to_string(), "+1-212-555-0199".to_string()],
        preferences: Some(Preferences {
            receive_newsletter: true,
            marketing_opt_in: false,
            preferred_language: "en".to_string(),
            timezone: "America/New_York".to_string(),
            tags: vec!["pro".to_string(), "beta".to_string(), "vip".to_string()],
        }),
        registered_at: Some(now - Duration::from_secs(30 * 24 * 3600)),
        last_login_at: Some(now - Duration::from_secs(15 * 60)),
        orders,
    }
}

pub fn invalid_profile(email: &str) -> UserProfile {
    UserProfile {
        id: 0,
        first_name: String::new(),
        last_name: " ".to_string(),
        email: email.to_string(),
        age: 10,
        address: Some(Address {
            street: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: "1".to_string(),
            country: String::new(),
        }),
        phone_numbers: vec!["not-a-number".to_string(), "123".to_string()],
        preferences: Some(Preferences {
            receive_newsletter: true,
            marketing_opt_in: true,
            preferred_language: "zz".to_string(),
            timezone: String::new(),
            tags: Vec::new(),
        }),
        registered_at: None,
        last_login_at: Some(SystemTime::now() - Duration::from_secs(365 * 24 * 3600)),
        orders: vec![Order {
            order_id: 0,
            total_cents: 100_000,
            items: vec![OrderItem {
                name: String::new(),
                quantity: 0,
                price_cents: -100,
            }],
        }],
    }
}

/// Structural checks for [`UserProfile`].
///
/// Bounded on purpose: only the first [`MAX_CHECKED_PHONES`] phone numbers
/// are checked and at most one phone error is reported; only the first order
/// is checked structurally (id, first item, total against the item sum).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileValidator;

pub const MAX_CHECKED_PHONES: usize = 3;
pub const MAX_EXPECTED_ORDERS: usize = 100;
const LANGUAGES: [&str; 4] = ["en", "es", "fr", "de"];

impl Validator<UserProfile> for ProfileValidator {
    fn validate(&self, instance: &UserProfile, result: &mut ValidationResult) {
        if instance.id == 0 {
            result.add_error("Id must not be empty.".to_string());
        }

        check_name(&instance.first_name, "FirstName", result);
        check_name(&instance.last_name, "LastName", result);

        if !looks_like_email(&instance.email) {
            result.add_error("Email is invalid.".to_string());
        }

        if !instance.age.is_in_range(13, 120) {
            result.add_error("Age must be between 13 and 120.".to_string());
        } else if instance.age < 18 {
            result.add_warning("Age is under 18.".to_string());
        }

        match &instance.address {
            None => result.add_error("Address is required.".to_string()),
            Some(address) => check_address(address, result),
        }

        if instance
            .phone_numbers
            .iter()
            .take(MAX_CHECKED_PHONES)
            .any(|phone| !looks_like_phone(phone))
        {
            result.add_error("Phone number is invalid.".to_string());
        }

        match &instance.preferences {
            None => result.add_error("Preferences are required.".to_string()),
            Some(prefs) => {
                if prefs.timezone.trim().is_empty() {
                    result.add_error("Timezone is required.".to_string());
                }
                if !LANGUAGES.contains(&prefs.preferred_language.as_str()) {
                    result.add_error("PreferredLanguage not supported.".to_string());
                }
            }
        }

        match instance.registered_at {
            None => result.add_error("RegisteredAt is required.".to_string()),
            Some(registered) => {
                if instance.last_login_at.is_some_and(|last| last < registered) {
                    result.add_error("LastLoginAt must be >= RegisteredAt.".to_string());
                }
            }
        }

        if instance.orders.len() > MAX_EXPECTED_ORDERS {
            result.add_warning("Unusually high number of orders.".to_string());
        }
        if let Some(order) = instance.orders.first() {
            check_first_order(order, result);
        }
    }
}

fn check_name(value: &str, field: &str, result: &mut ValidationResult) {
    if value.trim().is_empty() {
        result.add_error(format!("{} is required.", field));
    } else if value.chars().count() > 100 {
        result.add_error(format!("{} too long.", field));
    }
}

fn check_address(address: &Address, result: &mut ValidationResult) {
    if address.street.trim().is_empty() {
        result.add_error("Street is required.".to_string());
    }
    if address.city.trim().is_empty() {
        result.add_error("City is required.".to_string());
    }
    if address.country.trim().is_empty() {
        result.add_error("Country is required.".to_string());
    }
    if address.postal_code.trim().chars().count() < 4 {
        result.add_error("PostalCode is invalid.".to_string());
    }
}

fn check_first_order(order: &Order, result: &mut ValidationResult) {
    if order.order_id == 0 {
        result.add_error("OrderId must not be empty.".to_string());
    }
    let Some(item) = order.items.first() else {
        result.add_error("Order must have at least one item.".to_string());
        return;
    };
    if item.name.trim().is_empty() {
        result.add_error("Order item name is required.".to_string());
    }
    if item.quantity <= 0 {
        result.add_error("Order item quantity must be positive.".to_string());
    }
    if item.price_cents < 0 {
        result.add_error("Order item price must be non-negative.".to_string());
    }
    if order.total_cents != 0 && i128::from(order.total_cents) != order.items_sum_cents() {
        result.add_warning("Order total doesn't match sum of items.".to_string());
    }
}

fn looks_like_email(email: &str) -> bool {
    if email.trim().is_empty() {
        return false;
    }
    let Some(at) = email.find('@') else {
        return false;
    };
    if at == 0 || at + 3 >= email.len() {
        return false;
    }
    email[at + 1..].rfind('.').is_some_and(|dot| dot > 0)
}

fn looks_like_phone(phone: &str) -> bool {
    phone.chars().filter(|c| c.is_ascii_digit()).count() >= 10
}

/// Lookup-backed checks for [`UserProfile`].
///
/// An already-cancelled signal aborts before anything else. A blank email
/// then fails fast with a single finding and no lookups. Otherwise
/// the domain check runs first, then the uniqueness check, then the inline
/// `registered_at` and minimum-age checks. Findings accumulate across all of
/// them.
#[derive(Debug)]
pub struct ProfileLookupValidator<L> {
    lookup: L,
}

impl<L: EmailLookup> ProfileLookupValidator<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }
}

impl<'a, L: EmailLookup> AsyncValidator<&'a UserProfile> for ProfileLookupValidator<L> {
    async fn validate_async(
        &self,
        instance: &'a UserProfile,
        cancel: &CancellationToken,
    ) -> Result<ValidationResult, Aborted> {
        ensure_active(cancel)?;
        let mut result = ValidationResult::new();

        if instance.email.trim().is_empty() {
            result.add_error("Email is required.".to_string());
            return Ok(result);
        }

        ensure_active(cancel)?;
        if !self.lookup.is_domain_allowed(&instance.email, cancel).await? {
            result.add_error("Email domain is not allowed.".to_string());
        }

        ensure_active(cancel)?;
        if !self.lookup.is_email_unique(&instance.email, cancel).await? {
            result.add_error("Email is already taken.".to_string());
        }
        ensure_active(cancel)?;

        if instance.registered_at.is_none() {
            result.add_error("RegisteredAt is required.".to_string());
        }
        if instance.age < 13 {
            result.add_error("Age must be at least 13.".to_string());
        }

        Ok(result)
    }
}
