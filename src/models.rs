//! Frontend Models
//!
//! Data structures matching the restaurant REST payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Restaurant record (matches backend)
///
/// `ID` is assigned by the backend. The backend may send it as a number,
/// so decoding accepts either form and keeps the decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(rename = "ID", default, deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub location: String,
}

impl Restaurant {
    /// The backend-assigned ID, if this record has been saved.
    pub fn saved_id(&self) -> Option<&str> {
        if self.id.is_empty() {
            None
        } else {
            Some(&self.id)
        }
    }

    /// Mutable fields only, as sent in PUT bodies and used as a form draft.
    pub fn to_input(&self) -> RestaurantCreateInput {
        RestaurantCreateInput {
            name: self.name.clone(),
            location: self.location.clone(),
            cuisine: self.cuisine.clone(),
        }
    }
}

/// Restaurant without `ID`: creation/update payload and form draft
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RestaurantCreateInput {
    pub name: String,
    pub location: String,
    pub cuisine: String,
}

/// Editable draft fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Location,
    Cuisine,
}

impl DraftField {
    /// JSON key and form input name
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Location => "location",
            DraftField::Cuisine => "cuisine",
        }
    }
}

impl RestaurantCreateInput {
    /// Seed a draft from an existing restaurant, or empty strings.
    pub fn seeded(restaurant: Option<&Restaurant>) -> Self {
        restaurant.map(Restaurant::to_input).unwrap_or_default()
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Location => self.location = value,
            DraftField::Cuisine => self.cuisine = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Location => &self.location,
            DraftField::Cuisine => &self.cuisine,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
    Null(()),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
        RawId::Null(()) => String::new(),
    })
}
