//! Meeting room records and the built-in room catalog.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

/// A bookable meeting room.
///
/// Only `image` and `video` are meant to change after creation; the
/// repository upserts whole records, so edits go through
/// [`Room::with_media`].
///
/// # Examples
///
/// ```
/// use roombook::Room;
///
/// let room = Room::new("9", "Room 9.1", 6).unwrap()
///     .with_equipment(["TV", "Whiteboard"]);
/// assert_eq!(room.capacity(), 6);
/// assert!(room.equipment().contains("TV"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: String,
    name: String,
    capacity: u32,
    equipment: BTreeSet<String>,
    image: String,
    video: Option<String>,
}

impl Room {
    /// Creates a room with no equipment and no media.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or name is empty after trimming, or if the
    /// capacity is zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        capacity: u32,
    ) -> Result<Self, ValidationError> {
        let id = id.into().trim().to_string();
        let name = name.into().trim().to_string();

        if id.is_empty() {
            return Err(ValidationError::new("id", "room id must be non-empty"));
        }
        if name.is_empty() {
            return Err(ValidationError::new("name", "room name must be non-empty"));
        }
        if capacity == 0 {
            return Err(ValidationError::new(
                "capacity",
                "room capacity must be positive",
            ));
        }

        Ok(Self {
            id,
            name,
            capacity,
            equipment: BTreeSet::new(),
            image: String::new(),
            video: None,
        })
    }

    /// Sets the equipment list. Duplicates collapse.
    #[must_use]
    pub fn with_equipment<I, S>(mut self, equipment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equipment = equipment.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the image and video URIs.
    #[must_use]
    pub fn with_media(mut self, image: impl Into<String>, video: Option<String>) -> Self {
        self.image = image.into();
        self.video = video.filter(|v| !v.trim().is_empty());
        self
    }

    /// Returns the room id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the maximum number of attendees.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the equipment set.
    #[must_use]
    pub const fn equipment(&self) -> &BTreeSet<String> {
        &self.equipment
    }

    /// Returns the image URI.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns the optional video URI.
    #[must_use]
    pub fn video(&self) -> Option<&str> {
        self.video.as_deref()
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// The rooms seeded into a freshly created store.
#[must_use]
pub fn default_catalog() -> Vec<Room> {
    const CATALOG: [(&str, &str, u32, &[&str], &str); 4] = [
        (
            "1",
            "Room 3.1",
            12,
            &["TV", "Whiteboard", "Video Conference"],
            "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&q=80&w=1200",
        ),
        (
            "2",
            "Room 3.2",
            4,
            &["TV", "Whiteboard"],
            "https://images.unsplash.com/photo-1497366811353-6870744d04b2?auto=format&fit=crop&q=80&w=1200",
        ),
        (
            "3",
            "Room 3.3",
            20,
            &["Projector", "Sound System", "Video Conference"],
            "https://images.unsplash.com/photo-1577412647305-991150c7d163?auto=format&fit=crop&q=80&w=1200",
        ),
        (
            "4",
            "Room 1.1",
            8,
            &["TV", "Whiteboard", "Video Conference"],
            "https://images.unsplash.com/photo-1497366754035-f200968a6e72?auto=format&fit=crop&q=80&w=1200",
        ),
    ];

    CATALOG
        .iter()
        .map(|(id, name, capacity, equipment, image)| Room {
            id: (*id).to_string(),
            name: (*name).to_string(),
            capacity: *capacity,
            equipment: equipment.iter().map(|e| (*e).to_string()).collect(),
            image: (*image).to_string(),
            video: None,
        })
        .collect()
}
