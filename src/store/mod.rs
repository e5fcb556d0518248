//! Per-user persistence.
//!
//! A store keeps one [`UserData`] document per user. Writes are whole
//! document, last write wins. The list helpers are read-modify-write on top
//! of [`UserStore::load`] and [`UserStore::save`].

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use chrono::Utc;
use thiserror::Error;

use crate::model::{upsert_marble, CollectedColor, DayMarble, UserData, UserId};

/// Errors that can occur while reading or writing user documents.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error on the backing storage
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document could not be parsed or serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Operation needs an existing document
    #[error("No data stored for user {0}")]
    UnknownUser(String),
}

/// Load and save user documents.
pub trait UserStore {
    /// Stored document, or `None` if the user has none yet.
    fn load(&self, user: &UserId) -> Result<Option<UserData>, StoreError>;

    /// Replace the user's document.
    fn save(&mut self, user: &UserId, data: &UserData) -> Result<(), StoreError>;

    /// Upsert one day's marble, creating the document if needed.
    fn update_marble(&mut self, user: &UserId, marble: DayMarble) -> Result<(), StoreError> {
        let mut data = self.load(user)?.unwrap_or_default();
        upsert_marble(&mut data.marbles, marble);
        self.save(user, &stamped(data))
    }

    /// Append a collected color, creating the document if needed.
    fn add_collected_color(
        &mut self,
        user: &UserId,
        color: CollectedColor,
    ) -> Result<(), StoreError> {
        let mut data = self.load(user)?.unwrap_or_default();
        data.collected_colors.push(color);
        self.save(user, &stamped(data))
    }

    /// Drop the collected color at `index`. Missing documents and indices
    /// are left alone.
    fn remove_collected_color(&mut self, user: &UserId, index: usize) -> Result<(), StoreError> {
        let Some(mut data) = self.load(user)? else {
            log::debug!("No document for {}, nothing to remove", user);
            return Ok(());
        };
        if index < data.collected_colors.len() {
            data.collected_colors.remove(index);
        }
        self.save(user, &stamped(data))
    }

    /// Empty the collected colors of an existing document.
    fn clear_collected_colors(&mut self, user: &UserId) -> Result<(), StoreError> {
        let mut data = self
            .load(user)?
            .ok_or_else(|| StoreError::UnknownUser(user.id.clone()))?;
        data.collected_colors.clear();
        self.save(user, &stamped(data))
    }
}

/// Mark a document as written now.
pub fn stamped(mut data: UserData) -> UserData {
    data.updated_at = Some(Utc::now());
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use huestep_canvas::ImageSource;
    use huestep_color::Color;

    fn user() -> UserId {
        UserId::new("u1", "walker@example.com")
    }

    fn marble(day: u32, steps: u32) -> DayMarble {
        DayMarble {
            date: NaiveDate::from_ymd_opt(2025, 10, day).unwrap(),
            colors: vec![Color::from_rgb(0xF7, 0x7F, 0x00)],
            steps,
            distance: 0.0,
        }
    }

    fn collected(hex: &str) -> CollectedColor {
        CollectedColor::new(Color::parse_lossy(hex), ImageSource::from_path("p.jpg"))
    }

    #[test]
    fn test_update_marble_creates_document() {
        let mut store = MemoryStore::new();
        store.update_marble(&user(), marble(18, 10)).unwrap();
        let data = store.load(&user()).unwrap().unwrap();
        assert_eq!(data.marbles.len(), 1);
        assert!(data.collected_colors.is_empty());
        assert!(data.updated_at.is_some());
    }

    #[test]
    fn test_update_marble_upserts() {
        let mut store = MemoryStore::new();
        store.update_marble(&user(), marble(17, 1)).unwrap();
        store.update_marble(&user(), marble(18, 2)).unwrap();
        store.update_marble(&user(), marble(17, 3)).unwrap();
        let data = store.load(&user()).unwrap().unwrap();
        let steps: Vec<_> = data.marbles.iter().map(|m| m.steps).collect();
        assert_eq!(steps, [2, 3]);
    }

    #[test]
    fn test_collected_color_lifecycle() {
        let mut store = MemoryStore::new();
        store.add_collected_color(&user(), collected("#FF0000")).unwrap();
        store.add_collected_color(&user(), collected("#00FF00")).unwrap();
        store.add_collected_color(&user(), collected("#0000FF")).unwrap();

        store.remove_collected_color(&user(), 1).unwrap();
        store.remove_collected_color(&user(), 10).unwrap();
        let data = store.load(&user()).unwrap().unwrap();
        let hexes: Vec<_> = data.collected_colors.iter().map(|c| c.color.to_string()).collect();
        assert_eq!(hexes, ["#FF0000", "#0000FF"]);

        store.clear_collected_colors(&user()).unwrap();
        assert!(store.load(&user()).unwrap().unwrap().collected_colors.is_empty());
    }

    #[test]
    fn test_remove_without_document_is_noop() {
        let mut store = MemoryStore::new();
        store.remove_collected_color(&user(), 0).unwrap();
        assert!(store.load(&user()).unwrap().is_none());
    }

    #[test]
    fn test_clear_without_document_fails() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.clear_collected_colors(&user()),
            Err(StoreError::UnknownUser(id)) if id == "u1"
        ));
    }
}
