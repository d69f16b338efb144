//! Room repository.

use std::collections::BTreeSet;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::Room;

use super::connection::Database;
use super::schema::UPSERT_ROOM;

const SELECT_ROOMS: &str = r"
    SELECT id, name, capacity, equipment, image, video
    FROM rooms
    ORDER BY id
";

const SELECT_ROOM: &str = r"
    SELECT id, name, capacity, equipment, image, video
    FROM rooms
    WHERE id = ?
";

/// Deserializes a room from a row of `id, name, capacity, equipment, image, video`.
fn row_to_room(row: &rusqlite::Row<'_>) -> rusqlite::Result<Room> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let capacity: u32 = row.get(2)?;
    let equipment_json: String = row.get(3)?;
    let image: String = row.get(4)?;
    let video: Option<String> = row.get(5)?;

    let equipment: BTreeSet<String> = serde_json::from_str(&equipment_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Room::new(id, name, capacity)
        .map(|room| room.with_equipment(equipment).with_media(image, video))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

impl Database {
    /// Lists every room, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(SELECT_ROOMS)?;
        let rooms = stmt
            .query_map([], row_to_room)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rooms)
    }

    /// Looks up a room by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. A missing room is `Ok(None)`.
    pub fn get_room(conn: &Connection, id: &str) -> Result<Option<Room>> {
        Ok(conn.query_row(SELECT_ROOM, [id], row_to_room).optional()?)
    }

    /// Inserts a room or replaces the record with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or the upsert fails.
    pub fn put_room(&mut self, room: &Room) -> Result<()> {
        let tx = self.begin_transaction()?;
        Self::put_room_simple(&tx, room)?;
        tx.commit()?;
        log::debug!("stored room {room}");
        Ok(())
    }

    /// Upserts a room using an existing connection or transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the upsert fails.
    pub fn put_room_simple(conn: &Connection, room: &Room) -> Result<()> {
        let equipment = serde_json::to_string(room.equipment()).map_err(|e| Error::Validation {
            field: "equipment".into(),
            message: e.to_string(),
        })?;
        conn.execute(
            UPSERT_ROOM,
            params![
                room.id(),
                room.name(),
                room.capacity(),
                equipment,
                room.image(),
                room.video(),
            ],
        )?;
        Ok(())
    }

    /// Replaces a room's image and video, the only fields editable after
    /// creation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomNotFound`] if no room has this id.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use roombook::database::{Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/roombook.db")).unwrap();
    /// let room = db
    ///     .update_room_media("2", "https://img.example/3-2.jpg", None)
    ///     .unwrap();
    /// assert_eq!(room.image(), "https://img.example/3-2.jpg");
    /// ```
    pub fn update_room_media(
        &mut self,
        id: &str,
        image: &str,
        video: Option<&str>,
    ) -> Result<Room> {
        let tx = self.begin_transaction()?;
        let room = Self::get_room(&tx, id)?
            .ok_or_else(|| Error::RoomNotFound { id: id.to_string() })?
            .with_media(image, video.map(str::to_string));
        Self::put_room_simple(&tx, &room)?;
        tx.commit()?;
        log::info!("updated media for room {room}");
        Ok(room)
    }
}
