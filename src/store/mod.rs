//! Relational Store
//!
//! SQLite-backed store for the chat community model. Uses a single
//! connection behind a mutex; all operations are synchronous and cheap
//! (point lookups and small list scans).
//!
//! # Schema
//!
//! - `users` - registered users
//! - `categories` - server categories (unique names)
//! - `servers` - chat servers, each owned by a user and assigned a category
//! - `server_members` - many-to-many membership between users and servers
//! - `channels` - channels within a server (names stored lowercase)

pub mod error;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use types::{
    Category, Channel, NewChannel, NewServer, Server, ServerFilter, User,
    DESCRIPTION_MAX_LEN, NAME_MAX_LEN, TOPIC_MAX_LEN,
};

use rusqlite::{params, params_from_iter, Connection, OpenFlags};
use std::fmt;
use std::path::Path;
use std::sync::Mutex;

/// SQLite-backed store for users, categories, servers, and channels
pub struct Store {
    conn: Mutex<Connection>,
}

/// Row counts per table, for startup logging and health reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub users: usize,
    pub categories: usize,
    pub servers: usize,
    pub channels: usize,
}

impl fmt::Display for StoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} users, {} categories, {} servers, {} channels",
            self.users, self.categories, self.servers, self.channels
        )
    }
}

impl Store {
    /// Create or open a store at the given database path
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            ",
        )?;

        Self::from_connection(conn)
    }

    /// Open an in-memory store (tests and ephemeral runs)
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                description TEXT
            );

            CREATE TABLE IF NOT EXISTS servers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
                description TEXT
            );

            CREATE TABLE IF NOT EXISTS server_members (
                server_id INTEGER NOT NULL REFERENCES servers(id) ON DELETE CASCADE,
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                PRIMARY KEY (server_id, user_id)
            );

            CREATE TABLE IF NOT EXISTS channels (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                topic TEXT NOT NULL,
                server_id INTEGER NOT NULL REFERENCES servers(id) ON DELETE CASCADE
            );

            CREATE INDEX IF NOT EXISTS idx_servers_category ON servers(category_id);
            CREATE INDEX IF NOT EXISTS idx_channels_server ON channels(server_id);
            CREATE INDEX IF NOT EXISTS idx_members_user ON server_members(user_id);
            ",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    // ----- users -----

    /// Create a user, returning its id
    pub fn create_user(&self, username: &str) -> StoreResult<i64> {
        validate_name("username", username)?;

        let conn = self.conn.lock().unwrap();
        conn.execute("INSERT INTO users (username) VALUES (?)", params![username])?;
        Ok(conn.last_insert_rowid())
    }

    /// Look up a user by id
    pub fn get_user(&self, id: i64) -> StoreResult<Option<User>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare_cached("SELECT id, username FROM users WHERE id = ?")?;
        let user = stmt
            .query_map(params![id], |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                })
            })?
            .next()
            .transpose()?;
        Ok(user)
    }

    // ----- categories -----

    /// Create a category, returning its id
    pub fn create_category(&self, name: &str, description: Option<&str>) -> StoreResult<i64> {
        validate_name("category name", name)?;

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO categories (name, description) VALUES (?, ?)",
            params![name, description],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// List all categories, ordered by id
    pub fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare_cached("SELECT id, name, description FROM categories ORDER BY id")?;
        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    // ----- servers -----

    /// Create a server, returning its id
    ///
    /// The owner is registered as the first member.
    pub fn create_server(&self, new: NewServer) -> StoreResult<i64> {
        validate_name("server name", &new.name)?;
        if let Some(description) = &new.description {
            if description.len() > DESCRIPTION_MAX_LEN {
                return Err(StoreError::Constraint(format!(
                    "server description exceeds {} characters",
                    DESCRIPTION_MAX_LEN
                )));
            }
        }

        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO servers (name, owner_id, category_id, description)
             VALUES (?, ?, ?, ?)",
            params![new.name, new.owner_id, new.category_id, new.description],
        )?;
        let id = tx.last_insert_rowid();
        tx.execute(
            "INSERT INTO server_members (server_id, user_id) VALUES (?, ?)",
            params![id, new.owner_id],
        )?;
        tx.commit()?;
        Ok(id)
    }

    /// List servers matching a filter, ordered by id
    pub fn list_servers(&self, filter: &ServerFilter) -> StoreResult<Vec<Server>> {
        let mut sql = String::from(
            "SELECT id, name, owner_id, category_id, description FROM servers",
        );
        let mut clauses: Vec<&str> = Vec::new();
        let mut args: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(category) = &filter.category {
            clauses.push("category_id IN (SELECT id FROM categories WHERE name = ?)");
            args.push(Box::new(category.clone()));
        }
        if let Some(id) = filter.server_id {
            clauses.push("id = ?");
            args.push(Box::new(id));
        }
        if let Some(member_id) = filter.member_id {
            clauses.push("id IN (SELECT server_id FROM server_members WHERE user_id = ?)");
            args.push(Box::new(member_id));
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id");
        if let Some(limit) = filter.limit {
            sql.push_str(" LIMIT ?");
            args.push(Box::new(limit as i64));
        }

        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&sql)?;
        let servers = stmt
            .query_map(params_from_iter(args.iter().map(|a| a.as_ref())), |row| {
                Ok(Server {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    owner_id: row.get(2)?,
                    category_id: row.get(3)?,
                    description: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(servers)
    }

    /// Look up a server by id
    pub fn get_server(&self, id: i64) -> StoreResult<Option<Server>> {
        let servers = self.list_servers(&ServerFilter::default().server_id(id))?;
        Ok(servers.into_iter().next())
    }

    /// Add a user to a server's member set
    ///
    /// Adding an existing member is a no-op.
    pub fn add_member(&self, server_id: i64, user_id: i64) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR IGNORE INTO server_members (server_id, user_id) VALUES (?, ?)",
            params![server_id, user_id],
        )?;
        Ok(())
    }

    /// Number of members in a server
    pub fn member_count(&self, server_id: i64) -> StoreResult<usize> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM server_members WHERE server_id = ?",
            params![server_id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    // ----- channels -----

    /// Create a channel, returning its id
    ///
    /// The channel name is stored lowercase.
    pub fn create_channel(&self, new: NewChannel) -> StoreResult<i64> {
        validate_name("channel name", &new.name)?;
        if new.topic.len() > TOPIC_MAX_LEN {
            return Err(StoreError::Constraint(format!(
                "channel topic exceeds {} characters",
                TOPIC_MAX_LEN
            )));
        }

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO channels (name, owner_id, topic, server_id)
             VALUES (?, ?, ?, ?)",
            params![new.name.to_lowercase(), new.owner_id, new.topic, new.server_id],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// List a server's channels, ordered by id
    pub fn channels_for_server(&self, server_id: i64) -> StoreResult<Vec<Channel>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(
            "SELECT id, name, owner_id, topic, server_id FROM channels
             WHERE server_id = ? ORDER BY id",
        )?;
        let channels = stmt
            .query_map(params![server_id], |row| {
                Ok(Channel {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    owner_id: row.get(2)?,
                    topic: row.get(3)?,
                    server_id: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(channels)
    }

    // ----- maintenance -----

    /// Row counts per table
    pub fn stats(&self) -> StoreResult<StoreStats> {
        let conn = self.conn.lock().unwrap();
        let count = |table: &str| -> StoreResult<usize> {
            let n: i64 =
                conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                    row.get(0)
                })?;
            Ok(n as usize)
        };
        Ok(StoreStats {
            users: count("users")?,
            categories: count("categories")?,
            servers: count("servers")?,
            channels: count("channels")?,
        })
    }

    /// Check that the database answers a trivial query
    pub fn health_check(&self) -> bool {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .is_ok()
    }
}

/// Reject empty names and names over the length limit
fn validate_name(what: &str, name: &str) -> StoreResult<()> {
    if name.is_empty() {
        return Err(StoreError::Constraint(format!("{} cannot be empty", what)));
    }
    if name.len() > NAME_MAX_LEN {
        return Err(StoreError::Constraint(format!(
            "{} exceeds {} characters",
            what, NAME_MAX_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn seeded_store() -> (Store, i64, i64) {
        let store = Store::open_in_memory().unwrap();
        let owner = store.create_user("ada").unwrap();
        let category = store.create_category("gaming", Some("Games and such")).unwrap();
        (store, owner, category)
    }

    #[test]
    fn test_create_and_list_categories() {
        let store = Store::open_in_memory().unwrap();
        store.create_category("gaming", None).unwrap();
        store.create_category("music", Some("All genres")).unwrap();

        let categories = store.list_categories().unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "gaming");
        assert_eq!(categories[1].description.as_deref(), Some("All genres"));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let store = Store::open_in_memory().unwrap();
        store.create_category("gaming", None).unwrap();
        assert!(store.create_category("gaming", None).is_err());
    }

    #[test]
    fn test_create_server_adds_owner_as_member() {
        let (store, owner, category) = seeded_store();
        let id = store
            .create_server(NewServer::new("rustaceans", owner, category))
            .unwrap();

        assert_eq!(store.member_count(id).unwrap(), 1);
        let server = store.get_server(id).unwrap().unwrap();
        assert_eq!(server.name, "rustaceans");
        assert_eq!(server.owner_id, owner);
    }

    #[test]
    fn test_list_servers_category_filter() {
        let (store, owner, gaming) = seeded_store();
        let music = store.create_category("music", None).unwrap();
        store.create_server(NewServer::new("quake", owner, gaming)).unwrap();
        store.create_server(NewServer::new("jazz", owner, music)).unwrap();

        let filter = ServerFilter::default().category("music");
        let servers = store.list_servers(&filter).unwrap();
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].name, "jazz");

        let none = store.list_servers(&ServerFilter::default().category("sports")).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_list_servers_limit() {
        let (store, owner, category) = seeded_store();
        for i in 0..5 {
            store
                .create_server(NewServer::new(&format!("server-{}", i), owner, category))
                .unwrap();
        }

        let servers = store.list_servers(&ServerFilter::default().limit(3)).unwrap();
        assert_eq!(servers.len(), 3);
        assert_eq!(servers[0].name, "server-0");
    }

    #[test]
    fn test_list_servers_member_filter() {
        let (store, owner, category) = seeded_store();
        let other = store.create_user("grace").unwrap();
        let a = store.create_server(NewServer::new("alpha", owner, category)).unwrap();
        store.create_server(NewServer::new("beta", owner, category)).unwrap();
        store.add_member(a, other).unwrap();

        let servers = store.list_servers(&ServerFilter::default().member(other)).unwrap();
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].name, "alpha");
    }

    #[test]
    fn test_add_member_idempotent() {
        let (store, owner, category) = seeded_store();
        let id = store.create_server(NewServer::new("alpha", owner, category)).unwrap();
        let other = store.create_user("grace").unwrap();

        store.add_member(id, other).unwrap();
        store.add_member(id, other).unwrap();
        assert_eq!(store.member_count(id).unwrap(), 2);
    }

    #[test]
    fn test_channel_name_lowercased() {
        let (store, owner, category) = seeded_store();
        let server = store.create_server(NewServer::new("alpha", owner, category)).unwrap();
        store
            .create_channel(NewChannel::new("General", owner, "Anything goes", server))
            .unwrap();

        let channels = store.channels_for_server(server).unwrap();
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, "general");
        assert_eq!(channels[0].topic, "Anything goes");
    }

    #[test]
    fn test_validation_limits() {
        let (store, owner, category) = seeded_store();
        assert!(store.create_server(NewServer::new("", owner, category)).is_err());
        assert!(store
            .create_server(NewServer::new(&"x".repeat(NAME_MAX_LEN + 1), owner, category))
            .is_err());
        assert!(store
            .create_server(
                NewServer::new("ok", owner, category)
                    .description(&"d".repeat(DESCRIPTION_MAX_LEN + 1))
            )
            .is_err());
    }

    #[test]
    fn test_foreign_keys_enforced() {
        let store = Store::open_in_memory().unwrap();
        // No such owner or category.
        assert!(store.create_server(NewServer::new("ghost", 42, 42)).is_err());
    }

    #[test]
    fn test_reopen_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("huddle.db");

        {
            let store = Store::open(&path).unwrap();
            let owner = store.create_user("ada").unwrap();
            let category = store.create_category("gaming", None).unwrap();
            store.create_server(NewServer::new("alpha", owner, category)).unwrap();
        }

        let store = Store::open(&path).unwrap();
        let stats = store.stats().unwrap();
        assert_eq!(stats.servers, 1);
        assert_eq!(stats.users, 1);
        assert!(store.health_check());
    }
}
