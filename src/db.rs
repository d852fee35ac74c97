use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::auth::password;
use crate::models::setting;

pub type DbPool = Pool<SqliteConnectionManager>;

pub const MIGRATIONS: &str = include_str!("schema.sql");

pub fn init_pool(database_url: &str) -> DbPool {
    let manager = SqliteConnectionManager::file(database_url).with_init(|conn| {
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        Ok(())
    });
    Pool::builder()
        .max_size(8)
        .build(manager)
        .expect("Failed to create DB pool")
}

pub fn run_migrations(pool: &DbPool) {
    let conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");
    log::info!("Database migrations complete");
}

/// Seed the app name and admin password hash if not already present.
/// Existing values are left alone so a changed env var does not silently
/// rotate the admin credential on restart.
pub fn seed_settings(pool: &DbPool, admin_password: &str) {
    let conn = pool.get().expect("Failed to get DB connection for seeding");

    if setting::get_value(&conn, "app.name", "").is_empty() {
        setting::set_value(&conn, "app.name", "MusicDB")
            .expect("Failed to seed app name");
    }

    if setting::get_value(&conn, "admin.password_hash", "").is_empty() {
        let hash = password::hash_password(admin_password)
            .expect("Failed to hash admin password");
        setting::set_value(&conn, "admin.password_hash", &hash)
            .expect("Failed to seed admin password");
        log::info!("Seeded admin password hash");
    }
}
