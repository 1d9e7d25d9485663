//! Table definitions for the market catalog.
//!
//! Tables are created only when absent; existing tables are left untouched.

use sqlx::SqliteConnection;

const CREATE_CATEGORIES: &str = r#"
    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        description TEXT,
        createdAt INTEGER
    )
"#;

// New tables get a (userId, storeName) constraint so re-runs don't duplicate sellers.
const CREATE_SELLERS: &str = r#"
    CREATE TABLE IF NOT EXISTS sellers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        userId INTEGER NOT NULL,
        storeName TEXT NOT NULL,
        description TEXT,
        whatsappPhone TEXT,
        rating REAL DEFAULT 0,
        totalSales INTEGER DEFAULT 0,
        createdAt INTEGER,
        updatedAt INTEGER,
        UNIQUE (userId, storeName)
    )
"#;

const CREATE_PRODUCTS: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        sellerId INTEGER NOT NULL,
        categoryId INTEGER NOT NULL,
        name TEXT NOT NULL,
        description TEXT,
        price TEXT NOT NULL,
        imageUrl TEXT,
        stock INTEGER DEFAULT 0,
        source TEXT DEFAULT 'nairobi_market',
        createdAt INTEGER,
        updatedAt INTEGER
    )
"#;

/// Creates the categories, sellers and products tables if they don't exist.
pub async fn ensure_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    for ddl in [CREATE_CATEGORIES, CREATE_SELLERS, CREATE_PRODUCTS] {
        sqlx::query(ddl).execute(&mut *conn).await?;
    }

    Ok(())
}
