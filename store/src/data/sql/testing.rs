//! In-memory SQLite fixture for executing compiled clauses

use sqlx::SqlitePool;

pub const SCHEMA: &str = r#"
CREATE TABLE service (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    namespace TEXT NOT NULL,
    business TEXT NOT NULL DEFAULT '',
    owner TEXT NOT NULL DEFAULT '',
    reference TEXT,
    flag INTEGER NOT NULL DEFAULT 0,
    ctime INTEGER NOT NULL DEFAULT 0,
    mtime INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE service_metadata (id TEXT NOT NULL, mkey TEXT NOT NULL, mvalue TEXT NOT NULL);
CREATE TABLE instance (
    id TEXT PRIMARY KEY,
    service_id TEXT NOT NULL,
    host TEXT NOT NULL,
    port INTEGER NOT NULL,
    managed INTEGER NOT NULL DEFAULT 0,
    ctime INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE instance_metadata (id TEXT NOT NULL, mkey TEXT NOT NULL, mvalue TEXT NOT NULL);
CREATE TABLE owner_service_map (owner TEXT NOT NULL, service TEXT NOT NULL, namespace TEXT NOT NULL);
CREATE TABLE namespace (
    name TEXT PRIMARY KEY,
    owner TEXT NOT NULL,
    comment TEXT NOT NULL DEFAULT '',
    ctime INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE routing_config (
    id TEXT PRIMARY KEY,
    in_bounds TEXT NOT NULL,
    out_bounds TEXT NOT NULL,
    revision TEXT NOT NULL,
    flag INTEGER NOT NULL DEFAULT 0,
    ctime INTEGER NOT NULL DEFAULT 0,
    mtime INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE ratelimit_config (
    id TEXT PRIMARY KEY,
    service_id TEXT NOT NULL,
    name TEXT NOT NULL,
    namespace TEXT NOT NULL,
    owner TEXT NOT NULL,
    labels TEXT NOT NULL DEFAULT '{}',
    revision TEXT NOT NULL,
    mtime INTEGER NOT NULL DEFAULT 0
);
"#;

pub const SEED: &str = r#"
INSERT INTO service (id, name, namespace, business, owner, reference, ctime, mtime) VALUES
    ('s1', 'order-api', 'Production', 'payments', 'alice', NULL, 1, 1),
    ('s2', 'order-worker', 'Production', 'payments', 'bob', NULL, 2, 2),
    ('s3', 'user-api', 'Test', 'identity', 'alice,carol', NULL, 3, 3),
    ('a1', 'orders', 'Production', '', 'dave', 's1', 4, 4);
INSERT INTO service_metadata (id, mkey, mvalue) VALUES
    ('s1', 'env', 'prod'),
    ('s3', 'env', 'test');
INSERT INTO instance (id, service_id, host, port, managed, ctime) VALUES
    ('i1', 's1', '10.0.0.1', 8080, 1, 1),
    ('i2', 's1', '10.0.0.2', 8080, 0, 2),
    ('i3', 's2', '10.0.0.3', 9090, 1, 3),
    ('i4', 's3', '10.0.0.1', 7070, 1, 4);
INSERT INTO instance_metadata (id, mkey, mvalue) VALUES
    ('i1', 'env', 'prod'), ('i1', 'zone', 'a'),
    ('i2', 'env', 'prod'), ('i2', 'zone', 'b'),
    ('i3', 'env', 'prod'), ('i3', 'zone', 'a'),
    ('i4', 'env', 'test'), ('i4', 'zone', 'a');
INSERT INTO owner_service_map (owner, service, namespace) VALUES
    ('alice', 'order-api', 'Production'),
    ('bob', 'order-worker', 'Production'),
    ('alice', 'user-api', 'Test'),
    ('carol', 'user-api', 'Test'),
    ('dave', 'orders', 'Production');
INSERT INTO namespace (name, owner, comment, ctime) VALUES
    ('Production', 'alice,bob', 'production services', 1),
    ('Test', 'carol', 'test services', 2),
    ('Staging', 'erin', '', 3);
INSERT INTO routing_config (id, in_bounds, out_bounds, revision, flag, ctime, mtime) VALUES
    ('s1', '[]', '[]', 'r1', 0, 10, 10),
    ('s2', '[]', '[]', 'r2', 0, 20, 20),
    ('s3', '[]', '[]', 'r3', 1, 30, 30);
INSERT INTO ratelimit_config (id, service_id, name, namespace, owner, revision, mtime) VALUES
    ('rl1', 's1', 'order-api', 'Production', 'alice', 'v1', 1),
    ('rl2', 's2', 'order-worker', 'Production', 'bob', 'v2', 2),
    ('rl3', 's3', 'user-api', 'Test', 'bob', 'v3', 3);
"#;

pub async fn setup_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:").await.unwrap();
    sqlx::query(SCHEMA).execute(&pool).await.unwrap();
    sqlx::query(SEED).execute(&pool).await.unwrap();
    pool
}
