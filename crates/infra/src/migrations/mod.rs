//! Schema migrations owned by this workspace.
//!
//! A migration is a pair of SQL scripts. `up` must be safe to run more than once;
//! `down` is optional and a migration without one is left in place on rollback.

mod pgcrypto;

pub use pgcrypto::EnablePgcrypto;

use sqlx::PgPool;
use thiserror::Error;
use tracing::{info, instrument};

pub trait Migration: Send + Sync {
    /// Stable, unique name (used in logs).
    fn name(&self) -> &'static str;

    /// Forward DDL.
    fn up(&self) -> &'static str;

    /// Rollback DDL, or `None` when rolling back is unsafe.
    fn down(&self) -> Option<&'static str>;
}

/// Registered migrations, in application order.
pub static MIGRATIONS: &[&dyn Migration] = &[&EnablePgcrypto];

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("migration {name} failed: {source}")]
    Failed {
        name: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// What a run did to a single migration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    Applied(&'static str),
    RolledBack(&'static str),
    /// Rollback requested but the migration has no down step.
    Kept(&'static str),
}

/// Applies [`Migration`]s against a Postgres pool.
#[derive(Clone)]
pub struct Migrator {
    pool: PgPool,
    migrations: Vec<&'static dyn Migration>,
}

impl Migrator {
    /// Migrator over every registered migration.
    pub fn new(pool: PgPool) -> Self {
        Self::with_migrations(pool, MIGRATIONS.to_vec())
    }

    pub fn with_migrations(pool: PgPool, migrations: Vec<&'static dyn Migration>) -> Self {
        Self { pool, migrations }
    }

    /// Run every `up` script in order, each inside its own transaction.
    #[instrument(skip(self), fields(count = self.migrations.len()), err)]
    pub async fn run_up(&self) -> Result<Vec<MigrationOutcome>, MigrationError> {
        let mut outcomes = Vec::with_capacity(self.migrations.len());
        for migration in &self.migrations {
            self.execute(migration.name(), migration.up()).await?;
            info!(migration = migration.name(), "migration applied");
            outcomes.push(MigrationOutcome::Applied(migration.name()));
        }
        Ok(outcomes)
    }

    /// Run `down` scripts in reverse order; migrations without one are kept.
    #[instrument(skip(self), fields(count = self.migrations.len()), err)]
    pub async fn run_down(&self) -> Result<Vec<MigrationOutcome>, MigrationError> {
        let mut outcomes = Vec::with_capacity(self.migrations.len());
        for migration in self.migrations.iter().rev() {
            match migration.down() {
                Some(sql) => {
                    self.execute(migration.name(), sql).await?;
                    info!(migration = migration.name(), "migration rolled back");
                    outcomes.push(MigrationOutcome::RolledBack(migration.name()));
                }
                None => {
                    info!(migration = migration.name(), "migration has no down step; kept");
                    outcomes.push(MigrationOutcome::Kept(migration.name()));
                }
            }
        }
        Ok(outcomes)
    }

    async fn execute(&self, name: &'static str, sql: &str) -> Result<(), MigrationError> {
        let failed = |source| MigrationError::Failed { name, source };

        let mut tx = self.pool.begin().await.map_err(failed)?;
        sqlx::query(sql).execute(&mut *tx).await.map_err(failed)?;
        tx.commit().await.map_err(failed)?;
        Ok(())
    }
}
