use super::Migration;

/// Makes `gen_random_uuid()` and the other pgcrypto functions available.
///
/// Rolling back is a no-op: columns defaulting to `gen_random_uuid()` depend on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnablePgcrypto;

impl Migration for EnablePgcrypto {
    fn name(&self) -> &'static str {
        "enable_pgcrypto"
    }

    fn up(&self) -> &'static str {
        r#"CREATE EXTENSION IF NOT EXISTS "pgcrypto""#
    }

    fn down(&self) -> Option<&'static str> {
        None
    }
}
