use anyhow::Context;
use genumerate_schema::Schema;
use std::path::Path;

const ALIAS_HINT: &str = "Did you attempt to reference to a model without creating an alias? \
Remember you must define a \"blank\" alias model with only the \"@id\" field in your extended schemas \
otherwise the schema cannot be parsed.";

/// Read and parse the schema.
///
/// A failure is logged and, unless `strict`, replaced by an empty schema so
/// the generated file still declares the fixed enums.
pub fn load_schema(path: &Path, strict: bool) -> anyhow::Result<Schema> {
    match genumerate_schema::read_schema(path) {
        Ok(schema) => Ok(schema),
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                "failed to parse schema. {ALIAS_HINT} ({e})"
            );
            if strict {
                return Err(e).with_context(|| format!("failed to load schema {}", path.display()));
            }
            Ok(Schema::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_schema_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.prisma");
        std::fs::write(&path, "model User {\n  posts Post[]\n}\n").unwrap();

        assert_eq!(load_schema(&path, false).unwrap(), Schema::default());
    }

    #[test]
    fn strict_propagates_the_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.prisma");

        let err = load_schema(&path, true).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("failed to load schema"));
        assert!(msg.contains("failed to read schema"));
    }
}
