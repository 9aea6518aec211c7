use crate::cli::Cli;
use crate::codegen::{Category, build_enum_file};
use crate::format::{FormatConfig, FormatOptions, render};
use crate::load::load_schema;
use crate::names::GenerationResult;
use crate::write::{WriteOptions, WriteOutcome, apply_generated_file};
use colored::Colorize;
use std::path::Path;

pub fn run(cli: &Cli, format: &FormatConfig) -> anyhow::Result<()> {
    let text = render_enums(&cli.schema, cli.strict, cli.categories(), &format.options)?;

    if cli.print {
        println!("{}", text.yellow());
        println!("{}", "Print enumerates on the console successfully! ✅".cyan());
    }

    if let Some(output) = &cli.output {
        let outcome = apply_generated_file(output, &text, WriteOptions { check: cli.check })?;
        if cli.check {
            println!("{} is up to date", output.display());
        } else {
            if outcome == WriteOutcome::Unchanged {
                tracing::info!(path = %output.display(), "output already up to date, nothing written");
            }
            println!(
                "{}",
                "Generate enumerates for file at specified destination successfully! ✅".cyan()
            );
        }
    }

    Ok(())
}

/// Schema file to formatted TypeScript source.
pub fn render_enums(
    schema_path: &Path,
    strict: bool,
    categories: &[Category],
    opts: &FormatOptions,
) -> anyhow::Result<String> {
    let schema = load_schema(schema_path, strict)?;
    let result = GenerationResult::from_schema(&schema);
    let file = build_enum_file(&result, categories)?;
    Ok(render(&file, opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use indoc::indoc;

    const SCHEMA: &str = indoc! {r#"
        model Project {
          id           Int              @id
          state        State
          repositories Repository[]
          accounts     ServiceAccount[]

          @@map("project")
        }

        model Repository {
          id        Int        @id
          projectId Int
          project   Project    @relation(fields: [projectId], references: [id])
          artifacts Artifact[]

          @@map("repository")
        }

        model Artifact {
          id           Int        @id
          repositoryId Int
          repository   Repository @relation(fields: [repositoryId], references: [id])
          tags         Tag[]
          status       Status

          @@map("artifact")
        }

        model Tag {
          id         Int      @id
          artifactId Int
          artifact   Artifact @relation(fields: [artifactId], references: [id])

          @@map("tag")
        }

        model ServiceAccount {
          id        Int     @id
          projectId Int
          project   Project @relation(fields: [projectId], references: [id])

          @@map("service_account")
        }

        enum State {
          READY
          DELETED
          ERROR
          CREATING
          UPDATING
        }

        enum Status {
          ACTIVE
          DISABLED
          OFFLINE
        }
    "#};

    fn write_schema(dir: &Path, text: &str) -> std::path::PathBuf {
        let path = dir.join("schema.prisma");
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn renders_full_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_schema(dir.path(), SCHEMA);

        let text = render_enums(&path, true, &Category::ALL, &FormatOptions::fallback()).unwrap();

        expect![[r#"
            /* * Enumerates are ONLY allowed to modified by script, DO NOT MODIFY manually * */

            enum PrismaModel {
              Project = 'project',
              Repository = 'repository',
              Artifact = 'artifact',
              Tag = 'tag',
              ServiceAccount = 'serviceAccount',
            }

            enum ModelName {
              Project = 'Project',
              Repository = 'Repository',
              Artifact = 'Artifact',
              Tag = 'Tag',
              ServiceAccount = 'ServiceAccount',
            }

            enum TableName {
              Project = 'project',
              Repository = 'repository',
              Artifact = 'artifact',
              Tag = 'tag',
              ServiceAccount = 'service_account',
            }

            enum StateEnum {
              Ready = 'READY',
              Deleted = 'DELETED',
              Error = 'ERROR',
              Creating = 'CREATING',
              Updating = 'UPDATING',
            }

            enum StatusEnum {
              Active = 'ACTIVE',
              Disabled = 'DISABLED',
              Offline = 'OFFLINE',
            }

            export { PrismaModel, ModelName, TableName, StateEnum, StatusEnum };
        "#]]
        .assert_eq(&text);
    }

    #[test]
    fn unmapped_models_reuse_model_names_for_table_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_schema(dir.path(), "model Tag {\n  id Int @id\n}\n");

        let text = render_enums(
            &path,
            true,
            &[Category::ModelName, Category::TableName],
            &FormatOptions::fallback(),
        )
        .unwrap();
        assert!(text.contains("enum ModelName {\n  Tag = 'Tag',\n}"));
        assert!(text.contains("enum TableName {\n  Tag = 'Tag',\n}"));
        assert!(text.ends_with("export { ModelName, TableName };\n"));
    }

    #[test]
    fn broken_schema_renders_empty_fixed_enums() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_schema(dir.path(), "model User {\n  posts Post[]\n}\n");

        let text = render_enums(&path, false, &Category::ALL, &FormatOptions::fallback()).unwrap();
        assert!(text.contains("enum PrismaModel {}"));
        assert!(text.contains("enum TableName {}"));
        assert!(text.ends_with("export { PrismaModel, ModelName, TableName };\n"));

        assert!(render_enums(&path, true, &Category::ALL, &FormatOptions::fallback()).is_err());
    }

    #[test]
    fn member_collision_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_schema(dir.path(), "enum Role {\n  ADMIN\n  Admin\n}\n");

        let err = render_enums(&path, true, &Category::ALL, &FormatOptions::fallback()).unwrap_err();
        assert!(err.to_string().contains("both become member `Admin`"));
    }
}
