use crate::case::camelize;
use genumerate_schema::{EnumDescriptor, Schema};

/// Names derived from one schema, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub model_names: Vec<String>,
    /// Only models with `@@map`; unmapped models contribute nothing.
    pub table_names: Vec<String>,
    /// `camelize(model_names[i])`.
    pub prisma_models: Vec<String>,
    pub model_enums: Vec<(String, Vec<String>)>,
}

impl GenerationResult {
    pub fn from_schema(schema: &Schema) -> Self {
        let model_names = schema.models.iter().map(|m| m.name.clone()).collect();
        let table_names = schema
            .models
            .iter()
            .filter_map(|m| m.mapped_table_name.clone())
            .collect();
        let prisma_models = schema.models.iter().map(|m| camelize(&m.name)).collect();

        Self {
            model_names,
            table_names,
            prisma_models,
            model_enums: extract_enums(&schema.enums),
        }
    }
}

/// Enum name -> members. A repeated enum name replaces the earlier entry in place.
pub fn extract_enums(enums: &[EnumDescriptor]) -> Vec<(String, Vec<String>)> {
    let mut out: Vec<(String, Vec<String>)> = Vec::with_capacity(enums.len());
    for e in enums {
        match out.iter_mut().find(|(name, _)| *name == e.name) {
            Some(existing) => existing.1 = e.members.clone(),
            None => out.push((e.name.clone(), e.members.clone())),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use genumerate_schema::ModelDescriptor;

    fn model(name: &str, table: Option<&str>) -> ModelDescriptor {
        ModelDescriptor {
            name: name.to_string(),
            mapped_table_name: table.map(str::to_string),
        }
    }

    #[test]
    fn table_names_skip_unmapped_models() {
        let schema = Schema {
            models: vec![
                model("Project", Some("project")),
                model("Tag", None),
                model("ServiceAccount", Some("service_account")),
            ],
            enums: Vec::new(),
        };

        let result = GenerationResult::from_schema(&schema);
        assert_eq!(result.model_names, vec!["Project", "Tag", "ServiceAccount"]);
        assert_eq!(result.table_names, vec!["project", "service_account"]);
        assert_eq!(result.prisma_models, vec!["project", "tag", "serviceAccount"]);
        assert_eq!(result.model_names.len(), result.prisma_models.len());
    }

    #[test]
    fn enums_keep_member_order() {
        let enums = vec![
            EnumDescriptor {
                name: "State".to_string(),
                members: vec!["READY".to_string(), "DELETED".to_string()],
            },
            EnumDescriptor {
                name: "Status".to_string(),
                members: vec!["ACTIVE".to_string()],
            },
        ];

        let got = extract_enums(&enums);
        assert_eq!(got[0], ("State".to_string(), vec!["READY".to_string(), "DELETED".to_string()]));
        assert_eq!(got[1].0, "Status");
    }

    #[test]
    fn empty_schema_derives_nothing() {
        assert_eq!(
            GenerationResult::from_schema(&Schema::default()),
            GenerationResult::default()
        );
    }
}
