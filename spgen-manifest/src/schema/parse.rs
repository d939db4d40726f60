//! Schema parsing from files and strings.

use std::str::FromStr;

use spgen_core::{ItemType, toml_value_to_string};
use toml::{Table, Value};

use super::{CONFIG_SECTION, Manifest, SpConfig, SpGroup, SpItem};
use crate::{Error, Result, SourceContext};

const DEFAULT_FILENAME: &str = "config.toml";

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a schema from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a schema from content with the given filename for error reporting.
///
/// Groups keep the order of the source file; the `[Config]` table is never a
/// group.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let table: Table = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    let config = match table.get(CONFIG_SECTION) {
        Some(value @ Value::Table(_)) => {
            let config: SpConfig = value
                .clone()
                .try_into()
                .map_err(|e: toml::de::Error| ctx.config_error(e.message()))?;
            config
        }
        Some(other) => {
            return Err(ctx.config_error(format!(
                "expected a table, found {}",
                other.type_str()
            )));
        }
        None => SpConfig::default(),
    }
    .with_defaults();

    let groups = table
        .iter()
        .filter(|(name, _)| name.as_str() != CONFIG_SECTION)
        .map(|(name, value)| parse_group(&ctx, &config, name, value))
        .collect::<Result<Vec<_>>>()?;

    Ok(Manifest { config, groups })
}

fn parse_group(
    ctx: &SourceContext,
    config: &SpConfig,
    name: &str,
    value: &Value,
) -> Result<SpGroup> {
    let Value::Array(entries) = value else {
        return Err(ctx.invalid_group_error(name, value.type_str()));
    };

    let items = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Table(item) => parse_item(ctx, config, name, index + 1, item),
            other => Err(ctx.invalid_group_error(
                name,
                &format!("an array containing {}", other.type_str()),
            )),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SpGroup {
        name: name.to_string(),
        items,
    })
}

fn parse_item(
    ctx: &SourceContext,
    config: &SpConfig,
    group: &str,
    index: usize,
    item: &Table,
) -> Result<SpItem> {
    let name = match item.get(&config.name_key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(ctx.invalid_field_error(group, index, &config.name_key, other.type_str()));
        }
        None => return Err(ctx.missing_field_error(group, index, &config.name_key)),
    };

    let item_type = match item.get(&config.type_key) {
        Some(Value::String(s)) => ItemType::from_name(s),
        Some(other) => {
            return Err(ctx.invalid_field_error(group, index, &config.type_key, other.type_str()));
        }
        None => ItemType::None,
    };

    let comment = item
        .get(&config.comment_key)
        .map(toml_value_to_string)
        .unwrap_or_default();

    let default_value = item
        .get(&config.default_key)
        .map(toml_value_to_string)
        .unwrap_or_default();

    Ok(SpItem {
        name,
        item_type,
        comment,
        default_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Manifest {
        Manifest::from_str(src).unwrap()
    }

    #[test]
    fn test_parse_config_and_groups() {
        let manifest = parse(
            r#"
            [Config]
            package = "com.a.b"
            dir = "./out"
            author = "someone"

            [[Basic]]
            nm = "user_id"
            t = "int"
            cm = "The user"

            [[Basic]]
            nm = "token"
            t = "String"
            cm = "Auth token"
            def = "none"

            [[Adv]]
            nm = "ratio"
            t = "float"
            def = 0.5
            "#,
        );

        assert_eq!(manifest.config.package, "com.a.b");
        assert_eq!(manifest.config.export_dir, "./out");
        assert_eq!(manifest.config.author, "someone");

        let names: Vec<_> = manifest.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Basic", "Adv"]);

        let basic = &manifest.groups[0];
        assert_eq!(basic.items[0].name, "user_id");
        assert_eq!(basic.items[0].item_type, ItemType::Int);
        assert_eq!(basic.items[0].comment, "The user");
        assert_eq!(basic.items[0].default_value, "");
        assert_eq!(basic.items[1].item_type, ItemType::String);
        assert_eq!(basic.items[1].default_value, "none");

        let adv = &manifest.groups[1];
        assert_eq!(adv.items[0].comment, "");
        assert_eq!(adv.items[0].default_value, "0.5");
        assert_eq!(manifest.item_count(), 3);
    }

    #[test]
    fn test_group_order_follows_source() {
        let manifest = parse(
            r#"
            [[Zeta]]
            nm = "a"

            [Config]
            package = ""

            [[Alpha]]
            nm = "b"

            [[Mid]]
            nm = "c"
            "#,
        );

        let names: Vec<_> = manifest.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let manifest = parse("[[G]]\nnm = \"a\"\n");
        assert_eq!(manifest.config, SpConfig::default());
    }

    #[test]
    fn test_custom_keys() {
        let manifest = parse(
            r#"
            [Config]
            nameKey = "name"
            typeKey = "type"
            commentKey = "doc"
            defaultKey = "value"

            [[G]]
            name = "count"
            type = "long"
            doc = "How many"
            value = 12
            "#,
        );

        let item = &manifest.groups[0].items[0];
        assert_eq!(item.name, "count");
        assert_eq!(item.item_type, ItemType::Long);
        assert_eq!(item.comment, "How many");
        assert_eq!(item.default_value, "12");
    }

    #[test]
    fn test_unknown_type_is_none() {
        let manifest = parse("[[G]]\nnm = \"flag\"\nt = \"bool\"\n");
        assert_eq!(manifest.groups[0].items[0].item_type, ItemType::None);

        let manifest = parse("[[G]]\nnm = \"flag\"\n");
        assert_eq!(manifest.groups[0].items[0].item_type, ItemType::None);
    }

    #[test]
    fn test_missing_name_is_error() {
        let err = Manifest::from_str("[[G]]\nt = \"int\"\n").unwrap_err();
        assert!(matches!(*err, Error::MissingItemField { ref key, index: 1, .. } if key == "nm"));
    }

    #[test]
    fn test_non_string_name_is_error() {
        let err = Manifest::from_str("[[G]]\nnm = 3\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidItemField { .. }));
    }

    #[test]
    fn test_group_must_be_array_of_tables() {
        let err = Manifest::from_str("G = 3\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidGroup { ref group, .. } if group == "G"));

        let err = Manifest::from_str("[G]\nnm = \"a\"\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidGroup { .. }));

        let err = Manifest::from_str("G = [1, 2]\n").unwrap_err();
        assert!(matches!(*err, Error::InvalidGroup { .. }));
    }

    #[test]
    fn test_config_must_be_table() {
        let err = Manifest::from_str("Config = \"x\"\n").unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }

    #[test]
    fn test_syntax_error_has_span() {
        let err = Manifest::from_str("[[G]\nnm = \"a\"\n").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_group() {
        let manifest = parse("G = []\n");
        assert_eq!(manifest.groups.len(), 1);
        assert!(manifest.groups[0].items.is_empty());
    }
}
