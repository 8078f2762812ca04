use proptest::prelude::*;
use serde_json::json;
use typeset::{
    default_theme, resolve_size_styles, validate_props, PropWarning, Responsive, Size, Tag,
    TextProps, TextRenderer, Variant,
};

fn size_strategy() -> impl Strategy<Value = Size> {
    prop::sample::select(Size::ALL.to_vec())
}

fn variant_strategy() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

// Any subset of the default theme's named breakpoints, each with a size.
fn breakpoint_sizes_strategy() -> impl Strategy<Value = Vec<(&'static str, Size)>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["_", "small", "medium", "large", "xlarge"]),
            size_strategy(),
        ),
        1..5,
    )
    .prop_map(|mut entries| {
        entries.sort_by_key(|(name, _)| *name);
        entries.dedup_by_key(|(name, _)| *name);
        entries
    })
}

proptest! {
    #[test]
    fn plain_size_equals_table_entry(variant in variant_strategy(), size in size_strategy()) {
        let theme = default_theme().unwrap();
        let object = resolve_size_styles(&Responsive::Plain(size), variant, theme).unwrap();

        let expected = theme.text_size(variant.as_str(), size.as_str()).unwrap();
        prop_assert_eq!(object.base(), expected);
        prop_assert!(object.layers().is_empty());
    }

    #[test]
    fn responsive_size_resolves_per_breakpoint(
        variant in variant_strategy(),
        entries in breakpoint_sizes_strategy(),
    ) {
        let theme = default_theme().unwrap();
        let size = Responsive::by_breakpoint(entries.clone());
        let object = resolve_size_styles(&size, variant, theme).unwrap();

        for (name, size) in &entries {
            let expected = theme.text_size(variant.as_str(), size.as_str()).unwrap();
            let actual = if *name == "_" {
                object.base()
            } else {
                object.layer(name).unwrap()
            };
            prop_assert_eq!(actual, expected);
        }
        let named = entries.iter().filter(|(name, _)| *name != "_").count();
        prop_assert_eq!(object.layers().len(), named);
    }

    #[test]
    fn caller_font_size_always_wins(
        variant in variant_strategy(),
        size in size_strategy(),
        font_size in 1u32..200,
    ) {
        let renderer = TextRenderer::with_default_theme().unwrap();
        let element = renderer
            .render(
                &TextProps::new("x")
                    .variant(variant)
                    .size(size)
                    .style_prop("fontSize", font_size),
            )
            .unwrap();

        let class = element.class_name().unwrap();
        let rule = renderer.stylesheet().rule(class).unwrap();
        let expected = format!("font-size:{}px", font_size);
        prop_assert!(rule.contains(&expected), "{}", rule);
        prop_assert_eq!(rule.matches("font-size:").count(), 1);
    }

    #[test]
    fn class_name_is_always_appended(class in "[a-z][a-z0-9-]{0,12}") {
        let renderer = TextRenderer::with_default_theme().unwrap();
        let element = renderer.render(&TextProps::new("x").class_name(class.clone())).unwrap();
        let classes: Vec<&str> = element.class_name().unwrap().split(' ').collect();

        prop_assert_eq!(classes.len(), 2);
        prop_assert!(classes[0].starts_with("ts-"));
        prop_assert_eq!(classes[1], class.as_str());
    }

    #[test]
    fn same_props_share_a_class(variant in variant_strategy(), size in size_strategy()) {
        let renderer = TextRenderer::with_default_theme().unwrap();
        let props = TextProps::new("x").variant(variant).size(size);
        let a = renderer.render(&props).unwrap();
        let b = renderer.render(&props.clone().children("y")).unwrap();

        prop_assert_eq!(a.class_name(), b.class_name());
        prop_assert_eq!(renderer.stylesheet().len(), 1);
    }

    #[test]
    fn unknown_tag_falls_back_to_p(tag in "[a-z]{1,10}") {
        prop_assume!(tag.parse::<Tag>().is_err());

        let validated = validate_props(&json!({ "as": tag })).unwrap();
        prop_assert_eq!(validated.props.tag, Tag::P);
        prop_assert_eq!(validated.warnings.len(), 1);
        let is_unknown_value = matches!(
            &validated.warnings[0],
            PropWarning::UnknownValue { prop, .. } if prop == "as"
        );
        prop_assert!(is_unknown_value);
    }
}
