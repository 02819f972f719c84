use devboot_meta::InstallSpec;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_.-]{0,20}"
}

fn version_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("(>=|==|~=|<)[0-9]{1,2}(\\.[0-9]{1,2}){0,2}")
}

fn extras_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("\\[[a-z]{1,8}(,[a-z]{1,8}){0,2}\\]")
}

proptest! {
    #[test]
    fn test_requirement_concatenates_name_extras_version(
        name in name_strategy(),
        version in version_strategy(),
        extras in extras_strategy(),
    ) {
        let mut spec = InstallSpec::new(name.clone());
        if let Some(v) = &version {
            spec = spec.with_version(v.clone());
        }
        if let Some(e) = &extras {
            spec = spec.with_extras(e.clone());
        }

        let expected = format!(
            "{}{}{}",
            name,
            extras.as_deref().unwrap_or(""),
            version.as_deref().unwrap_or("")
        );
        prop_assert_eq!(spec.requirement(), expected);

        // The human-readable marker never leaks into installer arguments.
        prop_assert!(!spec.requirement().contains("(latest)"));

        let shown = spec.to_string();
        prop_assert_eq!(shown.ends_with(" (latest)"), version.is_none());
        let shown_prefix = format!("{}{}", name, extras.as_deref().unwrap_or(""));
        prop_assert!(shown.starts_with(&shown_prefix));
    }

    #[test]
    fn test_generated_specs_validate(
        name in name_strategy(),
        extras in extras_strategy(),
    ) {
        let mut spec = InstallSpec::new(name);
        if let Some(e) = extras {
            spec = spec.with_extras(e);
        }
        prop_assert!(spec.validate().is_ok());
    }
}
