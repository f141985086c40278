use caption::{render, CalendarConfig, OverlayConfig, Snapshot, CUSTOM_TAG};
use proptest::prelude::*;

fn render_default(template: &str, snapshot: &Snapshot) -> String {
    render(template, snapshot, &CalendarConfig::default(), &OverlayConfig::default())
}

proptest! {
    #[test]
    fn text_without_brackets_is_unchanged(text in "[^<>]{0,64}") {
        prop_assert_eq!(render_default(&text, &Snapshot::default()), text);
    }

    #[test]
    fn unknown_tags_are_written_back(
        key in "Zz[A-Za-z]{1,8}",
        args in proptest::collection::vec("[a-z0-9]{0,6}", 1..4),
    ) {
        let template = format!("<{}({})>", key, args.join(","));
        prop_assert_eq!(render_default(&template, &Snapshot::default()), template);
    }

    #[test]
    fn custom_text_never_recurses(prefix in "[a-z ]{0,10}", suffix in "[a-z ]{0,10}") {
        let custom = format!("{}<{}>{}", prefix, CUSTOM_TAG, suffix);
        let overlay = OverlayConfig::default().with_custom_text(custom.clone());
        let text = render("<Custom>", &Snapshot::default(), &CalendarConfig::default(), &overlay);
        prop_assert_eq!(text, custom);
    }

    #[test]
    fn ut_always_renders(ut in 0.0f64..1.0e10) {
        let text = render_default("<UT>", &Snapshot::at(ut));
        prop_assert!(text.starts_with('Y'), "{}", text);
        prop_assert!(!text.contains("Error expanding"), "{}", text);
    }
}
