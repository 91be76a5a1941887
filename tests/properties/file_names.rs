//! Property tests for logical file name derivation.

use std::path::PathBuf;

use proptest::prelude::*;

use lytics::domain::value_objects::{FileKind, FileName};

fn mixed_case(s: &str, mask: &[bool]) -> String {
    s.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the logical name is the lowercased base name, whatever the
    /// directory prefix or letter case, and the kind follows the extension.
    #[test]
    fn property_name_is_lowercased_base(
        base in "[a-z0-9_]{1,12}",
        ext in prop_oneof![Just("lql"), Just("json"), Just("csv"), Just("txt")],
        dir in "[a-z]{1,8}",
        mask in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        let file = format!("{}.{}", mixed_case(&base, &mask), mixed_case(ext, &mask));
        let path = PathBuf::from(dir).join(file);

        let parsed = FileName::parse(&path).unwrap();
        prop_assert_eq!(parsed.name, base);
        prop_assert_eq!(parsed.kind, FileKind::from_extension(ext));
    }

    /// PROPERTY: dot-files and names without an extension never name a LogicalFile.
    #[test]
    fn property_dot_files_and_bare_names_are_ignored(
        base in "[A-Za-z0-9_]{1,12}",
    ) {
        let dot_file = PathBuf::from(format!(".{}", base));
        prop_assert!(FileName::parse(&dot_file).is_none());
        prop_assert!(FileName::parse(&PathBuf::from(&base)).is_none());
    }
}
