//! Three or more tokens always means natural language.

use proptest::prelude::*;
use toolscout::{classify, QueryMode};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_three_tokens_natural_language(
        words in prop::collection::vec("[^\\s]{1,10}", 3..8),
        sep in "[ \t]{1,3}",
    ) {
        prop_assert_eq!(classify(&words.join(sep.as_str())), QueryMode::NaturalLanguage);
    }

    #[test]
    fn prop_blank_is_keyword(blank in "[ \t\n]{0,10}") {
        prop_assert_eq!(classify(&blank), QueryMode::Keyword);
    }

    #[test]
    fn prop_classification_ignores_case(query in "[a-zA-Z ]{0,30}") {
        prop_assert_eq!(classify(&query), classify(&query.to_uppercase()));
    }
}
