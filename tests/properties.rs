use codecoach::{normalize, AnalysisResult};
use proptest::prelude::*;

fn assert_populated(result: &AnalysisResult) {
    assert!(!result.strengths.is_empty());
    assert!(!result.improvements.is_empty());
    assert!(!result.recommendations.is_empty());
    assert!(!result.time_complexity.is_empty());
    assert!(!result.space_complexity.is_empty());
}

proptest! {
    #[test]
    fn prop_any_string_normalizes(raw in any::<String>()) {
        assert_populated(&normalize(&raw));
    }

    #[test]
    fn prop_json_like_noise_normalizes(raw in r#"[{}\[\]":, a-zO()%0-9\n.`]{0,256}"#) {
        assert_populated(&normalize(&raw));
    }

    #[test]
    fn prop_structured_output_is_stable(
        strengths in "[a-zA-Z ]{1,40}",
        improvements in "[a-zA-Z ]{1,40}",
        score in 1i64..=100,
    ) {
        let first = normalize(&format!(
            r#"{{"strengths":"{}","improvements":"{}","score":{}}}"#,
            strengths, improvements, score
        ));
        prop_assert_eq!(&first.strengths, &strengths);
        prop_assert_eq!(first.score, score);

        let serialized = serde_json::to_string(&first).unwrap();
        prop_assert_eq!(normalize(&serialized), first);
    }
}

#[test]
fn test_multi_megabyte_input() {
    let raw = "strength without a colon {\"strengths\" ".repeat(60_000);
    assert!(raw.len() > 2_000_000);
    assert_populated(&normalize(&raw));
}
