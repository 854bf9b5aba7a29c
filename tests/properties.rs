use calctree::{ast_build, build_stages, evaluate_expression, interpreter::lexer::count_tokens};
use proptest::prelude::*;

/// Well-formed expressions as token lists, so they can be joined with any
/// separator.
fn expression() -> impl Strategy<Value = Vec<String>> {
    let leaf = (0u32..100).prop_map(|n| vec![n.to_string()]);

    leaf.prop_recursive(4, 32, 2, |inner| {
            prop_oneof![(inner.clone(),
                         prop_oneof![Just("+"), Just("-"), Just("*"), Just("/")],
                         inner.clone()).prop_map(|(mut left, op, right)| {
                                           left.push(op.to_string());
                                           left.extend(right);
                                           left
                                       }),
                        inner.clone().prop_map(|group| {
                                         let mut tokens = vec!["(".to_string()];
                                         tokens.extend(group);
                                         tokens.push(")".to_string());
                                         tokens
                                     }),
                        inner.prop_map(|operand| {
                                 let mut tokens = vec!["-".to_string()];
                                 tokens.extend(operand);
                                 tokens
                             }),]
        })
}

proptest! {
    #[test]
    fn whitespace_does_not_change_the_result(tokens in expression()) {
        let compact = tokens.concat();
        let spaced = format!("  {}\t", tokens.join("   "));

        let a = evaluate_expression(&compact);
        let b = evaluate_expression(&spaced);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn evaluation_is_idempotent(tokens in expression()) {
        let src = tokens.join(" ");
        prop_assert_eq!(evaluate_expression(&src), evaluate_expression(&src));
    }

    #[test]
    fn well_formed_expressions_parse(tokens in expression()) {
        let src = tokens.join(" ");
        prop_assert!(ast_build(&src).is_ok());
        prop_assert_eq!(count_tokens(&src), tokens.len());
    }

    #[test]
    fn last_stage_matches_the_strict_parse(tokens in expression()) {
        let src = tokens.join(" ");
        let stages = build_stages(&src);

        prop_assert_eq!(stages.len(), tokens.len() + 1);
        prop_assert_eq!(stages.get(0), Some(None));
        let strict = ast_build(&src).ok();
        prop_assert_eq!(stages.last(), strict.as_ref());
    }

    #[test]
    fn staging_never_fails(src in ".{0,40}") {
        let stages = build_stages(&src);
        prop_assert_eq!(stages.len(), count_tokens(&src) + 1);
    }
}
