use calctree::{
    ast::{BinaryOperator, Expr},
    ast_build, build_stages, evaluate_expression,
    interpreter::{evaluator::core::evaluate, lexer::count_tokens},
};

fn rendered(src: &str) -> Vec<String> {
    build_stages(src).iter()
                     .map(|stage| stage.map_or_else(|| "<none>".to_string(), ToString::to_string))
                     .collect()
}

#[test]
fn one_stage_per_token_prefix() {
    let stages = build_stages("1 + 2 * 3");
    assert_eq!(stages.len(), count_tokens("1 + 2 * 3") + 1);
    assert_eq!(stages.len(), 6);
    assert_eq!(stages.token_count(), 5);
    assert!(!stages.is_empty());
}

#[test]
fn stages_grow_token_by_token() {
    assert_eq!(rendered("1 + 2 * 3"),
               vec!["<none>",
                    "1",
                    "(1 + _)",
                    "(1 + 2)",
                    "(1 + (2 * _))",
                    "(1 + (2 * 3))"]);
}

#[test]
fn first_stage_is_absent_and_last_is_the_full_tree() {
    let stages = build_stages("1 + 2 * 3");
    assert_eq!(stages.get(0), Some(None));
    assert_eq!(stages.get(6), None);

    let full = ast_build("1 + 2 * 3").unwrap();
    assert_eq!(stages.last(), Some(&full));
    assert_eq!(evaluate(stages.last()), Ok(7.0));
    assert_eq!(evaluate(stages.last()).ok(), evaluate_expression("1 + 2 * 3").ok());
}

#[test]
fn parenthesized_stages() {
    assert_eq!(rendered("(1 + 2) * -3"),
               vec!["<none>",
                    "<none>",
                    "1",
                    "(1 + _)",
                    "(1 + 2)",
                    "(1 + 2)",
                    "((1 + 2) * _)",
                    "((1 + 2) * (-_))",
                    "((1 + 2) * (-3))"]);
}

#[test]
fn empty_input_has_a_single_absent_stage() {
    let stages = build_stages("   ");
    assert_eq!(stages.len(), 1);
    assert_eq!(stages.last(), None);
}

#[test]
fn malformed_input_still_builds_every_stage() {
    let stages = build_stages("1 + ) * ?");
    assert_eq!(stages.len(), 6);

    let expected = Expr::binary(BinaryOperator::Add, Some(Expr::Number(1.0)), None);
    assert_eq!(stages.last(), Some(&expected));

    assert_eq!(rendered("* 3"), vec!["<none>", "(_ * _)", "(_ * 3)"]);
}

#[test]
fn division_by_zero_is_reported_for_the_final_stage() {
    let stages = build_stages("4 / 0");
    assert!(evaluate(stages.last()).is_err());
    assert_eq!(evaluate(stages.get(1).flatten()), Ok(4.0));
}

#[test]
fn stages_own_their_trees() {
    let trees = build_stages("-(2)").into_vec();
    assert_eq!(trees.len(), 5);
    assert!(trees[0].is_none());
    assert_eq!(trees[4].as_ref().map(Expr::node_count), Some(2));
}
