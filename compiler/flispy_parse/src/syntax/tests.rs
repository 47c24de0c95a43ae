use super::*;
use pretty_assertions::assert_eq;

fn sample() -> SyntaxNode {
    let mut list = SyntaxNode::branch(SEXPR_TAG, Span::new(0, 1));
    list.push(SyntaxNode::leaf(CHAR_TAG, "(", Span::new(0, 1)));
    list.push(SyntaxNode::leaf(NUMBER_TAG, "5", Span::new(1, 2)));
    list.push(SyntaxNode::leaf(CHAR_TAG, ")", Span::new(2, 3)));
    list
}

#[test]
fn test_push_widens_span() {
    assert_eq!(sample().span(), Span::new(0, 3));
}

#[test]
fn test_tag_contains_is_substring_match() {
    let node = sample();
    assert!(node.tag_contains("sexpr"));
    assert!(node.tag_contains("expr"));
    assert!(!node.tag_contains("qexpr"));
    assert!(node.children()[1].tag_contains("number"));
}

#[test]
fn test_display_dump() {
    let mut root = SyntaxNode::branch(ROOT_TAG, Span::point(0));
    root.push(SyntaxNode::leaf(REGEX_TAG, "", Span::point(0)));
    root.push(sample());
    root.push(SyntaxNode::leaf(REGEX_TAG, "", Span::point(3)));

    let expected = "\
>
  regex
  expr|sexpr|>
    char:0 '('
    expr|number|regex:1 '5'
    char:2 ')'
  regex
";
    assert_eq!(root.to_string(), expected);
}

#[test]
fn test_deep_tree_drops_without_overflow() {
    let mut node = SyntaxNode::leaf(NUMBER_TAG, "1", Span::DUMMY);
    for _ in 0..200_000 {
        let mut parent = SyntaxNode::branch(SEXPR_TAG, Span::DUMMY);
        parent.push(node);
        node = parent;
    }
    drop(node);
}
