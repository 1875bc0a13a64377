//! Lenient declaration block parsing on top of `cssparser`.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, Token,
};

use super::value::{normalize_selector, Declaration, Fragment, NestedRule};

enum BodyItem {
    Declaration(Declaration),
    Rule(NestedRule),
}

struct FragmentBodyParser;

impl<'i> DeclarationParser<'i> for FragmentBodyParser {
    type Declaration = BodyItem;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();
        loop {
            let token = match input.next() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };
            // A block here means this was a nested rule like `a:hover { .. }`
            if matches!(token, Token::CurlyBracketBlock) {
                return Err(input.new_custom_error(()));
            }
        }
        let value = input.slice_from(start).trim();
        if value.is_empty() {
            return Err(input.new_custom_error(()));
        }
        Ok(BodyItem::Declaration(Declaration::new(&*name, value)))
    }
}

impl<'i> QualifiedRuleParser<'i> for FragmentBodyParser {
    type Prelude = String;
    type QualifiedRule = BodyItem;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next().is_ok() {}
        let selector = normalize_selector(input.slice_from(start));
        if selector.is_empty() {
            return Err(input.new_custom_error(()));
        }
        Ok(selector)
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        Ok(BodyItem::Rule(NestedRule {
            selector: prelude,
            body: parse_body(input),
        }))
    }
}

impl<'i> AtRuleParser<'i> for FragmentBodyParser {
    type Prelude = ();
    type AtRule = BodyItem;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, BodyItem, ()> for FragmentBodyParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        true
    }
}

fn parse_body(input: &mut Parser<'_, '_>) -> Fragment {
    let mut fragment = Fragment::new();
    let mut body_parser = FragmentBodyParser;
    for item in RuleBodyParser::new(input, &mut body_parser) {
        match item {
            Ok(BodyItem::Declaration(declaration)) => {
                fragment.set(declaration.property, declaration.value)
            }
            Ok(BodyItem::Rule(rule)) => fragment.push_rule(rule),
            Err((_, slice)) => {
                tracing::warn!(declaration = slice.trim(), "skipping invalid style declaration");
            }
        }
    }
    fragment
}

pub(super) fn parse_fragment(css: &str) -> Fragment {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    parse_body(&mut parser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_declarations() {
        let fragment = parse_fragment("color: red; border-color: #ccc;");
        assert_eq!(fragment.get("color"), Some("red"));
        assert_eq!(fragment.get("border-color"), Some("#ccc"));
    }

    #[test]
    fn test_parse_keeps_multi_token_values() {
        let fragment = parse_fragment(
            "border: 1px solid #e6e6e6;\n transition: color 150ms ease, border-color 150ms ease;",
        );
        assert_eq!(fragment.get("border"), Some("1px solid #e6e6e6"));
        assert_eq!(
            fragment.get("transition"),
            Some("color 150ms ease, border-color 150ms ease")
        );
    }

    #[test]
    fn test_parse_without_trailing_semicolon() {
        let fragment = parse_fragment("outline: 0");
        assert_eq!(fragment.get("outline"), Some("0"));
    }

    #[test]
    fn test_parse_skips_invalid_declarations() {
        let fragment = parse_fragment("color: red; cursor: pointer; 42px");
        assert_eq!(fragment.declarations().len(), 2);
        assert_eq!(fragment.get("color"), Some("red"));
        assert_eq!(fragment.get("cursor"), Some("pointer"));
    }

    #[test]
    fn test_parse_skips_empty_value() {
        let fragment = parse_fragment("cursor: pointer; color: ;");
        assert_eq!(fragment.get("color"), None);
        assert_eq!(fragment.get("cursor"), Some("pointer"));
    }

    #[test]
    fn test_parse_repeated_property_takes_later_value() {
        let fragment = parse_fragment("color: red; color: blue;");
        assert_eq!(fragment.declarations().len(), 1);
        assert_eq!(fragment.get("color"), Some("blue"));
    }

    #[test]
    fn test_parse_nested_rules() {
        let fragment = parse_fragment(
            "color: black;\n&:focus,\n&:active {\n  border-color: blue;\n}\n&:disabled { cursor: not-allowed; }",
        );
        assert_eq!(fragment.get("color"), Some("black"));
        assert_eq!(fragment.rules().len(), 2);
        assert_eq!(
            fragment.rule("&:focus, &:active").unwrap().get("border-color"),
            Some("blue")
        );
        assert_eq!(
            fragment.rule("&:disabled").unwrap().get("cursor"),
            Some("not-allowed")
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_fragment("").is_empty());
        assert!(parse_fragment("   \n ").is_empty());
    }
}
