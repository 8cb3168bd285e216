/// A forgiving Markdown-dialect to HTML converter
pub mod ast;
pub mod cursor;
pub mod inline;
pub mod matchers;
pub mod parser;
pub mod renderer;

pub use parser::Parser;
pub use renderer::HtmlRenderer;

/// Parse markdown text and render to HTML
pub fn to_html(source: &str) -> String {
    let parser = Parser::new();
    let blocks = parser.parse(source);
    let renderer = HtmlRenderer::new();
    renderer.render(&blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html(""), "");
    }

    #[test]
    fn test_heading() {
        assert_eq!(to_html("# heading"), "<h1>heading</h1>");
    }

    #[test]
    fn test_trailing_space_line_break() {
        assert_eq!(to_html("this is \na new line"), "<p>this is<br>\na new line</p>");
    }

    #[test]
    fn test_basic_image() {
        assert_eq!(to_html("![foo](/url)"), "<p><img src='/url' title='foo' ></p>");
    }

    #[test]
    fn test_angle_brackets_escaped() {
        assert_eq!(to_html("a <b> c"), "<p>a &#60;b&#62; c</p>");
    }
}
