//! Minimal HTML page shell around a rendered index.

pub const DEFAULT_CSS_PATH: &str = "styles/bootstrap.css";
pub const DEFAULT_TITLE: &str = "Index";

/// Wrap `body` into a complete HTML document.
///
/// Neither `title` nor `body` is escaped; both are inserted as-is.
pub fn wrap(body: &str, css_path: &str, title: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html>\n\
         <head>\n\
         \x20 <meta charset='utf-8'>\n\
         \x20 <meta name='viewport' content='width=device-width, initial-scale=1'>\n\
         \x20 <title>{title}</title>\n\
         \x20 <link rel='stylesheet' href='{css_path}'>\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_layout() {
        let page = wrap("<h2> X</h2>", DEFAULT_CSS_PATH, DEFAULT_TITLE);
        assert!(page.starts_with("<!doctype html>\n<html>\n<head>\n"));
        assert!(page.contains("  <meta charset='utf-8'>\n"));
        assert!(page.contains("  <title>Index</title>\n"));
        assert!(page.contains("  <link rel='stylesheet' href='styles/bootstrap.css'>\n"));
        assert!(page.contains("<body>\n<h2> X</h2>\n</body>\n"));
        assert!(page.ends_with("</html>"));
    }

    #[test]
    fn nothing_is_escaped() {
        let page = wrap("<b>&</b>", "a.css", "A & <B>");
        assert!(page.contains("<title>A & <B></title>"));
        assert!(page.contains("<b>&</b>"));
    }
}
