//! Plain-text to HTML rendering for document export.
//!
//! Line-oriented: `# ` and `## ` prefixes become headings, blank lines
//! become breaks, everything else becomes a paragraph. Content is escaped;
//! the document text is untrusted.

/// Escapes text for embedding in HTML.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn format_line(line: &str) -> String {
    if let Some(rest) = line.strip_prefix("# ") {
        format!("<h1>{}</h1>", escape_html(rest))
    } else if let Some(rest) = line.strip_prefix("## ") {
        format!("<h2>{}</h2>", escape_html(rest))
    } else if line.trim().is_empty() {
        "<br>".to_string()
    } else {
        format!("<p>{}</p>", escape_html(line))
    }
}

/// Renders document text as a print-ready standalone HTML page.
pub fn render_html_document(text: &str) -> String {
    let body = text
        .lines()
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <style>
      body {{
        font-family: Arial, sans-serif;
        line-height: 1.6;
        margin: 40px;
        color: #333;
      }}
      .content {{
        max-width: 100%;
        word-wrap: break-word;
      }}
      h1 {{
        font-size: 24px;
        margin-top: 24px;
        margin-bottom: 16px;
        font-weight: bold;
        color: #000;
      }}
      h2 {{
        font-size: 20px;
        margin-top: 20px;
        margin-bottom: 12px;
        font-weight: bold;
        color: #333;
      }}
      p {{
        margin: 8px 0;
      }}
      br {{
        display: block;
        margin: 8px 0;
      }}
    </style>
  </head>
  <body>
    <div class="content">
{body}
    </div>
  </body>
</html>
"#,
        body = body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"A & B"</b>"#),
            "&lt;b&gt;&quot;A &amp; B&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let html = render_html_document("# Title\n## Section\nBody line\n\nNext");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<h2>Section</h2>"));
        assert!(html.contains("<p>Body line</p>"));
        assert!(html.contains("<br>"));
        assert!(html.contains("<p>Next</p>"));
    }

    #[test]
    fn test_content_is_escaped() {
        let html = render_html_document("# <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
