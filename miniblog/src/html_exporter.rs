//! HTML exporter for the site
//!
//! Walks parsed document trees and emits HTML. This is the only
//! consumer of the parser contract: block nodes map to elements,
//! inline spans to text/strong/code, and code-block lines are joined
//! verbatim. All text is escaped here and nowhere else.

use crate::markdown::{parse, Block, Document, InlineSpan};
use crate::site_config::SiteConfig;
use crate::site_model::{Article, Page};
use crate::text::format_date;

/// Placeholder shown when previewing empty content
pub const EMPTY_PREVIEW: &str = "Nenhum conteudo para pre-visualizar.";

/// Render a parsed document to an HTML fragment
pub fn render_document(doc: &Document) -> String {
    let mut output = String::new();
    for block in &doc.blocks {
        render_block(&mut output, block);
    }
    output
}

/// Parse one markdown body and render it, with a placeholder for empty
/// input
///
/// This is the preview entry point: the parser yields an empty document
/// for blank content, and the placeholder is this renderer's concern,
/// not the parser's.
pub fn preview_fragment(content: &str) -> String {
    let doc = parse(content);
    if doc.is_empty() {
        return format!("<p class=\"placeholder\">{}</p>\n", EMPTY_PREVIEW);
    }
    render_document(&doc)
}

/// Render a single block node
fn render_block(output: &mut String, block: &Block) {
    match block {
        Block::Heading { level, spans } => {
            output.push_str(&format!(
                "<h{}>{}</h{}>\n",
                level,
                render_spans(spans),
                level
            ));
        }

        Block::Paragraph { spans } => {
            output.push_str(&format!("<p>{}</p>\n", render_spans(spans)));
        }

        Block::Blockquote { spans } => {
            output.push_str(&format!("<blockquote>{}</blockquote>\n", render_spans(spans)));
        }

        Block::UnorderedList { items } => {
            output.push_str("<ul>\n");
            for item in items {
                output.push_str(&format!("<li>{}</li>\n", render_spans(&item.spans)));
            }
            output.push_str("</ul>\n");
        }

        Block::OrderedList { items } => {
            // Markers render as written via the value attribute, so the
            // browser does not renumber non-sequential sources
            output.push_str("<ol>\n");
            for item in items {
                output.push_str(&format!(
                    "<li value=\"{}\">{}</li>\n",
                    escape_html(&item.marker),
                    render_spans(&item.spans)
                ));
            }
            output.push_str("</ol>\n");
        }

        Block::CodeBlock { language, lines } => {
            let code = escape_html(&lines.join("\n"));
            if language.is_empty() {
                output.push_str(&format!("<pre><code>{}</code></pre>\n", code));
            } else {
                output.push_str(&format!(
                    "<div class=\"code-language\">{}</div>\n<pre><code class=\"language-{}\">{}</code></pre>\n",
                    escape_html(language),
                    escape_html(language),
                    code
                ));
            }
        }
    }
}

/// Render an inline span sequence to escaped HTML
fn render_spans(spans: &[InlineSpan]) -> String {
    let mut output = String::new();
    for span in spans {
        match span {
            InlineSpan::Text(text) => output.push_str(&escape_html(text)),
            InlineSpan::Bold(text) => {
                output.push_str(&format!("<strong>{}</strong>", escape_html(text)));
            }
            InlineSpan::Code(text) => {
                output.push_str(&format!("<code>{}</code>", escape_html(text)));
            }
        }
    }
    output
}

/// Escape text for HTML element and attribute positions
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Full HTML page for one article, with prev/next navigation
///
/// `prev` is the next-older article, `next` the next-newer one,
/// matching the order of the date-sorted listing.
pub fn article_page(
    config: &SiteConfig,
    article: &Article,
    prev: Option<&Article>,
    next: Option<&Article>,
) -> String {
    let post = &article.post;
    let mut body = String::new();

    body.push_str("<header class=\"post-meta\">\n");
    body.push_str(&format!(
        "<span class=\"category\">{}</span> <span class=\"reading-time\">{}</span>\n",
        escape_html(&post.category),
        escape_html(&post.reading_time)
    ));
    body.push_str(&format!("<h1>{}</h1>\n", escape_html(&post.title)));
    body.push_str(&format!(
        "<time datetime=\"{}\">{}</time>\n",
        escape_html(&post.date),
        escape_html(&format_date(&post.date))
    ));
    body.push_str("</header>\n<hr>\n");

    body.push_str("<article>\n");
    body.push_str(&render_document(&article.document));
    body.push_str("</article>\n");

    body.push_str("<nav class=\"adjacent\">\n");
    if let Some(older) = prev {
        body.push_str(&format!(
            "<a class=\"older\" href=\"{}.html\"><span>Anterior</span> {}</a>\n",
            escape_html(&older.post.slug),
            escape_html(&older.post.title)
        ));
    }
    if let Some(newer) = next {
        body.push_str(&format!(
            "<a class=\"newer\" href=\"{}.html\"><span>Proximo</span> {}</a>\n",
            escape_html(&newer.post.slug),
            escape_html(&newer.post.title)
        ));
    }
    body.push_str("</nav>\n");

    page_shell(config, &post.title, "../", &body)
}

/// Full HTML page listing all articles, newest first
pub fn index_page(config: &SiteConfig, articles: &[Article], pages: &[Page]) -> String {
    let mut body = String::new();

    if let Some(ref description) = config.site_description {
        body.push_str(&format!(
            "<p class=\"description\">{}</p>\n",
            escape_html(description)
        ));
    }

    if !pages.is_empty() {
        body.push_str("<nav class=\"pages\">\n");
        for page in pages {
            body.push_str(&format!(
                "<a href=\"{}.html\">{}</a>\n",
                escape_html(&page.slug),
                escape_html(&page.title)
            ));
        }
        body.push_str("</nav>\n");
    }

    body.push_str("<section class=\"articles\">\n");
    for article in articles {
        let post = &article.post;
        body.push_str("<article class=\"entry\">\n");
        body.push_str(&format!(
            "<span class=\"category\">{}</span> <span class=\"reading-time\">{}</span>\n",
            escape_html(&post.category),
            escape_html(&post.reading_time)
        ));
        body.push_str(&format!(
            "<h2><a href=\"blog/{}.html\">{}</a></h2>\n",
            escape_html(&post.slug),
            escape_html(&post.title)
        ));
        body.push_str(&format!(
            "<time datetime=\"{}\">{}</time>\n",
            escape_html(&post.date),
            escape_html(&format_date(&post.date))
        ));
        body.push_str(&format!(
            "<p class=\"excerpt\">{}</p>\n",
            escape_html(&post.excerpt)
        ));
        body.push_str("</article>\n");
    }
    body.push_str("</section>\n");

    page_shell(config, &config.site_title, "", &body)
}

/// Full HTML page for one static page
pub fn static_page(config: &SiteConfig, page: &Page) -> String {
    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", escape_html(&page.title)));
    body.push_str(&render_document(&page.document));
    page_shell(config, &page.title, "", &body)
}

/// Wrap a body fragment in the document shell shared by every page
///
/// `root` is the relative prefix back to the site root, used by the
/// header and footer links (`""` at the root, `"../"` under blog/).
fn page_shell(config: &SiteConfig, title: &str, root: &str, body: &str) -> String {
    let mut output = String::new();

    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html lang=\"pt-BR\">\n");
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"UTF-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    output.push_str(&format!(
        "<title>{} - {}</title>\n",
        escape_html(title),
        escape_html(&config.site_title)
    ));
    output.push_str("<style>\n");
    output.push_str(CSS_STYLES);
    output.push_str("</style>\n");
    output.push_str("</head>\n");
    output.push_str("<body>\n");
    output.push_str("<div class=\"container\">\n");

    output.push_str(&format!(
        "<header class=\"site-header\"><a href=\"{}index.html\">{}</a></header>\n",
        root,
        escape_html(&config.site_title)
    ));

    output.push_str(body);

    output.push_str("<footer>\n");
    if let Some(ref base_url) = config.base_url {
        output.push_str(&format!("<span>{}</span>\n", escape_html(base_url)));
    }
    output.push_str(&format!(
        "<span>{}</span>\n",
        escape_html(&config.author.name)
    ));
    output.push_str("</footer>\n");

    output.push_str("</div>\n");
    output.push_str("</body>\n");
    output.push_str("</html>\n");

    output
}

/// Shared stylesheet, inlined into every page
const CSS_STYLES: &str = r#"
:root {
    color-scheme: light dark;
}

body {
    font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace;
    background: #fff;
    color: #111;
    margin: 0;
    line-height: 1.6;
}

.container {
    max-width: 42rem;
    margin: 0 auto;
    padding: 3rem 1.25rem;
}

.site-header {
    margin-bottom: 2.5rem;
    font-size: 0.85rem;
    letter-spacing: 0.08em;
    text-transform: uppercase;
}

.site-header a {
    color: inherit;
    text-decoration: none;
    opacity: 0.6;
}

.site-header a:hover {
    opacity: 1;
}

h1 {
    font-size: 1.25rem;
    font-weight: 400;
    margin: 2rem 0 1rem;
}

h2 {
    font-size: 1.05rem;
    font-weight: 400;
    margin: 2rem 0 0.75rem;
    opacity: 0.9;
}

h3 {
    font-size: 0.95rem;
    font-weight: 400;
    margin: 1.5rem 0 0.5rem;
    opacity: 0.8;
}

p {
    font-size: 0.85rem;
    opacity: 0.75;
    margin: 0.75rem 0;
}

p.placeholder {
    text-align: center;
    opacity: 0.35;
    padding: 2.5rem 0;
}

blockquote {
    border-left: 2px solid rgba(0, 0, 0, 0.2);
    padding-left: 1rem;
    margin: 1rem 0;
    font-style: italic;
    opacity: 0.7;
}

ul, ol {
    font-size: 0.85rem;
    opacity: 0.85;
    padding-left: 1.5rem;
    margin: 0.75rem 0;
}

li {
    margin: 0.25rem 0;
}

.code-language {
    font-size: 0.65rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    background: rgba(0, 0, 0, 0.05);
    padding: 0.3rem 1rem;
    border-radius: 4px 4px 0 0;
    opacity: 0.6;
}

pre {
    background: rgba(0, 0, 0, 0.04);
    padding: 1rem;
    border-radius: 0 0 4px 4px;
    overflow-x: auto;
    font-size: 0.8rem;
    margin: 0 0 1rem;
}

code {
    background: rgba(0, 0, 0, 0.05);
    padding: 0.1rem 0.35rem;
    border-radius: 3px;
    font-size: 0.8rem;
}

pre code {
    background: none;
    padding: 0;
}

.post-meta .category,
.entry .category {
    font-size: 0.65rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    background: rgba(0, 0, 0, 0.06);
    padding: 0.15rem 0.5rem;
    border-radius: 3px;
}

.reading-time, time {
    font-size: 0.7rem;
    opacity: 0.4;
}

.entry {
    margin-bottom: 2rem;
}

.entry h2 a {
    color: inherit;
    text-decoration: none;
}

.entry h2 a:hover {
    text-decoration: underline;
}

.excerpt {
    font-size: 0.8rem;
    opacity: 0.6;
}

nav.pages {
    margin-bottom: 2rem;
    font-size: 0.8rem;
}

nav.pages a {
    color: inherit;
    margin-right: 1rem;
}

nav.adjacent {
    display: flex;
    justify-content: space-between;
    gap: 1rem;
    border-top: 1px solid rgba(0, 0, 0, 0.1);
    margin-top: 3rem;
    padding-top: 1.5rem;
    font-size: 0.8rem;
}

nav.adjacent a {
    color: inherit;
    text-decoration: none;
    opacity: 0.7;
}

nav.adjacent a:hover {
    opacity: 1;
}

nav.adjacent span {
    display: block;
    font-size: 0.65rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    opacity: 0.5;
}

hr {
    border: none;
    border-top: 1px solid rgba(0, 0, 0, 0.1);
    margin: 2rem 0;
}

footer {
    display: flex;
    justify-content: space-between;
    border-top: 1px solid rgba(0, 0, 0, 0.1);
    margin-top: 3rem;
    padding-top: 1.5rem;
    font-size: 0.75rem;
    opacity: 0.4;
}

@media (prefers-color-scheme: dark) {
    body {
        background: #000;
        color: #fff;
    }

    blockquote {
        border-left-color: rgba(255, 255, 255, 0.3);
    }

    pre, code, .code-language,
    .post-meta .category, .entry .category {
        background: rgba(255, 255, 255, 0.08);
    }

    nav.adjacent, footer, hr {
        border-top-color: rgba(255, 255, 255, 0.1);
    }
}
"#;
