//! Static HTML page surface.
//!
//! Cards become nested `<details>` elements:
//!
//! ```text
//! <details class="card" data-search="...">
//!   <summary>TITLE<span class="badge">N 件</span></summary>
//!   <div class="hints">
//!     <details class="hint"><summary>ヒント 1</summary><p>...</p></details>
//!     <details class="hint"><summary>答え</summary><div class="answer">...</div></details>
//!   </div>
//! </details>
//! ```
//!
//! All data values are escaped; only a `Markup` answer body is written raw.

use std::borrow::Cow;
use std::fmt::Write as _;

use quick_xml::escape::escape;

use crate::hints::types::config::PageSettings;
use crate::hints::types::error::Result;
use crate::hints::types::models::{BodyFormat, CardSection, DisplayCard, MessageKind};
use super::surface::Surface;

const STYLE: &str = "\
body{font-family:sans-serif;max-width:48rem;margin:0 auto;padding:1rem}\
#title{cursor:default;user-select:none}\
.card{border:1px solid #ccc;border-radius:8px;margin:.75rem 0;padding:.5rem .75rem}\
.card>summary{font-weight:bold;cursor:pointer}\
.badge{margin-left:.5rem;font-size:.8em;color:#666}\
.hint{margin:.5rem 0 .5rem 1rem}\
.answer{background:#fff4d6;padding:.5rem;border-radius:4px}\
.loading{color:#666;text-align:center;padding:2rem}";

/// An in-memory page with a title element and a content container.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    settings: PageSettings,
    content: Vec<String>,
    notices: Vec<String>,
    cards: usize,
}

impl HtmlPage {
    pub fn new(settings: PageSettings) -> Self {
        Self {
            settings,
            content: Vec::new(),
            notices: Vec::new(),
            cards: 0,
        }
    }

    /// Number of cards currently in the content region.
    pub fn card_count(&self) -> usize {
        self.cards
    }

    /// Acknowledgements shown so far, oldest first.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Inner HTML of the content container.
    pub fn content_html(&self) -> String {
        self.content.concat()
    }

    /// Serialize the full document.
    pub fn to_document(&self) -> String {
        let title = escape(self.settings.title.as_str());
        let mut doc = String::new();
        doc.push_str("<!DOCTYPE html>\n");
        let _ = writeln!(doc, "<html lang=\"{}\">", escape(self.settings.lang.as_str()));
        doc.push_str("<head>\n<meta charset=\"utf-8\">\n");
        doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = writeln!(doc, "<title>{}</title>", title);
        let _ = writeln!(doc, "<style>{}</style>", STYLE);
        doc.push_str("</head>\n<body>\n");
        let _ = writeln!(doc, "<h1 id=\"title\">{}</h1>", title);
        let _ = writeln!(doc, "<main id=\"content\">{}</main>", self.content_html());
        for notice in &self.notices {
            let _ = writeln!(
                doc,
                "<dialog class=\"notice\" open><p>{}</p><form method=\"dialog\"><button>OK</button></form></dialog>",
                escape(notice.as_str())
            );
        }
        doc.push_str("</body>\n</html>\n");
        doc
    }
}

impl Surface for HtmlPage {
    fn clear(&mut self) -> Result<()> {
        self.content.clear();
        self.cards = 0;
        Ok(())
    }

    fn append_card(&mut self, card: &DisplayCard) -> Result<()> {
        self.content.push(card_html(card));
        self.cards += 1;
        Ok(())
    }

    fn show_message(&mut self, _kind: MessageKind, text: &str) -> Result<()> {
        self.content
            .push(format!("<div class=\"loading\">{}</div>", escape(text)));
        Ok(())
    }

    fn notify(&mut self, text: &str) -> Result<()> {
        self.notices.push(text.to_string());
        Ok(())
    }
}

/// Serialize one card as a `<details>` element.
pub fn card_html(card: &DisplayCard) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<details class=\"card\" data-search=\"{}\"><summary>{}<span class=\"badge\">{}</span></summary><div class=\"hints\">",
        escape(card.search_text.as_str()),
        escape(card.title.as_str()),
        escape(card.badge.as_str()),
    );
    for section in &card.hints {
        let _ = write!(
            html,
            "<details class=\"hint\"><summary>{}</summary><p>{}</p></details>",
            escape(section.label.as_str()),
            body_html(section),
        );
    }
    if let Some(answer) = &card.answer {
        let prefix = answer
            .prefix
            .as_deref()
            .map(|p| format!("<strong>{}</strong> ", escape(p)))
            .unwrap_or_default();
        let _ = write!(
            html,
            "<details class=\"hint\"><summary>{}</summary><div class=\"answer\">{}{}</div></details>",
            escape(answer.label.as_str()),
            prefix,
            body_html(answer),
        );
    }
    html.push_str("</div></details>");
    html
}

fn body_html(section: &CardSection) -> Cow<'_, str> {
    match section.format {
        BodyFormat::Text => escape(section.body.as_str()),
        BodyFormat::Markup => Cow::Borrowed(section.body.as_str()),
    }
}
