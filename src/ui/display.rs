//! Display functions for packs

use console::{Style, Term};

use crate::pack::Pack;

const DESCRIPTION_INDENT: usize = 6;
const FALLBACK_WIDTH: usize = 80;

/// How pack listings are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    pub compact: bool,
    pub colour: bool,
    /// Terminal width in columns
    pub width: usize,
}

impl ListLayout {
    /// Layout for stdout; falls back to compact, uncoloured output when piped
    pub fn for_stdout(compact: bool) -> Self {
        let term = Term::stdout();
        let is_term = term.is_term();
        let width = term
            .size_checked()
            .map_or(FALLBACK_WIDTH, |(_, cols)| usize::from(cols));
        Self {
            compact: compact || !is_term,
            colour: is_term && console::colors_enabled(),
            width,
        }
    }

    /// Whether the layout had to be forced to compact mode
    pub fn forced_compact(&self, requested: bool) -> bool {
        self.compact && !requested
    }
}

/// Render one pack: `Display (Id) v.Version` plus a wrapped description
pub fn format_pack(pack: &Pack, layout: &ListLayout) -> String {
    let (name_style, id_style) = if layout.colour {
        (Style::new().blue(), Style::new().green())
    } else {
        (Style::new(), Style::new())
    };

    let mut out = format!(
        "{} ({}) v.{}",
        name_style.apply_to(&pack.display),
        id_style.apply_to(pack.id()),
        pack.version
    );

    if !layout.compact {
        let description = pack
            .description
            .as_deref()
            .unwrap_or("No description available");
        let page_width = layout.width.saturating_sub(DESCRIPTION_INDENT).max(20);
        for line in wrap(description, page_width) {
            out.push('\n');
            out.push_str(&" ".repeat(DESCRIPTION_INDENT));
            out.push_str(&line);
        }
    }

    out
}

pub fn print_pack(pack: &Pack, layout: &ListLayout) {
    println!("{}", format_pack(pack, layout));
}

/// Split text into chunks of at most `width` characters
fn wrap(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}
