//! Terminal rendering of markdown output.
//!
//! Uses termimad when colour is enabled and prints the markdown unchanged
//! otherwise. Notices get their own skins so the label carries the outcome:
//! green for success on stdout, red for errors on stderr.

use roadmap_core::{Notice, NoticeKind};
use termimad::{crossterm::style::Color, Alignment, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    success_skin: MadSkin,
    error_skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.headers[0].align = Alignment::Left;
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self {
            rich_enabled,
            skin,
            success_skin: label_skin(Color::Green),
            error_skin: label_skin(Color::Red),
        }
    }

    /// Print markdown to stdout.
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
    }

    /// Print a notice: successes to stdout, errors to stderr.
    pub fn render_notice(&self, notice: &Notice) {
        let text = if self.rich_enabled {
            let skin = match notice.kind {
                NoticeKind::Success => &self.success_skin,
                NoticeKind::Error => &self.error_skin,
            };
            skin.term_text(&notice_markdown(notice)).to_string()
        } else {
            notice.to_string()
        };

        match notice.kind {
            NoticeKind::Success => print!("{text}"),
            NoticeKind::Error => eprint!("{text}"),
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

fn label_skin(color: Color) -> MadSkin {
    let mut skin = MadSkin::default();
    skin.bold.set_fg(color);
    skin
}

/// Notice as markdown with the label in bold.
fn notice_markdown(notice: &Notice) -> String {
    let label = match notice.kind {
        NoticeKind::Success => "Success:",
        NoticeKind::Error => "Error:",
    };
    format!("**{label}** {}\n", notice.message)
}
