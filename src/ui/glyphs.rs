/// Glyph set used when rendering strands and the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    /// Placed between two symbols of a rendered strand
    pub link: &'static str,
    pub cursor: &'static str,
    pub h_separator: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
}

pub fn select(fancy_requested: bool) -> Glyphs {
    if fancy_requested {
        fancy()
    } else {
        ascii()
    }
}

fn ascii() -> Glyphs {
    Glyphs {
        link: "->",
        cursor: ">",
        h_separator: "-",
        arrow_up: "^",
        arrow_down: "v",
    }
}

fn fancy() -> Glyphs {
    Glyphs {
        link: "→",
        cursor: "▶",
        h_separator: "─",
        arrow_up: "↑",
        arrow_down: "↓",
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        fancy()
    }
}
