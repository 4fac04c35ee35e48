pub mod boundary;
pub mod furniture;
pub mod segment;

use boundary::BoundaryCut;
use furniture::{FigureRemoval, FooterRemoval, HeaderRemoval};

/// Diagnostics from a full cleanup run.
#[derive(Debug, Default, Clone)]
pub struct CleanStats {
    pub headers: HeaderRemoval,
    pub footers: FooterRemoval,
    pub boundary: BoundaryCut,
    pub figures: FigureRemoval,
}

impl CleanStats {
    pub fn print(&self) {
        self.headers.print();
        self.footers.print();
        self.boundary.print();
        self.figures.print();
    }
}

/// Four-pass cleanup: header furniture → footer furniture →
/// front-matter cut at the 3.1 anchor → figure captions.
///
/// Text cleaned here must be segmented without the inline figure skip;
/// the caption pass already ran.
pub fn clean_text(text: &str) -> (String, CleanStats) {
    let (text, headers) = furniture::remove_headers(text);
    let (text, footers) = furniture::remove_footers(&text);
    let (text, boundary) = boundary::skip_front_matter(&text);
    let (text, figures) = furniture::remove_figure_lines(&text);

    (
        text,
        CleanStats {
            headers,
            footers,
            boundary,
            figures,
        },
    )
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::segment::{extract_entries, SegmentOptions};
    use super::*;

    #[test]
    fn full_pipeline_on_fixture() {
        let raw = std::fs::read_to_string("tests/fixtures/pages.txt").unwrap();
        let (cleaned, stats) = clean_text(&raw);

        assert!(stats.boundary.anchor_found);
        assert!(stats.headers.page_numbers >= 2);
        assert!(stats.headers.iso_copyright >= 1);
        assert!(stats.headers.ieee_copyright >= 1);
        assert!(stats.footers.total() >= 3);
        assert_eq!(stats.figures.figures, 1);
        assert!(cleaned.starts_with("3.1"));

        let entries = extract_entries(&cleaned, &SegmentOptions::default());
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].word_number, "3.1");
        assert_eq!(entries[0].word, "abstraction");
        assert_eq!(
            entries[0].description,
            "view of an object that focuses on the information relevant to a particular purpose\ncf. information hiding\nEXAMPLE: a numerical weather model"
        );

        assert_eq!(entries[1].word_number, "3.2");
        assert_eq!(entries[1].word, "acceptance criteria");
        assert_eq!(
            entries[1].description,
            "criteria that a system or component must satisfy in order to be accepted\nNote 1 to entry: acceptance criteria are defined by the acquirer."
        );

        assert_eq!(entries[2].word_number, "3.3");
        assert_eq!(entries[2].word, "activity");
        assert_eq!(entries[2].description, "set of cohesive tasks of a process");
    }

    #[test]
    fn cleanup_is_idempotent_after_anchor() {
        let raw = std::fs::read_to_string("tests/fixtures/pages.txt").unwrap();
        let (once, _) = clean_text(&raw);
        let (twice, stats) = clean_text(&once);
        assert_eq!(once, twice);
        assert_eq!(stats.headers.total(), 0);
        assert_eq!(stats.footers.total(), 0);
        assert_eq!(stats.figures.figures, 0);
    }
}
