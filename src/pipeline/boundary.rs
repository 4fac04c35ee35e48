//! Front-matter cut: everything before the first line containing the
//! anchor substring is discarded.

/// The canonical first entry number. Matched as a substring, not as a
/// whole line — see [`skip_front_matter`].
const ANCHOR: &str = "3.1";

/// Diagnostics from the boundary cut.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BoundaryCut {
    pub discarded: usize,
    pub anchor_found: bool,
}

impl BoundaryCut {
    pub fn print(&self) {
        if self.anchor_found {
            println!("Front matter: {} lines discarded before '3.1'", self.discarded);
        } else {
            println!("Front matter: no '3.1' anchor found, text unchanged");
        }
    }
}

/// Return the suffix of `text` starting at the first line that contains
/// `3.1`, or the input unchanged when no such line exists.
///
/// The match is deliberately a substring check: the extracted text does
/// not guarantee the first entry number sits alone on its line, and the
/// surviving front matter never mentions 3.1 in practice. Tightening
/// this to a whole-line match would change which documents anchor.
pub fn skip_front_matter(text: &str) -> (String, BoundaryCut) {
    let lines: Vec<&str> = text.split('\n').collect();

    match lines.iter().position(|line| line.contains(ANCHOR)) {
        Some(index) => (
            lines[index..].join("\n"),
            BoundaryCut {
                discarded: index,
                anchor_found: true,
            },
        ),
        None => (
            text.to_string(),
            BoundaryCut {
                discarded: 0,
                anchor_found: false,
            },
        ),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuts_before_anchor() {
        let text = "Line 1\nLine 2\n3.1 Definition\nLine 4\nLine 5";
        let (out, cut) = skip_front_matter(text);
        assert_eq!(out, "3.1 Definition\nLine 4\nLine 5");
        assert_eq!(cut.discarded, 2);
        assert!(cut.anchor_found);
    }

    #[test]
    fn no_anchor_passes_through() {
        let text = "Line 1\nLine 2\nLine 3\nLine 4\nLine 5";
        let (out, cut) = skip_front_matter(text);
        assert_eq!(out, text);
        assert_eq!(cut.discarded, 0);
        assert!(!cut.anchor_found);
    }

    #[test]
    fn blank_lines_survive_the_cut() {
        let text = "Line 1\n\nLine 2\n\n3.1 Definition\n\nLine 4\n\nLine 5";
        let (out, _) = skip_front_matter(text);
        assert_eq!(out, "3.1 Definition\n\nLine 4\n\nLine 5");
    }

    #[test]
    fn result_is_a_suffix() {
        let text = "alpha\nbeta\n3.1\ngamma\ndelta";
        let (out, _) = skip_front_matter(text);
        assert!(text.ends_with(&out));
    }

    // Known fragility, preserved on purpose: any line merely containing
    // "3.1" anchors the cut, even mid-prose or inside a larger number.
    #[test]
    fn anchor_is_a_substring_match() {
        let text = "see clause 13.1 for details\nmore front matter\n3.1\nabstraction";
        let (out, cut) = skip_front_matter(text);
        assert!(out.starts_with("see clause 13.1"));
        assert_eq!(cut.discarded, 0);
        assert!(cut.anchor_found);
    }
}
