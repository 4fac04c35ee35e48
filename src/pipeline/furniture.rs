//! Line-level removal of repeating page furniture: page-number and
//! copyright headers, licensing footers, and figure captions.
//!
//! Each pass trims every line, drops the lines it recognizes, and
//! passes everything else through unchanged — blank lines included, so
//! downstream stages see the same line structure the PDF produced.
//! The passes are mutually exclusive on real input and each one is
//! idempotent.

const ISO_COPYRIGHT_PREFIX: &str = "© ISO/IEC 2017";
const IEEE_COPYRIGHT_PREFIX: &str = "© IEEE 2017";

const LICENSED_TO_PREFIX: &str = "Licensed to ";
const STORE_ORDER_PREFIX: &str = "ISO Store Order: ";
const SINGLE_USER_PREFIX: &str = "Single user licence only, ";
const STANDARD_REF_LINE: &str = "ISO/IEC/IEEE 24765:2017(E)";

const FIGURE_PREFIX: &str = "Figure ";

/// Per-category counts from the header pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderRemoval {
    pub page_numbers: usize,
    pub iso_copyright: usize,
    pub ieee_copyright: usize,
}

impl HeaderRemoval {
    pub fn total(&self) -> usize {
        self.page_numbers + self.iso_copyright + self.ieee_copyright
    }

    pub fn print(&self) {
        println!("Header removal: {} lines", self.total());
        println!("  - Page numbers:      {}", self.page_numbers);
        println!("  - ISO/IEC copyright: {}", self.iso_copyright);
        println!("  - IEEE copyright:    {}", self.ieee_copyright);
    }
}

/// Per-category counts from the footer pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FooterRemoval {
    pub licensed_to: usize,
    pub store_order: usize,
    pub single_user: usize,
    pub standard_ref: usize,
}

impl FooterRemoval {
    pub fn total(&self) -> usize {
        self.licensed_to + self.store_order + self.single_user + self.standard_ref
    }

    pub fn print(&self) {
        println!("Footer removal: {} lines", self.total());
        println!("  - Licensed to:        {}", self.licensed_to);
        println!("  - ISO Store Order:    {}", self.store_order);
        println!("  - Single user licence: {}", self.single_user);
        println!("  - Standard reference: {}", self.standard_ref);
    }
}

/// Count from the figure-caption pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FigureRemoval {
    pub figures: usize,
}

impl FigureRemoval {
    pub fn print(&self) {
        println!("Figure captions removed: {}", self.figures);
    }
}

/// True for a bare page number: every byte an ASCII digit, no sign,
/// no decimal point.
fn is_page_number(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// Drop page numbers and the two copyright header lines.
pub fn remove_headers(text: &str) -> (String, HeaderRemoval) {
    let mut result = Vec::new();
    let mut counts = HeaderRemoval::default();

    for line in text.split('\n') {
        let line = line.trim();

        if line.is_empty() {
            result.push(line);
            continue;
        }
        if is_page_number(line) {
            counts.page_numbers += 1;
            continue;
        }
        if line.starts_with(ISO_COPYRIGHT_PREFIX) {
            counts.iso_copyright += 1;
            continue;
        }
        if line.starts_with(IEEE_COPYRIGHT_PREFIX) {
            counts.ieee_copyright += 1;
            continue;
        }

        result.push(line);
    }

    (result.join("\n"), counts)
}

/// Drop licensing attribution, order-reference, and single-user-licence
/// lines, plus the exact standard-reference citation line.
pub fn remove_footers(text: &str) -> (String, FooterRemoval) {
    let mut result = Vec::new();
    let mut counts = FooterRemoval::default();

    for line in text.split('\n') {
        let line = line.trim();

        if line.is_empty() {
            result.push(line);
            continue;
        }
        if line.starts_with(LICENSED_TO_PREFIX) {
            counts.licensed_to += 1;
            continue;
        }
        if line.starts_with(STORE_ORDER_PREFIX) {
            counts.store_order += 1;
            continue;
        }
        if line.starts_with(SINGLE_USER_PREFIX) {
            counts.single_user += 1;
            continue;
        }
        if line == STANDARD_REF_LINE {
            counts.standard_ref += 1;
            continue;
        }

        result.push(line);
    }

    (result.join("\n"), counts)
}

/// Drop inline figure captions ("Figure ..." lines).
pub fn remove_figure_lines(text: &str) -> (String, FigureRemoval) {
    let mut result = Vec::new();
    let mut counts = FigureRemoval::default();

    for line in text.split('\n') {
        let line = line.trim();

        if line.starts_with(FIGURE_PREFIX) {
            counts.figures += 1;
            continue;
        }
        result.push(line);
    }

    (result.join("\n"), counts)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_removed() {
        let text = "1\n© ISO/IEC 2017 – All rights reserved\n    Some content line\n2\n© IEEE 2017 – All rights reserved\n    Another content line\n3\n    More content";
        let (out, counts) = remove_headers(text);
        assert_eq!(out, "Some content line\nAnother content line\nMore content");
        assert_eq!(counts.page_numbers, 3);
        assert_eq!(counts.iso_copyright, 1);
        assert_eq!(counts.ieee_copyright, 1);
    }

    #[test]
    fn headers_keep_blank_lines() {
        let text = "1\n\n© ISO/IEC 2017 – All rights reserved\n\nSome content line\n\n2\n\n© IEEE 2017 – All rights reserved\n\nAnother content line";
        let (out, _) = remove_headers(text);
        assert_eq!(out, "\n\nSome content line\n\n\n\nAnother content line");
    }

    #[test]
    fn page_number_check_rejects_signs_and_decimals() {
        for line in ["-1", "+2", "3.5", "12a", ""] {
            assert!(!is_page_number(line), "accepted {:?}", line);
        }
        assert!(is_page_number("412"));
    }

    #[test]
    fn footers_removed() {
        let text = "Some content line\nLicensed to Example Corp\nAnother content line\nISO Store Order: 12345\nContent continues\nSingle user licence only, copying prohibited\nFinal content\nISO/IEC/IEEE 24765:2017(E)";
        let (out, counts) = remove_footers(text);
        assert_eq!(
            out,
            "Some content line\nAnother content line\nContent continues\nFinal content"
        );
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.licensed_to, 1);
        assert_eq!(counts.store_order, 1);
        assert_eq!(counts.single_user, 1);
        assert_eq!(counts.standard_ref, 1);
    }

    #[test]
    fn footers_keep_blank_lines() {
        let text = "Some content line\n\nLicensed to Example Corp\n\nAnother content line\n\nISO Store Order: 12345\n\nContent continues\n\nSingle user licence only, copying prohibited\n\nFinal content\n\nISO/IEC/IEEE 24765:2017(E)";
        let (out, _) = remove_footers(text);
        assert_eq!(
            out,
            "Some content line\n\n\nAnother content line\n\n\nContent continues\n\n\nFinal content\n"
        );
    }

    #[test]
    fn standard_ref_is_exact_match() {
        // A prefix-extended citation is content, not furniture.
        let text = "ISO/IEC/IEEE 24765:2017(E) defines terms";
        let (out, counts) = remove_footers(text);
        assert_eq!(out, text);
        assert_eq!(counts.standard_ref, 0);
    }

    #[test]
    fn figure_lines_removed() {
        let text = "First line\nFigure 1: Some diagram\nSecond line\nFigure 2: Another diagram\nLast line";
        let (out, counts) = remove_figure_lines(text);
        assert_eq!(out, "First line\nSecond line\nLast line");
        assert_eq!(counts.figures, 2);
    }

    #[test]
    fn figure_lines_keep_blank_lines() {
        let text = "First line\n\nFigure 1: Some diagram\n\nSecond line";
        let (out, _) = remove_figure_lines(text);
        assert_eq!(out, "First line\n\n\nSecond line");
    }

    #[test]
    fn passes_are_idempotent() {
        let text = "1\n© ISO/IEC 2017 – All rights reserved\nLicensed to Example Corp\nFigure 3 — Overview\ncontent stays";
        let (once, _) = remove_headers(text);
        let (twice, counts) = remove_headers(&once);
        assert_eq!(once, twice);
        assert_eq!(counts.total(), 0);

        let (once, _) = remove_footers(text);
        let (twice, counts) = remove_footers(&once);
        assert_eq!(once, twice);
        assert_eq!(counts.total(), 0);

        let (once, _) = remove_figure_lines(text);
        let (twice, counts) = remove_figure_lines(&once);
        assert_eq!(once, twice);
        assert_eq!(counts.figures, 0);
    }
}
