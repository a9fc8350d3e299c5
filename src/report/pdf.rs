use super::layout::{paginate, PAGE_HEIGHT, PAGE_WIDTH};
use super::Document;
use crate::error::{RenderError, RenderResult};
use printpdf::{BuiltinFont, Color, Mm, PdfDocument, Pt, Rgb};
use tracing::debug;

fn pdf_err<E: std::fmt::Debug>(e: E) -> RenderError {
    RenderError::Pdf(format!("{:?}", e))
}

/// Map glyphs outside Latin-1 to ASCII stand-ins. The built-in fonts use
/// WinAnsiEncoding, which covers ASCII and U+00A0..=U+00FF.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '→' => out.push_str("->"),
            '•' | '–' | '—' => out.push('-'),
            '✓' => out.push('+'),
            '✗' => out.push('x'),
            '‘' | '’' => out.push('\''),
            '“' | '”' => out.push('"'),
            c if c.is_ascii() || ('\u{a0}'..='\u{ff}').contains(&c) => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// Lay out `doc` and write it as PDF bytes using the Helvetica built-ins.
pub fn render(doc: &Document) -> RenderResult<Vec<u8>> {
    let pages = paginate(doc);
    let (width, height) = (Mm::from(Pt(PAGE_WIDTH)), Mm::from(Pt(PAGE_HEIGHT)));

    let (pdf, first_page, first_layer) = PdfDocument::new(doc.title.as_str(), width, height, "Layer 1");
    let regular = pdf.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
    let bold = pdf.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_err)?;

    for (i, page) in pages.iter().enumerate() {
        let (page_idx, layer_idx) = if i == 0 {
            (first_page, first_layer)
        } else {
            pdf.add_page(width, height, format!("Layer {}", i + 1))
        };
        let layer = pdf.get_page(page_idx).get_layer(layer_idx);
        for line in &page.lines {
            let (r, g, b) = line.style.color();
            layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
            let font = if line.style.bold() { &bold } else { &regular };
            layer.use_text(
                transliterate(&line.text),
                line.style.font_size(),
                Mm::from(Pt(line.x)),
                Mm::from(Pt(line.y)),
                font,
            );
        }
    }

    let bytes = pdf.save_to_bytes().map_err(pdf_err)?;
    debug!(title = %doc.title, pages = pages.len(), bytes = bytes.len(), "rendered pdf");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortfolioProfile;
    use crate::report::charter;

    #[test]
    fn transliterates_symbols() {
        assert_eq!(transliterate("Ops → PM"), "Ops -> PM");
        assert_eq!(transliterate("• ✓ ✗ 4 × 8"), "- + x 4 × 8");
        assert_eq!(transliterate("plain"), "plain");
        assert_eq!(transliterate("\u{1f680} 漢"), "? ?");
    }

    #[test]
    fn latin1_letters_survive() {
        assert_eq!(transliterate("José Müller, Zürich ©"), "José Müller, Zürich ©");
        assert_eq!(transliterate("\u{9f}"), "?");
    }

    #[test]
    fn accented_owner_renders() {
        let profile = PortfolioProfile {
            owner: "José Núñez".to_string(),
            ..PortfolioProfile::default()
        };
        let bytes = render(&charter::build(&profile)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn renders_pdf_bytes() {
        let bytes = render(&charter::build(&PortfolioProfile::default())).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn empty_document_still_renders() {
        let bytes = render(&Document::new("blank")).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
