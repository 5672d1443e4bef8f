//! Streaming walker over the `w:body` of `word/document.xml`.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::model::{Block, Paragraph, Table, TableCell, TableRow, TextRun, UnderlineStyle};

use super::options::ParseOptions;

/// Walk the main document part and collect its top-level blocks in order.
pub fn read_body(xml: &str, options: &ParseOptions) -> Result<Vec<Block>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut walker = BodyWalker::default();
    let mut buf = Vec::new();

    loop {
        let event = match reader.read_event_into(&mut buf) {
            Ok(event) => event,
            Err(e) => {
                let pos = reader.buffer_position();
                return walker.recover(Error::Xml(format!("{} at byte {}", e, pos)), options);
            }
        };

        let step = match event {
            Event::Start(ref e) => {
                walker.start(e);
                Ok(())
            }
            Event::Empty(ref e) => {
                walker.empty(e);
                Ok(())
            }
            Event::Text(ref e) => match e.unescape() {
                Ok(text) => {
                    walker.text(&text);
                    Ok(())
                }
                Err(e) => Err(Error::from(e)),
            },
            Event::End(ref e) => {
                walker.end(e.name().as_ref());
                Ok(())
            }
            Event::Eof => break,
            _ => Ok(()),
        };

        if let Err(e) = step {
            return walker.recover(e, options);
        }

        buf.clear();
    }

    Ok(walker.blocks)
}

/// Parser state for the body walk.
///
/// Only one table is open at a time; tables nested in a cell are skipped
/// together with text-box content.
#[derive(Default)]
struct BodyWalker {
    blocks: Vec<Block>,

    table: Option<Table>,
    row: Option<TableRow>,
    cell: Option<TableCell>,
    paragraph: Option<Paragraph>,
    run: Option<TextRun>,

    outline_level: Option<u8>,
    numbering_level: Option<u8>,

    in_ppr: bool,
    in_rpr: bool,
    in_text: bool,

    /// Depth inside a skipped subtree (0 = not skipping)
    skip_depth: usize,
}

impl BodyWalker {
    fn start(&mut self, e: &BytesStart) {
        if self.skip_depth > 0 {
            self.skip_depth += 1;
            return;
        }

        match e.name().as_ref() {
            b"w:txbxContent" => {
                log::debug!("Skipping text box content");
                self.skip_depth = 1;
            }
            // Previous properties of a tracked formatting change
            b"w:pPrChange" | b"w:rPrChange" => self.skip_depth = 1,
            b"w:tbl" => {
                if self.table.is_some() {
                    log::debug!("Skipping nested table");
                    self.skip_depth = 1;
                } else {
                    self.table = Some(Table::new());
                }
            }
            b"w:tr" if self.table.is_some() => self.row = Some(TableRow::default()),
            b"w:tc" if self.row.is_some() => self.cell = Some(TableCell::empty()),
            b"w:p" => self.open_paragraph(),
            b"w:pPr" if self.paragraph.is_some() && self.run.is_none() => self.in_ppr = true,
            b"w:r" if self.paragraph.is_some() => self.run = Some(TextRun::default()),
            b"w:rPr" if self.run.is_some() => self.in_rpr = true,
            b"w:t" if self.run.is_some() => self.in_text = true,
            _ => self.property(e),
        }
    }

    fn empty(&mut self, e: &BytesStart) {
        if self.skip_depth > 0 {
            return;
        }

        match e.name().as_ref() {
            b"w:p" => {
                self.open_paragraph();
                self.close_paragraph();
            }
            b"w:tc" => {
                if let Some(row) = self.row.as_mut() {
                    row.cells.push(TableCell::empty());
                }
            }
            b"w:tr" => {
                if let Some(table) = self.table.as_mut() {
                    table.add_row(TableRow::default());
                }
            }
            b"w:tbl" if self.table.is_none() => self.blocks.push(Block::Table(Table::new())),
            _ => self.property(e),
        }
    }

    fn text(&mut self, text: &str) {
        if self.skip_depth > 0 || !self.in_text {
            return;
        }
        if let Some(run) = self.run.as_mut() {
            run.text.push_str(text);
        }
    }

    fn end(&mut self, name: &[u8]) {
        if self.skip_depth > 0 {
            self.skip_depth -= 1;
            return;
        }

        match name {
            b"w:t" => self.in_text = false,
            b"w:rPr" => self.in_rpr = false,
            b"w:pPr" => self.in_ppr = false,
            b"w:r" => {
                self.in_rpr = false;
                self.in_text = false;
                if let (Some(run), Some(paragraph)) = (self.run.take(), self.paragraph.as_mut()) {
                    if !run.is_empty() {
                        paragraph.add_run(run);
                    }
                }
            }
            b"w:p" => self.close_paragraph(),
            b"w:tc" => {
                if let (Some(cell), Some(row)) = (self.cell.take(), self.row.as_mut()) {
                    row.cells.push(cell);
                }
            }
            b"w:tr" => {
                if let (Some(row), Some(table)) = (self.row.take(), self.table.as_mut()) {
                    table.add_row(row);
                }
            }
            b"w:tbl" => {
                if let Some(table) = self.table.take() {
                    self.blocks.push(Block::Table(table));
                }
            }
            _ => {}
        }
    }

    /// Handle property and inline elements that may appear as either
    /// empty or start tags.
    fn property(&mut self, e: &BytesStart) {
        let name = e.name();

        if self.in_ppr {
            let Some(paragraph) = self.paragraph.as_mut() else {
                return;
            };
            match name.as_ref() {
                b"w:pStyle" => paragraph.style = attr_value(e, b"w:val"),
                b"w:outlineLvl" => self.outline_level = level_value(e),
                b"w:ilvl" => self.numbering_level = level_value(e),
                _ => {}
            }
            return;
        }

        let Some(run) = self.run.as_mut() else {
            return;
        };

        if self.in_rpr {
            match name.as_ref() {
                b"w:b" => run.style.bold = is_toggle_on(e),
                b"w:i" => run.style.italic = is_toggle_on(e),
                b"w:u" => {
                    run.style.underline = Some(
                        attr_value(e, b"w:val")
                            .map(|v| UnderlineStyle::from_ooxml(&v))
                            .unwrap_or(UnderlineStyle::Single),
                    )
                }
                _ => {}
            }
            return;
        }

        match name.as_ref() {
            b"w:tab" => run.text.push('\t'),
            b"w:br" | b"w:cr" => run.text.push('\n'),
            _ => {}
        }
    }

    fn open_paragraph(&mut self) {
        self.paragraph = Some(Paragraph::new());
        self.outline_level = None;
        self.numbering_level = None;
        self.in_ppr = false;
    }

    fn close_paragraph(&mut self) {
        let Some(mut paragraph) = self.paragraph.take() else {
            return;
        };
        paragraph.outline_level = self.outline_level.or(self.numbering_level);
        self.in_ppr = false;

        if let Some(cell) = self.cell.as_mut() {
            cell.paragraphs.push(paragraph);
        } else if self.table.is_none() {
            self.blocks.push(Block::Paragraph(paragraph));
        } else {
            log::debug!("Dropping paragraph outside of a table cell");
        }
    }

    fn recover(self, err: Error, options: &ParseOptions) -> Result<Vec<Block>> {
        if options.is_lenient() {
            log::warn!(
                "Malformed document body, keeping {} blocks read so far: {}",
                self.blocks.len(),
                err
            );
            Ok(self.blocks)
        } else {
            Err(err)
        }
    }
}

/// Read an attribute value by qualified name.
fn attr_value(e: &BytesStart, name: &[u8]) -> Option<String> {
    let attr = e.try_get_attribute(name).ok().flatten()?;
    let value = attr.unescape_value().ok()?.into_owned();
    Some(value)
}

fn level_value(e: &BytesStart) -> Option<u8> {
    attr_value(e, b"w:val").and_then(|v| v.trim().parse().ok())
}

/// `w:b`, `w:i` and friends are on unless `w:val` turns them off.
fn is_toggle_on(e: &BytesStart) -> bool {
    match attr_value(e, b"w:val") {
        Some(v) => !matches!(v.as_str(), "0" | "false" | "off"),
        None => true,
    }
}
