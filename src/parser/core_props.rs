//! Document properties from `docProps/core.xml`.

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::model::Metadata;

#[derive(Clone, Copy)]
enum Field {
    Title,
    Author,
    Subject,
    Keywords,
    Created,
    Modified,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"dc:title" => Some(Field::Title),
            b"dc:creator" => Some(Field::Author),
            b"dc:subject" => Some(Field::Subject),
            b"cp:keywords" => Some(Field::Keywords),
            b"dcterms:created" => Some(Field::Created),
            b"dcterms:modified" => Some(Field::Modified),
            _ => None,
        }
    }
}

/// Read the core properties part into document metadata.
///
/// Empty values are left unset; timestamps that do not parse as RFC 3339
/// are dropped with a debug log.
pub fn read_core_properties(xml: &str) -> Result<Metadata> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut metadata = Metadata::default();
    let mut current: Option<Field> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => current = Field::from_name(e.name().as_ref()),
            Ok(Event::Text(e)) => {
                if let Some(field) = current {
                    let value = e
                        .unescape()
                        .map_err(|e| Error::Metadata(e.to_string()))?
                        .trim()
                        .to_string();
                    if !value.is_empty() {
                        store(&mut metadata, field, value);
                    }
                }
            }
            Ok(Event::End(_)) => current = None,
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Metadata(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(metadata)
}

fn store(metadata: &mut Metadata, field: Field, value: String) {
    match field {
        Field::Title => metadata.title = Some(value),
        Field::Author => metadata.author = Some(value),
        Field::Subject => metadata.subject = Some(value),
        Field::Keywords => metadata.keywords = Some(value),
        Field::Created => metadata.created = parse_timestamp(&value),
        Field::Modified => metadata.modified = parse_timestamp(&value),
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            log::debug!("Ignoring unparsable timestamp {:?}: {}", value, e);
            None
        }
    }
}
