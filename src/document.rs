use std::io::{BufRead, Write};
use std::str::FromStr;

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

use crate::errors::{Error, Result};
use crate::geometry::{pt, BoundingBox, Point};
use crate::types::{attr_split, strp};

/// The `viewBox` of a root `<svg>` element: `min_x min_y width height`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewBox {
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(
            self.min_x,
            self.min_x + self.width,
            self.min_y,
            self.min_y + self.height,
        )
    }

    /// Midpoint of the min and max corners
    pub fn center(&self) -> Point {
        pt(
            self.min_x + self.width / 2.,
            self.min_y + self.height / 2.,
        )
    }
}

impl FromStr for ViewBox {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<String> = attr_split(s).collect();
        if let [min_x, min_y, width, height] = parts.as_slice() {
            Ok(Self {
                min_x: strp(min_x)?,
                min_y: strp(min_y)?,
                width: strp(width)?,
                height: strp(height)?,
            })
        } else {
            Err(Error::MalformedInput(format!(
                "viewBox needs four values, got '{s}'"
            )))
        }
    }
}

/// An SVG icon document holding a single top-level `<path>`.
///
/// The full event stream is kept so that everything other than the path
/// data is written back exactly as it was read.
#[derive(Clone, Debug)]
pub struct SvgDocument {
    events: Vec<Event<'static>>,
    /// Index of the root `<svg>` element in `events`
    root: usize,
    /// Indices of `<path>` elements which are direct children of the root
    paths: Vec<usize>,
}

fn element<'a>(event: &'a Event<'static>) -> Option<&'a BytesStart<'static>> {
    match event {
        Event::Start(bs) | Event::Empty(bs) => Some(bs),
        _ => None,
    }
}

fn attribute(bs: &BytesStart, name: &str) -> Result<Option<String>> {
    for attr in bs.attributes() {
        let attr = attr.map_err(Error::from_err)?;
        if attr.key.as_ref() == name.as_bytes() {
            let value = attr.unescape_value().map_err(Error::from_err)?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

impl SvgDocument {
    pub fn from_reader(reader: &mut dyn BufRead) -> Result<Self> {
        let mut reader = Reader::from_reader(reader);

        let mut events = Vec::new();
        let mut buf = Vec::new();
        let mut root = None;
        let mut paths = Vec::new();
        let mut depth = 0;

        loop {
            let ev = reader.read_event_into(&mut buf).map_err(|e| {
                Error::Document(format!(
                    "XML error near offset {}: {e}",
                    reader.buffer_position()
                ))
            })?;
            let index = events.len();
            match &ev {
                Event::Eof => break,
                Event::Start(bs) | Event::Empty(bs) => {
                    if depth == 0 && root.is_none() {
                        if bs.local_name().as_ref() != b"svg" {
                            let name = String::from_utf8(bs.name().as_ref().to_vec())?;
                            return Err(Error::MalformedInput(format!(
                                "root element is <{name}>, not <svg>"
                            )));
                        }
                        root = Some(index);
                    } else if depth == 1 && bs.local_name().as_ref() == b"path" {
                        paths.push(index);
                    }
                    if matches!(ev, Event::Start(_)) {
                        depth += 1;
                    }
                }
                Event::End(_) => depth -= 1,
                _ => {}
            }
            events.push(ev.into_owned());
            buf.clear();
        }

        let root = root.ok_or_else(|| Error::MalformedInput("no <svg> element".to_string()))?;
        debug!(events = events.len(), paths = paths.len(), "read document");
        Ok(Self {
            events,
            root,
            paths,
        })
    }

    fn root_element(&self) -> Result<&BytesStart<'static>> {
        element(&self.events[self.root])
            .ok_or_else(|| Error::Document("root is not an element".to_string()))
    }

    /// Index of the single top-level path element.
    fn path_index(&self) -> Result<usize> {
        match self.paths.as_slice() {
            [] => Err(Error::MalformedInput("no top-level <path> element".to_string())),
            [idx] => Ok(*idx),
            many => Err(Error::UnsupportedInput(format!(
                "{} top-level <path> elements; only one is supported",
                many.len()
            ))),
        }
    }

    pub fn view_box(&self) -> Result<ViewBox> {
        attribute(self.root_element()?, "viewBox")?
            .ok_or_else(|| Error::MalformedInput("root <svg> has no viewBox".to_string()))?
            .parse()
    }

    /// The `d` attribute of the document's single top-level path
    pub fn path_data(&self) -> Result<String> {
        let idx = self.path_index()?;
        let bs = element(&self.events[idx])
            .ok_or_else(|| Error::Document("path is not an element".to_string()))?;
        attribute(bs, "d")?
            .ok_or_else(|| Error::MalformedInput("<path> has no 'd' attribute".to_string()))
    }

    /// A copy of this document with the path's `d` attribute replaced.
    pub fn with_path_data(&self, d: &str) -> Result<Self> {
        let idx = self.path_index()?;
        let (orig, empty) = match &self.events[idx] {
            Event::Start(bs) => (bs, false),
            Event::Empty(bs) => (bs, true),
            _ => return Err(Error::Document("path is not an element".to_string())),
        };

        let name = String::from_utf8(orig.name().as_ref().to_vec())?;
        let mut replaced = BytesStart::new(name);
        for attr in orig.attributes() {
            let attr = attr.map_err(Error::from_err)?;
            if attr.key.as_ref() == b"d" {
                replaced.push_attribute(Attribute::from(("d", d)));
            } else {
                replaced.push_attribute(attr);
            }
        }

        let mut doc = self.clone();
        doc.events[idx] = if empty {
            Event::Empty(replaced)
        } else {
            Event::Start(replaced)
        };
        Ok(doc)
    }

    pub fn write_to(&self, writer: &mut dyn Write) -> Result<()> {
        let mut writer = Writer::new(writer);
        for event in &self.events {
            writer.write_event(event.clone())?;
        }
        Ok(())
    }
}

impl FromStr for SvgDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(&mut s.as_bytes())
    }
}
