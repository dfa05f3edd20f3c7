//! SimpleMind XML export of a single book.
//!
//! The book is the central topic, each distinct chapter label a child topic
//! and each highlight a leaf under its chapter, even when the book returns to
//! a chapter after visiting others. Highlights recorded without a chapter
//! hang directly off the central topic.

use super::{RenderError, RenderOptions};
use crate::format::{DEFAULT_WRAP_WIDTH, get_mm_color, wrap_text};
use crate::model::{Annotation, HighlightedBook};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::collections::HashMap;
use std::io::Cursor;

const CHAPTER_X: f64 = 400.0;
const LEAF_X: f64 = 900.0;
const ROW_HEIGHT: f64 = 90.0;

struct Topic {
    id: usize,
    parent: Option<usize>,
    x: f64,
    y: f64,
    palette: i64,
    text: String,
}

pub fn render_mindmap(book: &HighlightedBook, options: &RenderOptions) -> Result<String, RenderError> {
    let topics = layout(book);

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("simplemind-mindmaps");
    root.push_attribute(("generator", env!("CARGO_PKG_NAME")));
    root.push_attribute(("gen-version", env!("CARGO_PKG_VERSION")));
    root.push_attribute(("doc-version", "3"));
    writer.write_event(Event::Start(root))?;
    writer.write_event(Event::Start(BytesStart::new("mindmap")))?;

    writer.write_event(Event::Start(BytesStart::new("meta")))?;
    let mut title = BytesStart::new("title");
    title.push_attribute(("text", book.heading().as_str()));
    writer.write_event(Event::Empty(title))?;
    let mut created = BytesStart::new("created");
    created.push_attribute(("date", options.date.as_str()));
    writer.write_event(Event::Empty(created))?;
    let mut style = BytesStart::new("style");
    style.push_attribute(("key", "system.soft-colors"));
    writer.write_event(Event::Empty(style))?;
    writer.write_event(Event::End(BytesEnd::new("meta")))?;

    writer.write_event(Event::Start(BytesStart::new("topics")))?;
    for topic in &topics {
        let id = topic.id.to_string();
        let parent = topic.parent.map(|p| p as i64).unwrap_or(-1).to_string();
        let x = format!("{:.2}", topic.x);
        let y = format!("{:.2}", topic.y);
        let palette = topic.palette.to_string();
        let text = topic.text.replace('\n', "\\N");

        let mut elem = BytesStart::new("topic");
        elem.push_attribute(("id", id.as_str()));
        elem.push_attribute(("parent", parent.as_str()));
        elem.push_attribute(("x", x.as_str()));
        elem.push_attribute(("y", y.as_str()));
        elem.push_attribute(("palette", palette.as_str()));
        elem.push_attribute(("text", text.as_str()));
        writer.write_event(Event::Empty(elem))?;
    }
    writer.write_event(Event::End(BytesEnd::new("topics")))?;

    writer.write_event(Event::End(BytesEnd::new("mindmap")))?;
    writer.write_event(Event::End(BytesEnd::new("simplemind-mindmaps")))?;

    let result = writer.into_inner().into_inner();
    Ok(String::from_utf8(result)?)
}

fn layout(book: &HighlightedBook) -> Vec<Topic> {
    let mut topics = vec![Topic {
        id: 0,
        parent: None,
        x: 0.0,
        y: 0.0,
        palette: 1,
        text: wrap_text(&book.heading(), DEFAULT_WRAP_WIDTH),
    }];

    // chapter label -> (topic id, palette), one topic per distinct label
    let mut chapters: HashMap<&str, (usize, i64)> = HashMap::new();
    let mut row = 0.0;

    for annotation in &book.annotations {
        let parent = annotation.chapter_label.as_deref().map(|label| {
            if let Some(existing) = chapters.get(label) {
                return *existing;
            }
            let id = topics.len();
            let palette = get_mm_color(chapters.len() as i64 + 2);
            topics.push(Topic {
                id,
                parent: Some(0),
                x: CHAPTER_X,
                y: row * ROW_HEIGHT,
                palette,
                text: wrap_text(label, DEFAULT_WRAP_WIDTH),
            });
            chapters.insert(label, (id, palette));
            (id, palette)
        });

        let (parent_id, palette, x) = match parent {
            Some((id, palette)) => (id, palette, LEAF_X),
            None => (0, 1, CHAPTER_X),
        };
        topics.push(Topic {
            id: topics.len(),
            parent: Some(parent_id),
            x,
            y: row * ROW_HEIGHT,
            palette,
            text: wrap_text(leaf_text(annotation), DEFAULT_WRAP_WIDTH),
        });
        row += 1.0;
    }

    topics
}

fn leaf_text(annotation: &Annotation) -> &str {
    match annotation.selected_text.as_deref() {
        Some(selected) if !selected.trim().is_empty() => selected,
        _ => annotation.representative_text.as_deref().unwrap_or_default(),
    }
}
