// src/feed/rss.rs

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::{Description, Feed, FeedItem};
use crate::error::FeedError;

/// `&`, `<`, `>`, `"`, `'` to their predefined entities. Not applied inside CDATA.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A literal `]]>` would end the section early; split it across two.
fn cdata_safe(s: &str) -> String {
    s.replace("]]>", "]]]]><![CDATA[>")
}

type XmlWriter = Writer<Vec<u8>>;

fn text_element(w: &mut XmlWriter, name: &str, text: &str) -> Result<(), FeedError> {
    let escaped = escape_xml(text);
    w.write_event(Event::Start(BytesStart::new(name)))?;
    w.write_event(Event::Text(BytesText::from_escaped(escaped.as_str())))?;
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_item(w: &mut XmlWriter, item: &FeedItem) -> Result<(), FeedError> {
    w.write_event(Event::Start(BytesStart::new("item")))?;
    text_element(w, "title", &item.title)?;
    match &item.description {
        Description::Text(text) => text_element(w, "description", text)?,
        Description::Cdata(block) => {
            let block = cdata_safe(block);
            w.write_event(Event::Start(BytesStart::new("description")))?;
            w.write_event(Event::CData(BytesCData::new(block.as_str())))?;
            w.write_event(Event::End(BytesEnd::new("description")))?;
        }
    }
    text_element(w, "pubDate", &item.pub_date)?;
    w.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

/// Serialize as an RSS 2.0 document (UTF-8, two-space indent).
pub fn render(feed: &Feed) -> Result<String, FeedError> {
    let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);

    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    w.write_event(Event::Start(BytesStart::new("rss").with_attributes([("version", "2.0")])))?;
    w.write_event(Event::Start(BytesStart::new("channel")))?;

    let ch = &feed.channel;
    text_element(&mut w, "title", &ch.title)?;
    text_element(&mut w, "link", &ch.link)?;
    text_element(&mut w, "description", &ch.description)?;
    text_element(&mut w, "language", &ch.language)?;

    for item in &feed.items {
        write_item(&mut w, item)?;
    }

    w.write_event(Event::End(BytesEnd::new("channel")))?;
    w.write_event(Event::End(BytesEnd::new("rss")))?;

    let mut xml = String::from_utf8(w.into_inner()).map_err(|e| FeedError::Parse(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}
