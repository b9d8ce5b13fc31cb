use common::Module;
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use quick_xml::writer::Writer;
use tracing::debug;

use crate::error::RewriteError;

pub const CNXML_NS: &[u8] = b"http://cnx.rice.edu/cnxml";
pub const MDML_NS: &[u8] = b"http://cnx.rice.edu/mdml";

/// Rewrite the module's body in place so its self-references carry the
/// given id and version.
pub async fn replace_id_and_version(
    model: &Module,
    id: &str,
    version: &str,
) -> Result<(), RewriteError> {
    let xml = model.file.read_all().await?;
    let rewritten = rewrite_identity(&xml, id, version)?;
    model.file.write_all(&rewritten).await?;
    debug!(file = model.file.name(), id, version, "rewrote document identity");
    Ok(())
}

/// Return `xml` with its identity markers replaced:
///
/// - the text of `md:content-id` becomes `id`,
/// - the text of `md:version` becomes `version`,
/// - the `module-id` attribute of the root `document` becomes `id`.
///
/// Everything else is copied through untouched. A document without
/// markers comes back unchanged.
pub fn rewrite_identity(xml: &[u8], id: &str, version: &str) -> Result<Vec<u8>, RewriteError> {
    let mut reader = NsReader::from_reader(xml);
    let mut writer = Writer::new(Vec::with_capacity(xml.len()));
    let mut buf = Vec::new();
    // Element depth inside a marker whose old content is being dropped;
    // zero outside one.
    let mut replacing = 0usize;

    loop {
        let (ns, event) = reader.read_resolved_event_into(&mut buf)?;
        let in_mdml = matches!(ns, ResolveResult::Bound(Namespace(uri)) if uri == MDML_NS);
        let in_cnxml = matches!(ns, ResolveResult::Bound(Namespace(uri)) if uri == CNXML_NS);

        match event {
            Event::Eof => break,
            Event::Start(_) if replacing > 0 => replacing += 1,
            Event::End(end) => {
                replacing = replacing.saturating_sub(1);
                if replacing == 0 {
                    writer.write_event(Event::End(end))?;
                }
            }
            _ if replacing > 0 => {}
            Event::Start(start) => {
                if let Some(value) = marker_value(in_mdml, &start, id, version) {
                    writer.write_event(Event::Start(start.borrow()))?;
                    writer.write_event(Event::Text(BytesText::new(value)))?;
                    replacing = 1;
                } else if in_cnxml && is_document_with_module_id(&start)? {
                    writer.write_event(Event::Start(with_module_id(&start, id)?))?;
                } else {
                    writer.write_event(Event::Start(start))?;
                }
            }
            Event::Empty(start) => {
                if let Some(value) = marker_value(in_mdml, &start, id, version) {
                    writer.write_event(Event::Start(start.borrow()))?;
                    writer.write_event(Event::Text(BytesText::new(value)))?;
                    writer.write_event(Event::End(start.to_end()))?;
                } else if in_cnxml && is_document_with_module_id(&start)? {
                    writer.write_event(Event::Empty(with_module_id(&start, id)?))?;
                } else {
                    writer.write_event(Event::Empty(start))?;
                }
            }
            other => writer.write_event(other)?,
        }
        buf.clear();
    }

    Ok(writer.into_inner())
}

fn marker_value<'v>(
    in_mdml: bool,
    start: &BytesStart<'_>,
    id: &'v str,
    version: &'v str,
) -> Option<&'v str> {
    if !in_mdml {
        return None;
    }
    match start.local_name().as_ref() {
        b"content-id" => Some(id),
        b"version" => Some(version),
        _ => None,
    }
}

fn is_document_with_module_id(start: &BytesStart<'_>) -> Result<bool, RewriteError> {
    Ok(start.local_name().as_ref() == b"document"
        && start.try_get_attribute("module-id")?.is_some())
}

/// Copy of `start` with its `module-id` attribute set to `id`.
fn with_module_id(start: &BytesStart<'_>, id: &str) -> Result<BytesStart<'static>, RewriteError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut rewritten = BytesStart::new(name);
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"module-id" {
            rewritten.push_attribute(("module-id", id));
        } else {
            rewritten.push_attribute(attr);
        }
    }
    Ok(rewritten)
}
