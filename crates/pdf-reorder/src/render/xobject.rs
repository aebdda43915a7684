//! XObject creation for quarter placement
//!
//! Every source page becomes one Form XObject in the output document.
//! Each quarter placement draws that XObject through a clip, so the four
//! quarters of a page share a single copy of its content and resources.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::layout::Rect;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Page tree depth limit when looking up inherited attributes
const MAX_INHERIT_DEPTH: usize = 32;

/// Objects already imported into the output document
#[derive(Debug, Default)]
pub struct ImportCache {
    /// Source object ID -> output object ID for deep-copied objects
    objects: HashMap<ObjectId, ObjectId>,
    /// Source page ID -> output Form XObject ID
    xobjects: HashMap<ObjectId, ObjectId>,
}

impl ImportCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct source pages imported so far
    pub fn imported_pages(&self) -> usize {
        self.xobjects.len()
    }
}

// =============================================================================
// XObject Creation
// =============================================================================

/// Get or create the Form XObject for a source page.
///
/// The XObject's `/BBox` is the page's MediaBox; its `/Resources` are the
/// page's own or inherited resources, deep-copied into `output`.
pub fn page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut ImportCache,
) -> Result<ObjectId> {
    if let Some(&id) = cache.xobjects.get(&page_id) {
        return Ok(id);
    }

    let page_dict = source.get_dictionary(page_id)?;
    let media_box = page_box(source, page_id)?;
    let content_data = get_page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("FormType", Object::Integer(1));
    xobject_dict.set(
        "BBox",
        Object::Array(vec![
            Object::Real(media_box.x),
            Object::Real(media_box.y),
            Object::Real(media_box.right()),
            Object::Real(media_box.top()),
        ]),
    );

    if let Some(resources) = inherited_attribute(source, page_dict, b"Resources") {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, &mut cache.objects)?,
        );
    }

    let id = output.add_object(Stream::new(xobject_dict, content_data));
    cache.xobjects.insert(page_id, id);
    Ok(id)
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            Object::Array(arr) => get_concatenated_content_streams(doc, arr),
            other => Ok(stream_bytes(other)),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

/// Concatenate multiple content streams
fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            result.extend_from_slice(&stream_bytes(doc.get_object(*id)?));
            result.push(b'\n');
        }
    }

    Ok(result)
}

fn stream_bytes(obj: &Object) -> Vec<u8> {
    match obj.as_stream() {
        Ok(stream) => stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone()),
        Err(_) => Vec::new(),
    }
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// The output ID is reserved before descending, so reference cycles
/// (e.g. annotation /P back-links inside resources) terminate.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}

// =============================================================================
// Page Geometry
// =============================================================================

/// Get a page's MediaBox in points, following page tree inheritance.
///
/// Pages with no usable MediaBox anywhere in their ancestry fall back to
/// US Letter.
pub fn page_box(doc: &Document, page_id: ObjectId) -> Result<Rect> {
    let page_dict = doc.get_dictionary(page_id)?;

    let corners = inherited_attribute(doc, page_dict, b"MediaBox")
        .and_then(|obj| resolve(doc, obj).as_array().ok())
        .filter(|arr| arr.len() == 4)
        .and_then(|arr| {
            let nums: Vec<f32> = arr
                .iter()
                .filter_map(|o| extract_number(resolve(doc, o)))
                .collect();
            (nums.len() == 4).then(|| Rect::from_corners(nums[0], nums[1], nums[2], nums[3]))
        });

    Ok(corners.unwrap_or_else(|| {
        Rect::new(0.0, 0.0, DEFAULT_PAGE_DIMENSIONS.0, DEFAULT_PAGE_DIMENSIONS.1)
    }))
}

/// Look up an inheritable page attribute on the page or its ancestors.
fn inherited_attribute<'a>(
    doc: &'a Document,
    page_dict: &'a Dictionary,
    key: &[u8],
) -> Option<&'a Object> {
    let mut dict = page_dict;
    for _ in 0..MAX_INHERIT_DEPTH {
        if let Ok(value) = dict.get(key) {
            return Some(value);
        }
        let parent_id = dict.get(b"Parent").and_then(|p| p.as_reference()).ok()?;
        dict = doc.get_dictionary(parent_id).ok()?;
    }
    None
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
