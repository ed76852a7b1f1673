//! The `PdfSurface` drawing interface and its `lopdf`-backed
//! implementation. This is the only module that touches `lopdf` object
//! internals directly; [`render`](crate::render), [`marks`](crate::marks),
//! and `press-cover`'s template emitter all work in terms of
//! [`PageHandle`]/[`EmbeddedHandle`]/[`ImageHandle`] and never name a
//! `lopdf` type themselves.

use std::collections::HashMap;

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use press_geometry::{PrintError, Rect};

/// A page created on a surface via [`PdfSurface::add_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageHandle(usize);

/// A source page embedded into a surface via [`PdfSurface::embed_page`],
/// ready to be placed with [`PdfSurface::draw_embedded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmbeddedHandle(ObjectId);

/// A raster image embedded via [`PdfSurface::embed_png`], ready to be
/// placed with [`PdfSurface::draw_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(ObjectId);

/// Where and at what scale an embedded page lands on its host page.
/// `rotated` applies a 180-degree turn about the placed rect's far
/// corner, matching a duplex work-and-turn flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotated: bool,
}

/// A line's stroke-dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    Dashed,
}

/// The engine's view of a PDF drawing backend, decoupling
/// [`plan`](crate::plan)/[`paginate`](crate::paginate)/[`marks`](crate::marks)/
/// [`render`](crate::render) from any particular PDF library. Every
/// method operates on opaque handles; only [`LopdfSurface`] knows these
/// handles are `lopdf` object ids underneath.
pub trait PdfSurface {
    /// Start a new page of the given size, in points.
    fn add_page(&mut self, width_pt: f64, height_pt: f64) -> PageHandle;

    /// Embed one page of `source` (by its index in reading order) as a
    /// reusable Form XObject. `clip_box`, when given, restricts the
    /// embedded page's bounding box instead of using its full media box.
    fn embed_page(
        &mut self,
        source: &InputDocument,
        page_index: usize,
        clip_box: Option<Rect>,
    ) -> Result<EmbeddedHandle, PrintError>;

    /// Draw a previously embedded page onto `page` at `placement`.
    fn draw_embedded(&mut self, page: PageHandle, embedded: EmbeddedHandle, placement: Placement);

    /// Draw a rectangle, either filled with `rgb` or stroked at
    /// `line_width_pt` with `rgb`/`dash`.
    fn draw_rectangle(&mut self, page: PageHandle, rect: Rect, paint: RectanglePaint);

    /// Draw a straight line segment.
    fn draw_line(
        &mut self,
        page: PageHandle,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width_pt: f64,
        rgb: (f64, f64, f64),
        dash: LineDash,
    );

    /// Draw one line of left-aligned Helvetica text with its baseline at
    /// `(x, y)`.
    fn draw_text(&mut self, page: PageHandle, x: f64, y: f64, size_pt: f64, text: &str);

    /// Embed a raw, uncompressed RGB raster (`width_px * height_px * 3`
    /// bytes) as a reusable Image XObject.
    fn embed_png(
        &mut self,
        rgb_bytes: &[u8],
        width_px: u32,
        height_px: u32,
    ) -> Result<ImageHandle, PrintError>;

    /// Draw a previously embedded image onto `page`, scaled to fill `rect`.
    fn draw_image(&mut self, page: PageHandle, image: ImageHandle, rect: Rect);

    /// Output pages committed so far, across every surface created by
    /// this job. Used by [`crate::chunk::ChunkPolicy`] to decide when to
    /// flush.
    fn page_count(&self) -> usize;

    /// A running estimate of serialized content size, in bytes. Used by
    /// [`crate::chunk::ChunkPolicy`] alongside `page_count`.
    fn estimated_bytes(&self) -> u64;

    /// Finalize the surface into a single serialized PDF document.
    fn finish(self: Box<Self>) -> Result<Vec<u8>, PrintError>;
}

/// How a rectangle is painted by [`PdfSurface::draw_rectangle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RectanglePaint {
    Fill { rgb: (f64, f64, f64) },
    Stroke { rgb: (f64, f64, f64), width_pt: f64, dash: LineDash },
}

/// Creates fresh [`PdfSurface`] instances. The engine asks for a new one
/// every time [`crate::chunk::ChunkPolicy`] decides the current one is
/// full, so a job that splits across chunks never needs more than one
/// surface alive at a time.
pub trait PdfSurfaceFactory: Send + Sync {
    fn create(&self) -> Box<dyn PdfSurface>;
}

/// The default factory, producing [`LopdfSurface`]s.
pub struct LopdfSurfaceFactory;

impl PdfSurfaceFactory for LopdfSurfaceFactory {
    fn create(&self) -> Box<dyn PdfSurface> {
        Box::new(LopdfSurface::new())
    }
}

/// A loaded input document plus the object ids of its pages, in reading
/// order. Loading a source PDF is a read-only concern distinct from the
/// output surface, so it stays a plain struct rather than a
/// `PdfSurface` method — the resource-ownership contract is that the
/// caller loads and drops `InputDocument`s, while the surface owns only
/// what it has embedded or drawn.
pub struct InputDocument {
    pub(crate) document: Document,
    pub page_ids: Vec<ObjectId>,
}

impl InputDocument {
    pub fn load(bytes: &[u8]) -> Result<Self, PrintError> {
        let document =
            Document::load_mem(bytes).map_err(|e| PrintError::PdfParseError(e.to_string()))?;
        let page_ids: Vec<ObjectId> = document.get_pages().into_values().collect();
        Ok(Self { document, page_ids })
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn page_size_pt(&self, index: usize) -> Result<(f64, f64), PrintError> {
        let page_id = *self
            .page_ids
            .get(index)
            .ok_or_else(|| PrintError::PdfParseError(format!("no page at index {index}")))?;
        get_page_dimensions(&self.document, page_id)
    }
}

/// Cache of source object id -> output object id, scoped to one output
/// document. Re-embedding the same source page reuses the same copied
/// Resources subgraph rather than duplicating it.
#[derive(Default)]
struct XObjectCache {
    copied: HashMap<ObjectId, ObjectId>,
}

/// One page accumulated on a [`LopdfSurface`] before [`LopdfSurface::finish`]
/// writes it into the underlying document.
struct PageRecord {
    width_pt: f64,
    height_pt: f64,
    content: String,
    xobjects: Dictionary,
    fonts: Dictionary,
}

impl PageRecord {
    fn new(width_pt: f64, height_pt: f64) -> Self {
        let mut fonts = Dictionary::new();
        set_helvetica(&mut fonts);
        Self { width_pt, height_pt, content: String::new(), xobjects: Dictionary::new(), fonts }
    }

    fn name_xobject(&mut self, object_id: ObjectId) -> String {
        let name = format!("X{}", self.xobjects.len());
        self.xobjects.set(name.as_bytes(), Object::Reference(object_id));
        name
    }
}

/// The concrete `lopdf`-backed [`PdfSurface`]. Grounded on the teacher's
/// `pdf-impose::render::xobject` (Form XObject creation, deep object
/// copy, page-content extraction) and `pdf-impose::render::page`
/// (content-stream assembly, transform matrices) — the mechanics are
/// the same; what changed is that they now live behind the trait
/// instead of being called on `lopdf::Document` from `render.rs`
/// directly.
pub struct LopdfSurface {
    document: Document,
    pages: Vec<PageRecord>,
    xobject_cache: XObjectCache,
    bytes_estimate: u64,
}

impl LopdfSurface {
    pub fn new() -> Self {
        Self {
            document: Document::with_version("1.7"),
            pages: Vec::new(),
            xobject_cache: XObjectCache::default(),
            bytes_estimate: 0,
        }
    }

    fn page_mut(&mut self, page: PageHandle) -> &mut PageRecord {
        &mut self.pages[page.0]
    }
}

impl Default for LopdfSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSurface for LopdfSurface {
    fn add_page(&mut self, width_pt: f64, height_pt: f64) -> PageHandle {
        let handle = PageHandle(self.pages.len());
        self.pages.push(PageRecord::new(width_pt, height_pt));
        handle
    }

    fn embed_page(
        &mut self,
        source: &InputDocument,
        page_index: usize,
        clip_box: Option<Rect>,
    ) -> Result<EmbeddedHandle, PrintError> {
        let page_id = *source
            .page_ids
            .get(page_index)
            .ok_or_else(|| PrintError::PdfParseError(format!("no page at index {page_index}")))?;
        let xobject_id = create_page_xobject(
            &mut self.document,
            &source.document,
            page_id,
            clip_box,
            &mut self.xobject_cache,
        )?;
        Ok(EmbeddedHandle(xobject_id))
    }

    fn draw_embedded(&mut self, page: PageHandle, embedded: EmbeddedHandle, placement: Placement) {
        let object_id = embedded.0;
        let record = self.page_mut(page);
        let name = record.name_xobject(object_id);
        let ops = placement_ops(&name, &placement);
        self.bytes_estimate += ops.len() as u64;
        self.page_mut(page).content.push_str(&ops);
    }

    fn draw_rectangle(&mut self, page: PageHandle, rect: Rect, paint: RectanglePaint) {
        let ops = match paint {
            RectanglePaint::Fill { rgb } => format!(
                "q\n{} {} {} rg\n{} {} {} {} re f\nQ\n",
                rgb.0, rgb.1, rgb.2, rect.x, rect.y, rect.width, rect.height
            ),
            RectanglePaint::Stroke { rgb, width_pt, dash } => format!(
                "q\n{} {} {} RG\n{width_pt} w\n{}\n{} {} {} {} re S\nQ\n",
                rgb.0,
                rgb.1,
                rgb.2,
                dash_pattern(dash),
                rect.x,
                rect.y,
                rect.width,
                rect.height
            ),
        };
        self.bytes_estimate += ops.len() as u64;
        self.page_mut(page).content.push_str(&ops);
    }

    fn draw_line(
        &mut self,
        page: PageHandle,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width_pt: f64,
        rgb: (f64, f64, f64),
        dash: LineDash,
    ) {
        let ops = format!(
            "q\n{} {} {} RG\n{width_pt} w\n{}\n{x1} {y1} m {x2} {y2} l S\nQ\n",
            rgb.0,
            rgb.1,
            rgb.2,
            dash_pattern(dash)
        );
        self.bytes_estimate += ops.len() as u64;
        self.page_mut(page).content.push_str(&ops);
    }

    fn draw_text(&mut self, page: PageHandle, x: f64, y: f64, size_pt: f64, text: &str) {
        let ops =
            format!("q\n0 0 0 rg\nBT /F1 {size_pt} Tf {x} {y} Td ({}) Tj ET\nQ\n", escape_pdf_text(text));
        self.bytes_estimate += ops.len() as u64;
        self.page_mut(page).content.push_str(&ops);
    }

    fn embed_png(
        &mut self,
        rgb_bytes: &[u8],
        width_px: u32,
        height_px: u32,
    ) -> Result<ImageHandle, PrintError> {
        let expected = width_px as usize * height_px as usize * 3;
        if rgb_bytes.len() != expected {
            return Err(PrintError::PdfRenderError(format!(
                "raster buffer is {} bytes, expected {expected} for a {width_px}x{height_px} RGB image",
                rgb_bytes.len()
            )));
        }
        let mut image_dict = Dictionary::new();
        image_dict.set("Type", Object::Name(b"XObject".to_vec()));
        image_dict.set("Subtype", Object::Name(b"Image".to_vec()));
        image_dict.set("Width", Object::Integer(width_px as i64));
        image_dict.set("Height", Object::Integer(height_px as i64));
        image_dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
        image_dict.set("BitsPerComponent", Object::Integer(8));
        let object_id = self.document.add_object(Stream::new(image_dict, rgb_bytes.to_vec()));
        Ok(ImageHandle(object_id))
    }

    fn draw_image(&mut self, page: PageHandle, image: ImageHandle, rect: Rect) {
        let object_id = image.0;
        let record = self.page_mut(page);
        let name = record.name_xobject(object_id);
        let ops = format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            rect.width, rect.height, rect.x, rect.y, name
        );
        self.bytes_estimate += ops.len() as u64;
        self.page_mut(page).content.push_str(&ops);
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn estimated_bytes(&self) -> u64 {
        self.bytes_estimate
    }

    fn finish(mut self: Box<Self>) -> Result<Vec<u8>, PrintError> {
        let pages_tree_id = self.document.new_object_id();
        let mut page_refs = Vec::with_capacity(self.pages.len());

        for record in std::mem::take(&mut self.pages) {
            let mut resources = Dictionary::new();
            resources.set("XObject", Object::Dictionary(record.xobjects));
            resources.set("Font", Object::Dictionary(record.fonts));

            let content_id =
                self.document.add_object(Stream::new(Dictionary::new(), record.content.into_bytes()));

            let mut page_dict = Dictionary::new();
            page_dict.set("Type", Object::Name(b"Page".to_vec()));
            page_dict.set("Parent", Object::Reference(pages_tree_id));
            page_dict.set(
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(record.width_pt as f32),
                    Object::Real(record.height_pt as f32),
                ]),
            );
            page_dict.set("Contents", Object::Reference(content_id));
            page_dict.set("Resources", Object::Dictionary(resources));

            let page_id = self.document.add_object(page_dict);
            page_refs.push(Object::Reference(page_id));
        }

        let count = page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.document.objects.insert(pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.document.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_tree_id)),
        ]));
        self.document.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        self.document
            .save_to(&mut buffer)
            .map_err(|e| PrintError::PdfRenderError(e.to_string()))?;
        Ok(buffer)
    }
}

fn dash_pattern(dash: LineDash) -> &'static str {
    match dash {
        LineDash::Solid => "[] 0 d",
        LineDash::Dashed => "[4 3] 0 d",
    }
}

fn set_helvetica(fonts: &mut Dictionary) {
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    fonts.set("F1", Object::Dictionary(font_dict));
}

/// Build the `cm`/`Do` placement command for one embedded page: scale
/// and position per `placement`, applying a 180-degree rotation about
/// the placed rect's far corner when `placement.rotated` is set.
fn placement_ops(name: &str, placement: &Placement) -> String {
    if placement.rotated {
        let rot_x = placement.x;
        let rot_y = placement.y;
        format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            -placement.scale, -placement.scale, rot_x, rot_y, name
        )
    } else {
        format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            placement.scale, placement.scale, placement.x, placement.y, name
        )
    }
}

fn escape_pdf_text(text: &str) -> String {
    text.replace('\\', "\\\\").replace('(', "\\(").replace(')', "\\)")
}

/// Create a Form XObject in `output` wrapping the page at `page_id` in
/// `source`, caching the copy so repeated embeds of the same page are
/// cheap. `clip_box`, when given, overrides the embedded page's BBox.
fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    clip_box: Option<Rect>,
    cache: &mut XObjectCache,
) -> Result<ObjectId, PrintError> {
    let page_dict =
        source.get_dictionary(page_id).map_err(|e| PrintError::PdfParseError(e.to_string()))?;

    let media_box = match clip_box {
        Some(r) => vec![
            Object::Real(r.x as f32),
            Object::Real(r.y as f32),
            Object::Real(r.right() as f32),
            Object::Real(r.top() as f32),
        ],
        None => page_dict
            .get(b"MediaBox")
            .and_then(|o| o.as_array())
            .cloned()
            .unwrap_or_else(|_| default_media_box()),
    };

    let content_data = get_page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("BBox", Object::Array(media_box));
    xobject_dict.set("FormType", Object::Integer(1));

    if let Ok(resources) = page_dict.get(b"Resources") {
        xobject_dict.set("Resources", copy_object_deep(output, source, resources, cache)?);
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

fn default_media_box() -> Vec<Object> {
    vec![Object::Integer(0), Object::Integer(0), Object::Real(612.0), Object::Real(792.0)]
}

fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>, PrintError> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()),
    };
    match contents {
        Object::Reference(id) => get_single_content_stream(doc, *id),
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

fn get_single_content_stream(doc: &Document, id: ObjectId) -> Result<Vec<u8>, PrintError> {
    match doc.get_object(id).ok().and_then(|o| o.as_stream().ok()) {
        Some(stream) => Ok(stream.decompressed_content().unwrap_or_else(|_| stream.content.clone())),
        None => Ok(Vec::new()),
    }
}

fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>, PrintError> {
    let mut result = Vec::new();
    for obj in refs {
        if let Object::Reference(id) = obj {
            if let Some(stream) = doc.get_object(*id).ok().and_then(|o| o.as_stream().ok()) {
                let content = stream.decompressed_content().unwrap_or_else(|_| stream.content.clone());
                result.extend_from_slice(&content);
                result.push(b'\n');
            }
        }
    }
    Ok(result)
}

/// Deep-copy an object (and everything it references) from `source` to
/// `output`, following the cache so shared subgraphs are copied once.
fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut XObjectCache,
) -> Result<Object, PrintError> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.copied.get(id) {
                return Ok(Object::Reference(new_id));
            }
            let referenced =
                source.get_object(*id).map_err(|e| PrintError::PdfParseError(e.to_string()))?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            let new_id = output.add_object(copied);
            cache.copied.insert(*id, new_id);
            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>, PrintError> =
                arr.iter().map(|item| copy_object_deep(output, source, item, cache)).collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        _ => Ok(obj.clone()),
    }
}

/// Page dimensions (width, height) in points from the page's MediaBox.
fn get_page_dimensions(doc: &Document, page_id: ObjectId) -> Result<(f64, f64), PrintError> {
    let page_dict =
        doc.get_dictionary(page_id).map_err(|e| PrintError::PdfParseError(e.to_string()))?;
    match page_dict.get(b"MediaBox").and_then(|o| o.as_array()) {
        Ok(mb) if mb.len() >= 4 => {
            let width = extract_number(&mb[2]).unwrap_or(612.0);
            let height = extract_number(&mb[3]).unwrap_or(792.0);
            Ok((width, height))
        }
        _ => Ok((612.0, 792.0)),
    }
}

fn extract_number(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(*r as f64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_document_with_page() -> (Document, ObjectId) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(pages_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(300.0),
                Object::Real(400.0),
            ]),
        );
        let page_id = doc.add_object(page_dict);
        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Kids", Object::Array(vec![Object::Reference(page_id)]));
        pages_dict.set("Count", Object::Integer(1));
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
        (doc, page_id)
    }

    #[test]
    fn reads_page_dimensions_from_media_box() {
        let (doc, page_id) = blank_document_with_page();
        let (w, h) = get_page_dimensions(&doc, page_id).unwrap();
        assert_eq!((w, h), (300.0, 400.0));
    }

    #[test]
    fn creates_xobject_for_blank_page() {
        let (source, page_id) = blank_document_with_page();
        let mut output = Document::with_version("1.5");
        let mut cache = XObjectCache::default();
        let xobject_id = create_page_xobject(&mut output, &source, page_id, None, &mut cache).unwrap();
        let obj = output.get_object(xobject_id).unwrap();
        assert!(obj.as_stream().is_ok());
    }

    #[test]
    fn reused_page_hits_the_cache() {
        let (source, page_id) = blank_document_with_page();
        let mut output = Document::with_version("1.5");
        let mut cache = XObjectCache::default();
        let a = create_page_xobject(&mut output, &source, page_id, None, &mut cache).unwrap();
        let b = create_page_xobject(&mut output, &source, page_id, None, &mut cache).unwrap();
        // Each call creates a fresh Form XObject for its own placement;
        // what's shared is the Resources subgraph copy, not the xobject
        // id itself. Confirm both succeed without aliasing the cache.
        assert_ne!(a, b);
    }

    #[test]
    fn clip_box_overrides_the_bbox() {
        let (source, page_id) = blank_document_with_page();
        let mut output = Document::with_version("1.5");
        let mut cache = XObjectCache::default();
        let clip = Rect::new(10.0, 10.0, 50.0, 60.0);
        let xobject_id =
            create_page_xobject(&mut output, &source, page_id, Some(clip), &mut cache).unwrap();
        let stream = output.get_object(xobject_id).unwrap().as_stream().unwrap();
        let bbox = stream.dict.get(b"BBox").unwrap().as_array().unwrap();
        assert_eq!(extract_number(&bbox[2]), Some(60.0));
    }

    fn input_with_one_page() -> InputDocument {
        let (doc, page_id) = blank_document_with_page();
        InputDocument { document: doc, page_ids: vec![page_id] }
    }

    #[test]
    fn surface_round_trips_a_simple_page() {
        let input = input_with_one_page();
        let mut surface: Box<dyn PdfSurface> = Box::new(LopdfSurface::new());
        let page = surface.add_page(300.0, 400.0);
        let embedded = surface.embed_page(&input, 0, None).unwrap();
        surface.draw_embedded(
            page,
            embedded,
            Placement { x: 0.0, y: 0.0, scale: 1.0, rotated: false },
        );
        surface.draw_rectangle(
            page,
            Rect::new(0.0, 0.0, 300.0, 400.0),
            RectanglePaint::Stroke { rgb: (0.0, 0.0, 0.0), width_pt: 0.5, dash: LineDash::Solid },
        );
        surface.draw_text(page, 10.0, 10.0, 6.0, "hello");
        assert_eq!(surface.page_count(), 1);
        assert!(surface.estimated_bytes() > 0);
        let bytes = surface.finish().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn embeds_and_draws_a_raw_raster_image() {
        let mut surface = LopdfSurface::new();
        let page = surface.add_page(100.0, 100.0);
        let rgb = vec![255u8; 4 * 4 * 3];
        let image = surface.embed_png(&rgb, 4, 4).unwrap();
        surface.draw_image(page, image, Rect::new(0.0, 0.0, 50.0, 50.0));
        let bytes = Box::new(surface).finish().unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn embed_png_rejects_a_mismatched_buffer() {
        let mut surface = LopdfSurface::new();
        let err = surface.embed_png(&[0u8; 10], 4, 4).unwrap_err();
        assert!(matches!(err, PrintError::PdfRenderError(_)));
    }

    #[test]
    fn factory_produces_independent_surfaces() {
        let factory = LopdfSurfaceFactory;
        let mut a = factory.create();
        let mut b = factory.create();
        a.add_page(100.0, 100.0);
        assert_eq!(a.page_count(), 1);
        assert_eq!(b.page_count(), 0);
        b.add_page(50.0, 50.0);
        assert_eq!(b.page_count(), 1);
    }
}
