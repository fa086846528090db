//! The book: top-level owner of pages, resources, and the viewport.
//!
//! The book is driven by an external frame clock. Each frame the caller
//! advances it with the elapsed wall time, which updates the current page
//! only, then asks it to draw — every visible page, back to front in page
//! draw order, each starting from the shared base transform at mask
//! index 0.

use crate::animation::Tick;
use crate::page::Page;
use crate::render::{Frame, Viewport};
use crate::resources::Resources;
use crate::transform::Transform;

#[derive(Debug, thiserror::Error)]
pub enum BookError {
    #[error("page already registered: '{0}'")]
    DuplicatePage(String),
}

pub struct Book {
    /// Pages ascending by draw order
    pages: Vec<Page>,
    /// Name of the page the update walk targets
    current: Option<String>,
    resources: Resources,
    viewport: Viewport,
    elapsed_ms: f32,
    renderer_ready: bool,
}

impl Book {
    /// Create a book for a logical document of the given size, initially
    /// mapped 1:1 onto render space.
    pub fn new(logical_width: i32, logical_height: i32) -> Self {
        Self {
            pages: Vec::new(),
            current: None,
            resources: Resources::new(),
            viewport: Viewport::unit(logical_width, logical_height),
            elapsed_ms: 0.0,
            renderer_ready: false,
        }
    }

    // ---- pages ---------------------------------------------------------

    /// Register a page. Page names are unique within the book; the first
    /// page added becomes the current one.
    pub fn add_page(&mut self, name: impl Into<String>) -> Result<&mut Page, BookError> {
        let name = name.into();
        if self.pages.iter().any(|p| p.name() == name) {
            return Err(BookError::DuplicatePage(name));
        }
        log::debug!("adding page '{name}'");

        let mut page = Page::new(name.clone(), self.viewport);
        if self.renderer_ready {
            page.renderer_ready();
        }
        if self.current.is_none() {
            self.current = Some(name);
        }
        self.pages.push(page);
        let index = self.pages.len() - 1;
        Ok(&mut self.pages[index])
    }

    pub fn page(&self, name: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.name() == name)
    }

    pub fn page_mut(&mut self, name: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.name() == name)
    }

    /// Drop a page and its whole tree. No-op when the name is unknown.
    pub fn remove_page(&mut self, name: &str) {
        let before = self.pages.len();
        self.pages.retain(|p| p.name() != name);
        if self.pages.len() != before {
            log::debug!("removed page '{name}'");
            if self.current.as_deref() == Some(name) {
                self.current = None;
            }
        }
    }

    /// Select the page the update walk targets. Returns false (and keeps
    /// the previous selection) when the name is unknown.
    pub fn set_current_page(&mut self, name: &str) -> bool {
        if self.pages.iter().any(|p| p.name() == name) {
            self.current = Some(name.to_string());
            true
        } else {
            log::warn!("set_current_page: no page named '{name}'");
            false
        }
    }

    pub fn current_page(&self) -> Option<&Page> {
        let name = self.current.as_deref()?;
        self.page(name)
    }

    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        let name = self.current.as_deref()?;
        self.pages.iter_mut().find(|p| p.name() == name)
    }

    /// Pages ascending by draw order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Re-key a page within the book. Same contract as re-keying a node
    /// among its siblings: no-op when unchanged or unknown, O(n), stable
    /// for equal keys.
    pub fn set_page_draw_order(&mut self, name: &str, order: f32) {
        let Some(pos) = self.pages.iter().position(|p| p.name() == name) else {
            return;
        };
        if self.pages[pos].draw_order() == order {
            return;
        }

        let start = if self.pages[pos].draw_order() > order { 0 } else { pos };
        let mut slot = start;
        while let Some(page) = self.pages.get(slot) {
            if slot != pos && page.draw_order() > order {
                break;
            }
            slot += 1;
        }

        let mut page = self.pages.remove(pos);
        page.set_draw_order_value(order);
        let target = if slot > pos { slot - 1 } else { slot };
        self.pages.insert(target, page);
    }

    // ---- resources & viewport ------------------------------------------

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut Resources {
        &mut self.resources
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Adopt new viewport parameters (size/orientation change) and
    /// broadcast them: every page re-derives its render-space geometry and
    /// every font learns the new display scale. Must happen before the
    /// next draw.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        log::debug!(
            "viewport: {}x{} logical onto {}x{} render units",
            viewport.logical_width,
            viewport.logical_height,
            viewport.render_width,
            viewport.render_height
        );
        self.viewport = viewport;
        self.resources
            .update_display_scale(viewport.scale_x(), viewport.scale_y());
        for page in &mut self.pages {
            page.set_viewport(viewport);
        }
    }

    /// One-time notification that the rendering context is initialized.
    /// Cascades synchronously through resources and every page.
    pub fn renderer_ready(&mut self) {
        if self.renderer_ready {
            return;
        }
        log::info!("renderer ready, notifying {} page(s)", self.pages.len());
        self.renderer_ready = true;
        self.resources.renderer_ready();
        for page in &mut self.pages {
            page.renderer_ready();
        }
    }

    // ---- frame ---------------------------------------------------------

    /// Advance the frame clock by `delta_ms` and update the current page's
    /// tree. Pages that are not current do not tick.
    pub fn update(&mut self, delta_ms: f32) {
        self.elapsed_ms += delta_ms;
        let tick = Tick::from_delta(delta_ms, self.elapsed_ms);
        if let Some(name) = self.current.as_deref() {
            if let Some(page) = self.pages.iter_mut().find(|p| p.name() == name) {
                page.update(&tick);
            }
        }
    }

    /// Milliseconds accumulated across all updates.
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Emit draw commands for every visible page, back to front.
    pub fn draw(&mut self, frame: &mut Frame, base: &Transform) {
        let Book {
            pages, resources, ..
        } = self;
        for page in pages.iter_mut() {
            page.draw(frame, base, resources);
        }
    }
}
